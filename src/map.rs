use crate::constants::{
    EXPANDED_CLASS, MAP_CONTAINER_ID, MAP_TOGGLE_GLYPH_COLLAPSED, MAP_TOGGLE_GLYPH_EXPANDED,
    MAP_TOGGLE_ID, TILE_ATTRIBUTION, TILE_URL_TEMPLATE,
};
use crate::leaflet;
use dalad_core::constants::{MAP_INITIAL_CENTER, MAP_INITIAL_ZOOM, MAP_MAX_ZOOM};
use dalad_core::geo::LatLng;
use dalad_core::i18n::{Lang, TextKey};
use dalad_core::map_view::MapCommand;
use std::cell::RefCell;
use web_sys as web;

/// The live Leaflet map plus the markers currently added to it.
pub struct MapSurface {
    map: leaflet::LeafletMap,
    markers: RefCell<Vec<leaflet::Marker>>,
}

impl MapSurface {
    /// Creates the map inside `#brandsMap`. A missing container is an error
    /// the caller logs; the rest of the page runs without a map.
    pub fn init(document: &web::Document) -> anyhow::Result<Self> {
        if document.get_element_by_id(MAP_CONTAINER_ID).is_none() {
            anyhow::bail!("missing #{MAP_CONTAINER_ID}");
        }
        let map = leaflet::map(MAP_CONTAINER_ID)?;
        map.set_view(
            &leaflet::lat_lng(LatLng::new(MAP_INITIAL_CENTER[0], MAP_INITIAL_CENTER[1])),
            MAP_INITIAL_ZOOM,
        );
        leaflet::tile_layer(TILE_URL_TEMPLATE, TILE_ATTRIBUTION, MAP_MAX_ZOOM).add_to(&map);
        log::info!("[map] surface ready");
        Ok(Self {
            map,
            markers: RefCell::new(Vec::new()),
        })
    }

    pub fn apply(&self, document: &web::Document, command: &MapCommand, lang: Lang) {
        match command {
            MapCommand::ClearMarkers => {
                for m in self.markers.borrow_mut().drain(..) {
                    self.map.remove_layer(&m);
                }
            }
            MapCommand::AddMarker(pin) => {
                let icon = leaflet::div_icon(&pin.icon());
                let marker = leaflet::marker(pin.position, &icon);
                marker.add_to(&self.map);
                marker.bind_popup(&pin.store().popup_html(lang));
                self.markers.borrow_mut().push(marker);
            }
            MapCommand::OpenPopup(i) => {
                if let Some(m) = self.markers.borrow().get(*i) {
                    m.open_popup();
                }
            }
            MapCommand::FitBounds(bounds) => {
                self.map.fit_bounds(&leaflet::bounds(bounds));
            }
            MapCommand::SetView { center, zoom } => {
                self.map.set_view(&leaflet::lat_lng(*center), *zoom);
            }
            MapCommand::SetExpanded(expanded) => set_expanded(document, *expanded, lang),
            MapCommand::InvalidateSize => {
                self.map.invalidate_size();
            }
        }
    }
}

/// Panel class plus the toggle button's pressed state, title and glyph.
pub fn set_expanded(document: &web::Document, expanded: bool, lang: Lang) {
    if let Some(panel) = document.get_element_by_id(MAP_CONTAINER_ID) {
        _ = panel.class_list().toggle_with_force(EXPANDED_CLASS, expanded);
    }
    if let Some(btn) = document.get_element_by_id(MAP_TOGGLE_ID) {
        _ = btn.set_attribute("aria-pressed", if expanded { "true" } else { "false" });
        let (title, glyph) = if expanded {
            (TextKey::MapCollapse, MAP_TOGGLE_GLYPH_EXPANDED)
        } else {
            (TextKey::MapExpand, MAP_TOGGLE_GLYPH_COLLAPSED)
        };
        _ = btn.set_attribute("title", title.text(lang));
        btn.set_text_content(Some(glyph));
    }
}
