//! Marker set and viewport of the store-locator map.
//!
//! The map surface itself lives in the browser; this module decides what it
//! should show. Every mode change discards the whole marker set and rebuilds
//! it, so the surface never keeps a marker from a previous mode.

use crate::catalog::{self, StoreRecord, STORES};
use crate::constants::{
    FIT_BOUNDS_PADDING, MAP_INITIAL_CENTER, MAP_INITIAL_ZOOM, MAP_RESIZE_SETTLE, MARKER_SIZE,
    MARKER_SIZE_ACTIVE, SINGLE_STORE_ZOOM,
};
use crate::geo::{LatLng, LatLngBounds};
use crate::state::{Command, SiteEvent};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    AllStores,
    SingleStore(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub store_index: usize,
    pub position: LatLng,
    pub highlighted: bool,
}

impl Marker {
    fn for_store(store_index: usize, highlighted: bool) -> Option<Self> {
        catalog::store(store_index).map(|s| Self {
            store_index,
            position: s.position(),
            highlighted,
        })
    }

    pub fn store(&self) -> &'static StoreRecord {
        // markers are only built from valid catalog indices
        &STORES[self.store_index]
    }

    pub fn icon(&self) -> MarkerIcon {
        MarkerIcon::new(self.store().color, self.highlighted)
    }
}

/// Inline SVG pin plus the geometry the map surface needs to place it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub html: String,
    pub size: u32,
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub class_name: &'static str,
}

impl MarkerIcon {
    pub fn new(color: &str, active: bool) -> Self {
        let size = if active { MARKER_SIZE_ACTIVE } else { MARKER_SIZE };
        let dot = if active {
            r#"<circle cx="192" cy="192" r="20" fill="white"/>"#
        } else {
            ""
        };
        let html = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 384 512" width="{size}" height="{size}"><path fill="{color}" d="M215.7 499.2C267 435 384 279.4 384 192C384 86 298 0 192 0S0 86 0 192c0 87.4 117 243 168.3 307.2c12.3 15.3 35.1 15.3 47.4 0zM192 128a64 64 0 1 1 0 128 64 64 0 1 1 0-128z"/>{dot}</svg>"#
        );
        let s = size as i32;
        Self {
            html,
            size,
            anchor: [s / 2, s],
            popup_anchor: [0, -s],
            class_name: if active {
                "store-marker active"
            } else {
                "store-marker"
            },
        }
    }
}

/// Last viewport request sent to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    Center { center: LatLng, zoom: f64 },
    FitBounds(LatLngBounds),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    ClearMarkers,
    AddMarker(Marker),
    /// Opens the popup of the marker at this position in the marker set.
    OpenPopup(usize),
    FitBounds(LatLngBounds),
    SetView { center: LatLng, zoom: f64 },
    SetExpanded(bool),
    InvalidateSize,
}

#[derive(Debug, Clone)]
pub struct MapView {
    mode: ViewMode,
    markers: SmallVec<[Marker; 8]>,
    viewport: Viewport,
    expanded: bool,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

impl MapView {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::AllStores,
            markers: SmallVec::new(),
            viewport: Viewport::Center {
                center: LatLng::new(MAP_INITIAL_CENTER[0], MAP_INITIAL_CENTER[1]),
                zoom: MAP_INITIAL_ZOOM,
            },
            expanded: false,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// One marker per store, viewport fitted to all of them.
    pub fn show_all(&mut self) -> Vec<Command> {
        self.mode = ViewMode::AllStores;
        self.markers = (0..catalog::store_count())
            .filter_map(|i| Marker::for_store(i, false))
            .collect();
        log::info!("[map] showing all {} stores", self.markers.len());

        let mut out = self.rebuild_commands();
        out.extend(self.fit_current());
        out
    }

    /// A single highlighted marker with its popup open. Out-of-range indices
    /// are ignored.
    pub fn show_only(&mut self, index: usize) -> Vec<Command> {
        let Some(marker) = Marker::for_store(index, true) else {
            log::debug!("[map] ignoring store index {index}");
            return Vec::new();
        };
        self.mode = ViewMode::SingleStore(index);
        self.markers.clear();
        self.markers.push(marker);
        log::info!("[map] showing only {}", marker.store().name);

        let mut out = self.rebuild_commands();
        out.push(Command::Map(MapCommand::OpenPopup(0)));
        out.extend(self.fit_current());
        out
    }

    /// Flips the panel size; the refit happens once the transition settles.
    pub fn toggle_expanded(&mut self) -> Vec<Command> {
        self.expanded = !self.expanded;
        vec![
            Command::Map(MapCommand::SetExpanded(self.expanded)),
            Command::Schedule {
                after: MAP_RESIZE_SETTLE,
                event: SiteEvent::MapResizeSettled,
            },
        ]
    }

    /// Recomputes the render size and refits to whatever is on the map.
    pub fn resize_settled(&mut self) -> Vec<Command> {
        let mut out = vec![Command::Map(MapCommand::InvalidateSize)];
        out.extend(self.fit_current());
        out
    }

    fn rebuild_commands(&self) -> Vec<Command> {
        let mut out = Vec::with_capacity(self.markers.len() + 2);
        out.push(Command::Map(MapCommand::ClearMarkers));
        out.extend(
            self.markers
                .iter()
                .map(|m| Command::Map(MapCommand::AddMarker(*m))),
        );
        out
    }

    fn fit_current(&mut self) -> Option<Command> {
        match self.markers.as_slice() {
            [] => None,
            [only] => {
                self.viewport = Viewport::Center {
                    center: only.position,
                    zoom: SINGLE_STORE_ZOOM,
                };
                Some(Command::Map(MapCommand::SetView {
                    center: only.position,
                    zoom: SINGLE_STORE_ZOOM,
                }))
            }
            many => {
                let bounds = LatLngBounds::from_points(many.iter().map(|m| m.position))?
                    .pad(FIT_BOUNDS_PADDING);
                self.viewport = Viewport::FitBounds(bounds);
                Some(Command::Map(MapCommand::FitBounds(bounds)))
            }
        }
    }
}
