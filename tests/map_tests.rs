// Host-side tests for the store map view and its geometry.

use dalad_core::constants::{FIT_BOUNDS_PADDING, MAP_RESIZE_SETTLE, SINGLE_STORE_ZOOM};
use dalad_core::geo::{LatLng, LatLngBounds};
use dalad_core::map_view::{MapCommand, MapView, ViewMode, Viewport};
use dalad_core::state::{Command, SiteEvent};
use dalad_core::STORES;

fn map_commands(commands: &[Command]) -> Vec<&MapCommand> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::Map(m) => Some(m),
            _ => None,
        })
        .collect()
}

#[test]
fn show_all_places_one_marker_per_store() {
    let mut view = MapView::new();
    let out = view.show_all();

    assert_eq!(view.mode(), ViewMode::AllStores);
    assert_eq!(view.markers().len(), STORES.len());
    assert_eq!(STORES.len(), 7);
    assert!(view.markers().iter().all(|m| !m.highlighted));

    let added = map_commands(&out)
        .into_iter()
        .filter(|c| matches!(c, MapCommand::AddMarker(_)))
        .count();
    assert_eq!(added, 7);
    assert!(matches!(map_commands(&out)[0], MapCommand::ClearMarkers));
}

#[test]
fn show_all_fits_bounds_containing_every_store() {
    let mut view = MapView::new();
    view.show_all();
    let Viewport::FitBounds(bounds) = view.viewport() else {
        panic!("expected a fitted viewport, got {:?}", view.viewport());
    };
    for store in &STORES {
        assert!(bounds.contains(&store.position()), "{} outside bounds", store.name);
    }
}

#[test]
fn show_only_centres_on_the_chosen_store() {
    for (i, store) in STORES.iter().enumerate() {
        let mut view = MapView::new();
        view.show_all();
        let out = view.show_only(i);

        assert_eq!(view.mode(), ViewMode::SingleStore(i));
        assert_eq!(view.markers().len(), 1);
        assert_eq!(view.markers()[0].store_index, i);
        assert!(view.markers()[0].highlighted);
        assert_eq!(
            view.viewport(),
            Viewport::Center {
                center: store.position(),
                zoom: SINGLE_STORE_ZOOM,
            }
        );
        assert!(map_commands(&out).contains(&&MapCommand::OpenPopup(0)));
    }
}

#[test]
fn show_only_ignores_out_of_range_index() {
    let mut view = MapView::new();
    view.show_all();
    let before = view.markers().len();
    assert!(view.show_only(STORES.len()).is_empty());
    assert!(view.show_only(usize::MAX).is_empty());
    assert_eq!(view.markers().len(), before);
    assert_eq!(view.mode(), ViewMode::AllStores);
}

#[test]
fn toggle_expanded_schedules_a_refit() {
    let mut view = MapView::new();
    assert!(!view.is_expanded());
    let out = view.toggle_expanded();
    assert!(view.is_expanded());
    assert_eq!(out[0], Command::Map(MapCommand::SetExpanded(true)));
    assert_eq!(
        out[1],
        Command::Schedule {
            after: MAP_RESIZE_SETTLE,
            event: SiteEvent::MapResizeSettled,
        }
    );
    view.toggle_expanded();
    assert!(!view.is_expanded());
}

#[test]
fn resize_settled_refits_single_store_view() {
    let mut view = MapView::new();
    view.show_only(2);
    let out = view.resize_settled();
    assert_eq!(out[0], Command::Map(MapCommand::InvalidateSize));
    assert_eq!(
        out[1],
        Command::Map(MapCommand::SetView {
            center: STORES[2].position(),
            zoom: SINGLE_STORE_ZOOM,
        })
    );
}

#[test]
fn highlighted_marker_icon_is_larger() {
    let mut view = MapView::new();
    view.show_all();
    let normal = view.markers()[0].icon();
    view.show_only(0);
    let active = view.markers()[0].icon();

    assert!(active.size > normal.size);
    assert_eq!(active.anchor, [active.size as i32 / 2, active.size as i32]);
    assert!(active.class_name.contains("active"));
    assert!(!normal.class_name.contains("active"));
}

#[test]
fn bounds_pad_grows_each_side_by_ratio() {
    let b = LatLngBounds::new(LatLng::new(0.0, 10.0), LatLng::new(2.0, 14.0));
    let padded = b.pad(FIT_BOUNDS_PADDING);
    assert!((padded.south_west.lat - -0.6).abs() < 1e-9);
    assert!((padded.north_east.lat - 2.6).abs() < 1e-9);
    assert!((padded.south_west.lng - 8.8).abs() < 1e-9);
    assert!((padded.north_east.lng - 15.2).abs() < 1e-9);
}

#[test]
fn bounds_from_no_points_is_none() {
    assert!(LatLngBounds::from_points(std::iter::empty()).is_none());
}

#[test]
fn store_coordinates_are_valid() {
    for store in &STORES {
        assert!(store.position().is_valid(), "{}", store.name);
        assert!(store.directions_url().contains(&store.latitude.to_string()));
    }
}
