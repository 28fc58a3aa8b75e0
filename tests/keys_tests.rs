// Host-side tests for pure web-layer helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keys {
    include!("../src/events/keys.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use keys::*;

#[test]
fn activation_keys() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("a"));
    assert!(!is_activation_key("Escape"));
}

#[test]
fn escape_keys() {
    assert!(is_escape_key("Escape"));
    assert!(is_escape_key("Esc"));
    assert!(!is_escape_key("Enter"));
}

#[test]
fn selectors_are_well_formed() {
    for id in [
        MAP_CONTAINER_ID,
        MAP_TOGGLE_ID,
        SHOW_ALL_ID,
        LANG_BUTTON_ID,
        MODAL_ID,
        ZOOM_MODAL_ID,
        ZOOM_CONTAINER_ID,
        VIDEO_ID,
        ABOUT_SECTION_ID,
    ] {
        assert!(!id.is_empty() && !id.starts_with('#'), "{id}");
    }
    assert_eq!(I18N_SELECTOR, format!("[{I18N_ATTR}]"));
    assert_eq!(PRODUCT_TRIGGER_SELECTOR, format!("[{PRODUCT_ATTR}]"));
    assert!(TILE_URL_TEMPLATE.contains("{z}/{x}/{y}"));
}
