use crate::app::App;
use crate::dom;
use dalad_core::state::SiteEvent;
use web_sys as web;

pub use super::keys::{is_activation_key, is_escape_key};

/// Escape closes the zoom view first, then the product modal.
pub fn wire_global_keydown(app: &App) {
    let Some(window) = web::window() else {
        return;
    };
    let app = app.clone();
    dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
        if is_escape_key(&ev.key()) {
            app.dispatch(SiteEvent::EscapePressed);
        }
    });
}
