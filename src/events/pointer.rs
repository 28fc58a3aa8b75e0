use crate::constants::{PARALLAX_ATTR, PARALLAX_SELECTOR, RIPPLE_SELECTOR};
use crate::dom;
use dalad_core::constants::RIPPLE_LIFETIME;
use dalad_core::effects::{parallax_offset, Ripple};
use web_sys as web;

/// Hero layers drift against the pointer by their `data-speed`. Layers
/// without a usable speed stay put.
pub fn wire_parallax(document: &web::Document) {
    let layers: Vec<(web::Element, f64)> = dom::query_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .filter_map(|layer| {
            let speed = layer.get_attribute(PARALLAX_ATTR)?.trim().parse().ok()?;
            Some((layer, speed))
        })
        .collect();
    if layers.is_empty() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "mousemove", move |ev: web::MouseEvent| {
        let size = dom::window_size();
        let pointer = [ev.client_x() as f64, ev.client_y() as f64];
        for (layer, speed) in &layers {
            let [x, y] = parallax_offset(size, pointer, *speed);
            dom::set_style(layer, "transition", "transform 0.1s ease-out");
            dom::set_style(layer, "transform", &format!("translate({x}px, {y}px)"));
        }
    });
}

/// Buttons get a ripple span centred on the click point.
pub fn wire_ripples(document: &web::Document) {
    for button in dom::query_all(document, RIPPLE_SELECTOR) {
        let target = button.clone();
        let doc = document.clone();
        dom::add_listener(&button, "click", move |ev: web::MouseEvent| {
            spawn_ripple(&doc, &target, &ev);
        });
    }
}

fn spawn_ripple(document: &web::Document, button: &web::Element, ev: &web::MouseEvent) {
    let rect = button.get_bounding_client_rect();
    let ripple = Ripple::from_click(
        [rect.left(), rect.top(), rect.width(), rect.height()],
        [ev.client_x() as f64, ev.client_y() as f64],
    );
    let Ok(span) = document.create_element("span") else {
        return;
    };
    _ = span.set_attribute("style", &ripple.css_text());
    if button.append_child(&span).is_err() {
        return;
    }
    dom::set_timeout(RIPPLE_LIFETIME, move || span.remove());
}
