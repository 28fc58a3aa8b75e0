use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::set_style(&el, "display", "flex");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::set_style(&el, "display", "none");
    }
}

/// Locks or restores page scrolling behind a fullscreen layer.
#[inline]
pub fn lock_page_scroll(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}
