use crate::app::App;
use crate::constants::{
    MAIN_IMAGE_ID, MODAL_ACTIVE_CLASS, MODAL_BOX_SELECTOR, MODAL_ID, PRODUCT_ATTR,
    PRODUCT_TRIGGER_SELECTOR, ZOOM_CONTAINER_ID, ZOOM_IMAGE_SELECTOR, ZOOM_INDICATOR_CLASS,
    ZOOM_MODAL_ID,
};
use crate::dom;
use crate::overlay;
use dalad_core::constants::{ZOOM_IN_STEP, ZOOM_OUT_STEP};
use dalad_core::modal::{panel_html, ModalCommand};
use dalad_core::products::{self, FALLBACK_IMAGE};
use dalad_core::state::SiteEvent;
use wasm_bindgen::JsCast;
use web_sys as web;

const INDICATOR_CSS: &str = "position: fixed; bottom: 20px; left: 50%; \
    transform: translateX(-50%); background: rgba(0, 0, 0, 0.8); color: white; \
    padding: 8px 16px; border-radius: 20px; font-size: 14px; font-weight: bold; \
    z-index: 4000; opacity: 0; transition: opacity 0.3s; pointer-events: none;";

/// Product cards open the modal with their `data-product` key.
pub fn wire_product_triggers(app: &App, document: &web::Document) {
    let triggers = dom::query_all(document, PRODUCT_TRIGGER_SELECTOR);
    for trigger in &triggers {
        let Some(key) = trigger.get_attribute(PRODUCT_ATTR) else {
            continue;
        };
        let app = app.clone();
        dom::add_listener(trigger, "click", move |_: web::MouseEvent| {
            app.dispatch(SiteEvent::ProductOpened(key.clone()));
        });
    }
    log::info!("[modal] wired {} product triggers", triggers.len());
}

/// One set of delegated listeners on `#productModal`; the panel content is
/// replaced on every render, the overlay element is not.
pub fn wire_modal(app: &App, document: &web::Document) {
    let Some(modal) = document.get_element_by_id(MODAL_ID) else {
        log::warn!("[modal] missing #{MODAL_ID}");
        return;
    };

    let click_app = app.clone();
    let backdrop = modal.clone();
    dom::add_listener(&modal, "click", move |ev: web::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        if let Some(event) = click_event(&target, &backdrop) {
            click_app.dispatch(event);
        }
    });

    let wheel_app = app.clone();
    dom::add_listener(&modal, "wheel", move |ev: web::WheelEvent| {
        if !wheel_app.is_zoom_open() {
            return;
        }
        let over_image = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| {
                el.closest(&format!("#{ZOOM_CONTAINER_ID}, #{ZOOM_MODAL_ID}"))
                    .ok()
                    .flatten()
            })
            .is_some();
        if over_image {
            ev.prevent_default();
            wheel_app.dispatch(SiteEvent::ZoomWheel {
                delta_y: ev.delta_y(),
            });
        }
    });

    // `error` does not bubble; catch it on the way down
    dom::add_capture_listener(&modal, "error", |ev: web::Event| {
        let Some(img) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        if img.tag_name().eq_ignore_ascii_case("img")
            && img.get_attribute("src").as_deref() != Some(FALLBACK_IMAGE)
        {
            _ = img.set_attribute("src", FALLBACK_IMAGE);
        }
    });
}

fn closest(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.closest(selector).ok().flatten()
}

fn click_event(target: &web::Element, backdrop: &web::Element) -> Option<SiteEvent> {
    if target == backdrop {
        return Some(SiteEvent::ProductClosed);
    }
    if closest(target, ".close-fullscreen").is_some() {
        return Some(SiteEvent::ZoomClosed);
    }
    if let Some(btn) = closest(target, ".zoom-btn") {
        return match btn.get_attribute("data-zoom").as_deref() {
            Some("in") => Some(SiteEvent::ZoomBy(ZOOM_IN_STEP)),
            Some("out") => Some(SiteEvent::ZoomBy(ZOOM_OUT_STEP)),
            Some("reset") => Some(SiteEvent::ZoomReset),
            _ => None,
        };
    }
    if closest(target, ".close-modal, .modal-action-btn").is_some() {
        return Some(SiteEvent::ProductClosed);
    }
    if target.id() == MAIN_IMAGE_ID {
        return Some(SiteEvent::ZoomOpened {
            src: target.get_attribute("src").unwrap_or_default(),
            alt: target.get_attribute("alt").unwrap_or_default(),
        });
    }
    None
}

fn modal_box(document: &web::Document) -> Option<web::Element> {
    dom::query_one(document, &format!("#{MODAL_ID} {MODAL_BOX_SELECTOR}"))
}

fn zoom_indicator(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = dom::query_one(document, &format!(".{ZOOM_INDICATOR_CLASS}")) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_class_name(ZOOM_INDICATOR_CLASS);
    _ = el.set_attribute("style", INDICATOR_CSS);
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

pub fn apply(app: &App, command: &ModalCommand) {
    let document = app.document();
    match command {
        ModalCommand::Render { product, lang } => {
            let record = products::lookup(*lang, product);
            if let Some(panel) = modal_box(document) {
                panel.set_inner_html(&panel_html(record, *lang));
            }
        }
        ModalCommand::Show => {
            if let Some(panel) = modal_box(document) {
                dom::set_style(&panel, "transform", "");
                dom::set_style(&panel, "opacity", "");
            }
            overlay::show(document, MODAL_ID);
        }
        ModalCommand::Activate => {
            if let Some(panel) = modal_box(document) {
                _ = panel.class_list().add_1(MODAL_ACTIVE_CLASS);
            }
        }
        ModalCommand::BeginClose => {
            if let Some(panel) = modal_box(document) {
                _ = panel.class_list().remove_1(MODAL_ACTIVE_CLASS);
                dom::set_style(&panel, "transform", "translateY(20px)");
                dom::set_style(&panel, "opacity", "0");
            }
        }
        ModalCommand::Hide => {
            overlay::hide(document, MODAL_ID);
            if let Some(panel) = modal_box(document) {
                dom::set_style(&panel, "transform", "");
                dom::set_style(&panel, "opacity", "");
            }
        }
        ModalCommand::ShowZoom { src, alt } => {
            if let Some(img) = dom::query_one(document, ZOOM_IMAGE_SELECTOR) {
                _ = img.set_attribute("src", src);
                _ = img.set_attribute("alt", alt);
            }
            overlay::show(document, ZOOM_MODAL_ID);
            overlay::lock_page_scroll(document, true);
        }
        ModalCommand::HideZoom => {
            overlay::hide(document, ZOOM_MODAL_ID);
            overlay::lock_page_scroll(document, false);
        }
        ModalCommand::SetZoomScale(scale) => {
            if let Some(img) = dom::query_one(document, ZOOM_IMAGE_SELECTOR) {
                dom::set_style(&img, "transform", &format!("scale({scale})"));
            }
        }
        ModalCommand::ShowZoomIndicator(text) => {
            if let Some(el) = zoom_indicator(document) {
                el.set_text_content(Some(text));
                dom::set_style(&el, "opacity", "1");
            }
        }
        ModalCommand::HideZoomIndicator => {
            if let Some(el) = dom::query_one(document, &format!(".{ZOOM_INDICATOR_CLASS}")) {
                dom::set_style(&el, "opacity", "0");
            }
        }
    }
}
