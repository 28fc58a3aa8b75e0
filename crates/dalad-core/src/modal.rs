//! Product detail overlay and its fullscreen image zoom.

use crate::constants::{
    MODAL_HIDE_DELAY, MODAL_REVEAL_DELAY, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT, ZOOM_INDICATOR_VISIBLE,
    ZOOM_MAX, ZOOM_MIN,
};
use crate::i18n::{Lang, TextKey};
use crate::products::{ProductRecord, FALLBACK_IMAGE};
use crate::state::{Command, SiteEvent};

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomView {
    pub src: String,
    pub alt: String,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalCommand {
    /// Fill the panel from the product table of `lang`.
    Render { product: String, lang: Lang },
    Show,
    Activate,
    BeginClose,
    Hide,
    ShowZoom { src: String, alt: String },
    HideZoom,
    SetZoomScale(f64),
    ShowZoomIndicator(String),
    HideZoomIndicator,
}

#[inline]
pub fn clamp_zoom(scale: f64) -> f64 {
    scale.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Wheel scrolling down zooms out, up zooms in.
#[inline]
pub fn wheel_factor(delta_y: f64) -> f64 {
    if delta_y > 0.0 {
        WHEEL_ZOOM_OUT
    } else {
        WHEEL_ZOOM_IN
    }
}

pub fn zoom_indicator_text(scale: f64) -> String {
    format!("Zoom: {}%", (scale * 100.0).round())
}

/// Inner markup of `.modal-box` for one product. Controls carry ids and
/// `data-zoom` hooks; listeners are attached after insertion.
pub fn panel_html(product: &ProductRecord, lang: Lang) -> String {
    let details: String = product
        .details
        .iter()
        .map(|d| format!("<li>{d}</li>"))
        .collect();
    let t = |key: TextKey| key.text(lang);
    format!(
        r#"<span class="close-modal" data-i18n="modal.close">{close}</span>
<div class="modal-simple-content">
  <div class="modal-image-container">
    <div class="image-zoom-wrapper" id="zoomContainer">
      <img src="{image}" alt="{title}" class="main-product-image zoomable-image" id="mainProductImage" loading="lazy" data-fallback="{fallback}">
      <div class="zoom-hint"><i class="fas fa-search-plus"></i> <span data-i18n="modal.zoomHint">{zoom_hint}</span></div>
    </div>
  </div>
  <div class="modal-info-simple">
    <div class="modal-header-responsive">
      <h3 id="modalTitle">{title}</h3>
      <div class="product-price-simple"><span data-i18n="modal.price">{price_label}</span> <strong>{price}</strong></div>
    </div>
    <div class="modal-description-container"><p id="modalDescription">{description}</p></div>
    <div class="product-details-simple">
      <h4 data-i18n="modal.features">{features}</h4>
      <ul class="details-list">{details}</ul>
    </div>
    <button class="modal-action-btn" data-i18n="modal.closeBtn">{close_btn}</button>
  </div>
</div>
<div class="zoom-fullscreen-modal" id="zoomFullscreenModal">
  <div class="zoom-fullscreen-content">
    <button class="close-fullscreen" aria-label="{close_zoom}"><i class="fas fa-times"></i></button>
    <img src="{image}" alt="{title}" class="fullscreen-image" loading="lazy">
    <div class="zoom-fullscreen-controls">
      <button class="zoom-btn" data-zoom="in" aria-label="{zoom_in}"><i class="fas fa-search-plus"></i></button>
      <button class="zoom-btn" data-zoom="out" aria-label="{zoom_out}"><i class="fas fa-search-minus"></i></button>
      <button class="zoom-btn" data-zoom="reset" aria-label="{zoom_reset}"><i class="fas fa-sync-alt"></i></button>
    </div>
  </div>
</div>"#,
        close = t(TextKey::ModalClose),
        image = product.image,
        title = product.title,
        fallback = FALLBACK_IMAGE,
        zoom_hint = t(TextKey::ModalZoomHint),
        price_label = t(TextKey::ModalPrice),
        price = product.price,
        description = product.description,
        features = t(TextKey::ModalFeatures),
        details = details,
        close_btn = t(TextKey::ModalCloseBtn),
        close_zoom = t(TextKey::ModalCloseZoom),
        zoom_in = t(TextKey::ModalZoomIn),
        zoom_out = t(TextKey::ModalZoomOut),
        zoom_reset = t(TextKey::ModalZoomReset),
    )
}

#[derive(Debug, Clone, Default)]
pub struct ProductModal {
    open: Option<String>,
    zoom: Option<ZoomView>,
    transition_generation: u64,
    indicator_generation: u64,
}

impl ProductModal {
    pub fn open_product(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn zoom_view(&self) -> Option<&ZoomView> {
        self.zoom.as_ref()
    }

    pub fn is_zoom_open(&self) -> bool {
        self.zoom.is_some()
    }

    /// Renders `product` in `lang` and reveals the overlay. Reopening while
    /// already open simply re-renders (used after a language switch).
    pub fn open(&mut self, product: &str, lang: Lang) -> Vec<Command> {
        let reopening = self.open.as_deref() == Some(product);
        // re-rendering replaces the zoom markup, so release its scroll lock first
        let mut out = self.close_zoom();
        self.open = Some(product.to_string());
        self.transition_generation += 1;
        if !reopening {
            log::info!("[modal] open {product} ({lang})");
        }
        out.extend([
            Command::Modal(ModalCommand::Render {
                product: product.to_string(),
                lang,
            }),
            Command::Modal(ModalCommand::Show),
            Command::Schedule {
                after: MODAL_REVEAL_DELAY,
                event: SiteEvent::ProductRevealElapsed(self.transition_generation),
            },
        ]);
        out
    }

    pub fn reveal_elapsed(&mut self, generation: u64) -> Vec<Command> {
        if generation == self.transition_generation && self.is_open() {
            vec![Command::Modal(ModalCommand::Activate)]
        } else {
            Vec::new()
        }
    }

    /// Closes the zoom view too, then hides once the exit transition ends.
    pub fn close(&mut self) -> Vec<Command> {
        if self.open.is_none() {
            return Vec::new();
        }
        let mut out = self.close_zoom();
        self.open = None;
        self.transition_generation += 1;
        out.push(Command::Modal(ModalCommand::BeginClose));
        out.push(Command::Schedule {
            after: MODAL_HIDE_DELAY,
            event: SiteEvent::ProductHideElapsed(self.transition_generation),
        });
        out
    }

    pub fn hide_elapsed(&mut self, generation: u64) -> Vec<Command> {
        if generation == self.transition_generation && !self.is_open() {
            vec![Command::Modal(ModalCommand::Hide)]
        } else {
            Vec::new()
        }
    }

    /// Opens the fullscreen image at 100%. Needs an open product panel.
    pub fn open_zoom(&mut self, src: &str, alt: &str) -> Vec<Command> {
        if !self.is_open() {
            return Vec::new();
        }
        self.zoom = Some(ZoomView {
            src: src.to_string(),
            alt: alt.to_string(),
            scale: 1.0,
        });
        vec![
            Command::Modal(ModalCommand::ShowZoom {
                src: src.to_string(),
                alt: alt.to_string(),
            }),
            Command::Modal(ModalCommand::SetZoomScale(1.0)),
        ]
    }

    pub fn close_zoom(&mut self) -> Vec<Command> {
        match self.zoom.take() {
            Some(_) => vec![Command::Modal(ModalCommand::HideZoom)],
            None => Vec::new(),
        }
    }

    /// Multiplies the zoom scale, clamped to the allowed range.
    pub fn zoom(&mut self, factor: f64) -> Vec<Command> {
        let Some(view) = self.zoom.as_mut() else {
            return Vec::new();
        };
        view.scale = clamp_zoom(view.scale * factor);
        let scale = view.scale;
        self.scale_changed(scale)
    }

    pub fn reset_zoom(&mut self) -> Vec<Command> {
        let Some(view) = self.zoom.as_mut() else {
            return Vec::new();
        };
        view.scale = 1.0;
        self.scale_changed(1.0)
    }

    pub fn indicator_expired(&mut self, generation: u64) -> Vec<Command> {
        if generation == self.indicator_generation {
            vec![Command::Modal(ModalCommand::HideZoomIndicator)]
        } else {
            Vec::new()
        }
    }

    /// Escape closes the zoom view if open, otherwise the modal.
    pub fn escape(&mut self) -> Vec<Command> {
        if self.is_zoom_open() {
            self.close_zoom()
        } else {
            self.close()
        }
    }

    fn scale_changed(&mut self, scale: f64) -> Vec<Command> {
        self.indicator_generation += 1;
        vec![
            Command::Modal(ModalCommand::SetZoomScale(scale)),
            Command::Modal(ModalCommand::ShowZoomIndicator(zoom_indicator_text(scale))),
            Command::Schedule {
                after: ZOOM_INDICATOR_VISIBLE,
                event: SiteEvent::ZoomIndicatorExpired(self.indicator_generation),
            },
        ]
    }
}
