//! Whole-page state and the single event dispatcher.
//!
//! The web frontend turns DOM callbacks into [`SiteEvent`]s, feeds them to
//! [`SiteState::dispatch`] and applies the returned [`Command`]s. Delayed
//! work comes back as [`Command::Schedule`]; the frontend arms a timer that
//! dispatches the carried event later, and the handlers re-check current
//! state (via generation counters) so stale timers do nothing.

use crate::i18n::{Lang, LanguageCommand, TranslationStore};
use crate::map_view::{MapCommand, MapView};
use crate::modal::{wheel_factor, ModalCommand, ProductModal};
use crate::store_list::{ListCommand, StoreList};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    StoreCardClicked(usize),
    ShowAllClicked,
    ShowAllLabelExpired(u64),
    MapToggleClicked,
    MapResizeSettled,
    LanguageToggled,
    LanguageFlashExpired(u64),
    LanguageReapply,
    ProductOpened(String),
    ProductRevealElapsed(u64),
    ProductClosed,
    ProductHideElapsed(u64),
    ZoomOpened { src: String, alt: String },
    ZoomBy(f64),
    ZoomWheel { delta_y: f64 },
    ZoomReset,
    ZoomClosed,
    ZoomIndicatorExpired(u64),
    EscapePressed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Map(MapCommand),
    List(ListCommand),
    Language(LanguageCommand),
    Modal(ModalCommand),
    Schedule { after: Duration, event: SiteEvent },
}

#[derive(Debug, Clone, Default)]
pub struct SiteState {
    pub map: MapView,
    pub list: StoreList,
    pub language: TranslationStore,
    pub modal: ProductModal,
}

impl SiteState {
    pub fn new(lang: Lang, card_count: usize) -> Self {
        Self {
            map: MapView::new(),
            list: StoreList::new(card_count),
            language: TranslationStore::new(lang),
            modal: ProductModal::default(),
        }
    }

    pub fn lang(&self) -> Lang {
        self.language.current()
    }

    /// Initial language pass and the all-stores map view.
    pub fn startup(&mut self) -> Vec<Command> {
        let mut out = self.language.startup();
        out.extend(self.localized_controls());
        out.extend(self.map.show_all());
        out
    }

    /// Controls whose text is set from code rather than `data-i18n`.
    fn localized_controls(&self) -> [Command; 2] {
        [
            Command::List(ListCommand::SetShowAllLabel(self.list.label())),
            Command::Map(MapCommand::SetExpanded(self.map.is_expanded())),
        ]
    }

    pub fn dispatch(&mut self, event: SiteEvent) -> Vec<Command> {
        match event {
            SiteEvent::StoreCardClicked(index) => {
                let mut out = self.list.select(index);
                if out.is_empty() {
                    return out;
                }
                out.extend(self.map.show_only(index));
                if !self.map.is_expanded() {
                    out.extend(self.map.toggle_expanded());
                }
                out
            }
            SiteEvent::ShowAllClicked => {
                let mut out = self.map.show_all();
                out.extend(self.list.confirm_show_all());
                out
            }
            SiteEvent::ShowAllLabelExpired(generation) => self.list.label_expired(generation),
            SiteEvent::MapToggleClicked => self.map.toggle_expanded(),
            SiteEvent::MapResizeSettled => self.map.resize_settled(),
            SiteEvent::LanguageToggled => {
                let mut out = self.language.toggle();
                out.extend(self.localized_controls());
                // an open modal does not follow the language on its own
                if let Some(product) = self.modal.open_product().map(str::to_owned) {
                    out.extend(self.modal.open(&product, self.language.current()));
                }
                out
            }
            SiteEvent::LanguageFlashExpired(generation) => {
                self.language.flash_expired(generation)
            }
            SiteEvent::LanguageReapply => {
                let lang = self.language.current();
                self.language.apply_lang(lang)
            }
            SiteEvent::ProductOpened(product) => self.modal.open(&product, self.lang()),
            SiteEvent::ProductRevealElapsed(generation) => self.modal.reveal_elapsed(generation),
            SiteEvent::ProductClosed => self.modal.close(),
            SiteEvent::ProductHideElapsed(generation) => self.modal.hide_elapsed(generation),
            SiteEvent::ZoomOpened { src, alt } => self.modal.open_zoom(&src, &alt),
            SiteEvent::ZoomBy(factor) => self.modal.zoom(factor),
            SiteEvent::ZoomWheel { delta_y } => self.modal.zoom(wheel_factor(delta_y)),
            SiteEvent::ZoomReset => self.modal.reset_zoom(),
            SiteEvent::ZoomClosed => self.modal.close_zoom(),
            SiteEvent::ZoomIndicatorExpired(generation) => {
                self.modal.indicator_expired(generation)
            }
            SiteEvent::EscapePressed => self.modal.escape(),
        }
    }
}
