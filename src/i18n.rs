use crate::app::App;
use crate::constants::{I18N_ATTR, I18N_SELECTOR, LANG_BUTTON_ID, LANG_CHANGING_CLASS, LANG_LABEL_ID};
use crate::dom;
use dalad_core::i18n::{
    translate_nodes, Lang, LanguageCommand, PreferenceStore, TextKey, TextTarget, STORAGE_KEY,
};
use dalad_core::state::SiteEvent;
use web_sys as web;

/// Language preference kept in `localStorage`. Storage can be unavailable
/// (privacy modes); reads then return `None` and writes are dropped.
pub struct LocalPreferences;

impl LocalPreferences {
    fn storage() -> Option<web::Storage> {
        web::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalPreferences {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
    }

    fn save(&self, lang: Lang) {
        if let Some(s) = Self::storage() {
            if s.set_item(STORAGE_KEY, lang.code()).is_err() {
                log::warn!("[i18n] could not persist language");
            }
        }
    }
}

/// Stored preference first, then the browser locale.
pub fn detect_language(prefs: &impl PreferenceStore) -> Lang {
    let stored = prefs.load();
    let navigator = web::window().and_then(|w| w.navigator().language());
    Lang::detect(stored.as_deref(), navigator.as_deref())
}

struct TaggedElement(web::Element);

impl TextTarget for TaggedElement {
    fn text_key(&self) -> Option<String> {
        self.0.get_attribute(I18N_ATTR)
    }

    fn replace_content(&mut self, html: &str) {
        self.0.set_inner_html(html);
    }
}

/// Rewrites every tagged node under `document` in `lang`.
pub fn translate_document(document: &web::Document, lang: Lang) -> usize {
    let mut nodes: Vec<TaggedElement> = dom::query_all(document, I18N_SELECTOR)
        .into_iter()
        .map(TaggedElement)
        .collect();
    translate_nodes(lang, nodes.iter_mut())
}

pub fn apply(document: &web::Document, command: &LanguageCommand, prefs: &impl PreferenceStore) {
    match command {
        LanguageCommand::ApplyTexts(lang) => {
            let lang = *lang;
            if let Some(root) = document.document_element() {
                _ = root.set_attribute("lang", lang.code());
            }
            document.set_title(TextKey::SiteTitle.text(lang));
            let replaced = translate_document(document, lang);
            if let Some(label) = document.get_element_by_id(LANG_LABEL_ID) {
                label.set_text_content(Some(lang.label()));
            }
            if let Some(btn) = document.get_element_by_id(LANG_BUTTON_ID) {
                _ = btn.set_attribute("aria-label", TextKey::LangAria.text(lang));
            }
            log::info!("[i18n] applied {lang} to {replaced} nodes");
        }
        LanguageCommand::Persist(lang) => prefs.save(*lang),
        LanguageCommand::FlashStart | LanguageCommand::FlashEnd => {
            if let Some(btn) = document.get_element_by_id(LANG_BUTTON_ID) {
                let on = matches!(command, LanguageCommand::FlashStart);
                _ = btn.class_list().toggle_with_force(LANG_CHANGING_CLASS, on);
            }
        }
    }
}

pub fn wire_language_button(app: &App, document: &web::Document) {
    let app = app.clone();
    dom::add_click_listener(document, LANG_BUTTON_ID, move || {
        app.dispatch(SiteEvent::LanguageToggled);
    });
}
