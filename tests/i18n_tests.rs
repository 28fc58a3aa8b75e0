// Host-side tests for the translation tables and the language switch.

use dalad_core::constants::{LANGUAGE_FLASH, LANGUAGE_REAPPLY};
use dalad_core::i18n::{
    lookup, translate_nodes, Lang, LanguageCommand, PreferenceStore, TextKey, TextTarget,
    TranslationStore,
};
use dalad_core::state::{Command, SiteEvent};
use dalad_core::{SiteError, STORES};
use std::cell::RefCell;

struct FakeNode {
    key: Option<String>,
    content: String,
}

impl FakeNode {
    fn tagged(key: &str, content: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            content: content.to_string(),
        }
    }
}

impl TextTarget for FakeNode {
    fn text_key(&self) -> Option<String> {
        self.key.clone()
    }

    fn replace_content(&mut self, html: &str) {
        self.content = html.to_string();
    }
}

#[derive(Default)]
struct MemoryPrefs {
    stored: RefCell<Option<String>>,
}

impl PreferenceStore for MemoryPrefs {
    fn load(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    fn save(&self, lang: Lang) {
        *self.stored.borrow_mut() = Some(lang.code().to_string());
    }
}

#[test]
fn es_en_es_restores_every_tagged_node() {
    let mut nodes: Vec<FakeNode> = TextKey::ALL
        .iter()
        .map(|k| FakeNode::tagged(k.attr(), "placeholder"))
        .collect();

    assert_eq!(translate_nodes(Lang::Es, nodes.iter_mut()), TextKey::ALL.len());
    let spanish: Vec<String> = nodes.iter().map(|n| n.content.clone()).collect();

    translate_nodes(Lang::En, nodes.iter_mut());
    assert_eq!(nodes[1].content, "Home");

    translate_nodes(Lang::Es, nodes.iter_mut());
    let restored: Vec<String> = nodes.iter().map(|n| n.content.clone()).collect();
    assert_eq!(spanish, restored);
}

#[test]
fn unknown_and_untagged_nodes_are_left_alone() {
    let mut nodes = vec![
        FakeNode::tagged("nav.home", "x"),
        FakeNode::tagged("nav.missing", "keep me"),
        FakeNode {
            key: None,
            content: "plain".to_string(),
        },
    ];
    assert_eq!(translate_nodes(Lang::En, nodes.iter_mut()), 1);
    assert_eq!(nodes[0].content, "Home");
    assert_eq!(nodes[1].content, "keep me");
    assert_eq!(nodes[2].content, "plain");
}

#[test]
fn every_key_parses_from_its_attribute() {
    for key in TextKey::ALL {
        assert_eq!(key.attr().parse::<TextKey>().ok(), Some(*key));
    }
    assert!(matches!(
        "nope".parse::<TextKey>(),
        Err(SiteError::UnknownTextKey(_))
    ));
    assert_eq!(lookup(Lang::En, "nav.products"), Some("Products"));
    assert_eq!(lookup(Lang::Es, "nav.products"), Some("Productos"));
    assert_eq!(lookup(Lang::Es, "nav.unknown"), None);
}

#[test]
fn detection_prefers_stored_value_then_navigator() {
    assert_eq!(Lang::detect(Some("en"), Some("es-EC")), Lang::En);
    assert_eq!(Lang::detect(Some("es"), Some("en-US")), Lang::Es);
    assert_eq!(Lang::detect(None, Some("en-GB")), Lang::En);
    assert_eq!(Lang::detect(None, Some("fr-FR")), Lang::Es);
    assert_eq!(Lang::detect(None, None), Lang::Es);
    assert_eq!(Lang::detect(Some(""), Some("en")), Lang::En);
    // an unsupported stored value falls back to Spanish, not to the locale
    assert_eq!(Lang::detect(Some("de"), Some("en")), Lang::Es);
}

#[test]
fn apply_falls_back_to_spanish_for_unsupported_codes() {
    let mut store = TranslationStore::new(Lang::En);
    let out = store.apply("pt");
    assert_eq!(store.current(), Lang::Es);
    assert_eq!(
        out,
        vec![
            Command::Language(LanguageCommand::ApplyTexts(Lang::Es)),
            Command::Language(LanguageCommand::Persist(Lang::Es)),
        ]
    );
}

#[test]
fn toggle_persists_and_flashes_once() {
    let prefs = MemoryPrefs::default();
    let mut store = TranslationStore::new(Lang::Es);
    let out = store.toggle();
    assert_eq!(store.current(), Lang::En);

    for c in &out {
        if let Command::Language(LanguageCommand::Persist(lang)) = c {
            prefs.save(*lang);
        }
    }
    assert_eq!(prefs.load().as_deref(), Some("en"));
    assert_eq!(out[0], Command::Language(LanguageCommand::FlashStart));

    let Some(Command::Schedule { after, event: SiteEvent::LanguageFlashExpired(first) }) =
        out.last().cloned()
    else {
        panic!("flash end not scheduled: {out:?}");
    };
    assert_eq!(after, LANGUAGE_FLASH);

    // a second toggle supersedes the first flash timer
    store.toggle();
    assert!(store.flash_expired(first).is_empty());
    assert_eq!(
        store.flash_expired(first + 1),
        vec![Command::Language(LanguageCommand::FlashEnd)]
    );
    assert_eq!(store.current(), Lang::Es);
}

#[test]
fn startup_reapplies_after_a_short_delay() {
    let mut store = TranslationStore::new(Lang::En);
    let out = store.startup();
    assert_eq!(out[0], Command::Language(LanguageCommand::ApplyTexts(Lang::En)));
    assert_eq!(
        out.last(),
        Some(&Command::Schedule {
            after: LANGUAGE_REAPPLY,
            event: SiteEvent::LanguageReapply,
        })
    );
}

#[test]
fn language_labels_and_codes() {
    assert_eq!(Lang::Es.label(), "ES");
    assert_eq!(Lang::En.label(), "EN");
    assert_eq!(Lang::En.to_string(), "en");
    assert_eq!(Lang::default(), Lang::Es);
    assert_eq!(Lang::Es.toggled().toggled(), Lang::Es);
}

#[test]
fn store_popup_follows_language() {
    let es = STORES[0].popup_html(Lang::Es);
    let en = STORES[0].popup_html(Lang::En);
    assert!(es.contains("Dirección:") && es.contains("Cómo llegar"));
    assert!(en.contains("Address:") && en.contains("Get directions"));
    assert!(en.contains(STORES[0].name));
}
