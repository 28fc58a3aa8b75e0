use crate::app::App;
use crate::constants::{MAP_TOGGLE_ID, SELECTED_CLASS, SHOW_ALL_ID, STORE_CARD_SELECTOR};
use crate::dom;
use dalad_core::i18n::{Lang, TextKey};
use dalad_core::state::SiteEvent;
use dalad_core::store_list::{ListCommand, ShowAllLabel};
use web_sys as web;

/// Makes every store card clickable and tags it with its ordinal.
/// Returns the number of cards found.
pub fn wire_store_cards(app: &App, document: &web::Document) -> usize {
    let cards = dom::query_all(document, STORE_CARD_SELECTOR);
    for (index, card) in cards.iter().enumerate() {
        _ = card.set_attribute("data-store-index", &index.to_string());
        dom::set_style(card, "cursor", "pointer");
        let app = app.clone();
        dom::add_listener(card, "click", move |_: web::MouseEvent| {
            app.dispatch(SiteEvent::StoreCardClicked(index));
        });
    }
    log::info!("[stores] wired {} cards", cards.len());
    cards.len()
}

pub fn wire_map_controls(app: &App, document: &web::Document) {
    let show_all = app.clone();
    dom::add_click_listener(document, SHOW_ALL_ID, move || {
        show_all.dispatch(SiteEvent::ShowAllClicked);
    });

    let toggle = app.clone();
    dom::add_click_listener(document, MAP_TOGGLE_ID, move || {
        toggle.dispatch(SiteEvent::MapToggleClicked);
    });
    if let Some(btn) = document.get_element_by_id(MAP_TOGGLE_ID) {
        let app = app.clone();
        dom::add_listener(&btn, "keydown", move |ev: web::KeyboardEvent| {
            if crate::events::keyboard::is_activation_key(&ev.key()) {
                ev.prevent_default();
                app.dispatch(SiteEvent::MapToggleClicked);
            }
        });
    }
}

pub fn apply(document: &web::Document, command: &ListCommand, lang: Lang) {
    match command {
        ListCommand::ClearSelection => {
            for card in dom::query_all(document, STORE_CARD_SELECTOR) {
                _ = card.class_list().remove_1(SELECTED_CLASS);
            }
        }
        ListCommand::Select(index) => {
            if let Some(card) = dom::query_all(document, STORE_CARD_SELECTOR).get(*index) {
                _ = card.class_list().add_1(SELECTED_CLASS);
            }
        }
        ListCommand::SetShowAllLabel(label) => set_show_all_label(document, *label, lang),
    }
}

fn set_show_all_label(document: &web::Document, label: ShowAllLabel, lang: Lang) {
    let Some(btn) = document.get_element_by_id(SHOW_ALL_ID) else {
        return;
    };
    let (icon, text, title) = match label {
        ShowAllLabel::Idle => ("fa-layer-group", TextKey::MapShowAll, TextKey::MapShowAllTitle),
        ShowAllLabel::Confirming => ("fa-check", TextKey::MapShowingAll, TextKey::MapShowingAllTitle),
    };
    btn.set_inner_html(&format!(
        "<i class=\"fas {icon}\"></i> {}",
        text.text(lang)
    ));
    _ = btn.set_attribute("title", title.text(lang));
}
