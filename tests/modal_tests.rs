// Host-side tests for the product modal, its zoom view and the product tables.

use dalad_core::constants::{MODAL_HIDE_DELAY, ZOOM_INDICATOR_VISIBLE, ZOOM_MAX, ZOOM_MIN};
use dalad_core::i18n::Lang;
use dalad_core::modal::{panel_html, wheel_factor, zoom_indicator_text, ModalCommand};
use dalad_core::products::{self, ProductId, ProductRecord, FALLBACK_IMAGE};
use dalad_core::state::{Command, SiteEvent, SiteState};
use dalad_core::ProductModal;

fn rendered(commands: &[Command]) -> Option<(String, Lang)> {
    commands.iter().find_map(|c| match c {
        Command::Modal(ModalCommand::Render { product, lang }) => Some((product.clone(), *lang)),
        _ => None,
    })
}

fn scheduled(commands: &[Command]) -> Vec<SiteEvent> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::Schedule { event, .. } => Some(event.clone()),
            _ => None,
        })
        .collect()
}

fn open_with_zoom() -> ProductModal {
    let mut modal = ProductModal::default();
    modal.open("producto1", Lang::Es);
    modal.open_zoom("imag/TarrinaP.png", "Tarrina Pequeña");
    modal
}

fn scale(modal: &ProductModal) -> f64 {
    modal.zoom_view().map(|z| z.scale).unwrap_or(f64::NAN)
}

#[test]
fn language_switch_rerenders_open_product() {
    let mut state = SiteState::new(Lang::Es, 7);
    let out = state.dispatch(SiteEvent::ProductOpened("producto1".into()));
    let (key, lang) = rendered(&out).expect("render");
    let record = products::lookup(lang, &key);
    assert_eq!(record.title, "Tarrina Pequeña");
    assert_eq!(record.price, "$0.50");

    let out = state.dispatch(SiteEvent::LanguageToggled);
    let (key, lang) = rendered(&out).expect("re-render after toggle");
    assert_eq!(lang, Lang::En);
    let record = products::lookup(lang, &key);
    assert_eq!(record.title, "Small Tub");
    assert_eq!(record.price, "$0.50");
    assert_eq!(state.modal.open_product(), Some("producto1"));
}

#[test]
fn language_switch_with_closed_modal_renders_nothing() {
    let mut state = SiteState::new(Lang::Es, 7);
    let out = state.dispatch(SiteEvent::LanguageToggled);
    assert!(rendered(&out).is_none());
}

#[test]
fn zoom_stays_within_limits() {
    let mut modal = open_with_zoom();
    assert_eq!(scale(&modal), 1.0);
    for _ in 0..50 {
        modal.zoom(1.2);
        assert!(scale(&modal) <= ZOOM_MAX);
    }
    assert_eq!(scale(&modal), ZOOM_MAX);
    for _ in 0..50 {
        modal.zoom(0.8);
        assert!(scale(&modal) >= ZOOM_MIN);
    }
    assert_eq!(scale(&modal), ZOOM_MIN);
    modal.reset_zoom();
    assert_eq!(scale(&modal), 1.0);
}

#[test]
fn zoom_change_shows_indicator_and_latest_timer_hides_it() {
    let mut modal = open_with_zoom();
    let first = modal.zoom(1.2);
    assert!(first.contains(&Command::Modal(ModalCommand::ShowZoomIndicator(
        "Zoom: 120%".into()
    ))));
    assert!(first.iter().any(|c| matches!(
        c,
        Command::Schedule { after, .. } if *after == ZOOM_INDICATOR_VISIBLE
    )));
    let SiteEvent::ZoomIndicatorExpired(old) = scheduled(&first)[0] else {
        panic!("no indicator timer");
    };
    let second = modal.zoom(1.2);
    let SiteEvent::ZoomIndicatorExpired(new) = scheduled(&second)[0] else {
        panic!("no indicator timer");
    };
    assert!(modal.indicator_expired(old).is_empty());
    assert_eq!(
        modal.indicator_expired(new),
        vec![Command::Modal(ModalCommand::HideZoomIndicator)]
    );
}

#[test]
fn zoom_needs_an_open_product() {
    let mut modal = ProductModal::default();
    assert!(modal.open_zoom("a.png", "a").is_empty());
    assert!(modal.zoom(1.2).is_empty());
    assert!(modal.reset_zoom().is_empty());
    assert!(!modal.is_zoom_open());
}

#[test]
fn escape_closes_zoom_then_modal() {
    let mut state = SiteState::new(Lang::Es, 7);
    state.dispatch(SiteEvent::ProductOpened("producto2".into()));
    state.dispatch(SiteEvent::ZoomOpened {
        src: "imag/TarrinaG.png".into(),
        alt: "Tarrina Grande".into(),
    });

    let first = state.dispatch(SiteEvent::EscapePressed);
    assert_eq!(first, vec![Command::Modal(ModalCommand::HideZoom)]);
    assert!(state.modal.is_open());

    let second = state.dispatch(SiteEvent::EscapePressed);
    assert!(second.contains(&Command::Modal(ModalCommand::BeginClose)));
    assert!(!state.modal.is_open());

    assert!(state.dispatch(SiteEvent::EscapePressed).is_empty());
}

#[test]
fn close_also_closes_zoom_and_hides_after_transition() {
    let mut modal = open_with_zoom();
    let out = modal.close();
    assert_eq!(out[0], Command::Modal(ModalCommand::HideZoom));
    assert!(!modal.is_zoom_open());
    let Some(Command::Schedule { after, event: SiteEvent::ProductHideElapsed(generation) }) =
        out.last().cloned()
    else {
        panic!("hide not scheduled: {out:?}");
    };
    assert_eq!(after, MODAL_HIDE_DELAY);
    assert_eq!(
        modal.hide_elapsed(generation),
        vec![Command::Modal(ModalCommand::Hide)]
    );
}

#[test]
fn reopen_during_exit_is_not_hidden_by_stale_timer() {
    let mut modal = ProductModal::default();
    modal.open("producto1", Lang::Es);
    let out = modal.close();
    let SiteEvent::ProductHideElapsed(stale) = scheduled(&out)[0] else {
        panic!("hide not scheduled");
    };
    modal.open("producto4", Lang::Es);
    assert!(modal.hide_elapsed(stale).is_empty());
    assert_eq!(modal.open_product(), Some("producto4"));
}

#[test]
fn reveal_only_for_the_current_opening() {
    let mut modal = ProductModal::default();
    let out = modal.open("producto1", Lang::En);
    let SiteEvent::ProductRevealElapsed(generation) = scheduled(&out)[0] else {
        panic!("reveal not scheduled");
    };
    assert_eq!(
        modal.reveal_elapsed(generation),
        vec![Command::Modal(ModalCommand::Activate)]
    );
    modal.close();
    assert!(modal.reveal_elapsed(generation).is_empty());
}

#[test]
fn wheel_direction_maps_to_zoom_factor() {
    assert_eq!(wheel_factor(120.0), 0.9);
    assert_eq!(wheel_factor(-120.0), 1.1);
    assert_eq!(zoom_indicator_text(1.0), "Zoom: 100%");
    assert_eq!(zoom_indicator_text(0.5), "Zoom: 50%");
}

#[test]
fn unknown_product_renders_empty_panel() {
    let record = products::lookup(Lang::Es, "producto3");
    assert!(record.is_empty());
    assert_eq!(*record, ProductRecord::EMPTY);
}

#[test]
fn product_tables_cover_both_languages() {
    for id in ProductId::ALL {
        assert_eq!(id.key().parse::<ProductId>().ok(), Some(id));
        let es = products::record(Lang::Es, id);
        let en = products::record(Lang::En, id);
        assert!(!es.is_empty() && !en.is_empty());
        assert_eq!(es.price, en.price, "{}", id.key());
        assert_eq!(es.image, en.image);
        assert_ne!(es.title, en.title);
    }
}

#[test]
fn panel_markup_lists_details_and_localized_labels() {
    let record = products::record(Lang::En, ProductId::GummyStrip);
    let html = panel_html(record, Lang::En);
    assert!(html.contains("Strip of Gummies"));
    assert!(html.contains("$1.50"));
    assert!(html.contains("Features:"));
    assert!(html.contains(FALLBACK_IMAGE));
    assert_eq!(html.matches("<li>").count(), record.details.len());
    assert!(html.contains("id=\"zoomFullscreenModal\""));

    let es = panel_html(products::record(Lang::Es, ProductId::GummyStrip), Lang::Es);
    assert!(es.contains("Características:"));
}
