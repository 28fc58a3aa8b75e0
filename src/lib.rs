#![cfg(target_arch = "wasm32")]
use dalad_core::state::SiteState;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod i18n;
mod leaflet;
mod map;
mod modal;
mod overlay;
mod stores;

use app::App;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dalad-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let lang = i18n::detect_language(&i18n::LocalPreferences);
    log::info!("[i18n] detected {lang}");

    let map = match map::MapSurface::init(&document) {
        Ok(surface) => Some(surface),
        Err(e) => {
            log::warn!("[map] disabled: {e:?}");
            None
        }
    };

    let app = App::new(document.clone(), SiteState::new(lang, 0), map);

    let cards = stores::wire_store_cards(&app, &document);
    app.update(|state| {
        state.list.attach_cards(cards);
        Vec::new()
    });
    stores::wire_map_controls(&app, &document);
    i18n::wire_language_button(&app, &document);
    modal::wire_product_triggers(&app, &document);
    modal::wire_modal(&app, &document);
    events::keyboard::wire_global_keydown(&app);

    events::pointer::wire_parallax(&document);
    events::pointer::wire_ripples(&document);
    effects::wire_counters(&document);
    effects::wire_section_reveal(&document);
    effects::spawn_particles(&document);
    effects::wire_navigation(&document);
    effects::wire_about_video(&app, &document);
    effects::fade_in_body(&document);

    app.update(SiteState::startup);
    Ok(())
}
