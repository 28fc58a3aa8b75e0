//! Decorative page behavior: counters, particles, section reveal, smooth
//! navigation, the body fade-in and the about video controls.

use crate::app::App;
use crate::constants::{
    ABOUT_SECTION_ID, COUNTER_ATTR, COUNTER_SELECTOR, HEADER_SELECTOR, HERO_SELECTOR,
    NAV_LINK_SELECTOR, REVEAL_CLASS, REVEAL_SELECTOR, SCROLL_INDICATOR_SELECTOR,
    VIDEO_ID, VIDEO_PAUSED_CLASS, VIDEO_SOUND_ID, VIDEO_UNMUTED_CLASS,
};
use crate::dom;
use crate::frame;
use dalad_core::constants::{
    COUNTER_START_DELAY, COUNTER_VISIBILITY_THRESHOLD, PAGE_FADE_IN_DELAY, PARTICLE_COUNT,
    SECTION_VISIBILITY_THRESHOLD,
};
use dalad_core::effects::{particles, section_scroll_top, CounterAnimation};
use dalad_core::i18n::{Lang, TextKey};
use instant::Instant;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Calls `on_visible` once per element when it first crosses `threshold`.
fn observe_once(
    elements: Vec<web::Element>,
    threshold: f64,
    mut on_visible: impl FnMut(web::Element) + 'static,
) -> anyhow::Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, web::IntersectionObserver)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    for el in &elements {
        observer.observe(el);
    }
    Ok(())
}

fn run_counter(el: web::Element) {
    let animation = CounterAnimation::from_attr(el.get_attribute(COUNTER_ATTR).as_deref());
    let started = Instant::now();
    frame::start_loop(move || {
        let elapsed = started.elapsed();
        el.set_text_content(Some(&animation.value_at(elapsed).to_string()));
        if animation.is_finished(elapsed) {
            dom::set_style(&el, "animation", "bounce 0.5s ease");
            return false;
        }
        true
    });
}

/// Stat counters count up once they are half on screen.
pub fn wire_counters(document: &web::Document) {
    let doc = document.clone();
    dom::set_timeout(COUNTER_START_DELAY, move || {
        let counters = dom::query_all(&doc, COUNTER_SELECTOR);
        if let Err(e) = observe_once(counters, COUNTER_VISIBILITY_THRESHOLD, run_counter) {
            log::warn!("[fx] counters disabled: {e}");
        }
    });
}

pub fn wire_section_reveal(document: &web::Document) {
    let sections = dom::query_all(document, REVEAL_SELECTOR);
    let result = observe_once(sections, SECTION_VISIBILITY_THRESHOLD, |el| {
        _ = el.class_list().add_1(REVEAL_CLASS);
    });
    if let Err(e) = result {
        log::warn!("[fx] section reveal disabled: {e}");
    }
}

pub fn spawn_particles(document: &web::Document) {
    let Some(hero) = dom::query_one(document, HERO_SELECTOR) else {
        return;
    };
    let mut rng = rand::thread_rng();
    for particle in particles(&mut rng, PARTICLE_COUNT) {
        let Ok(dot) = document.create_element("div") else {
            return;
        };
        dot.set_class_name("particle");
        _ = dot.set_attribute("style", &particle.css_text());
        _ = hero.append_child(&dot);
    }
}

/// Smoothly scrolls so `section_id` sits right under the fixed header.
pub fn scroll_to_section(document: &web::Document, section_id: &str) {
    let Some(section) = document
        .get_element_by_id(section_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let header_height = dom::query_one(document, HEADER_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0);
    let options = web::ScrollToOptions::new();
    options.set_top(section_scroll_top(section.offset_top() as f64, header_height));
    options.set_behavior(web::ScrollBehavior::Smooth);
    if let Some(window) = web::window() {
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn wire_navigation(document: &web::Document) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let doc = document.clone();
        let anchor = link.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if let Some(id) = href.strip_prefix('#') {
                ev.prevent_default();
                scroll_to_section(&doc, id);
            }
        });
    }
    if let Some(indicator) = dom::query_one(document, SCROLL_INDICATOR_SELECTOR) {
        let doc = document.clone();
        dom::add_listener(&indicator, "click", move |_: web::MouseEvent| {
            scroll_to_section(&doc, ABOUT_SECTION_ID);
        });
    }
}

pub fn fade_in_body(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    _ = body.style().set_property("opacity", "0");
    _ = body.style().set_property("transition", "opacity 0.5s ease");
    dom::set_timeout(PAGE_FADE_IN_DELAY, move || {
        _ = body.style().set_property("opacity", "1");
    });
}

fn play(video: &web::HtmlVideoElement) {
    // autoplay policies may reject; the paused state is then kept as is
    if video.play().is_ok() {
        _ = video.class_list().remove_1(VIDEO_PAUSED_CLASS);
    }
}

fn pause(video: &web::HtmlVideoElement) {
    _ = video.pause();
    _ = video.class_list().add_1(VIDEO_PAUSED_CLASS);
}

fn update_sound_button(button: &web::Element, muted: bool, lang: Lang) {
    let (pressed, label, icon) = if muted {
        ("false", TextKey::VideoUnmute, "fa-volume-xmark")
    } else {
        ("true", TextKey::VideoMute, "fa-volume-high")
    };
    _ = button.set_attribute("aria-pressed", pressed);
    _ = button.set_attribute("title", label.text(lang));
    _ = button.set_attribute("aria-label", label.text(lang));
    button.set_inner_html(&format!(
        "<i class=\"fas {icon}\" aria-hidden=\"true\"></i>"
    ));
    _ = button.class_list().toggle_with_force(VIDEO_UNMUTED_CLASS, !muted);
}

pub fn wire_about_video(app: &App, document: &web::Document) {
    let Some(video) = document
        .get_element_by_id(VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
    else {
        return;
    };

    let clicked = video.clone();
    dom::add_listener(&video, "click", move |_: web::MouseEvent| {
        if clicked.paused() {
            play(&clicked);
        } else {
            pause(&clicked);
        }
    });

    if let Some(button) = document.get_element_by_id(VIDEO_SOUND_ID) {
        update_sound_button(&button, video.muted(), app.lang());
        let target = video.clone();
        let btn = button.clone();
        let app = app.clone();
        dom::add_listener(&button, "click", move |_: web::MouseEvent| {
            target.set_muted(!target.muted());
            if !target.muted() {
                play(&target);
            }
            update_sound_button(&btn, target.muted(), app.lang());
        });
    }

    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move |_: web::Event| {
        if doc.hidden() {
            pause(&video);
        } else if video.has_attribute("autoplay") && video.muted() {
            play(&video);
        }
    });
}
