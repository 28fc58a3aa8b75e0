use crate::dom;
use crate::i18n::{self, LocalPreferences};
use crate::map::MapSurface;
use crate::modal;
use crate::stores;
use dalad_core::state::{Command, SiteEvent, SiteState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct AppInner {
    state: RefCell<SiteState>,
    document: web::Document,
    map: Option<MapSurface>,
    prefs: LocalPreferences,
}

/// Cheap handle shared by every DOM callback.
#[derive(Clone)]
pub struct App {
    inner: Rc<AppInner>,
}

impl App {
    pub fn new(document: web::Document, state: SiteState, map: Option<MapSurface>) -> Self {
        Self {
            inner: Rc::new(AppInner {
                state: RefCell::new(state),
                document,
                map,
                prefs: LocalPreferences,
            }),
        }
    }

    pub fn document(&self) -> &web::Document {
        &self.inner.document
    }

    /// Runs `f` against the state and applies whatever it returns. The state
    /// borrow ends before any DOM work, so handlers fired synchronously by
    /// that work can dispatch again.
    pub fn update(&self, f: impl FnOnce(&mut SiteState) -> Vec<Command>) {
        let commands = {
            let mut state = self.inner.state.borrow_mut();
            f(&mut state)
        };
        self.apply(commands);
    }

    pub fn dispatch(&self, event: SiteEvent) {
        log::debug!("[app] {event:?}");
        self.update(|state| state.dispatch(event));
    }

    pub fn lang(&self) -> dalad_core::Lang {
        self.inner.state.borrow().lang()
    }

    pub fn is_zoom_open(&self) -> bool {
        self.inner.state.borrow().modal.is_zoom_open()
    }

    fn apply(&self, commands: Vec<Command>) {
        let document = &self.inner.document;
        let lang = self.lang();
        for command in commands {
            match command {
                Command::Map(cmd) => match &self.inner.map {
                    Some(surface) => surface.apply(document, &cmd, lang),
                    // the panel still expands without a live map
                    None => {
                        if let dalad_core::map_view::MapCommand::SetExpanded(expanded) = cmd {
                            crate::map::set_expanded(document, expanded, lang);
                        }
                    }
                },
                Command::List(cmd) => stores::apply(document, &cmd, lang),
                Command::Language(cmd) => i18n::apply(document, &cmd, &self.inner.prefs),
                Command::Modal(cmd) => modal::apply(self, &cmd),
                Command::Schedule { after, event } => {
                    let app = self.clone();
                    dom::set_timeout(after, move || app.dispatch(event));
                }
            }
        }
    }
}
