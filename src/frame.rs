use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request(tick: &Tick) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Calls `step` once per animation frame while it returns `true`. The
/// closure is released after the last frame.
pub fn start_loop(mut step: impl FnMut() -> bool + 'static) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if step() {
            request(&tick_clone);
        } else {
            // a closure cannot free itself mid-call; release it on the next task
            if let Some(cb) = tick_clone.borrow_mut().take() {
                crate::dom::set_timeout(Duration::ZERO, move || drop(cb));
            }
        }
    }) as Box<dyn FnMut()>));
    request(&tick);
}
