use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::ScrollQuiet;

use crate::dom;

/// Mark the scroll flag on every scroll event; it clears itself after the
/// quiet period without a timer.
pub fn wire_scroll(scroll: Rc<RefCell<ScrollQuiet>>) {
    let closure = Closure::wrap(Box::new(move |_: web::Event| {
        let Some(window) = web::window() else { return };
        scroll.borrow_mut().note_scroll(dom::now_ms(&window));
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
