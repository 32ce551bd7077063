use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::MotionFlags;

/// Track the directional keys (arrows + space) as held-state flags.
pub fn wire_keyboard(motion: Rc<RefCell<MotionFlags>>) {
    let down_motion = motion.clone();
    let down_closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        down_motion.borrow_mut().key_down(&ev.key());
    }) as Box<dyn FnMut(_)>);

    let up_closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        motion.borrow_mut().key_up(&ev.key());
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("keydown", down_closure.as_ref().unchecked_ref());
        _ = window.add_event_listener_with_callback("keyup", up_closure.as_ref().unchecked_ref());
    }
    down_closure.forget();
    up_closure.forget();
}
