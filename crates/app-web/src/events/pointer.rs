use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::ViewportState;

use crate::dom;

/// Track the pointer in page space, normalized against the live viewport.
pub fn wire_pointer(viewport: Rc<RefCell<ViewportState>>) {
    let move_viewport = viewport.clone();
    let move_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(window) = web::window() else { return };
        let scroll_y = dom::scroll_y(&window);
        move_viewport
            .borrow_mut()
            .set_pointer(ev.page_x() as f32, ev.page_y() as f32, scroll_y);
    }) as Box<dyn FnMut(_)>);

    let down_viewport = viewport.clone();
    let down_closure = Closure::wrap(Box::new(move |_: web::MouseEvent| {
        down_viewport.borrow_mut().is_mouse_down = true;
    }) as Box<dyn FnMut(_)>);

    let up_viewport = viewport;
    let up_closure = Closure::wrap(Box::new(move |_: web::MouseEvent| {
        up_viewport.borrow_mut().is_mouse_down = false;
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref());
        _ = window
            .add_event_listener_with_callback("mousedown", down_closure.as_ref().unchecked_ref());
        _ = window.add_event_listener_with_callback("mouseup", up_closure.as_ref().unchecked_ref());
    }
    move_closure.forget();
    down_closure.forget();
    up_closure.forget();
}
