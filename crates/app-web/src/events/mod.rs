pub mod keyboard;
pub mod pointer;
pub mod scroll;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::ViewportState;

use crate::constants::SCREEN_HEIGHT_VAR;
use crate::dom;

/// Rebuild the viewport wholesale on resize: one state replacement, never an
/// incremental field patch, so no frame observes a stale aspect/scale pair.
pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    viewport: Rc<RefCell<ViewportState>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        let Some((window, document)) = dom::window_document() else {
            return;
        };
        let (inner_w, inner_h) = dom::inner_size(&window);
        let inset = dom::scrollbar_inset(&window, &document);
        let current = *viewport.borrow();
        let next = current.recompute(inner_w, inner_h, inset);
        // Mobile browsers fire height-only resizes as the URL bar collapses;
        // skip those on small screens.
        if current.is_small_screen && next.width == current.width {
            return;
        }
        *viewport.borrow_mut() = next;
        dom::write_screen_height_var(&document, SCREEN_HEIGHT_VAR, next.height);
        dom::size_canvas(&canvas, next.width, next.height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
