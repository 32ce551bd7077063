use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Width the scrollbar steals from the layout viewport.
pub fn scrollbar_inset(window: &web::Window, document: &web::Document) -> f32 {
    let inner = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let body = match document.body() {
        Some(b) => b,
        None => return 0.0,
    };
    inner - body.offset_width() as f32
}

pub fn inner_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    (w, h)
}

pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

pub fn now_ms(window: &web::Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

/// Mirror the computed viewport height into a CSS custom property so the
/// page layout can track the canvas.
pub fn write_screen_height_var(document: &web::Document, name: &str, height: f32) {
    if let Some(body) = document.body() {
        _ = body.style().set_property(name, &format!("{height}"));
    }
}

/// Size the canvas backing store to the logical viewport (pixel ratio 1).
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width: f32, height: f32) {
    canvas.set_width((width as u32).max(1));
    canvas.set_height((height as u32).max(1));
}

/// One-shot timer; the closure leaks into the JS runtime, which is fine for
/// a process-lifetime startup hook.
pub fn set_timeout(
    window: &web::Window,
    delay_ms: i32,
    f: impl FnOnce() + 'static,
) -> Result<(), wasm_bindgen::JsValue> {
    let closure = Closure::once(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    closure.forget();
    Ok(())
}
