#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use app_core::{
    FieldParams, FramePacer, MotionFlags, OrientationRig, ParticleField, SceneFlags, ScrollQuiet,
    ViewportState, STARTUP_DELAY_MS,
};

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

use constants::{CANVAS_ID, EARTH_TEXTURE_URL, MOON_TEXTURE_URL, SCREEN_HEIGHT_VAR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Build the whole scene once. Every failure here is a fatal startup
/// precondition; nothing is retried.
async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Initial viewport, mirrored into CSS and the canvas backing store
    let (inner_w, inner_h) = dom::inner_size(&window);
    let inset = dom::scrollbar_inset(&window, &document);
    let viewport = Rc::new(RefCell::new(ViewportState::compute(inner_w, inner_h, inset)));
    {
        let v = viewport.borrow();
        dom::write_screen_height_var(&document, SCREEN_HEIGHT_VAR, v.height);
        dom::size_canvas(&canvas, v.width, v.height);
    }

    let earth_img = assets::load_rgba(&window, EARTH_TEXTURE_URL).await?;
    let moon_img = assets::load_rgba(&window, MOON_TEXTURE_URL).await?;

    let field = ParticleField::new(FieldParams::default())?;
    let gpu = frame::init_gpu(&canvas, earth_img, moon_img, &field, SceneFlags::default()).await?;

    let motion = Rc::new(RefCell::new(MotionFlags::default()));
    let scroll = Rc::new(RefCell::new(ScrollQuiet::default()));

    events::wire_resize(canvas, viewport.clone());
    events::pointer::wire_pointer(viewport.clone());
    events::keyboard::wire_keyboard(motion.clone());
    events::scroll::wire_scroll(scroll.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        viewport,
        motion,
        scroll,
        field,
        rig: OrientationRig::standard(),
        pacer: FramePacer::new(dom::now_ms(&window)),
        gpu,
    }));

    // Idle until the one-shot startup delay fires, then Running
    dom::set_timeout(&window, STARTUP_DELAY_MS, move || {
        frame::start_loop(frame_ctx);
    })
    .map_err(|e| anyhow::anyhow!("startup timer: {e:?}"))?;

    Ok(())
}
