use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use app_core::{
    FramePacer, MotionFlags, OrientationRig, ParticleField, SceneFlags, ScrollQuiet, ViewportState,
};

use crate::render;

/// Everything one simulation+render tick needs, owned by the loop driver.
pub struct FrameContext {
    pub viewport: Rc<RefCell<ViewportState>>,
    pub motion: Rc<RefCell<MotionFlags>>,
    pub scroll: Rc<RefCell<ScrollQuiet>>,
    pub field: ParticleField,
    pub rig: OrientationRig,
    pub pacer: FramePacer,
    pub gpu: render::GpuState<'static>,
}

impl FrameContext {
    /// One animation-frame callback: gate on the frame budget, then run the
    /// integrator, the orientation smoother, and a render. A failed render is
    /// logged and skipped; the loop continues at the next opportunity.
    pub fn frame(&mut self, now_ms: f64) {
        let is_scrolling = self.scroll.borrow().is_scrolling(now_ms);
        if !self.pacer.should_tick(now_ms, is_scrolling) {
            return;
        }
        let (pointer_x, pointer_y, width, height) = {
            let v = self.viewport.borrow();
            (v.pointer_x, v.pointer_y, v.width, v.height)
        };
        self.field.step();
        self.rig.step(pointer_x, pointer_y);
        self.gpu.resize_if_needed(width as u32, height as u32);
        if let Err(e) = self.gpu.render(&self.field, &self.rig) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    earth_img: image::RgbaImage,
    moon_img: image::RgbaImage,
    field: &ParticleField,
    flags: SceneFlags,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, earth_img, moon_img, field, flags).await
}

/// Start the requestAnimationFrame recursion. Each callback receives the
/// host's timestamp and reschedules itself; stopping the loop would simply
/// mean not requesting the next frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(now_ms);
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
