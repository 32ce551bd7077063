use crate::constants::{
    DEV_SCREEN_H, DEV_SCREEN_W, SMALL_SCREEN_HEIGHT_SCALE, SMALL_SCREEN_WIDTH,
};

/// Logical viewport dimensions and derived scale factors.
///
/// A resize produces a whole new value via [`ViewportState::recompute`]; no
/// caller can observe a half-updated aspect/scale combination.
#[derive(Clone, Copy, Debug)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    pub height_scale: f32,
    pub aspect: f32,
    /// Aspect ratio of the design baseline screen.
    pub dev_aspect: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_aspect: f32,
    /// Pointer position normalized to roughly [-0.5, 0.5], origin centered.
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub is_small_screen: bool,
    pub is_mouse_down: bool,
}

impl ViewportState {
    /// Build a fresh state from raw window metrics.
    pub fn compute(inner_width: f32, inner_height: f32, scrollbar_inset: f32) -> Self {
        let width = inner_width - scrollbar_inset;
        let is_small_screen = width < SMALL_SCREEN_WIDTH;
        let height_scale = if is_small_screen {
            SMALL_SCREEN_HEIGHT_SCALE
        } else {
            1.0
        };
        let height = inner_height * height_scale;
        let aspect = width / height;
        let dev_aspect = DEV_SCREEN_W / DEV_SCREEN_H;
        Self {
            width,
            height,
            height_scale,
            aspect,
            dev_aspect,
            scale_x: width / DEV_SCREEN_W,
            scale_y: height / height_scale / DEV_SCREEN_H,
            scale_aspect: aspect / dev_aspect,
            pointer_x: 0.0,
            pointer_y: 0.0,
            is_small_screen,
            is_mouse_down: false,
        }
    }

    /// Atomic resize replacement: recompute every derived field in one shot,
    /// carrying pointer and button state across.
    pub fn recompute(&self, inner_width: f32, inner_height: f32, scrollbar_inset: f32) -> Self {
        let mut next = Self::compute(inner_width, inner_height, scrollbar_inset);
        next.pointer_x = self.pointer_x;
        next.pointer_y = self.pointer_y;
        next.is_mouse_down = self.is_mouse_down;
        next
    }

    /// Normalize page-space pointer coordinates against the current viewport.
    pub fn set_pointer(&mut self, page_x: f32, page_y: f32, scroll_y: f32) {
        let (x, y) = normalize_pointer(page_x, page_y, scroll_y, self.width, self.height);
        self.pointer_x = x;
        self.pointer_y = y;
    }
}

/// Map page coordinates to the centered [-0.5, 0.5] range the orientation
/// rig consumes.
#[inline]
pub fn normalize_pointer(
    page_x: f32,
    page_y: f32,
    scroll_y: f32,
    width: f32,
    height: f32,
) -> (f32, f32) {
    (
        (page_x - width * 0.5) / width,
        (page_y - scroll_y - height * 0.5) / height,
    )
}

/// Directional key state. The keys are captured and tracked but nothing in
/// the simulation consumes them yet; `jump` has no matching key-up and stays
/// latched once pressed.
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MotionFlags {
    pub fn key_down(&mut self, key: &str) {
        match key {
            "ArrowUp" => self.forward = true,
            "ArrowDown" => self.backward = true,
            "ArrowLeft" => self.left = true,
            "ArrowRight" => self.right = true,
            " " => self.jump = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        match key {
            "ArrowUp" => self.forward = false,
            "ArrowDown" => self.backward = false,
            "ArrowLeft" => self.left = false,
            "ArrowRight" => self.right = false,
            _ => {}
        }
    }
}
