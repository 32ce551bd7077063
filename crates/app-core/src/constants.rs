// Shared simulation/visual tuning constants used by both web and native frontends.

// Particle lattice
pub const GRID_DENSITY: usize = 23;
pub const PARTICLE_COUNT: usize = GRID_DENSITY * GRID_DENSITY * GRID_DENSITY;
pub const PARTICLE_SPREAD: f32 = 11.0;

// Gravity field (per-frame scalars tuned for a 16 ms tick, not physical constants)
pub const GRAVITY: f32 = 9.8 / 120.0 / 60.0;
pub const MOON_GRAVITY: f32 = GRAVITY / 7.0;
pub const FRICTION: f32 = 0.95; // damping factor; the integrator does not apply it yet
pub const RESET_RADIUS: f32 = 0.5; // below this distance a particle is reclaimed

// Vector visuals
pub const LIFE_SCALE_STEP: f32 = 0.1; // per-tick growth of a freshly reset vector
pub const SPEED_STRETCH: f32 = 200.0; // maps |velocity| to cone length
pub const SPEED_STRETCH_BIAS: f32 = 0.5;

// Orientation smoothing
pub const SMOOTHING: f32 = 0.4; // first-order ease factor, must stay in (0, 1)
pub const GLOBE_YAW_OFFSET: f32 = 0.8; // only the globe group carries an angular offset
pub const GLOBE_INITIAL_YAW: f32 = -std::f32::consts::PI;

// Scene layout
pub const GLOBE_RADIUS: f32 = 1.0;
pub const GLOBE_SEGMENTS: u32 = 112;
pub const GLOBE_OUTLINE_OUTER: f32 = 1.015;
pub const RING_COUNT: usize = 12;
pub const MOON_RADIUS: f32 = 0.27;
pub const MOON_SEGMENTS: u32 = 60;
pub const MOON_OUTLINE_OUTER: f32 = 0.28;
pub const MOON_DISTANCE: f32 = 60.0;
pub const DOT_RADIUS: f32 = 0.005;
pub const DOT_SEGMENTS: u32 = 4;
pub const CONE_RADIUS: f32 = 0.006;
pub const CONE_HEIGHT: f32 = 0.04;
pub const CONE_SEGMENTS: u32 = 6;

// Camera
pub const CAMERA_Z: f32 = 13.5;
pub const CAMERA_FOV_DEG: f32 = 34.6;
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 5000.0;

// Frame pacing (milliseconds of host wall-clock time)
pub const FRAME_INTERVAL_MS: f64 = 16.0;
pub const FRAME_INTERVAL_SCROLLING_MS: f64 = 16.0; // kept separate; see pacing::frame_interval
pub const STARTUP_DELAY_MS: i32 = 200; // one-shot delay before the loop leaves Idle
pub const SCROLL_QUIET_MS: f64 = 300.0; // quiet period before the scroll flag clears

// Viewport
pub const SMALL_SCREEN_WIDTH: f32 = 1000.0;
pub const SMALL_SCREEN_HEIGHT_SCALE: f32 = 1.2;
pub const DEV_SCREEN_W: f32 = 1680.0; // design baseline the scale factors are measured against
pub const DEV_SCREEN_H: f32 = 915.0;

// Background color 0xDBC075
pub const CLEAR_COLOR_SRGB: [f64; 3] = [219.0 / 255.0, 192.0 / 255.0, 117.0 / 255.0];

// Material colors (sRGB bytes as floats)
pub const EARTH_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0]; // continents: texture mask over black
pub const INK_COLOR: [f32; 4] = [2.0 / 255.0, 1.0 / 255.0, 2.0 / 255.0, 1.0]; // 0x020102
pub const RING_COLOR: [f32; 4] = [170.0 / 255.0, 0.0, 0.0, 1.0]; // 0xaa0000
pub const LAT_RING_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const LNG_RING_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const FILL_COLOR: [f32; 4] = [219.0 / 255.0, 192.0 / 255.0, 117.0 / 255.0, 1.0];
