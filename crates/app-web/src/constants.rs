// Web-frontend-specific constants; simulation tuning lives in app-core.

pub const CANVAS_ID: &str = "app-canvas";

// Image assets fetched once at startup
pub const EARTH_TEXTURE_URL: &str = "map.png";
pub const MOON_TEXTURE_URL: &str = "moon.png";

// CSS custom property mirroring the computed viewport height
pub const SCREEN_HEIGHT_VAR: &str = "--screenHeight";
