/// Duration of a view mode transition in seconds
pub const TRANSITION_SECS: f32 = 1.0;

/// Vertical field of view at zoom 1.0, in radians
pub const BASE_FOV: f32 = std::f32::consts::FRAC_PI_4;

/// User zoom limits for the wheel outside the vertical pan zone
pub const MIN_USER_ZOOM: f32 = 0.25;
pub const MAX_USER_ZOOM: f32 = 4.0;

/// Zoom change per wheel line
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Fraction of the window width, from the left, where the wheel pans vertically
pub const VERTICAL_PAN_ZONE: f32 = 1.0 / 3.0;

/// Scroll step for the arrow keys, in world units per second
pub const KEYBOARD_SCROLL_SPEED: f32 = 12.0;

/// Camera presets as (position offset, look-at offset, zoom), relative to the
/// scroll origin `(scroll_x, scroll_y, 0)`
pub const FRONT_PRESET: ([f32; 3], [f32; 3], f32) = ([0.0, 0.0, 30.0], [0.0, 0.0, 0.0], 1.0);
pub const TOP_PRESET: ([f32; 3], [f32; 3], f32) = ([0.0, 45.0, -16.0], [0.0, 0.0, -20.0], 0.8);
pub const SIDE_PRESET: ([f32; 3], [f32; 3], f32) = ([-40.0, 0.0, -20.0], [0.0, 0.0, -20.0], 0.9);

/// Pixels per wheel line, used to normalise line and pixel scroll units
pub const WHEEL_LINE_PIXELS: f32 = 40.0;
