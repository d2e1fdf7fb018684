/// World units between two consecutive calendar days on the X axis
pub const DAY_WIDTH: f32 = 2.0;

/// World units between two consecutive groups on the Y axis
pub const GROUP_HEIGHT: f32 = 1.5;

/// World units between two consecutive priority lanes on the Z axis
pub const PRIORITY_DEPTH: f32 = 5.0;

/// Screen pixels per world unit for the sidebar and day strip
pub const PIXELS_PER_UNIT: f32 = 50.0;

/// Number of calendar days shown on the timeline
pub const TOTAL_DAYS: u32 = 30;

/// Opacity applied to nodes that fall outside the current focus
pub const DIM_OPACITY: f32 = 0.1;

/// X position of the clickable group markers, left of day zero
pub const GROUP_MARKER_X: f32 = -3.0;

/// X position of the priority lane headers
pub const PRIORITY_MARKER_X: f32 = -4.0;

/// Height of the first priority header above the grid
pub const PRIORITY_MARKER_TOP: f32 = 8.0;

/// Vertical step between consecutive priority headers
pub const PRIORITY_MARKER_STEP: f32 = 1.5;

/// Y position of the day ticks above the first group
pub const DAY_TICK_Y: f32 = 4.0;

/// File pill capsule radius and body length
pub const PILL_RADIUS: f32 = 0.25;
pub const PILL_LENGTH: f32 = 1.0;

/// Scale applied to a hovered node
pub const HOVER_SCALE: f32 = 1.1;
