/// Fixed sizes of the shell panels, in logical pixels
pub const HEADER_HEIGHT: f32 = 56.0;
pub const SIDEBAR_WIDTH: f32 = 190.0;
pub const DAY_STRIP_HEIGHT: f32 = 44.0;
pub const DETAIL_PANEL_WIDTH: f32 = 260.0;

pub const TITLE_FONT_SIZE: f32 = 20.0;
pub const LABEL_FONT_SIZE: f32 = 14.0;
pub const SMALL_FONT_SIZE: f32 = 12.0;

/// Title shown in the header
pub const APP_TITLE: &str = "DimensionView";
