/// Action colours, bright entries are used for p1 and dark ones for p2..p9
pub const PAID_BRIGHT: [u8; 3] = [0x22, 0xc5, 0x5e];
pub const PAID_DARK: [u8; 3] = [0x14, 0x53, 0x2d];
pub const PENDING_BRIGHT: [u8; 3] = [0xea, 0xb3, 0x08];
pub const PENDING_DARK: [u8; 3] = [0x42, 0x20, 0x06];
pub const REJECTED_BRIGHT: [u8; 3] = [0xef, 0x44, 0x44];
pub const REJECTED_DARK: [u8; 3] = [0x7f, 0x1d, 0x1d];

/// Shell colours
pub const PANEL_BACKGROUND: [u8; 3] = [0x0f, 0x17, 0x2a];
pub const HEADER_BACKGROUND: [u8; 3] = [0x1e, 0x29, 0x3b];
pub const BUTTON_IDLE: [u8; 3] = [0x33, 0x41, 0x55];
pub const BUTTON_HOVER: [u8; 3] = [0x47, 0x55, 0x69];
pub const BUTTON_ACTIVE: [u8; 3] = [0x25, 0x63, 0xeb];
pub const TEXT_PRIMARY: [u8; 3] = [0xe2, 0xe8, 0xf0];
pub const TEXT_MUTED: [u8; 3] = [0x94, 0xa3, 0xb8];
pub const ACCENT: [u8; 3] = [0x3b, 0x82, 0xf6];
