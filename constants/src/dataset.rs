/// Size of the generated synthetic dataset
pub const PEOPLE_COUNT: usize = 8;
pub const GROUP_COUNT: usize = 20;
pub const FILE_COUNT: usize = 100;

/// Seed used when the settings file does not provide one
pub const DEFAULT_SEED: u64 = 0x00D1_3E45_1011;

/// First invoice number, file `i` is named `Invoice #{FIRST_INVOICE_NUMBER + i}`
pub const FIRST_INVOICE_NUMBER: usize = 1000;

pub const PERSON_NAMES: &[&str] = &[
    "Abbey", "Beth", "Chris", "Dave", "Eve", "Frank", "Grace", "Hank",
];

pub const GROUP_SUFFIXES: &[&str] = &["Alpha", "Beta", "Gamma", "Delta"];

/// Hue step between consecutive people, in degrees
pub const PERSON_HUE_STEP: f32 = 45.0;
