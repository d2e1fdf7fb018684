use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use dimension_model::{DatasetConfig, LayoutConfig, RigConfig};

/// Asset path of the settings file, relative to `assets/`.
pub const SETTINGS_PATH: &str = "view_settings.json";

/// Defaults generated by `build.rs` from the `constants` crate.
const EMBEDDED_SETTINGS: &str =
    include_str!(concat!(env!("OUT_DIR"), "/default_view_settings.json"));

/// Dataset shape, layout spacing and camera presets, loaded from JSON.
///
/// Every section is optional in the file; missing fields fall back to the
/// values in `constants`.
#[derive(Asset, TypePath, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub dataset: DatasetConfig,
    pub layout: LayoutConfig,
    pub camera: RigConfig,
}

/// Settings compiled into the binary, used when the asset cannot be loaded.
pub fn embedded_settings() -> Result<ViewSettings, serde_json::Error> {
    serde_json::from_str(EMBEDDED_SETTINGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_constants() {
        assert_eq!(embedded_settings().unwrap(), ViewSettings::default());
    }

    #[test]
    fn shipped_asset_matches_defaults() {
        let shipped: ViewSettings =
            serde_json::from_str(include_str!("../../../assets/view_settings.json")).unwrap();
        assert_eq!(shipped, ViewSettings::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let settings: ViewSettings = serde_json::from_str(
            r#"{ "dataset": { "files": 12, "start_date": "2024-06-01" }, "camera": { "transition_secs": 0.25 } }"#,
        )
        .unwrap();
        assert_eq!(settings.dataset.files, 12);
        assert_eq!(settings.dataset.groups, DatasetConfig::default().groups);
        assert_eq!(
            settings.dataset.start_date,
            chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(settings.camera.transition_secs, 0.25);
        assert_eq!(settings.camera.top, RigConfig::default().top);
        assert_eq!(settings.layout, LayoutConfig::default());
    }
}
