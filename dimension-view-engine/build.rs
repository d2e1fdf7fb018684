// build.rs
use std::{env, fs, path::PathBuf};

use constants::{camera, dataset, layout};

fn preset(values: ([f32; 3], [f32; 3], f32)) -> serde_json::Value {
    serde_json::json!({
        "position_offset": values.0,
        "target_offset": values.1,
        "zoom": values.2,
    })
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../constants/src");

    // Fallback used when assets/view_settings.json cannot be loaded.
    let defaults = serde_json::json!({
        "dataset": {
            "people": dataset::PEOPLE_COUNT,
            "groups": dataset::GROUP_COUNT,
            "files": dataset::FILE_COUNT,
            "days": layout::TOTAL_DAYS,
            "seed": dataset::DEFAULT_SEED,
            "start_date": null
        },
        "layout": {
            "day_width": layout::DAY_WIDTH,
            "group_height": layout::GROUP_HEIGHT,
            "priority_depth": layout::PRIORITY_DEPTH,
            "dim_opacity": layout::DIM_OPACITY,
            "pixels_per_unit": layout::PIXELS_PER_UNIT
        },
        "camera": {
            "transition_secs": camera::TRANSITION_SECS,
            "front": preset(camera::FRONT_PRESET),
            "top": preset(camera::TOP_PRESET),
            "side": preset(camera::SIDE_PRESET)
        }
    });

    let json_content = serde_json::to_string_pretty(&defaults).unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let json_path = out_dir.join("default_view_settings.json");
    fs::write(&json_path, &json_content)
        .expect("Failed to write default_view_settings.json to OUT_DIR");
}
