use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::palette;
// Crate engine modules
use crate::engine::camera::rig_camera::{drive_camera_rig, route_mouse_wheel};
use crate::engine::core::app_state::{
    AppState, FrameSet, SettingsLoader, load_settings_system, show_failure, start_loading,
};
use crate::engine::core::settings::ViewSettings;
use crate::engine::core::window_config::create_window_config;
use crate::engine::scene::file_nodes::sync_file_opacity;
use crate::engine::scene::markers::update_marker_labels;
use crate::engine::scene::spawn_scene;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::view_actions::{ViewActionEvent, ViewStore, apply_view_actions};
// Crate tools modules
use crate::tools::picking::{hover_feedback, pick_on_click};
use crate::tools::shortcuts::handle_view_shortcuts;
// Shell and Web RPC
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::shell::ShellPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ViewSettings as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewSettings>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(ShellPlugin);

    // Initialise resources early
    app.init_resource::<SettingsLoader>()
        .init_resource::<ViewStore>()
        .insert_resource(ClearColor(Color::srgb_u8(
            palette::PANEL_BACKGROUND[0],
            palette::PANEL_BACKGROUND[1],
            palette::PANEL_BACKGROUND[2],
        )))
        .add_event::<ViewActionEvent>();

    app.configure_sets(
        Update,
        (
            FrameSet::Input,
            FrameSet::Reduce,
            FrameSet::Camera,
            FrameSet::Reflect,
        )
            .chain(),
    );

    // State-based system scheduling
    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            load_settings_system.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), spawn_scene)
        .add_systems(OnEnter(AppState::Failed), show_failure);

    // Runtime systems - only run once the scene exists
    app.add_systems(
        Update,
        (
            // Input emits ViewActionEvents only
            (pick_on_click, route_mouse_wheel, handle_view_shortcuts).in_set(FrameSet::Input),
            apply_view_actions.in_set(FrameSet::Reduce),
            drive_camera_rig.in_set(FrameSet::Camera),
            (
                sync_file_opacity,
                hover_feedback,
                update_marker_labels,
                fps_notification_system,
            )
                .in_set(FrameSet::Reflect),
        )
            .run_if(in_state(AppState::Running)),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
