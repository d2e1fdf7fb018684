use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::camera::rig_camera::RigCamera;
use crate::engine::core::settings::{SETTINGS_PATH, ViewSettings, embedded_settings};
use crate::engine::scene::SceneData;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    Failed,
}

/// Per-frame ordering once the scene is running: input emits actions, the
/// reducer folds them into the view state, the camera follows, and finally
/// the scene and shell reflect the new state.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Reduce,
    Camera,
    Reflect,
}

#[derive(Component)]
pub struct FpsText;

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<ViewSettings>>,
}

// Start the loading process
pub fn start_loading(mut loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    println!("Loading settings from: {}", SETTINGS_PATH);
    loader.handle = Some(asset_server.load(SETTINGS_PATH));
}

/// Wait for the settings asset, fall back to the embedded defaults if it
/// fails, then build the dataset and move to `Running`.
pub fn load_settings_system(
    loader: Res<SettingsLoader>,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<ViewSettings>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    let settings = if let Some(settings) = settings_assets.get(handle) {
        println!("✓ Settings loaded successfully");
        settings.clone()
    } else if matches!(asset_server.load_state(handle.id()), LoadState::Failed(_)) {
        warn!("Could not load {}, using built-in defaults", SETTINGS_PATH);
        match embedded_settings() {
            Ok(settings) => settings,
            Err(err) => {
                error!("Built-in settings are invalid: {}", err);
                next_state.set(AppState::Failed);
                return;
            }
        }
    } else {
        return;
    };

    match SceneData::build(&settings) {
        Ok(scene) => {
            commands.insert_resource(RigCamera::new(settings.camera));
            commands.insert_resource(scene);
            println!("→ Transitioning to Running state");
            next_state.set(AppState::Running);
        }
        Err(err) => {
            error!("Dataset generation failed: {}", err);
            next_state.set(AppState::Failed);
        }
    }
}

pub fn show_failure(mut commands: Commands) {
    commands.spawn(Camera2d);
    commands.spawn((
        Text::new("DimensionView failed to start, see the log for details."),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.4, 0.4)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(24.0),
            left: Val::Px(24.0),
            ..default()
        },
    ));
}
