//! Presentation shell drawn with `bevy_ui` on top of the scene.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────── header ─────────────────────────────┐
//! │ title │ Front Top Side │ Group ▸ Priority ▸ Date ▸ │ Clear      │
//! ├──────────┬───────────────────────────────────────┬──────────────┤
//! │ group    │                                       │ detail panel │
//! │ sidebar  │              3D scene                 │              │
//! ├──────────┴───────────────────────────────────────┴──────────────┤
//! │ day strip: Jun 01 │ Jun 02 │ ...                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Panels carry an `Interaction` so the picking tool can tell when the
//! pointer is over the shell. Every button writes a `ViewActionEvent`; none
//! of them touch `ViewStore` directly. Reflection systems read the store after
//! the reducer and update highlights, labels and scroll offsets.

/// Selected file details with a close button, or a prompt.
pub mod detail_panel;

/// Cycling group, priority and date selectors plus the clear button.
pub mod filters;

/// Title bar and view mode buttons.
pub mod header;

/// Button click handlers and shared button painting.
pub mod interactions;

/// Group names scrolled with the vertical offset.
pub mod sidebar;

/// Colours and node presets shared by the panels.
pub mod style;

/// Day strip scrolled with the horizontal offset.
pub mod timeline;

use bevy::prelude::*;

use crate::engine::core::app_state::{AppState, FrameSet};
use crate::engine::scene::SceneData;

/// Marks a panel whose `Interaction` shields the scene from clicks.
#[derive(Component)]
pub struct ShellPanel;

/// Highlight state of a shell button; painted by `paint_shell_buttons`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ShellButton {
    pub active: bool,
}

pub struct ShellPlugin;

impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), spawn_shell)
            .add_systems(
                Update,
                (
                    interactions::mode_button_clicks,
                    interactions::clear_filters_clicks,
                    interactions::selector_clicks,
                    interactions::close_detail_clicks,
                    interactions::day_cell_clicks,
                    interactions::group_row_clicks,
                )
                    .in_set(FrameSet::Input)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(
                Update,
                (
                    (
                        header::reflect_mode_buttons,
                        filters::reflect_filter_controls,
                        detail_panel::reflect_detail_panel,
                        timeline::reflect_day_strip,
                        sidebar::reflect_sidebar,
                    ),
                    interactions::paint_shell_buttons,
                )
                    .chain()
                    .in_set(FrameSet::Reflect)
                    .run_if(in_state(AppState::Running)),
            );
    }
}

fn spawn_shell(mut commands: Commands, scene: Res<SceneData>) {
    commands
        .spawn((
            Name::new("Shell"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|root| {
            header::spawn_header(root, &scene);

            root.spawn((
                Name::new("Body"),
                Node {
                    width: Val::Percent(100.0),
                    flex_grow: 1.0,
                    min_height: Val::Px(0.0),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                },
            ))
            .with_children(|body| {
                sidebar::spawn_sidebar(body, &scene);
                detail_panel::spawn_detail_panel(body);
            });

            timeline::spawn_day_strip(root, &scene);
        });

    #[cfg(not(target_arch = "wasm32"))]
    {
        spawn_fps_overlay(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_fps_overlay(commands: &mut Commands) {
    use crate::engine::core::app_state::FpsText;
    use constants::shell::{DAY_STRIP_HEIGHT, SMALL_FONT_SIZE};

    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: SMALL_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(DAY_STRIP_HEIGHT + 8.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}
