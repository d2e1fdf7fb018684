use bevy::prelude::*;

use constants::palette;
use constants::shell::{SIDEBAR_WIDTH, SMALL_FONT_SIZE};
use dimension_model::GroupId;

use super::style::{label, rgb};
use super::{ShellButton, ShellPanel};
use crate::engine::scene::SceneData;
use crate::engine::systems::view_actions::ViewStore;

/// Column of group rows, shifted by the vertical scroll.
#[derive(Component)]
pub struct SidebarTrack;

#[derive(Component, Debug, Clone, Copy)]
pub struct GroupRow(pub GroupId);

/// Sidebar top offset for a vertical scroll. Scrolling down is negative world
/// Y, which moves the rows up.
pub fn sidebar_offset(scene: &SceneData, scroll_y: f32) -> f32 {
    scene.layout.world_to_pixels(scroll_y)
}

pub fn spawn_sidebar(parent: &mut ChildSpawnerCommands, scene: &SceneData) {
    let row_height = scene.layout.world_to_pixels(scene.layout.group_height);

    parent
        .spawn((
            Name::new("Group Sidebar"),
            ShellPanel,
            Interaction::default(),
            BackgroundColor(rgb(palette::PANEL_BACKGROUND).with_alpha(0.85)),
            Node {
                width: Val::Px(SIDEBAR_WIDTH),
                height: Val::Percent(100.0),
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|sidebar| {
            sidebar
                .spawn((
                    SidebarTrack,
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(0.0),
                        width: Val::Percent(100.0),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        ..default()
                    },
                ))
                .with_children(|track| {
                    for group in scene.dataset.groups() {
                        track
                            .spawn((
                                GroupRow(group.id),
                                Button,
                                ShellButton::default(),
                                BackgroundColor(rgb(palette::BUTTON_IDLE)),
                                BorderColor(rgb(palette::PANEL_BACKGROUND)),
                                Node {
                                    width: Val::Percent(100.0),
                                    height: Val::Px(row_height),
                                    padding: UiRect::horizontal(Val::Px(10.0)),
                                    border: UiRect::bottom(Val::Px(1.0)),
                                    align_items: AlignItems::Center,
                                    flex_shrink: 0.0,
                                    ..default()
                                },
                            ))
                            .with_children(|row| {
                                row.spawn(label(
                                    group.name.clone(),
                                    SMALL_FONT_SIZE,
                                    palette::TEXT_PRIMARY,
                                ));
                            });
                    }
                });
        });
}

pub fn reflect_sidebar(
    store: Res<ViewStore>,
    scene: Res<SceneData>,
    mut tracks: Query<&mut Node, With<SidebarTrack>>,
    mut rows: Query<(&GroupRow, &mut ShellButton)>,
) {
    if !store.is_changed() {
        return;
    }
    let top = Val::Px(sidebar_offset(&scene, store.state.scroll().y));
    for mut node in &mut tracks {
        if node.top != top {
            node.top = top;
        }
    }

    let filtered = store.state.filters().group;
    for (GroupRow(group), mut button) in &mut rows {
        button.set_if_neq(ShellButton {
            active: filtered == Some(*group),
        });
    }
}
