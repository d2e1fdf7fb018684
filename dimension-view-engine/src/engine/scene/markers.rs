use bevy::prelude::*;

use constants::palette;
use constants::shell::SMALL_FONT_SIZE;
use dimension_model::Priority;

use super::{Pickable, SceneData, SceneTarget};
use crate::engine::camera::rig_camera::ViewCamera;
use crate::shell::style::rgb;

const GROUP_MARKER_SIZE: f32 = 0.6;
const PRIORITY_MARKER_RADIUS: f32 = 0.4;
const DAY_TICK_SIZE: Vec3 = Vec3::new(0.15, 0.6, 0.15);

/// Screen-space label that follows a world point.
#[derive(Component, Debug, Clone, Copy)]
pub struct MarkerLabel {
    pub anchor: Vec3,
}

pub fn priority_caption(priority: Priority) -> String {
    format!("{} {}", priority.as_str().to_uppercase(), priority.label())
}

pub fn spawn_markers(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    scene: &SceneData,
) {
    let layout = &scene.layout;

    let cube = meshes.add(Cuboid::from_length(GROUP_MARKER_SIZE));
    let group_material = materials.add(StandardMaterial {
        base_color: rgb(palette::ACCENT),
        unlit: true,
        ..default()
    });
    for group in scene.dataset.groups() {
        commands.spawn((
            Name::new(group.name.clone()),
            Mesh3d(cube.clone()),
            MeshMaterial3d(group_material.clone()),
            Transform::from_translation(layout.group_marker_position(group.layout_index)),
            Pickable {
                target: SceneTarget::Group(group.id),
                size: Vec3::splat(GROUP_MARKER_SIZE),
            },
        ));
    }

    let sphere = meshes.add(Sphere::new(PRIORITY_MARKER_RADIUS));
    let priority_material = materials.add(StandardMaterial {
        base_color: rgb(palette::TEXT_MUTED),
        unlit: true,
        ..default()
    });
    for priority in Priority::ALL {
        let position = layout.priority_marker_position(priority);
        commands.spawn((
            Name::new(priority_caption(priority)),
            Mesh3d(sphere.clone()),
            MeshMaterial3d(priority_material.clone()),
            Transform::from_translation(position),
            Pickable {
                target: SceneTarget::Priority(priority),
                size: Vec3::splat(PRIORITY_MARKER_RADIUS * 2.0),
            },
        ));
        commands.spawn((
            Text::new(priority_caption(priority)),
            TextFont {
                font_size: SMALL_FONT_SIZE,
                ..default()
            },
            TextColor(rgb(palette::TEXT_PRIMARY)),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            MarkerLabel {
                anchor: position + Vec3::new(0.6, 0.0, 0.0),
            },
        ));
    }

    let tick = meshes.add(Cuboid::from_size(DAY_TICK_SIZE));
    let tick_material = materials.add(StandardMaterial {
        base_color: rgb(palette::BUTTON_HOVER),
        unlit: true,
        ..default()
    });
    for (offset, date) in scene.dataset.days().enumerate() {
        commands.spawn((
            Mesh3d(tick.clone()),
            MeshMaterial3d(tick_material.clone()),
            Transform::from_translation(layout.day_tick_position(offset as u32)),
            Pickable {
                target: SceneTarget::Day(date),
                // Wider than the mesh so the thin tick is easy to hit.
                size: Vec3::new(0.6, 0.8, 0.6),
            },
        ));
    }
}

/// Project every marker label onto the viewport, hiding the ones off screen.
pub fn update_marker_labels(
    cameras: Query<(&Camera, &GlobalTransform), With<ViewCamera>>,
    mut labels: Query<(&MarkerLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (label, mut node, mut visibility) in &mut labels {
        match camera.world_to_viewport(camera_transform, label.anchor) {
            Ok(screen) => {
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                visibility.set_if_neq(Visibility::Inherited);
            }
            Err(_) => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_caption_combines_name_and_label() {
        assert_eq!(priority_caption(Priority::P1), "P1 Critical");
        assert_eq!(priority_caption(Priority::P9), "P9 Trivial");
    }
}
