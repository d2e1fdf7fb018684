use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use constants::layout::HOVER_SCALE;
use dimension_model::ViewAction;
use dimension_model::picking::pick_nearest;

use crate::engine::camera::rig_camera::ViewCamera;
use crate::engine::scene::{Pickable, SceneTarget};
use crate::engine::systems::view_actions::ViewActionEvent;

/// Whether the pointer is over any shell node that tracks interaction.
pub fn pointer_over_shell(interactions: &Query<&Interaction>) -> bool {
    interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None)
}

fn cursor_ray(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<ViewCamera>>,
) -> Option<Ray3d> {
    let window = windows.single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, camera_transform) = cameras.single().ok()?;
    camera.viewport_to_world(camera_transform, cursor).ok()
}

fn nearest_target(
    ray: Ray3d,
    pickables: &Query<(Entity, &GlobalTransform, &Pickable)>,
) -> Option<(Entity, SceneTarget)> {
    let candidates = pickables.iter().map(|(entity, transform, pickable)| {
        ((entity, pickable.target), transform.translation(), pickable.size)
    });
    pick_nearest(ray.origin, ray.direction.as_vec3(), candidates).map(|(hit, _)| hit)
}

/// Left click dispatches the clicked target's action, or clears the selection
/// when nothing is hit.
pub fn pick_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<ViewCamera>>,
    interactions: Query<&Interaction>,
    pickables: Query<(Entity, &GlobalTransform, &Pickable)>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    if !buttons.just_pressed(MouseButton::Left) || pointer_over_shell(&interactions) {
        return;
    }
    let Some(ray) = cursor_ray(&windows, &cameras) else {
        return;
    };

    let action = match nearest_target(ray, &pickables) {
        Some((_, target)) => target.action(),
        None => ViewAction::SelectFile(None),
    };
    actions.write(ViewActionEvent(action));
}

/// Pointer hand over anything clickable in the scene.
pub fn hover_cursor(hovering: bool) -> SystemCursorIcon {
    if hovering {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    }
}

/// Scale up whatever is under the cursor and switch the window cursor to a
/// pointer while something is.
pub fn hover_feedback(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    window_entities: Query<Entity, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<ViewCamera>>,
    interactions: Query<&Interaction>,
    pickables: Query<(Entity, &GlobalTransform, &Pickable)>,
    mut transforms: Query<&mut Transform, With<Pickable>>,
    mut hovered: Local<Option<Entity>>,
) {
    let current = if pointer_over_shell(&interactions) {
        None
    } else {
        cursor_ray(&windows, &cameras)
            .and_then(|ray| nearest_target(ray, &pickables))
            .map(|(entity, _)| entity)
    };

    if current == *hovered {
        return;
    }
    if let Some(previous) = hovered.take() {
        if let Ok(mut transform) = transforms.get_mut(previous) {
            transform.scale = Vec3::ONE;
        }
    }
    if let Some(entity) = current {
        if let Ok(mut transform) = transforms.get_mut(entity) {
            transform.scale = Vec3::splat(HOVER_SCALE);
        }
    }
    if let Ok(window) = window_entities.single() {
        commands
            .entity(window)
            .insert(CursorIcon::from(hover_cursor(current.is_some())));
    }
    *hovered = current;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_points_only_while_hovering() {
        assert_eq!(hover_cursor(true), SystemCursorIcon::Pointer);
        assert_eq!(hover_cursor(false), SystemCursorIcon::Default);
        assert_eq!(
            CursorIcon::from(hover_cursor(true)),
            CursorIcon::System(SystemCursorIcon::Pointer)
        );
    }
}
