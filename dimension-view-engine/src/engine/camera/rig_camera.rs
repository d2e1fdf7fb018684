use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::camera::{BASE_FOV, VERTICAL_PAN_ZONE, WHEEL_LINE_PIXELS};
use dimension_model::input::{WheelRoute, apply_wheel_zoom, field_of_view, route_wheel};
use dimension_model::{
    CameraPose, CameraRig, LayoutConfig, RigConfig, ScrollOffsets, ViewAction, ViewMode,
};

use crate::engine::scene::SceneData;
use crate::engine::systems::view_actions::{ViewActionEvent, ViewStore};
use crate::shell::timeline::{DayCell, DayStrip};

#[derive(Resource, Debug, Clone)]
pub struct RigCamera {
    pub rig: CameraRig,
    /// Wheel zoom factor, multiplied into the rig's zoom.
    pub user_zoom: f32,
}

impl RigCamera {
    pub fn new(config: RigConfig) -> Self {
        Self {
            rig: CameraRig::new(config, ViewMode::default(), ScrollOffsets::default()),
            user_zoom: 1.0,
        }
    }
}

#[derive(Component)]
pub struct ViewCamera;

pub fn camera_transform(pose: &CameraPose) -> Transform {
    Transform::from_translation(pose.position).looking_at(pose.target, Vec3::Y)
}

pub fn spawn_view_camera(commands: &mut Commands, rig: &RigCamera) {
    let pose = rig.rig.pose();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: field_of_view(BASE_FOV, pose.zoom, rig.user_zoom),
            ..default()
        }),
        camera_transform(&pose),
        ViewCamera,
    ));
}

/// Advance the rig one frame and copy its pose onto the camera.
pub fn drive_camera_rig(
    time: Res<Time>,
    store: Res<ViewStore>,
    mut rig: ResMut<RigCamera>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<ViewCamera>>,
) {
    let state = &store.state;
    let pose = rig
        .rig
        .advance(state.view_mode(), state.scroll(), time.delta_secs());

    let Ok((mut transform, mut projection)) = cameras.single_mut() else {
        return;
    };
    *transform = camera_transform(&pose);
    if let Projection::Perspective(perspective) = projection.as_mut() {
        perspective.fov = field_of_view(BASE_FOV, pose.zoom, rig.user_zoom);
    }
}

/// Wheel over the day strip moves through time. Rolling up goes back to
/// earlier days.
pub fn strip_wheel_action(layout: &LayoutConfig, lines: f32) -> ViewAction {
    ViewAction::ScrollBy {
        dx: -layout.pixels_to_world(lines * WHEEL_LINE_PIXELS),
        dy: 0.0,
    }
}

/// Wheel in the pan zone moves through groups.
pub fn pan_wheel_action(layout: &LayoutConfig, lines: f32) -> ViewAction {
    ViewAction::ScrollBy {
        dx: 0.0,
        dy: layout.pixels_to_world(lines * WHEEL_LINE_PIXELS),
    }
}

/// Wheel over the day strip scrolls time, over the left third pans through
/// groups, anywhere else zooms.
pub fn route_mouse_wheel(
    mut wheel: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    // Day cells block focus, so the strip itself is not hovered over a cell.
    strips: Query<&Interaction, Or<(With<DayStrip>, With<DayCell>)>>,
    scene: Res<SceneData>,
    mut rig: ResMut<RigCamera>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    let lines: f32 = wheel
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / WHEEL_LINE_PIXELS,
        })
        .sum();
    if lines.abs() <= f32::EPSILON {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if strips.iter().any(|interaction| *interaction != Interaction::None) {
        actions.write(ViewActionEvent(strip_wheel_action(&scene.layout, lines)));
        return;
    }

    match route_wheel(cursor.x, window.width(), VERTICAL_PAN_ZONE) {
        WheelRoute::VerticalPan => {
            actions.write(ViewActionEvent(pan_wheel_action(&scene.layout, lines)));
        }
        WheelRoute::Zoom => {
            rig.user_zoom = apply_wheel_zoom(rig.user_zoom, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimension_model::ViewState;

    #[test]
    fn front_pose_looks_down_negative_z() {
        let rig = RigCamera::new(RigConfig::default());
        let transform = camera_transform(&rig.rig.pose());
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, 30.0));
        assert!(transform.forward().dot(Vec3::NEG_Z) > 0.999);
    }

    #[test]
    fn new_rig_starts_without_user_zoom() {
        let rig = RigCamera::new(RigConfig::default());
        assert_eq!(rig.user_zoom, 1.0);
        assert_eq!(rig.rig.mode(), ViewMode::Front);
    }

    #[test]
    fn wheel_up_over_the_strip_scrolls_back_in_time() {
        let layout = LayoutConfig::default();
        assert_eq!(
            strip_wheel_action(&layout, 1.0),
            ViewAction::ScrollBy { dx: -0.8, dy: 0.0 }
        );
        assert_eq!(
            strip_wheel_action(&layout, -2.5),
            ViewAction::ScrollBy { dx: 2.0, dy: 0.0 }
        );

        let state = ViewState::default()
            .set_scroll_x(10.0)
            .apply(&strip_wheel_action(&layout, 5.0));
        assert_eq!(state.scroll(), ScrollOffsets::new(6.0, 0.0));
    }

    #[test]
    fn wheel_in_the_pan_zone_only_moves_groups() {
        let layout = LayoutConfig::default();
        assert_eq!(
            pan_wheel_action(&layout, 1.0),
            ViewAction::ScrollBy { dx: 0.0, dy: 0.8 }
        );
    }
}
