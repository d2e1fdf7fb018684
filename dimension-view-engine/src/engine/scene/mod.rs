//! Scene composition for the file graph.
//!
//! Spawns one pill per file at its layout position, the group, priority and
//! day markers around the grid, lighting and the view camera. Every clickable
//! entity carries a [`Pickable`] box so the picking tool can map a cursor ray
//! back to a [`SceneTarget`] and from there to a `ViewAction`.
//!
//! ## Axes
//!
//! ```text
//!   X  time      day offset × day_width
//!   Y  group     −layout_index × group_height
//!   Z  priority  −rank × priority_depth
//! ```

/// File pills and per-file opacity sync.
pub mod file_nodes;

/// Group, priority and day markers with projected priority labels.
pub mod markers;

use bevy::prelude::*;
use chrono::NaiveDate;

use dimension_model::{
    Dataset, DatasetError, FileId, GroupId, LayoutConfig, Priority, SceneExtents, ViewAction,
};

use crate::engine::camera::rig_camera::{RigCamera, spawn_view_camera};
use crate::engine::core::settings::ViewSettings;

/// Dataset and layout shared by every runtime system.
#[derive(Resource, Debug, Clone)]
pub struct SceneData {
    pub dataset: Dataset,
    pub layout: LayoutConfig,
}

impl SceneData {
    pub fn build(settings: &ViewSettings) -> Result<Self, DatasetError> {
        Ok(Self {
            dataset: Dataset::generate(&settings.dataset)?,
            layout: settings.layout,
        })
    }

    pub fn extents(&self) -> SceneExtents {
        self.layout.extents(&self.dataset)
    }
}

/// What a pickable entity stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneTarget {
    File(FileId),
    Group(GroupId),
    Priority(Priority),
    Day(NaiveDate),
}

impl SceneTarget {
    /// Action dispatched when the target is clicked.
    pub fn action(self) -> ViewAction {
        match self {
            Self::File(id) => ViewAction::SelectFile(Some(id)),
            Self::Group(id) => ViewAction::SetFilterGroup(id),
            Self::Priority(priority) => ViewAction::SetFilterPriority(priority),
            Self::Day(date) => ViewAction::SetFilterDate(date),
        }
    }
}

/// Axis-aligned hit box centred on the entity's translation.
#[derive(Component, Debug, Clone, Copy)]
pub struct Pickable {
    pub target: SceneTarget,
    pub size: Vec3,
}

pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<SceneData>,
    rig: Res<RigCamera>,
) {
    println!("=== DIMENSIONVIEW SCENE ===");
    println!(
        "  {} files, {} groups, {} people from {}",
        scene.dataset.files().len(),
        scene.dataset.groups().len(),
        scene.dataset.people().len(),
        scene.dataset.start_date()
    );

    spawn_lighting(&mut commands);
    spawn_view_camera(&mut commands, &rig);
    file_nodes::spawn_file_nodes(&mut commands, &mut meshes, &mut materials, &scene);
    markers::spawn_markers(&mut commands, &mut meshes, &mut materials, &scene);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            -0.6,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 600.0,
        ..default()
    });
}
