use bevy::color::Alpha;
use bevy::prelude::*;

use constants::layout::{PILL_LENGTH, PILL_RADIUS};
use dimension_model::FileId;

use super::{Pickable, SceneData, SceneTarget};
use crate::engine::systems::view_actions::ViewStore;

#[derive(Component, Debug, Clone, Copy)]
pub struct FileVisual {
    pub id: FileId,
}

/// Hit box of a pill lying along X.
pub fn pill_size() -> Vec3 {
    let diameter = PILL_RADIUS * 2.0;
    Vec3::new(PILL_LENGTH + diameter, diameter, diameter)
}

// Each file owns its material so opacity can change per file.
pub fn spawn_file_nodes(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    scene: &SceneData,
) {
    let pill = meshes.add(Capsule3d::new(PILL_RADIUS, PILL_LENGTH));
    let lying = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);

    for file in scene.dataset.files() {
        let [r, g, b] = file.colour();
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb_u8(r, g, b),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.6,
            ..default()
        });

        let position = scene.layout.file_position(&scene.dataset, file);
        commands.spawn((
            Name::new(file.name.clone()),
            Mesh3d(pill.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(position).with_rotation(lying),
            FileVisual { id: file.id },
            Pickable {
                target: SceneTarget::File(file.id),
                size: pill_size(),
            },
        ));
    }
}

/// Push the opacity of every file into its material when the view changes.
pub fn sync_file_opacity(
    store: Res<ViewStore>,
    scene: Res<SceneData>,
    nodes: Query<(&FileVisual, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !store.is_changed() {
        return;
    }

    for (visual, material) in &nodes {
        let Some(file) = scene.dataset.file(visual.id) else {
            continue;
        };
        let opacity = scene.layout.file_opacity(&store.state, file);
        if let Some(material) = materials.get_mut(&material.0) {
            if material.base_color.alpha() != opacity {
                material.base_color.set_alpha(opacity);
            }
        }
    }
}
