use bevy::prelude::*;

use constants::palette;
use constants::shell::{APP_TITLE, HEADER_HEIGHT, TITLE_FONT_SIZE};
use dimension_model::ViewMode;

use super::style::{button_label, button_node, label, rgb};
use super::{ShellButton, ShellPanel, filters};
use crate::engine::scene::SceneData;
use crate::engine::systems::view_actions::ViewStore;

#[derive(Component, Debug, Clone, Copy)]
pub struct ModeButton(pub ViewMode);

/// Spawn a `ShellButton` with a text child. `marker` goes on the button and
/// `text` is the label bundle.
pub fn spawn_text_button(
    parent: &mut ChildSpawnerCommands,
    marker: impl Bundle,
    text: impl Bundle,
) {
    parent
        .spawn((
            marker,
            Button,
            ShellButton::default(),
            BackgroundColor(rgb(palette::BUTTON_IDLE)),
            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
            button_node(),
        ))
        .with_children(|button| {
            button.spawn(text);
        });
}

pub fn spawn_header(parent: &mut ChildSpawnerCommands, scene: &SceneData) {
    parent
        .spawn((
            Name::new("Header"),
            ShellPanel,
            Interaction::default(),
            BackgroundColor(rgb(palette::HEADER_BACKGROUND)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(HEADER_HEIGHT),
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                column_gap: Val::Px(8.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|header| {
            header.spawn((
                label(APP_TITLE, TITLE_FONT_SIZE, palette::TEXT_PRIMARY),
                Node {
                    margin: UiRect::right(Val::Px(16.0)),
                    ..default()
                },
            ));

            for mode in ViewMode::ALL {
                spawn_text_button(header, ModeButton(mode), button_label(mode.label()));
            }

            header.spawn(Node {
                flex_grow: 1.0,
                ..default()
            });

            filters::spawn_filter_controls(header, scene);
        });
}

pub fn reflect_mode_buttons(
    store: Res<ViewStore>,
    mut buttons: Query<(&ModeButton, &mut ShellButton)>,
) {
    if !store.is_changed() {
        return;
    }
    let mode = store.state.view_mode();
    for (ModeButton(button_mode), mut button) in &mut buttons {
        button.set_if_neq(ShellButton {
            active: *button_mode == mode,
        });
    }
}
