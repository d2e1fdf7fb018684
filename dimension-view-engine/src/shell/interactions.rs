use bevy::prelude::*;

use dimension_model::ViewAction;

use super::ShellButton;
use super::detail_panel::CloseDetailButton;
use super::filters::{ClearFiltersButton, FilterSelector, cycle_action};
use super::header::ModeButton;
use super::sidebar::GroupRow;
use super::style::button_colour;
use super::timeline::{DayCell, day_click_actions};
use crate::engine::scene::SceneData;
use crate::engine::systems::view_actions::{ViewActionEvent, ViewStore};

// Repaints a button when the pointer moves over it or its highlight flips
pub fn paint_shell_buttons(
    mut q: Query<
        (&Interaction, &ShellButton, &mut BackgroundColor),
        Or<(Changed<Interaction>, Changed<ShellButton>)>,
    >,
) {
    for (interaction, button, mut bg) in &mut q {
        *bg = BackgroundColor(button_colour(button.active, *interaction));
    }
}

// Mode buttons switch the camera preset
pub fn mode_button_clicks(
    q: Query<(&Interaction, &ModeButton), (Changed<Interaction>, With<Button>)>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    for (interaction, ModeButton(mode)) in &q {
        if *interaction == Interaction::Pressed {
            actions.write(ViewActionEvent(ViewAction::SetViewMode(*mode)));
        }
    }
}

pub fn clear_filters_clicks(
    q: Query<&Interaction, (Changed<Interaction>, With<Button>, With<ClearFiltersButton>)>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    for interaction in &q {
        if *interaction == Interaction::Pressed {
            actions.write(ViewActionEvent(ViewAction::ClearFilters));
        }
    }
}

// Selectors step through All then each value in turn
pub fn selector_clicks(
    q: Query<(&Interaction, &FilterSelector), (Changed<Interaction>, With<Button>)>,
    store: Res<ViewStore>,
    scene: Res<SceneData>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    for (interaction, FilterSelector(kind)) in &q {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if let Some(action) = cycle_action(*kind, &scene.dataset, store.state.filters()) {
            actions.write(ViewActionEvent(action));
        }
    }
}

pub fn close_detail_clicks(
    q: Query<&Interaction, (Changed<Interaction>, With<Button>, With<CloseDetailButton>)>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    for interaction in &q {
        if *interaction == Interaction::Pressed {
            actions.write(ViewActionEvent(ViewAction::SelectFile(None)));
        }
    }
}

// Day cells filter by date and scroll the camera to that day
pub fn day_cell_clicks(
    q: Query<(&Interaction, &DayCell), (Changed<Interaction>, With<Button>)>,
    scene: Res<SceneData>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    for (interaction, cell) in &q {
        if *interaction != Interaction::Pressed {
            continue;
        }
        actions.write_batch(day_click_actions(&scene.layout, cell).map(ViewActionEvent));
    }
}

pub fn group_row_clicks(
    q: Query<(&Interaction, &GroupRow), (Changed<Interaction>, With<Button>)>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    for (interaction, GroupRow(group)) in &q {
        if *interaction == Interaction::Pressed {
            actions.write(ViewActionEvent(ViewAction::SetFilterGroup(*group)));
        }
    }
}
