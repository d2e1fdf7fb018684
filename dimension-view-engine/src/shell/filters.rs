use bevy::prelude::*;

use dimension_model::calendar::day_label;
use dimension_model::{Dataset, FilterState, Priority, ViewAction};

use super::ShellButton;
use super::header::spawn_text_button;
use super::style::button_label;
use crate::engine::scene::SceneData;
use crate::engine::scene::markers::priority_caption;
use crate::engine::systems::view_actions::ViewStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Group,
    Priority,
    Date,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [Self::Group, Self::Priority, Self::Date];

    fn title(self) -> &'static str {
        match self {
            Self::Group => "Group",
            Self::Priority => "Priority",
            Self::Date => "Date",
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct FilterSelector(pub FilterKind);

#[derive(Component, Debug, Clone, Copy)]
pub struct SelectorLabel(pub FilterKind);

#[derive(Component)]
pub struct ClearFiltersButton;

/// Next entry when cycling `All → options… → All`. `None` stands for "All".
pub fn next_option<T: Copy + PartialEq>(options: &[T], current: Option<T>) -> Option<T> {
    match current.and_then(|value| options.iter().position(|option| *option == value)) {
        None => options.first().copied(),
        Some(index) => options.get(index + 1).copied(),
    }
}

/// Filter actions toggle, so going back to "All" re-sends the current value.
fn step_action<T: Copy>(
    current: Option<T>,
    next: Option<T>,
    action: fn(T) -> ViewAction,
) -> Option<ViewAction> {
    match (next, current) {
        (Some(value), _) | (None, Some(value)) => Some(action(value)),
        (None, None) => None,
    }
}

/// Action that advances the `kind` selector by one entry.
pub fn cycle_action(
    kind: FilterKind,
    dataset: &Dataset,
    filters: &FilterState,
) -> Option<ViewAction> {
    match kind {
        FilterKind::Group => {
            let groups: Vec<_> = dataset.groups().iter().map(|group| group.id).collect();
            step_action(
                filters.group,
                next_option(&groups, filters.group),
                ViewAction::SetFilterGroup,
            )
        }
        FilterKind::Priority => step_action(
            filters.priority,
            next_option(&Priority::ALL, filters.priority),
            ViewAction::SetFilterPriority,
        ),
        FilterKind::Date => {
            let days: Vec<_> = dataset.days().collect();
            step_action(
                filters.date,
                next_option(&days, filters.date),
                ViewAction::SetFilterDate,
            )
        }
    }
}

pub fn selector_label(kind: FilterKind, dataset: &Dataset, filters: &FilterState) -> String {
    let value = match kind {
        FilterKind::Group => filters
            .group
            .and_then(|id| dataset.group(id))
            .map(|group| group.name.clone()),
        FilterKind::Priority => filters.priority.map(priority_caption),
        FilterKind::Date => filters.date.map(day_label),
    };
    format!("{}: {}", kind.title(), value.as_deref().unwrap_or("All"))
}

pub fn spawn_filter_controls(parent: &mut ChildSpawnerCommands, scene: &SceneData) {
    let filters = FilterState::default();
    for kind in FilterKind::ALL {
        spawn_text_button(
            parent,
            FilterSelector(kind),
            (
                button_label(selector_label(kind, &scene.dataset, &filters)),
                SelectorLabel(kind),
            ),
        );
    }

    spawn_text_button(parent, ClearFiltersButton, button_label("Clear filters"));
}

pub fn reflect_filter_controls(
    store: Res<ViewStore>,
    scene: Res<SceneData>,
    mut selectors: Query<(&FilterSelector, &mut ShellButton)>,
    mut clear: Query<&mut ShellButton, (With<ClearFiltersButton>, Without<FilterSelector>)>,
    mut labels: Query<(&SelectorLabel, &mut Text)>,
) {
    if !store.is_changed() {
        return;
    }
    let filters = store.state.filters();

    for (FilterSelector(kind), mut button) in &mut selectors {
        let active = match kind {
            FilterKind::Group => filters.group.is_some(),
            FilterKind::Priority => filters.priority.is_some(),
            FilterKind::Date => filters.date.is_some(),
        };
        button.set_if_neq(ShellButton { active });
    }
    for mut button in &mut clear {
        button.set_if_neq(ShellButton {
            active: !filters.is_empty(),
        });
    }
    for (SelectorLabel(kind), mut text) in &mut labels {
        let label = selector_label(*kind, &scene.dataset, filters);
        if text.0 != label {
            text.0 = label;
        }
    }
}
