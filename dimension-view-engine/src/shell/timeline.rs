use bevy::prelude::*;
use chrono::NaiveDate;

use constants::palette;
use constants::shell::{DAY_STRIP_HEIGHT, SMALL_FONT_SIZE};
use dimension_model::calendar::day_label;
use dimension_model::{LayoutConfig, ViewAction};

use super::style::{label, rgb};
use super::{ShellButton, ShellPanel};
use crate::engine::scene::SceneData;
use crate::engine::systems::view_actions::ViewStore;

/// Clipping viewport of the day strip. Its `Interaction` also tells the wheel
/// router that the pointer is over the strip.
#[derive(Component)]
pub struct DayStrip;

/// Row of day cells, shifted left by the horizontal scroll.
#[derive(Component)]
pub struct DayStripTrack;

#[derive(Component, Debug, Clone, Copy)]
pub struct DayCell {
    pub date: NaiveDate,
    pub offset: u32,
}

/// A day click toggles the date filter and scrolls that day to the left edge.
/// Clicking the active day clears the filter but still scrolls.
pub fn day_click_actions(layout: &LayoutConfig, cell: &DayCell) -> [ViewAction; 2] {
    [
        ViewAction::SetFilterDate(cell.date),
        ViewAction::SetScrollX(layout.scroll_x_for_day(cell.offset)),
    ]
}

pub fn spawn_day_strip(parent: &mut ChildSpawnerCommands, scene: &SceneData) {
    let cell_width = scene.layout.world_to_pixels(scene.layout.day_width);

    parent
        .spawn((
            Name::new("Day Strip"),
            DayStrip,
            ShellPanel,
            Interaction::default(),
            BackgroundColor(rgb(palette::HEADER_BACKGROUND)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(DAY_STRIP_HEIGHT),
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|strip| {
            strip
                .spawn((
                    DayStripTrack,
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(0.0),
                        height: Val::Percent(100.0),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Row,
                        ..default()
                    },
                ))
                .with_children(|track| {
                    for (offset, date) in (0u32..).zip(scene.dataset.days()) {
                        track
                            .spawn((
                                DayCell { date, offset },
                                Button,
                                ShellButton::default(),
                                BackgroundColor(rgb(palette::BUTTON_IDLE)),
                                BorderColor(rgb(palette::HEADER_BACKGROUND)),
                                Node {
                                    width: Val::Px(cell_width),
                                    height: Val::Percent(100.0),
                                    border: UiRect::right(Val::Px(1.0)),
                                    align_items: AlignItems::Center,
                                    justify_content: JustifyContent::Center,
                                    flex_shrink: 0.0,
                                    ..default()
                                },
                            ))
                            .with_children(|cell| {
                                cell.spawn(label(
                                    day_label(date),
                                    SMALL_FONT_SIZE,
                                    palette::TEXT_PRIMARY,
                                ));
                            });
                    }
                });
        });
}

pub fn reflect_day_strip(
    store: Res<ViewStore>,
    scene: Res<SceneData>,
    mut tracks: Query<&mut Node, With<DayStripTrack>>,
    mut cells: Query<(&DayCell, &mut ShellButton)>,
) {
    if !store.is_changed() {
        return;
    }
    let left = Val::Px(-scene.layout.world_to_pixels(store.state.scroll().x));
    for mut node in &mut tracks {
        if node.left != left {
            node.left = left;
        }
    }

    let filtered = store.state.filters().date;
    for (cell, mut button) in &mut cells {
        button.set_if_neq(ShellButton {
            active: filtered == Some(cell.date),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimension_model::ViewState;

    fn cell(day: u32) -> DayCell {
        DayCell {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            offset: day - 1,
        }
    }

    fn click(state: &ViewState, cell: &DayCell) -> ViewState {
        day_click_actions(&LayoutConfig::default(), cell)
            .iter()
            .fold(state.clone(), |state, action| state.apply(action))
    }

    #[test]
    fn clicking_a_day_filters_and_scrolls_to_it() {
        let fifth = cell(5);
        let state = click(&ViewState::default(), &fifth);
        assert_eq!(state.filters().date, Some(fifth.date));
        assert_eq!(state.scroll().x, 8.0);
    }

    #[test]
    fn clicking_the_active_day_clears_the_filter_but_still_scrolls() {
        let fifth = cell(5);
        let scrolled_away = click(&ViewState::default(), &fifth).set_scroll_x(30.0);

        let state = click(&scrolled_away, &fifth);
        assert_eq!(state.filters().date, None);
        assert_eq!(state.scroll().x, 8.0);
    }

    #[test]
    fn clicking_another_day_moves_the_filter() {
        let state = click(&click(&ViewState::default(), &cell(5)), &cell(9));
        assert_eq!(state.filters().date, Some(cell(9).date));
        assert_eq!(state.scroll().x, 16.0);
    }
}
