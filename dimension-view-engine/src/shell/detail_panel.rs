use bevy::prelude::*;
use serde::Serialize;

use constants::palette;
use constants::shell::{DETAIL_PANEL_WIDTH, LABEL_FONT_SIZE, SMALL_FONT_SIZE, TITLE_FONT_SIZE};
use dimension_model::calendar::timestamp_label;
use dimension_model::{Dataset, FileId, FileNode, Priority};

use super::ShellPanel;
use super::header::spawn_text_button;
use super::style::{button_label, label, person_colour, rgb};
use crate::engine::scene::SceneData;
use crate::engine::scene::markers::priority_caption;
use crate::engine::systems::view_actions::ViewStore;

/// Field list, shown while a file is selected.
#[derive(Component)]
pub struct DetailBody;

/// Hint shown while nothing is selected.
#[derive(Component)]
pub struct DetailPrompt;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Name,
    Action,
    Priority,
    Timestamp,
    Owner,
    Group,
}

#[derive(Component)]
pub struct CloseDetailButton;

/// Display strings for one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDetails {
    pub id: FileId,
    pub name: String,
    pub action: String,
    pub priority: String,
    pub timestamp: String,
    pub owner: String,
    pub owner_initials: String,
    pub owner_hue: f32,
    pub group: String,
    #[serde(skip)]
    pub action_colour: [u8; 3],
}

impl FileDetails {
    fn field(&self, field: DetailField) -> String {
        match field {
            DetailField::Name => self.name.clone(),
            DetailField::Action => format!("Status: {}", self.action),
            DetailField::Priority => format!("Priority: {}", self.priority),
            DetailField::Timestamp => self.timestamp.clone(),
            DetailField::Owner => format!("Owner: [{}] {}", self.owner_initials, self.owner),
            DetailField::Group => self.group.clone(),
        }
    }

    /// Status takes its action colour and the owner line its person hue.
    fn field_colour(&self, field: DetailField) -> Color {
        match field {
            DetailField::Action => rgb(self.action_colour),
            DetailField::Owner => person_colour(self.owner_hue),
            _ => rgb(palette::TEXT_PRIMARY),
        }
    }
}

pub fn file_details(dataset: &Dataset, file: &FileNode) -> FileDetails {
    let owner = dataset.owner_of(file);
    FileDetails {
        id: file.id,
        name: file.name.clone(),
        action: file.action.as_str().to_string(),
        priority: priority_caption(file.priority),
        timestamp: timestamp_label(file.date),
        owner: owner.name.clone(),
        owner_initials: owner.initials(),
        owner_hue: owner.hue,
        group: dataset.group_of(file).name.clone(),
        // Status text always uses the bright shade so it reads on the dark panel.
        action_colour: file.action.colour(Priority::P1),
    }
}

pub fn spawn_detail_panel(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            Name::new("Detail Panel"),
            ShellPanel,
            Interaction::default(),
            BackgroundColor(rgb(palette::PANEL_BACKGROUND).with_alpha(0.92)),
            Node {
                width: Val::Px(DETAIL_PANEL_WIDTH),
                padding: UiRect::all(Val::Px(14.0)),
                row_gap: Val::Px(8.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|panel| {
            panel.spawn((
                DetailPrompt,
                label(
                    "Click a file to see its details",
                    LABEL_FONT_SIZE,
                    palette::TEXT_MUTED,
                ),
            ));

            panel
                .spawn((
                    DetailBody,
                    Node {
                        display: Display::None,
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(6.0),
                        ..default()
                    },
                ))
                .with_children(|body| {
                    body.spawn((
                        DetailField::Name,
                        label("", TITLE_FONT_SIZE, palette::TEXT_PRIMARY),
                    ));
                    for field in [
                        DetailField::Action,
                        DetailField::Priority,
                        DetailField::Timestamp,
                        DetailField::Owner,
                        DetailField::Group,
                    ] {
                        body.spawn((field, label("", SMALL_FONT_SIZE, palette::TEXT_PRIMARY)));
                    }
                    spawn_text_button(body, CloseDetailButton, button_label("Close"));
                });
        });
}

pub fn reflect_detail_panel(
    store: Res<ViewStore>,
    scene: Res<SceneData>,
    mut sections: ParamSet<(
        Query<&mut Node, With<DetailBody>>,
        Query<&mut Node, With<DetailPrompt>>,
    )>,
    mut fields: Query<(&DetailField, &mut Text, &mut TextColor)>,
) {
    if !store.is_changed() {
        return;
    }
    let details = store
        .state
        .selected()
        .and_then(|id| scene.dataset.file(id))
        .map(|file| file_details(&scene.dataset, file));

    let (body_display, prompt_display) = match details {
        Some(_) => (Display::Flex, Display::None),
        None => (Display::None, Display::Flex),
    };
    for mut node in &mut sections.p0() {
        node.display = body_display;
    }
    for mut node in &mut sections.p1() {
        node.display = prompt_display;
    }

    let Some(details) = details else {
        return;
    };
    for (field, mut text, mut colour) in &mut fields {
        text.0 = details.field(*field);
        colour.0 = details.field_colour(*field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use dimension_model::{FileAction, Group, GroupId, Person, PersonId};

    fn dataset() -> Dataset {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        Dataset::new(
            vec![Person {
                id: PersonId(0),
                name: "Jordan".to_string(),
                hue: 210.0,
            }],
            vec![Group {
                id: GroupId(0),
                name: "Group 1 - Alpha".to_string(),
                layout_index: 0,
            }],
            vec![FileNode {
                id: FileId(0),
                name: "Invoice #1000".to_string(),
                group_id: GroupId(0),
                person_id: PersonId(0),
                date: Utc.with_ymd_and_hms(2024, 6, 5, 14, 30, 0).unwrap(),
                action: FileAction::Pending,
                priority: Priority::P4,
            }],
            start,
            31,
        )
        .unwrap()
    }

    #[test]
    fn details_use_display_labels() {
        let dataset = dataset();
        let details = file_details(&dataset, &dataset.files()[0]);
        assert_eq!(details.name, "Invoice #1000");
        assert_eq!(details.priority, "P4 High");
        assert_eq!(details.timestamp, "Jun 05, 2024 14:30");
        assert_eq!(details.owner_initials, "JO");
        assert_eq!(details.action_colour, palette::PENDING_BRIGHT);
        assert_eq!(details.field(DetailField::Action), "Status: pending");
        assert_eq!(details.field(DetailField::Owner), "Owner: [JO] Jordan");
    }

    #[test]
    fn owner_line_is_tinted_with_the_person_hue() {
        let dataset = dataset();
        let details = file_details(&dataset, &dataset.files()[0]);
        assert_eq!(details.owner_hue, 210.0);
        assert_eq!(
            details.field_colour(DetailField::Owner),
            Color::hsl(210.0, 0.7, 0.5)
        );
        assert_eq!(
            details.field_colour(DetailField::Action),
            rgb(palette::PENDING_BRIGHT)
        );
        assert_eq!(
            details.field_colour(DetailField::Name),
            rgb(palette::TEXT_PRIMARY)
        );
    }
}
