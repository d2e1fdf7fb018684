use bevy::prelude::*;

use constants::palette;
use constants::shell::LABEL_FONT_SIZE;

pub fn rgb(colour: [u8; 3]) -> Color {
    Color::srgb_u8(colour[0], colour[1], colour[2])
}

/// Swatch for a file owner, from the hue carried on the person.
pub fn person_colour(hue: f32) -> Color {
    Color::hsl(hue, 0.7, 0.5)
}

pub fn label(text: impl Into<String>, font_size: f32, colour: [u8; 3]) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(rgb(colour)),
    )
}

pub fn button_label(text: impl Into<String>) -> impl Bundle {
    label(text, LABEL_FONT_SIZE, palette::TEXT_PRIMARY)
}

pub fn button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
        display: Display::Flex,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        border: UiRect::all(Val::Px(1.0)),
        ..default()
    }
}

/// Background of a shell button for its highlight and pointer state.
pub fn button_colour(active: bool, interaction: Interaction) -> Color {
    match (active, interaction) {
        (_, Interaction::Pressed) => rgb(palette::ACCENT),
        (true, _) => rgb(palette::BUTTON_ACTIVE),
        (false, Interaction::Hovered) => rgb(palette::BUTTON_HOVER),
        (false, Interaction::None) => rgb(palette::BUTTON_IDLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_buttons_stay_highlighted_on_hover() {
        assert_eq!(
            button_colour(true, Interaction::Hovered),
            rgb(palette::BUTTON_ACTIVE)
        );
        assert_eq!(
            button_colour(false, Interaction::Hovered),
            rgb(palette::BUTTON_HOVER)
        );
        assert_eq!(
            button_colour(false, Interaction::None),
            rgb(palette::BUTTON_IDLE)
        );
    }

    #[test]
    fn people_with_different_hues_get_different_swatches() {
        assert_eq!(person_colour(90.0), Color::hsl(90.0, 0.7, 0.5));
        assert_ne!(person_colour(0.0), person_colour(180.0));
    }
}
