use bevy::prelude::*;

use dimension_model::{ViewAction, ViewMode};

use crate::engine::systems::view_actions::ViewActionEvent;

/// View mode bound to a number key.
pub fn mode_for_key(key: KeyCode) -> Option<ViewMode> {
    match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(ViewMode::Front),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(ViewMode::Top),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(ViewMode::Side),
        _ => None,
    }
}

/// Scroll direction from the arrow keys currently held, as (x, y).
pub fn arrow_direction(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if keyboard.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    // Groups stack downwards, so Down moves towards more negative Y.
    if keyboard.pressed(KeyCode::ArrowDown) {
        direction.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowUp) {
        direction.y += 1.0;
    }
    direction
}

/// System handling keyboard shortcuts (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_view_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    use constants::camera::KEYBOARD_SCROLL_SPEED;

    for key in keyboard.get_just_pressed() {
        if let Some(mode) = mode_for_key(*key) {
            actions.write(ViewActionEvent(ViewAction::SetViewMode(mode)));
        }
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        actions.write(ViewActionEvent(ViewAction::SelectFile(None)));
    }
    if keyboard.just_pressed(KeyCode::Backspace) {
        actions.write(ViewActionEvent(ViewAction::ClearFilters));
    }

    let direction = arrow_direction(&keyboard);
    if direction != Vec2::ZERO {
        let step = direction * KEYBOARD_SCROLL_SPEED * time.delta_secs();
        actions.write(ViewActionEvent(ViewAction::ScrollBy {
            dx: step.x,
            dy: step.y,
        }));
    }
}

/// Placeholder system for WASM builds where keyboard shortcuts are disabled.
#[cfg(target_arch = "wasm32")]
pub fn handle_view_shortcuts() {
    // No keyboard shortcuts in WASM builds - the host page drives the view via RPC.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_pick_view_modes() {
        assert_eq!(mode_for_key(KeyCode::Digit1), Some(ViewMode::Front));
        assert_eq!(mode_for_key(KeyCode::Numpad2), Some(ViewMode::Top));
        assert_eq!(mode_for_key(KeyCode::Digit3), Some(ViewMode::Side));
        assert_eq!(mode_for_key(KeyCode::Digit4), None);
    }

    #[test]
    fn opposite_arrows_cancel_out() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowLeft);
        keyboard.press(KeyCode::ArrowRight);
        keyboard.press(KeyCode::ArrowDown);
        assert_eq!(arrow_direction(&keyboard), Vec2::new(0.0, -1.0));
    }
}
