use bevy::prelude::*;

use dimension_model::{SceneExtents, ViewAction, ViewState};

use crate::engine::scene::SceneData;

/// The single view state of the running app.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ViewStore {
    pub state: ViewState,
}

/// A state change requested by picking, the shell, shortcuts or RPC.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ViewActionEvent(pub ViewAction);

/// Apply `action` and keep the scroll inside the dataset.
pub fn reduce_clamped(
    state: &ViewState,
    action: &ViewAction,
    extents: &SceneExtents,
) -> ViewState {
    let next = state.apply(action);
    let scroll = next.scroll();
    next.set_scroll_x(extents.clamp_x(scroll.x))
        .set_scroll_y(extents.clamp_y(scroll.y))
}

/// Fold this frame's actions into the store. The store is only marked
/// changed when the resulting snapshot differs.
pub fn apply_view_actions(
    mut events: EventReader<ViewActionEvent>,
    mut store: ResMut<ViewStore>,
    scene: Res<SceneData>,
) {
    if events.is_empty() {
        return;
    }

    let extents = scene.extents();
    let mut state = store.state.clone();
    for ViewActionEvent(action) in events.read() {
        debug!("View action: {:?}", action);
        state = reduce_clamped(&state, action, &extents);
    }

    if store.set_if_neq(ViewStore { state }) {
        let state = &store.state;
        if let Some(file) = state.selected() {
            info!("Selected {}", file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimension_model::{FileId, GroupId, ScrollOffsets};

    fn extents() -> SceneExtents {
        SceneExtents {
            max_scroll_x: 58.0,
            min_scroll_y: -28.5,
        }
    }

    #[test]
    fn scroll_is_clamped_to_dataset() {
        let state = reduce_clamped(
            &ViewState::default(),
            &ViewAction::ScrollBy { dx: -5.0, dy: 4.0 },
            &extents(),
        );
        assert_eq!(state.scroll(), ScrollOffsets::new(0.0, 0.0));

        let state = reduce_clamped(&state, &ViewAction::SetScrollX(100.0), &extents());
        let state = reduce_clamped(&state, &ViewAction::SetScrollY(-100.0), &extents());
        assert_eq!(state.scroll(), ScrollOffsets::new(58.0, -28.5));
    }

    #[test]
    fn non_scroll_actions_pass_through() {
        let state = reduce_clamped(
            &ViewState::default(),
            &ViewAction::SelectFile(Some(FileId(3))),
            &extents(),
        );
        assert_eq!(state.selected(), Some(FileId(3)));

        let state = reduce_clamped(&state, &ViewAction::SetFilterGroup(GroupId(1)), &extents());
        assert_eq!(state.selected(), None);
        assert_eq!(state.filters().group, Some(GroupId(1)));
    }
}
