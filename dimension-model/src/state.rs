use std::fmt;
use std::str::FromStr;

use bevy_math::Vec3;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ParseError;
use crate::filter::FilterState;
use crate::records::{FileId, GroupId, Priority};

/// Named camera preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Front,
    Top,
    Side,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [Self::Front, Self::Top, Self::Side];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Top => "top",
            Self::Side => "side",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Top => "Top",
            Self::Side => "Side",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::ViewMode(s.to_string()))
    }
}

/// Horizontal (time) and vertical (group) scroll in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffsets {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffsets {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// World point the camera presets are anchored to.
    pub fn origin(self) -> Vec3 {
        Vec3::new(self.x, self.y, 0.0)
    }
}

/// Every way the view state can change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    SetViewMode(ViewMode),
    SetScrollX(f32),
    SetScrollY(f32),
    ScrollBy { dx: f32, dy: f32 },
    SelectFile(Option<FileId>),
    SetFilterGroup(GroupId),
    SetFilterPriority(Priority),
    SetFilterDate(NaiveDate),
    ClearFilters,
}

/// Snapshot of everything the layout, camera rig and shell read each frame.
///
/// Selection and filtering are competing focus modes: any filter change drops
/// the selection, while selecting leaves the filters as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    view_mode: ViewMode,
    scroll: ScrollOffsets,
    filters: FilterState,
    selected: Option<FileId>,
}

impl ViewState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn scroll(&self) -> ScrollOffsets {
        self.scroll
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selected(&self) -> Option<FileId> {
        self.selected
    }

    /// Reduce one action into a new snapshot.
    pub fn apply(&self, action: &ViewAction) -> ViewState {
        debug!(?action, "applying view action");
        match *action {
            ViewAction::SetViewMode(mode) => self.set_view_mode(mode),
            ViewAction::SetScrollX(x) => self.set_scroll_x(x),
            ViewAction::SetScrollY(y) => self.set_scroll_y(y),
            ViewAction::ScrollBy { dx, dy } => self
                .set_scroll_x(self.scroll.x + dx)
                .set_scroll_y(self.scroll.y + dy),
            ViewAction::SelectFile(file) => self.select_file(file),
            ViewAction::SetFilterGroup(group) => self.set_filter_group(group),
            ViewAction::SetFilterPriority(priority) => self.set_filter_priority(priority),
            ViewAction::SetFilterDate(date) => self.set_filter_date(date),
            ViewAction::ClearFilters => self.clear_filters(),
        }
    }

    pub fn set_view_mode(&self, view_mode: ViewMode) -> ViewState {
        Self {
            view_mode,
            ..self.clone()
        }
    }

    pub fn set_scroll_x(&self, x: f32) -> ViewState {
        Self {
            scroll: ScrollOffsets { x, ..self.scroll },
            ..self.clone()
        }
    }

    pub fn set_scroll_y(&self, y: f32) -> ViewState {
        Self {
            scroll: ScrollOffsets { y, ..self.scroll },
            ..self.clone()
        }
    }

    pub fn select_file(&self, selected: Option<FileId>) -> ViewState {
        Self {
            selected,
            ..self.clone()
        }
    }

    pub fn set_filter_group(&self, group: GroupId) -> ViewState {
        self.with_filters(self.filters.toggled_group(group))
    }

    pub fn set_filter_priority(&self, priority: Priority) -> ViewState {
        self.with_filters(self.filters.toggled_priority(priority))
    }

    pub fn set_filter_date(&self, date: NaiveDate) -> ViewState {
        self.with_filters(self.filters.toggled_date(date))
    }

    pub fn clear_filters(&self) -> ViewState {
        self.with_filters(FilterState::default())
    }

    fn with_filters(&self, filters: FilterState) -> ViewState {
        Self {
            filters,
            selected: None,
            ..self.clone()
        }
    }
}
