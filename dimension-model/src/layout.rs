use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::dataset::Dataset;
use crate::filter::FilterState;
use crate::records::{FileId, FileNode, Priority};
use crate::state::ViewState;
use constants::layout as defaults;

/// Spacing of the three semantic axes and the dimming level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub day_width: f32,
    pub group_height: f32,
    pub priority_depth: f32,
    pub dim_opacity: f32,
    pub pixels_per_unit: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            day_width: defaults::DAY_WIDTH,
            group_height: defaults::GROUP_HEIGHT,
            priority_depth: defaults::PRIORITY_DEPTH,
            dim_opacity: defaults::DIM_OPACITY,
            pixels_per_unit: defaults::PIXELS_PER_UNIT,
        }
    }
}

/// Scroll range covering the dataset, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneExtents {
    /// Scroll X of the last day.
    pub max_scroll_x: f32,
    /// Scroll Y of the last group; negative because groups stack downwards.
    pub min_scroll_y: f32,
}

impl SceneExtents {
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.max_scroll_x)
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(self.min_scroll_y, 0.0)
    }
}

impl LayoutConfig {
    /// X for a point `days` after the start of the timeline.
    pub fn day_x(&self, days: f64) -> f32 {
        days as f32 * self.day_width
    }

    pub fn group_y(&self, layout_index: usize) -> f32 {
        -(layout_index as f32) * self.group_height
    }

    pub fn priority_z(&self, priority: Priority) -> f32 {
        -(priority.rank() as f32) * self.priority_depth
    }

    /// Time on X, group row on Y, priority lane on Z.
    pub fn file_position(&self, dataset: &Dataset, file: &FileNode) -> Vec3 {
        let days = calendar::fractional_days_since(dataset.start_date(), file.date);
        Vec3::new(
            self.day_x(days),
            self.group_y(dataset.group_of(file).layout_index),
            self.priority_z(file.priority),
        )
    }

    pub fn file_opacity(&self, state: &ViewState, file: &FileNode) -> f32 {
        file_opacity(file, state.filters(), state.selected(), self.dim_opacity)
    }

    pub fn group_marker_position(&self, layout_index: usize) -> Vec3 {
        Vec3::new(defaults::GROUP_MARKER_X, self.group_y(layout_index), 0.5)
    }

    /// Priority headers climb in a staircase so deeper lanes stay visible from the front.
    pub fn priority_marker_position(&self, priority: Priority) -> Vec3 {
        let rank = priority.rank() as f32;
        Vec3::new(
            defaults::PRIORITY_MARKER_X,
            defaults::PRIORITY_MARKER_TOP + rank * defaults::PRIORITY_MARKER_STEP,
            self.priority_z(priority),
        )
    }

    pub fn day_tick_position(&self, day_offset: u32) -> Vec3 {
        Vec3::new(self.scroll_x_for_day(day_offset), defaults::DAY_TICK_Y, 0.0)
    }

    /// Scroll X that centres the camera on the start of a day.
    pub fn scroll_x_for_day(&self, day_offset: u32) -> f32 {
        self.day_x(f64::from(day_offset))
    }

    pub fn extents(&self, dataset: &Dataset) -> SceneExtents {
        let last_day = dataset.day_count().saturating_sub(1);
        let last_group = dataset.groups().len().saturating_sub(1);
        SceneExtents {
            max_scroll_x: self.scroll_x_for_day(last_day),
            min_scroll_y: self.group_y(last_group),
        }
    }

    /// Convert shell pixels (strip or sidebar offsets, wheel deltas) to world units.
    pub fn pixels_to_world(&self, pixels: f32) -> f32 {
        pixels / self.pixels_per_unit
    }

    pub fn world_to_pixels(&self, world: f32) -> f32 {
        world * self.pixels_per_unit
    }
}

/// Opacity of a file given the current focus.
///
/// A selection wins over filters: only the selected file stays opaque. With no
/// selection a file is opaque when it satisfies every set filter.
pub fn file_opacity(
    file: &FileNode,
    filters: &FilterState,
    selected: Option<FileId>,
    dim_opacity: f32,
) -> f32 {
    let in_focus = match selected {
        Some(id) => id == file.id,
        None => filters.matches(file),
    };
    if in_focus { 1.0 } else { dim_opacity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetConfig;
    use crate::records::GroupId;
    use chrono::NaiveDate;

    fn dataset() -> Dataset {
        Dataset::generate(&DatasetConfig {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            ..DatasetConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn x_increases_with_date() {
        let dataset = dataset();
        let layout = LayoutConfig::default();
        let mut files: Vec<_> = dataset.files().iter().collect();
        files.sort_by_key(|file| file.date);
        for pair in files.windows(2) {
            let a = layout.file_position(&dataset, pair[0]).x;
            let b = layout.file_position(&dataset, pair[1]).x;
            if pair[0].date < pair[1].date {
                assert!(a < b, "{} !< {}", a, b);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn y_is_shared_within_group_and_ordered_by_index() {
        let dataset = dataset();
        let layout = LayoutConfig::default();
        for file in dataset.files() {
            let y = layout.file_position(&dataset, file).y;
            assert_eq!(y, -(file.group_id.index() as f32) * layout.group_height);
        }
        assert_eq!(layout.group_y(0), 0.0);
        assert_eq!(layout.group_y(3), -4.5);
    }

    #[test]
    fn z_depends_only_on_priority_rank() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.priority_z(Priority::P1), 0.0);
        for priority in Priority::ALL {
            assert_eq!(
                layout.priority_z(priority),
                -(priority.rank() as f32) * 5.0
            );
        }
    }

    #[test]
    fn selection_overrides_filter_dimming() {
        let dataset = dataset();
        let layout = LayoutConfig::default();
        let target = &dataset.files()[0];
        let other_group = GroupId((target.group_id.index() + 1) % dataset.groups().len());
        let state = ViewState::default()
            .set_filter_group(other_group)
            .select_file(Some(target.id));
        assert_eq!(layout.file_opacity(&state, target), 1.0);
        for file in dataset.files().iter().skip(1) {
            assert_eq!(layout.file_opacity(&state, file), layout.dim_opacity);
        }
    }

    #[test]
    fn filter_opacity_follows_match() {
        let dataset = dataset();
        let layout = LayoutConfig::default();
        let state = ViewState::default().set_filter_priority(Priority::P3);
        for file in dataset.files() {
            let expected = if file.priority == Priority::P3 { 1.0 } else { 0.1 };
            assert_eq!(layout.file_opacity(&state, file), expected);
        }
    }

    #[test]
    fn opacity_is_idempotent() {
        let dataset = dataset();
        let layout = LayoutConfig::default();
        let state = ViewState::default().set_filter_group(GroupId(2));
        for file in dataset.files() {
            assert_eq!(
                layout.file_opacity(&state, file),
                layout.file_opacity(&state, file)
            );
        }
    }

    #[test]
    fn no_focus_keeps_everything_opaque() {
        let dataset = dataset();
        let layout = LayoutConfig::default();
        let state = ViewState::default();
        assert!(
            dataset
                .files()
                .iter()
                .all(|file| layout.file_opacity(&state, file) == 1.0)
        );
    }

    #[test]
    fn extents_cover_last_day_and_group() {
        let layout = LayoutConfig::default();
        let extents = layout.extents(&dataset());
        assert_eq!(extents.max_scroll_x, 58.0);
        assert_eq!(extents.min_scroll_y, -28.5);
        assert_eq!(extents.clamp_x(-4.0), 0.0);
        assert_eq!(extents.clamp_x(70.0), 58.0);
        assert_eq!(extents.clamp_y(3.0), 0.0);
        assert_eq!(extents.clamp_y(-40.0), -28.5);
    }

    #[test]
    fn markers_sit_outside_the_grid() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.group_marker_position(2), Vec3::new(-3.0, -3.0, 0.5));
        assert_eq!(
            layout.priority_marker_position(Priority::P3),
            Vec3::new(-4.0, 11.0, -10.0)
        );
        assert_eq!(layout.day_tick_position(5), Vec3::new(10.0, 4.0, 0.0));
    }

    #[test]
    fn pixel_conversion_uses_pixels_per_unit() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.pixels_to_world(100.0), 2.0);
        assert_eq!(layout.world_to_pixels(2.0), 100.0);
    }
}
