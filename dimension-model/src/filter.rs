use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::{FileNode, GroupId, Priority};

/// Active equality constraints. `None` leaves a dimension unconstrained and
/// set fields combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub group: Option<GroupId>,
    pub priority: Option<Priority>,
    pub date: Option<NaiveDate>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.group.is_none() && self.priority.is_none() && self.date.is_none()
    }

    pub fn matches(&self, file: &FileNode) -> bool {
        self.group.is_none_or(|group| file.group_id == group)
            && self.priority.is_none_or(|priority| file.priority == priority)
            && self.date.is_none_or(|date| file.day() == date)
    }

    pub fn toggled_group(self, group: GroupId) -> Self {
        Self {
            group: toggle(self.group, group),
            ..self
        }
    }

    pub fn toggled_priority(self, priority: Priority) -> Self {
        Self {
            priority: toggle(self.priority, priority),
            ..self
        }
    }

    pub fn toggled_date(self, date: NaiveDate) -> Self {
        Self {
            date: toggle(self.date, date),
            ..self
        }
    }
}

/// Setting the value already held clears it.
fn toggle<T: PartialEq>(current: Option<T>, value: T) -> Option<T> {
    if current.as_ref() == Some(&value) {
        None
    } else {
        Some(value)
    }
}
