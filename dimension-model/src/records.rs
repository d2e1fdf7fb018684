use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use constants::palette;

/// Declares an index-backed identifier that prints as `{prefix}-{index}`.
///
/// The wire form matches the labels shown in the shell (`g-3`, `p-0`, `f-42`)
/// and is what RPC callers pass back in.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(into = "String", try_from = "String")]
        pub struct $name(pub usize);

        impl $name {
            /// Position of the record inside its dataset collection.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.strip_prefix(concat!($prefix, "-"))
                    .and_then(|index| index.parse().ok())
                    .map(Self)
                    .ok_or_else(|| ParseError::Id {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

record_id!(
    /// Identifier of a [`Person`].
    PersonId,
    "p",
    "person"
);
record_id!(
    /// Identifier of a [`Group`].
    GroupId,
    "g",
    "group"
);
record_id!(
    /// Identifier of a [`FileNode`].
    FileId,
    "f",
    "file"
);

/// File owner, drawn with an HSL colour of the given hue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub hue: f32,
}

impl Person {
    /// Two-letter initials for avatar badges.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Organisational group, one horizontal band of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Row of the band counted from the top; row 0 sits at Y = 0.
    pub layout_index: usize,
}

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Paid,
    Pending,
    Rejected,
}

impl FileAction {
    pub const ALL: [FileAction; 3] = [Self::Paid, Self::Pending, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }

    /// sRGB colour for a node: bright for p1, dark for every other priority.
    pub fn colour(self, priority: Priority) -> [u8; 3] {
        let bright = priority == Priority::P1;
        match (self, bright) {
            (Self::Paid, true) => palette::PAID_BRIGHT,
            (Self::Paid, false) => palette::PAID_DARK,
            (Self::Pending, true) => palette::PENDING_BRIGHT,
            (Self::Pending, false) => palette::PENDING_DARK,
            (Self::Rejected, true) => palette::REJECTED_BRIGHT,
            (Self::Rejected, false) => palette::REJECTED_DARK,
        }
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nine priority levels, p1 most urgent. The rank drives depth placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
}

impl Priority {
    pub const ALL: [Priority; 9] = [
        Self::P1,
        Self::P2,
        Self::P3,
        Self::P4,
        Self::P5,
        Self::P6,
        Self::P7,
        Self::P8,
        Self::P9,
    ];

    /// 0 for p1 through 8 for p9.
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
            Self::P4 => "p4",
            Self::P5 => "p5",
            Self::P6 => "p6",
            Self::P7 => "p7",
            Self::P8 => "p8",
            Self::P9 => "p9",
        }
    }

    /// Human label shown in selectors and the detail panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::P1 => "Critical",
            Self::P2 => "Ultra High",
            Self::P3 => "Very High",
            Self::P4 => "High",
            Self::P5 => "Moderate",
            Self::P6 => "Low",
            Self::P7 => "Very Low",
            Self::P8 => "Minimal",
            Self::P9 => "Trivial",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::Priority(s.to_string()))
    }
}

/// One invoice-like record placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileNode {
    pub id: FileId,
    pub name: String,
    pub group_id: GroupId,
    pub person_id: PersonId,
    pub date: DateTime<Utc>,
    pub action: FileAction,
    pub priority: Priority,
}

impl FileNode {
    /// Calendar day of the timestamp, used by the date filter.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn colour(&self) -> [u8; 3] {
        self.action.colour(self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_print_and_parse_with_prefix() {
        assert_eq!(GroupId(3).to_string(), "g-3");
        assert_eq!("g-3".parse::<GroupId>(), Ok(GroupId(3)));
        assert_eq!("f-42".parse::<FileId>(), Ok(FileId(42)));
        assert_eq!("p-0".parse::<PersonId>(), Ok(PersonId(0)));
    }

    #[test]
    fn ids_reject_wrong_prefix() {
        assert_eq!(
            "f-3".parse::<GroupId>(),
            Err(ParseError::Id {
                kind: "group",
                value: "f-3".to_string()
            })
        );
        assert!("g-".parse::<GroupId>().is_err());
        assert!("g-x".parse::<GroupId>().is_err());
    }

    #[test]
    fn ids_serialize_as_strings() {
        let json = serde_json::to_string(&GroupId(7)).unwrap();
        assert_eq!(json, "\"g-7\"");
        let back: GroupId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GroupId(7));
    }

    #[test]
    fn priority_rank_follows_label_order() {
        for (rank, priority) in Priority::ALL.into_iter().enumerate() {
            assert_eq!(priority.rank(), rank);
        }
        assert_eq!(Priority::P1.label(), "Critical");
        assert_eq!(Priority::P9.label(), "Trivial");
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("P2".parse::<Priority>(), Ok(Priority::P2));
        assert_eq!(
            "p10".parse::<Priority>(),
            Err(ParseError::Priority("p10".to_string()))
        );
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::P4).unwrap(), "\"p4\"");
    }

    #[test]
    fn only_p1_gets_bright_colour() {
        assert_eq!(FileAction::Paid.colour(Priority::P1), palette::PAID_BRIGHT);
        assert_eq!(FileAction::Paid.colour(Priority::P2), palette::PAID_DARK);
        assert_eq!(
            FileAction::Rejected.colour(Priority::P9),
            palette::REJECTED_DARK
        );
    }

    #[test]
    fn initials_are_uppercase() {
        let person = Person {
            id: PersonId(0),
            name: "Abbey".to_string(),
            hue: 0.0,
        };
        assert_eq!(person.initials(), "AB");
    }
}
