use thiserror::Error;

/// Reasons a dataset can be rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("dataset has no {0}")]
    Empty(&'static str),

    #[error("{kind} at position {position} carries id {id}")]
    MisplacedId {
        kind: &'static str,
        position: usize,
        id: String,
    },

    #[error("file {file} references unknown group {group}")]
    DanglingGroup { file: String, group: String },

    #[error("file {file} references unknown person {person}")]
    DanglingPerson { file: String, person: String },
}

/// Failure to read an identifier or enum value from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown priority `{0}`, expected p1..p9")]
    Priority(String),

    #[error("unknown view mode `{0}`, expected front, top or side")]
    ViewMode(String),

    #[error("invalid {kind} id `{value}`")]
    Id { kind: &'static str, value: String },
}
