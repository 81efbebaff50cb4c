use std::io;

use thiserror::Error;

/// Errors raised at the data-construction and session boundaries.
///
/// Filtering, sorting and counting never fail; everything here comes from
/// ingesting alert data or from a transition the filter editor does not allow.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown severity `{0}`")]
    UnknownSeverity(String),

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("alert has an empty id")]
    EmptyId,

    #[error("duplicate alert id `{0}`")]
    DuplicateId(String),

    #[error("alert `{id}` has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        id: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("no alert with id `{0}`")]
    UnknownAlert(String),

    #[error("filter editor is not open")]
    EditorClosed,

    #[error("filter editor is already open")]
    EditorAlreadyOpen,

    #[error("malformed alert data: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
