use thiserror::Error;

use crate::domain::SortKey;

/// The single failure kind of the viewer: the stats feed could not be obtained.
///
/// Covers unreachable host, non-success status and unparsable body alike.
/// The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn bad_status(status: reqwest::StatusCode) -> Self {
        Self::new(format!("Network response was not ok ({})", status))
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// A column name that matches neither a feed attribute nor a header label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column '{0}' (expected one of: {known})", known = known_columns())]
pub struct UnknownSortKey(pub String);

fn known_columns() -> String {
    SortKey::ALL
        .iter()
        .map(SortKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
