use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown beneath a date range field when the bounds are out of order.
pub const INVALID_RANGE_MESSAGE: &str = "Invalid range";

/// Categorization of component-level errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UiErrorKind {
    /// End before start, or start after end.
    InvalidRange,
    /// Text that does not parse as a calendar date.
    InvalidDate,
    /// A malformed value in a URL query string.
    InvalidQuery,
    /// A remembered setting that could not be (de)serialized.
    Storage,
}

impl fmt::Display for UiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiErrorKind::InvalidRange => write!(f, "InvalidRange"),
            UiErrorKind::InvalidDate => write!(f, "InvalidDate"),
            UiErrorKind::InvalidQuery => write!(f, "InvalidQuery"),
            UiErrorKind::Storage => write!(f, "Storage"),
        }
    }
}

/// Structured error shared by the state machines and the components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiError {
    pub kind: UiErrorKind,
    pub message: String,
}

impl UiError {
    pub fn invalid_range() -> Self {
        Self {
            kind: UiErrorKind::InvalidRange,
            message: INVALID_RANGE_MESSAGE.to_string(),
        }
    }

    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::InvalidDate,
            message: message.into(),
        }
    }

    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::InvalidQuery,
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            kind: UiErrorKind::Storage,
            message: message.into(),
        }
    }

    /// Whether this error is meant to be displayed to the user.
    ///
    /// Only range violations are surfaced; the other kinds happen while a
    /// user is still typing or come from outside the component.
    pub fn is_user_visible(&self) -> bool {
        self.kind == UiErrorKind::InvalidRange
    }

    /// Text for a helper line under a field.
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for UiError {}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::storage(err.to_string())
    }
}
