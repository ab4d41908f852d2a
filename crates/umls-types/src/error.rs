//! Error types for identifier validation.

use thiserror::Error;

use crate::UidKind;

/// Error returned when a raw string does not match an identifier kind's format.
///
/// This is the only failure mode of the identifier factories. The message names
/// the kind and its expected format so callers can tell, for example, a bad AUI
/// from a bad SUI.
///
/// # Examples
///
/// ```
/// use umls_types::{AtomUid, UidKind};
///
/// let err = AtomUid::from_string("A123456").unwrap_err();
/// assert_eq!(err.kind(), UidKind::Aui);
/// assert_eq!(err.value(), "A123456");
/// assert!(err.to_string().contains("the letter 'A' followed by 7 or 8 digits"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed {} ({}): expected {}, got {value:?}", .kind.description(), .kind.key_name(), .kind.format())]
pub struct MalformedUidError {
    kind: UidKind,
    value: String,
}

impl MalformedUidError {
    pub(crate) fn new(kind: UidKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns the identifier kind that rejected the input.
    pub fn kind(&self) -> UidKind {
        self.kind
    }

    /// Returns the rejected input, verbatim.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the human-readable format the input was expected to follow.
    pub fn expected_format(&self) -> &'static str {
        self.kind.format()
    }
}

/// Result type for identifier construction.
pub type UidResult<T> = Result<T, MalformedUidError>;
