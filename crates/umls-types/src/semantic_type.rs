//! Semantic type Unique Identifier (TUI) type.
//!
//! TUIs name the semantic types of the UMLS Semantic Network, for example
//! `T047` (Disease or Syndrome).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::uid::{impl_search_uid, validate};
use crate::{UidKind, UidResult};

pub(crate) static TUI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\AT[0-9]{3}\z").expect("TUI pattern is valid"));

/// A semantic type (term type) Unique Identifier (TUI).
///
/// TUIs consist of the letter 'T' followed by exactly 3 digits. A TUI keys
/// concept queries ("all concepts of this semantic type").
///
/// # Examples
///
/// ```
/// use umls_types::SemanticTypeUid;
///
/// let tui = SemanticTypeUid::from_string("T047").unwrap();
/// assert_eq!(tui.key_name(), "TUI");
/// assert!(SemanticTypeUid::from_string("T47").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemanticTypeUid(String);

impl SemanticTypeUid {
    /// Creates a TUI from the given string.
    pub fn from_string(tuid: &str) -> UidResult<Self> {
        validate(UidKind::Tui, tuid)?;
        Ok(Self(tuid.to_owned()))
    }
}

impl_search_uid!(SemanticTypeUid, UidKind::Tui, roles: [CuiQuery]);
