//! Lexical Unique Identifier (LUI) type.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::uid::{impl_search_uid, validate};
use crate::{UidKind, UidResult};

pub(crate) static LUI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\AL[0-9]{7}\z").expect("LUI pattern is valid"));

/// A Lexical Unique Identifier (LUI).
///
/// LUIs consist of the letter 'L' followed by exactly 7 digits and key only
/// concept queries.
///
/// ```
/// use umls_types::LexicalUid;
///
/// let lui = LexicalUid::from_string("L0000001").unwrap();
/// assert_eq!(lui.key_name(), "LUI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LexicalUid(String);

impl LexicalUid {
    /// Creates a LUI from the given string.
    pub fn from_string(luid: &str) -> UidResult<Self> {
        validate(UidKind::Lui, luid)?;
        Ok(Self(luid.to_owned()))
    }
}

impl_search_uid!(LexicalUid, UidKind::Lui, roles: [CuiQuery]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lui_format() {
        assert!(LexicalUid::from_string("L0028459").is_ok());
        assert!(LexicalUid::from_string("L002845").is_err());
        assert!(LexicalUid::from_string("L00284590").is_err());
        assert!(LexicalUid::from_string("C0028459").is_err());
        assert!(LexicalUid::from_string("l0028459").is_err());
    }
}
