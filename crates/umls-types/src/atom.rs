//! Atom Unique Identifier (AUI) type.
//!
//! Atoms are the most widely usable identifiers: an AUI may be the search key
//! of every query category.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::uid::{impl_search_uid, validate};
use crate::{UidKind, UidResult};

pub(crate) static AUI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\AA[0-9]{7,8}\z").expect("AUI pattern is valid"));

/// Shared empty AUI, for callers that only need the AUI key name.
static EMPTY_AUI: AtomUid = AtomUid(String::new());

/// An Atom Unique Identifier (AUI).
///
/// AUIs consist of the letter 'A' followed by 7 or 8 digits.
///
/// # Examples
///
/// ```
/// use umls_types::AtomUid;
///
/// assert!(AtomUid::from_string("A1234567").is_ok());
/// assert!(AtomUid::from_string("A12345678").is_ok());
/// assert!(AtomUid::from_string("A123456").is_err());
///
/// let aui: AtomUid = "A0022525".parse().unwrap();
/// assert_eq!(aui.key_name(), "AUI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomUid(String);

impl AtomUid {
    /// Creates an AUI from the given string.
    ///
    /// The whole string must be the letter 'A' followed by 7 or 8 digits; it
    /// is stored verbatim.
    pub fn from_string(auid: &str) -> UidResult<Self> {
        validate(UidKind::Aui, auid)?;
        Ok(Self(auid.to_owned()))
    }

    /// Returns the shared empty AUI.
    ///
    /// Its value is the empty string and never passed format validation. Use it
    /// only where a query needs the AUI [`key_name`](Self::key_name), never as
    /// a search key.
    ///
    /// The sentinel cannot be serialized: with the `serde` feature, serializing
    /// it returns an error rather than writing a value that would fail to
    /// deserialize.
    ///
    /// ```
    /// use umls_types::AtomUid;
    ///
    /// assert_eq!(AtomUid::empty().key_name(), "AUI");
    /// assert_eq!(AtomUid::empty().value(), "");
    /// ```
    pub fn empty() -> &'static AtomUid {
        &EMPTY_AUI
    }
}

impl_search_uid!(
    AtomUid,
    UidKind::Aui,
    roles: [
        CuiQuery,
        AuiQuery,
        StrQuery,
        TuiQuery,
        SabQuery,
        ParentsQuery,
        NeighborQuery,
        MapToIdQuery,
        CodeQuery,
    ]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_and_eight_digit_auis() {
        let short = AtomUid::from_string("A1234567").unwrap();
        let long = AtomUid::from_string("A12345678").unwrap();
        assert_eq!(short.value(), "A1234567");
        assert_eq!(long.value(), "A12345678");
        assert_ne!(short, long);
    }

    #[test]
    fn test_invalid_auis() {
        for auid in [
            "A123456",
            "A123456789",
            "a1234567",
            "C1234567",
            "A",
            "",
            "A1234567 ",
            "AA1234567",
        ] {
            let err = AtomUid::from_string(auid).unwrap_err();
            assert_eq!(err.kind(), UidKind::Aui);
            assert!(err.to_string().contains("7 or 8 digits"));
        }
    }

    #[test]
    fn test_empty_sentinel_is_shared() {
        let a = AtomUid::empty();
        let b = AtomUid::empty();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.value(), "");
        assert_eq!(a.key_name(), AtomUid::KEY_NAME);
        // The sentinel's value would never pass the factory.
        assert!(AtomUid::from_string(a.value()).is_err());
    }

    #[test]
    fn test_sentinel_differs_from_real_auis() {
        let aui = AtomUid::from_string("A0000001").unwrap();
        assert_ne!(&aui, AtomUid::empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_empty_sentinel_is_not_serializable() {
        let err = serde_json::to_string(AtomUid::empty()).unwrap_err();
        assert!(err.to_string().contains("empty AUI placeholder"), "{err}");

        let aui = AtomUid::from_string("A0022525").unwrap();
        let json = serde_json::to_string(&aui).unwrap();
        assert_eq!(serde_json::from_str::<AtomUid>(&json).unwrap(), aui);
        assert!(serde_json::from_str::<AtomUid>("\"\"").is_err());
    }
}
