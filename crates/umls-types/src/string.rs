//! String Unique Identifier (SUI) type.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::uid::{impl_search_uid, validate};
use crate::{UidKind, UidResult};

pub(crate) static SUI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\AC[0-9]{7}\z").expect("SUI pattern is valid"));

/// A String Unique Identifier (SUI).
///
/// SUIs consist of the letter 'C' followed by exactly 7 digits. A SUI may only
/// be the search key of a concept (CUI) query.
///
/// # Examples
///
/// ```
/// use umls_types::StringUid;
///
/// let sui = StringUid::from_string("C1234567").unwrap();
/// assert_eq!(sui.value(), "C1234567");
/// assert_eq!(sui.key_name(), "SUI");
///
/// assert!(StringUid::from_string("C123456").is_err());
/// assert!(StringUid::from_string("L1234567").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringUid(String);

impl StringUid {
    /// Creates a SUI from the given string.
    ///
    /// The whole string must be the letter 'C' followed by 7 digits; it is
    /// stored verbatim.
    pub fn from_string(suid: &str) -> UidResult<Self> {
        validate(UidKind::Sui, suid)?;
        Ok(Self(suid.to_owned()))
    }
}

impl_search_uid!(StringUid, UidKind::Sui, roles: [CuiQuery]);
