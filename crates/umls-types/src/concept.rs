//! Concept Unique Identifier (CUI) type.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::uid::{impl_search_uid, validate};
use crate::{UidKind, UidResult};

pub(crate) static CUI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\AC[0-9]{7}\z").expect("CUI pattern is valid"));

/// A Concept Unique Identifier (CUI).
///
/// CUIs consist of the letter 'C' followed by exactly 7 digits. A CUI keys
/// every query category except the concept query itself, where it would be
/// its own answer.
///
/// # Examples
///
/// ```
/// use umls_types::{ConceptUid, ParentsQuerySearchUid};
///
/// fn parents_of<K: ParentsQuerySearchUid>(key: &K) -> String {
///     format!("{}={}", key.key_name(), key.value())
/// }
///
/// let cui = ConceptUid::from_string("C0011849").unwrap();
/// assert_eq!(parents_of(&cui), "CUI=C0011849");
/// ```
///
/// ```compile_fail
/// use umls_types::{ConceptUid, CuiQuerySearchUid};
///
/// fn concepts_for<K: CuiQuerySearchUid>(_key: &K) {}
///
/// let cui = ConceptUid::from_string("C0011849").unwrap();
/// concepts_for(&cui);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConceptUid(String);

impl ConceptUid {
    /// Creates a CUI from the given string.
    pub fn from_string(cuid: &str) -> UidResult<Self> {
        validate(UidKind::Cui, cuid)?;
        Ok(Self(cuid.to_owned()))
    }
}

impl_search_uid!(
    ConceptUid,
    UidKind::Cui,
    roles: [
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
