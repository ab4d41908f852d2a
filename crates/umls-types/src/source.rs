//! Source abbreviation (SAB) type.
//!
//! A SAB names a source vocabulary in the Metathesaurus, such as `MSH`,
//! `SNOMEDCT_US` or `ICD10CM`. SABs restrict queries to particular sources;
//! they are never a query's search key, so this kind carries no capability
//! roles.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::uid::{impl_search_uid, validate};
use crate::{UidKind, UidResult};

pub(crate) static SAB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[A-Z0-9][A-Z0-9_.\-]{0,39}\z").expect("SAB pattern is valid")
});

/// A source abbreviation (SAB).
///
/// # Examples
///
/// ```
/// use umls_types::SourceAbbreviation;
///
/// let sab = SourceAbbreviation::from_string("SNOMEDCT_US").unwrap();
/// assert_eq!(sab.key_name(), "SAB");
/// assert!(SourceAbbreviation::CAPABILITIES.is_empty());
/// assert!(SourceAbbreviation::from_string("msh").is_err());
/// ```
///
/// ```compile_fail
/// use umls_types::{CuiQuerySearchUid, SourceAbbreviation};
///
/// fn concepts_for<K: CuiQuerySearchUid>(_key: &K) {}
///
/// let sab = SourceAbbreviation::from_string("MSH").unwrap();
/// concepts_for(&sab);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceAbbreviation(String);

impl SourceAbbreviation {
    /// Creates a SAB from the given string.
    ///
    /// No case folding is applied: `msh` is rejected rather than turned into
    /// `MSH`.
    pub fn from_string(sab: &str) -> UidResult<Self> {
        validate(UidKind::Sab, sab)?;
        Ok(Self(sab.to_owned()))
    }
}

impl_search_uid!(SourceAbbreviation, UidKind::Sab, roles: []);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_source_abbreviations() {
        for sab in [
            "MSH",
            "SNOMEDCT_US",
            "ICD10CM",
            "MTH",
            "LNC-DE-AT",
            "MDR",
            "RXNORM",
            "ICD9CM",
        ] {
            assert_eq!(SourceAbbreviation::from_string(sab).unwrap().value(), sab);
        }
    }

    #[test]
    fn test_invalid_source_abbreviations() {
        let too_long = "A".repeat(41);
        for sab in ["", "msh", "_MSH", "-MSH", "MSH US", "MSH\t", too_long.as_str()] {
            let err = SourceAbbreviation::from_string(sab).unwrap_err();
            assert_eq!(err.kind(), UidKind::Sab);
        }
        assert!(SourceAbbreviation::from_string(&"A".repeat(40)).is_ok());
    }
}
