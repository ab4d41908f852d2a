//! Identifier kinds as runtime values.
//!
//! [`UidKind`] is the table that ties each kind to its key name, format and
//! capability roles. [`AnyUid`] is a closed union over every concrete kind, for
//! callers that only learn which kind they hold at runtime.

use std::fmt;

use regex::Regex;

use crate::{
    atom, concept, lexical, semantic_type, source, string, AtomUid, Capability, CapabilitySet,
    ConceptUid, LexicalUid, SemanticTypeUid, SourceAbbreviation, StringUid, UidResult,
};

/// The kind of a UMLS identifier.
///
/// Variants are named after the query parameter each kind binds to.
///
/// # Examples
///
/// ```
/// use umls_types::{Capability, UidKind};
///
/// let kind = UidKind::from_key_name("AUI");
/// assert_eq!(kind, Some(UidKind::Aui));
/// assert!(UidKind::Aui.capabilities().contains(Capability::CodeQuery));
/// assert!(UidKind::Aui.matches("A12345678"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum UidKind {
    /// Concept Unique Identifier.
    Cui,
    /// Atom Unique Identifier.
    Aui,
    /// String Unique Identifier.
    Sui,
    /// Lexical Unique Identifier.
    Lui,
    /// Semantic type (term type) Unique Identifier.
    Tui,
    /// Source abbreviation.
    Sab,
}

impl UidKind {
    /// Every identifier kind.
    pub const ALL: [UidKind; 6] = [
        Self::Cui,
        Self::Aui,
        Self::Sui,
        Self::Lui,
        Self::Tui,
        Self::Sab,
    ];

    /// Returns the query parameter name values of this kind bind to.
    pub const fn key_name(self) -> &'static str {
        match self {
            Self::Cui => "CUI",
            Self::Aui => "AUI",
            Self::Sui => "SUI",
            Self::Lui => "LUI",
            Self::Tui => "TUI",
            Self::Sab => "SAB",
        }
    }

    /// Creates a UidKind from its key name.
    ///
    /// Returns `None` if the name doesn't match a known kind. Matching is exact.
    pub fn from_key_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key_name() == name)
    }

    /// Returns the full name of this kind.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Cui => "Concept Unique Identifier",
            Self::Aui => "Atom Unique Identifier",
            Self::Sui => "String Unique Identifier",
            Self::Lui => "Lexical Unique Identifier",
            Self::Tui => "Semantic Type Unique Identifier",
            Self::Sab => "Source Abbreviation",
        }
    }

    /// Returns a human-readable description of the accepted format.
    pub const fn format(self) -> &'static str {
        match self {
            Self::Cui => "the letter 'C' followed by 7 digits",
            Self::Aui => "the letter 'A' followed by 7 or 8 digits",
            Self::Sui => "the letter 'C' followed by 7 digits",
            Self::Lui => "the letter 'L' followed by 7 digits",
            Self::Tui => "the letter 'T' followed by 3 digits",
            Self::Sab => {
                "an uppercase letter or digit followed by up to 39 uppercase letters, digits, '_', '.' or '-'"
            }
        }
    }

    /// Returns the query categories values of this kind may be a search key for.
    ///
    /// Reads the set each concrete type declares alongside its marker traits.
    pub const fn capabilities(self) -> CapabilitySet {
        match self {
            Self::Cui => ConceptUid::CAPABILITIES,
            Self::Aui => AtomUid::CAPABILITIES,
            Self::Sui => StringUid::CAPABILITIES,
            Self::Lui => LexicalUid::CAPABILITIES,
            Self::Tui => SemanticTypeUid::CAPABILITIES,
            Self::Sab => SourceAbbreviation::CAPABILITIES,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Cui => &*concept::CUI_PATTERN,
            Self::Aui => &*atom::AUI_PATTERN,
            Self::Sui => &*string::SUI_PATTERN,
            Self::Lui => &*lexical::LUI_PATTERN,
            Self::Tui => &*semantic_type::TUI_PATTERN,
            Self::Sab => &*source::SAB_PATTERN,
        }
    }

    /// Returns true if `raw` matches this kind's format in full.
    pub fn matches(self, raw: &str) -> bool {
        self.pattern().is_match(raw)
    }

    /// Validates `raw` as this kind of identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use umls_types::UidKind;
    ///
    /// let uid = UidKind::Lui.parse("L0000001").unwrap();
    /// assert_eq!(uid.key_name(), "LUI");
    /// assert!(UidKind::Lui.parse("L01").is_err());
    /// ```
    pub fn parse(self, raw: &str) -> UidResult<AnyUid> {
        Ok(match self {
            Self::Cui => AnyUid::Cui(ConceptUid::from_string(raw)?),
            Self::Aui => AnyUid::Aui(AtomUid::from_string(raw)?),
            Self::Sui => AnyUid::Sui(StringUid::from_string(raw)?),
            Self::Lui => AnyUid::Lui(LexicalUid::from_string(raw)?),
            Self::Tui => AnyUid::Tui(SemanticTypeUid::from_string(raw)?),
            Self::Sab => AnyUid::Sab(SourceAbbreviation::from_string(raw)?),
        })
    }

    /// Returns every kind whose format accepts `raw`.
    ///
    /// Formats overlap (a CUI and a SUI share one), so more than one kind may
    /// be returned.
    ///
    /// ```
    /// use umls_types::UidKind;
    ///
    /// assert_eq!(UidKind::detect("A1234567"), vec![UidKind::Aui, UidKind::Sab]);
    /// assert!(UidKind::detect("not an id").is_empty());
    /// ```
    pub fn detect(raw: &str) -> Vec<UidKind> {
        Self::ALL.into_iter().filter(|kind| kind.matches(raw)).collect()
    }
}

impl fmt::Display for UidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

/// An identifier of any kind.
///
/// Two values are equal only if they hold the same kind and the same string,
/// so a CUI and a SUI with identical text are distinct.
///
/// # Examples
///
/// ```
/// use umls_types::{AnyUid, ConceptUid, StringUid};
///
/// let cui = AnyUid::from(ConceptUid::from_string("C1234567").unwrap());
/// let sui = AnyUid::from(StringUid::from_string("C1234567").unwrap());
/// assert_eq!(cui.value(), sui.value());
/// assert_ne!(cui, sui);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "UPPERCASE")
)]
pub enum AnyUid {
    /// A concept identifier.
    Cui(ConceptUid),
    /// An atom identifier.
    Aui(AtomUid),
    /// A string identifier.
    Sui(StringUid),
    /// A lexical identifier.
    Lui(LexicalUid),
    /// A semantic type identifier.
    Tui(SemanticTypeUid),
    /// A source abbreviation.
    Sab(SourceAbbreviation),
}

impl AnyUid {
    /// Returns the kind of the held identifier.
    pub fn kind(&self) -> UidKind {
        match self {
            Self::Cui(_) => UidKind::Cui,
            Self::Aui(_) => UidKind::Aui,
            Self::Sui(_) => UidKind::Sui,
            Self::Lui(_) => UidKind::Lui,
            Self::Tui(_) => UidKind::Tui,
            Self::Sab(_) => UidKind::Sab,
        }
    }

    /// Returns the wrapped identifier string.
    pub fn value(&self) -> &str {
        match self {
            Self::Cui(uid) => uid.value(),
            Self::Aui(uid) => uid.value(),
            Self::Sui(uid) => uid.value(),
            Self::Lui(uid) => uid.value(),
            Self::Tui(uid) => uid.value(),
            Self::Sab(uid) => uid.value(),
        }
    }

    /// Returns the query parameter name the held identifier binds to.
    pub fn key_name(&self) -> &'static str {
        self.kind().key_name()
    }

    /// Returns the query categories the held identifier may be a search key for.
    pub fn capabilities(&self) -> CapabilitySet {
        self.kind().capabilities()
    }

    /// Returns true if the held identifier may be a search key for `capability`.
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }
}

impl fmt::Display for AnyUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl AsRef<str> for AnyUid {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl From<ConceptUid> for AnyUid {
    fn from(uid: ConceptUid) -> Self {
        Self::Cui(uid)
    }
}

impl From<AtomUid> for AnyUid {
    fn from(uid: AtomUid) -> Self {
        Self::Aui(uid)
    }
}

impl From<StringUid> for AnyUid {
    fn from(uid: StringUid) -> Self {
        Self::Sui(uid)
    }
}

impl From<LexicalUid> for AnyUid {
    fn from(uid: LexicalUid) -> Self {
        Self::Lui(uid)
    }
}

impl From<SemanticTypeUid> for AnyUid {
    fn from(uid: SemanticTypeUid) -> Self {
        Self::Tui(uid)
    }
}

impl From<SourceAbbreviation> for AnyUid {
    fn from(uid: SourceAbbreviation) -> Self {
        Self::Sab(uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_are_distinct() {
        for (i, a) in UidKind::ALL.iter().enumerate() {
            for (j, b) in UidKind::ALL.iter().enumerate() {
                if i != j {
                    assert_ne!(a.key_name(), b.key_name(), "Duplicate key name found");
                }
            }
        }
    }

    #[test]
    fn test_key_name_conversion() {
        for kind in UidKind::ALL {
            assert_eq!(UidKind::from_key_name(kind.key_name()), Some(kind));
            assert_eq!(kind.to_string(), kind.key_name());
        }
        assert_eq!(UidKind::from_key_name("cui"), None);
        assert_eq!(UidKind::from_key_name("STR"), None);
    }

    #[test]
    fn test_parse_dispatches_to_kind() {
        let uid = UidKind::Cui.parse("C0011849").unwrap();
        assert_eq!(uid.kind(), UidKind::Cui);
        assert_eq!(uid.value(), "C0011849");
        assert_eq!(uid.key_name(), "CUI");
        assert!(!uid.supports(Capability::CuiQuery));
        assert!(uid.supports(Capability::ParentsQuery));

        let err = UidKind::Sui.parse("L1234567").unwrap_err();
        assert_eq!(err.kind(), UidKind::Sui);
    }

    #[test]
    fn test_cross_kind_values_are_never_equal() {
        let cui = UidKind::Cui.parse("C1234567").unwrap();
        let sui = UidKind::Sui.parse("C1234567").unwrap();
        assert_eq!(cui.value(), sui.value());
        assert_ne!(cui, sui);
        assert_eq!(cui, UidKind::Cui.parse("C1234567").unwrap());
    }

    #[test]
    fn test_detect_overlapping_formats() {
        assert_eq!(
            UidKind::detect("C1234567"),
            vec![UidKind::Cui, UidKind::Sui, UidKind::Sab]
        );
        assert_eq!(UidKind::detect("T047"), vec![UidKind::Tui, UidKind::Sab]);
        assert_eq!(UidKind::detect("MSH"), vec![UidKind::Sab]);
        assert!(UidKind::detect("").is_empty());
    }

    #[test]
    fn test_any_uid_from_conversions() {
        let aui = AtomUid::from_string("A0022525").unwrap();
        let any = AnyUid::from(aui.clone());
        assert_eq!(any, AnyUid::Aui(aui));
        assert_eq!(any.capabilities(), CapabilitySet::ALL);
        assert_eq!(any.to_string(), "A0022525");
        assert_eq!(any.as_ref(), "A0022525");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_any_uid_serde() {
        let any = UidKind::Tui.parse("T047").unwrap();
        let json = serde_json::to_string(&any).unwrap();
        assert_eq!(json, r#"{"kind":"TUI","value":"T047"}"#);
        let parsed: AnyUid = serde_json::from_str(&json).unwrap();
        assert_eq!(any, parsed);

        let bad: Result<AnyUid, _> = serde_json::from_str(r#"{"kind":"TUI","value":"T47"}"#);
        assert!(bad.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_kind_serializes_as_key_name() {
        for kind in UidKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.key_name()));
            let parsed: UidKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }

        let aui = AnyUid::from(AtomUid::from_string("A0022525").unwrap());
        let json = serde_json::to_string(&aui).unwrap();
        assert_eq!(json, r#"{"kind":"AUI","value":"A0022525"}"#);
        assert!(serde_json::from_str::<UidKind>("\"Aui\"").is_err());
    }
}
