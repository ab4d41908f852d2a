//! # umls-types
//!
//! Validated identifier types for UMLS (Unified Medical Language System)
//! terminology queries.
//!
//! Every identifier kind (concept, atom, string, lexical, semantic type and
//! source abbreviation) is its own type. Values can only be built through a
//! validating factory, so any identifier in circulation matches its kind's
//! format. Capability marker traits declare which kinds may be the search key
//! of which query, letting query builders reject the wrong kind at compile
//! time.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Identifiers serialize as their raw string and are validated again on
//!   deserialization.
//!
//! ## Usage
//!
//! ```rust
//! use umls_types::{AtomUid, CuiQuerySearchUid, StringUid, UmlsPreferred};
//!
//! // A query builder that accepts any concept-query key
//! fn cui_query<K: CuiQuerySearchUid>(key: &K) -> String {
//!     format!("{}={}", key.key_name(), key.value())
//! }
//!
//! let sui = StringUid::from_string("C1234567").unwrap();
//! let aui = AtomUid::from_string("A12345678").unwrap();
//! assert_eq!(cui_query(&sui), "SUI=C1234567");
//! assert_eq!(cui_query(&aui), "AUI=A12345678");
//!
//! // Malformed input is rejected with a kind-specific message
//! let err = StringUid::from_string("C123456").unwrap_err();
//! assert!(err.to_string().contains("String Unique Identifier"));
//!
//! assert_eq!(UmlsPreferred::Preferred.param_value(), Some("yes"));
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! umls-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod uid;

mod atom;
pub mod capability;
mod concept;
mod error;
mod kind;
mod lexical;
mod preferred;
mod semantic_type;
mod source;
mod string;

// Re-export all public types at crate root
pub use atom::AtomUid;
pub use capability::{
    AuiQuerySearchUid, Capability, CapabilitySet, CodeQuerySearchUid, CuiQuerySearchUid,
    MapToIdQuerySearchUid, NeighborQuerySearchUid, ParentsQuerySearchUid, SabQuerySearchUid,
    StrQuerySearchUid, TuiQuerySearchUid,
};
pub use concept::ConceptUid;
pub use error::{MalformedUidError, UidResult};
pub use kind::{AnyUid, UidKind};
pub use lexical::LexicalUid;
pub use preferred::UmlsPreferred;
pub use semantic_type::SemanticTypeUid;
pub use source::SourceAbbreviation;
pub use string::StringUid;
pub use uid::UmlsSearchUid;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_types_are_exported() {
        // Verify all types are accessible from crate root
        let _kind = UidKind::Cui;
        let _capability = Capability::CodeQuery;
        let _set = CapabilitySet::ALL;
        let _preferred = UmlsPreferred::NoPreference;
        let _empty: &AtomUid = AtomUid::empty();
    }

    #[test]
    fn test_types_are_thread_safe() {
        assert_send_sync::<ConceptUid>();
        assert_send_sync::<AtomUid>();
        assert_send_sync::<StringUid>();
        assert_send_sync::<LexicalUid>();
        assert_send_sync::<SemanticTypeUid>();
        assert_send_sync::<SourceAbbreviation>();
        assert_send_sync::<AnyUid>();
        assert_send_sync::<MalformedUidError>();
    }

    #[test]
    fn test_key_name_constants() {
        assert_eq!(ConceptUid::KEY_NAME, "CUI");
        assert_eq!(AtomUid::KEY_NAME, "AUI");
        assert_eq!(StringUid::KEY_NAME, "SUI");
        assert_eq!(LexicalUid::KEY_NAME, "LUI");
        assert_eq!(SemanticTypeUid::KEY_NAME, "TUI");
        assert_eq!(SourceAbbreviation::KEY_NAME, "SAB");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let aui = AtomUid::from_string("A12345678").unwrap();
        let json = serde_json::to_string(&aui).unwrap();
        let parsed: AtomUid = serde_json::from_str(&json).unwrap();
        assert_eq!(aui, parsed);
    }
}
