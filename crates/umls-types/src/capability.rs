//! Capability roles: which identifier kinds may key which query category.
//!
//! Each role is a marker trait with no methods. An identifier kind implements
//! exactly the roles for the queries it may be used as a search key in, so a
//! query builder written as `fn get_str<K: StrQuerySearchUid>(key: &K)` rejects
//! unsuitable kinds at compile time:
//!
//! ```
//! use umls_types::{AtomUid, ConceptUid, StrQuerySearchUid};
//!
//! fn str_key<K: StrQuerySearchUid>(key: &K) -> (&'static str, &str) {
//!     (key.key_name(), key.value())
//! }
//!
//! let cui = ConceptUid::from_string("C0011849").unwrap();
//! let aui = AtomUid::from_string("A0022525").unwrap();
//! assert_eq!(str_key(&cui), ("CUI", "C0011849"));
//! assert_eq!(str_key(&aui), ("AUI", "A0022525"));
//! ```
//!
//! A string identifier is only a concept-query key, so this does not compile:
//!
//! ```compile_fail
//! use umls_types::{StrQuerySearchUid, StringUid};
//!
//! fn str_key<K: StrQuerySearchUid>(key: &K) -> &str {
//!     key.value()
//! }
//!
//! let sui = StringUid::from_string("C1234567").unwrap();
//! str_key(&sui);
//! ```
//!
//! The same roles are also available as runtime values ([`Capability`] and
//! [`CapabilitySet`]) for code that handles identifiers dynamically through
//! [`crate::AnyUid`].

use std::fmt;

use crate::UmlsSearchUid;

/// Identifiers usable as the search key of a concept (CUI) query.
pub trait CuiQuerySearchUid: UmlsSearchUid {}

/// Identifiers usable as the search key of an atom (AUI) query.
pub trait AuiQuerySearchUid: UmlsSearchUid {}

/// Identifiers usable as the search key of a string (STR) query.
pub trait StrQuerySearchUid: UmlsSearchUid {}

/// Identifiers usable as the search key of a semantic type (TUI) query.
pub trait TuiQuerySearchUid: UmlsSearchUid {}

/// Identifiers usable as the search key of a source (SAB) query.
pub trait SabQuerySearchUid: UmlsSearchUid {}

/// Identifiers whose parents can be looked up.
pub trait ParentsQuerySearchUid: UmlsSearchUid {}

/// Identifiers whose neighbors can be looked up.
pub trait NeighborQuerySearchUid: UmlsSearchUid {}

/// Identifiers usable as the search key of a map-to-id query.
pub trait MapToIdQuerySearchUid: UmlsSearchUid {}

/// Identifiers usable as the search key of a terminology code query.
pub trait CodeQuerySearchUid: UmlsSearchUid {}

/// Implements the marker trait matching a [`Capability`] variant name.
macro_rules! impl_role {
    ($ty:ident, CuiQuery) => {
        impl $crate::capability::CuiQuerySearchUid for $ty {}
    };
    ($ty:ident, AuiQuery) => {
        impl $crate::capability::AuiQuerySearchUid for $ty {}
    };
    ($ty:ident, StrQuery) => {
        impl $crate::capability::StrQuerySearchUid for $ty {}
    };
    ($ty:ident, TuiQuery) => {
        impl $crate::capability::TuiQuerySearchUid for $ty {}
    };
    ($ty:ident, SabQuery) => {
        impl $crate::capability::SabQuerySearchUid for $ty {}
    };
    ($ty:ident, ParentsQuery) => {
        impl $crate::capability::ParentsQuerySearchUid for $ty {}
    };
    ($ty:ident, NeighborQuery) => {
        impl $crate::capability::NeighborQuerySearchUid for $ty {}
    };
    ($ty:ident, MapToIdQuery) => {
        impl $crate::capability::MapToIdQuerySearchUid for $ty {}
    };
    ($ty:ident, CodeQuery) => {
        impl $crate::capability::CodeQuerySearchUid for $ty {}
    };
}

pub(crate) use impl_role;

/// A query category an identifier may be a search key for.
///
/// Mirrors the marker traits above one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    /// [`CuiQuerySearchUid`]
    CuiQuery,
    /// [`AuiQuerySearchUid`]
    AuiQuery,
    /// [`StrQuerySearchUid`]
    StrQuery,
    /// [`TuiQuerySearchUid`]
    TuiQuery,
    /// [`SabQuerySearchUid`]
    SabQuery,
    /// [`ParentsQuerySearchUid`]
    ParentsQuery,
    /// [`NeighborQuerySearchUid`]
    NeighborQuery,
    /// [`MapToIdQuerySearchUid`]
    MapToIdQuery,
    /// [`CodeQuerySearchUid`]
    CodeQuery,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 9] = [
        Self::CuiQuery,
        Self::AuiQuery,
        Self::StrQuery,
        Self::TuiQuery,
        Self::SabQuery,
        Self::ParentsQuery,
        Self::NeighborQuery,
        Self::MapToIdQuery,
        Self::CodeQuery,
    ];

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Returns a short name for the query category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CuiQuery => "cui",
            Self::AuiQuery => "aui",
            Self::StrQuery => "str",
            Self::TuiQuery => "tui",
            Self::SabQuery => "sab",
            Self::ParentsQuery => "parents",
            Self::NeighborQuery => "neighbors",
            Self::MapToIdQuery => "map-to-id",
            Self::CodeQuery => "code",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`Capability`] values, stored as a bitset.
///
/// # Examples
///
/// ```
/// use umls_types::{AtomUid, Capability, CapabilitySet, StringUid};
///
/// assert_eq!(AtomUid::CAPABILITIES, CapabilitySet::ALL);
/// assert!(StringUid::CAPABILITIES.contains(Capability::CuiQuery));
/// assert!(!StringUid::CAPABILITIES.contains(Capability::StrQuery));
/// assert_eq!(StringUid::CAPABILITIES.len(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapabilitySet(u16);

impl CapabilitySet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set of all nine capabilities.
    pub const ALL: Self = Self::of(&Capability::ALL);

    /// Builds a set from a slice of capabilities.
    pub const fn of(capabilities: &[Capability]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < capabilities.len() {
            bits |= capabilities[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Returns a copy of this set with `capability` added.
    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    /// Returns a copy of this set with `capability` removed.
    pub const fn without(self, capability: Capability) -> Self {
        Self(self.0 & !capability.bit())
    }

    /// Returns true if `capability` is in the set.
    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Returns the number of capabilities in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the capabilities in the set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, capability) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", capability)?;
        }
        f.write_str("}")
    }
}
