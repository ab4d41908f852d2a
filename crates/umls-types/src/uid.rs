//! Base abstraction shared by every UMLS identifier kind.
//!
//! Every identifier wraps a string that has already been checked against its
//! kind's format. Instances are immutable, and two instances are equal only if
//! they are the same kind and wrap the same string.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::{CapabilitySet, MalformedUidError, UidKind, UidResult};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A validated UMLS unique identifier.
///
/// This trait is sealed: only the identifier kinds defined in this crate
/// implement it, and instances can only be obtained through each kind's
/// validating factory (`from_string`, [`FromStr`], or `TryFrom`).
///
/// Code that must accept several kinds is written against this trait, or more
/// often against one of the capability roles in [`crate::capability`].
///
/// # Examples
///
/// ```
/// use umls_types::{ConceptUid, UmlsSearchUid};
///
/// fn describe<K: UmlsSearchUid>(uid: &K) -> String {
///     format!("{}={}", uid.key_name(), uid.value())
/// }
///
/// let cui: ConceptUid = "C0011849".parse().unwrap();
/// assert_eq!(describe(&cui), "CUI=C0011849");
/// ```
pub trait UmlsSearchUid:
    sealed::Sealed
    + Clone
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + AsRef<str>
    + FromStr<Err = MalformedUidError>
    + Send
    + Sync
    + 'static
{
    /// The identifier kind implemented by this type.
    const KIND: UidKind;

    /// Returns the wrapped identifier string.
    fn value(&self) -> &str;

    /// Returns the query parameter name this identifier binds to.
    fn key_name(&self) -> &'static str {
        Self::KIND.key_name()
    }

    /// Returns the query categories this identifier may be a search key for.
    fn capabilities(&self) -> CapabilitySet {
        Self::KIND.capabilities()
    }
}

/// Checks `raw` against the full format of `kind`.
pub(crate) fn validate(kind: UidKind, raw: &str) -> UidResult<()> {
    if kind.matches(raw) {
        tracing::trace!(kind = kind.key_name(), raw, "accepted identifier");
        Ok(())
    } else {
        tracing::debug!(
            kind = kind.key_name(),
            raw,
            expected = kind.format(),
            "rejected malformed identifier"
        );
        Err(MalformedUidError::new(kind, raw))
    }
}

/// Implements the shared identifier plumbing for a `struct Kind(String)`.
///
/// `roles` is the only place a kind's capability roles are declared: the
/// marker trait impls and `CAPABILITIES` are both generated from it. The kind's
/// own module provides the pattern and `from_string`.
macro_rules! impl_search_uid {
    ($ty:ident, $kind:expr, roles: [$($role:ident),* $(,)?]) => {
        impl $ty {
            /// The identifier kind of this type.
            pub const KIND: $crate::UidKind = $kind;

            /// The query parameter name this kind binds to.
            pub const KEY_NAME: &'static str = $kind.key_name();

            /// The query categories this kind may be a search key for.
            pub const CAPABILITIES: $crate::CapabilitySet =
                $crate::CapabilitySet::of(&[$($crate::Capability::$role),*]);

            /// Returns the wrapped identifier string.
            pub fn value(&self) -> &str {
                &self.0
            }

            /// Returns the query parameter name this identifier binds to.
            pub fn key_name(&self) -> &'static str {
                Self::KEY_NAME
            }

            /// Consumes the identifier and returns the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl $crate::uid::sealed::Sealed for $ty {}

        $($crate::capability::impl_role!($ty, $role);)*

        impl $crate::UmlsSearchUid for $ty {
            const KIND: $crate::UidKind = $kind;

            fn value(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::MalformedUidError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::MalformedUidError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::from_string(value)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = $crate::MalformedUidError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $crate::uid::validate($kind, &value)?;
                Ok(Self(value))
            }
        }

        impl From<$ty> for String {
            fn from(uid: $ty) -> String {
                uid.0
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                // Only the empty AUI sentinel can hold an empty value.
                if self.0.is_empty() {
                    return Err(serde::ser::Error::custom(format_args!(
                        "empty {} placeholder cannot be serialized",
                        Self::KEY_NAME
                    )));
                }
                serializer.serialize_str(&self.0)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::try_from(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_search_uid;
