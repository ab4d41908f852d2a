//! Preference selector for string queries.

/// Options for the "preferred" parameter of a UMLS string (STR) query.
///
/// # Examples
///
/// ```
/// use umls_types::UmlsPreferred;
///
/// assert_eq!(UmlsPreferred::default(), UmlsPreferred::NoPreference);
/// assert_eq!(UmlsPreferred::Preferred.param_value(), Some("yes"));
/// assert_eq!(UmlsPreferred::from_param(Some("no")), Some(UmlsPreferred::NotPreferred));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UmlsPreferred {
    /// Neither preferred nor not preferred. Equivalent to leaving the
    /// parameter out of the query.
    #[default]
    NoPreference,
    /// Equivalent to setting the parameter to `no`.
    NotPreferred,
    /// Equivalent to setting the parameter to `yes`.
    Preferred,
}

impl UmlsPreferred {
    /// Parameter value for [`UmlsPreferred::NotPreferred`].
    pub const NOT_PREFERRED_PARAM: &'static str = "no";
    /// Parameter value for [`UmlsPreferred::Preferred`].
    pub const PREFERRED_PARAM: &'static str = "yes";

    /// Returns the query parameter value, or `None` if the parameter should be
    /// omitted.
    pub fn param_value(self) -> Option<&'static str> {
        match self {
            Self::NoPreference => None,
            Self::NotPreferred => Some(Self::NOT_PREFERRED_PARAM),
            Self::Preferred => Some(Self::PREFERRED_PARAM),
        }
    }

    /// Creates an UmlsPreferred from a query parameter value.
    ///
    /// An absent parameter means [`UmlsPreferred::NoPreference`]. Returns
    /// `None` for unrecognized values.
    pub fn from_param(value: Option<&str>) -> Option<Self> {
        match value {
            None => Some(Self::NoPreference),
            Some(Self::NOT_PREFERRED_PARAM) => Some(Self::NotPreferred),
            Some(Self::PREFERRED_PARAM) => Some(Self::Preferred),
            Some(_) => None,
        }
    }
}
