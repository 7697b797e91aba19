//! Disclosure tiers for errors and their metadata.

use core::fmt;
use core::str::FromStr;

use crate::types::ParseEnumError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Audience a field may be disclosed to, ordered by increasing scope.
///
/// The crate only tags fields; redaction is left to whatever boundary renders
/// errors for an untrusted audience.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Visibility {
    /// Same service or process only.
    #[default]
    Internal = 0,
    /// Other internal services, never end users.
    Private = 1,
    /// Safe for external users.
    Public = 2,
}

impl Visibility {
    /// Canonical upper-case name, as rendered in `visibility: <NAME>`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Internal => "INTERNAL",
            Visibility::Private => "PRIVATE",
            Visibility::Public => "PUBLIC",
        }
    }

    /// Whether a field tagged with `self` may be shown to `audience`.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::Visibility;
    ///
    /// assert!(Visibility::Public.is_visible_to(Visibility::Public));
    /// assert!(Visibility::Private.is_visible_to(Visibility::Internal));
    /// assert!(!Visibility::Internal.is_visible_to(Visibility::Private));
    /// ```
    #[inline]
    pub fn is_visible_to(self, audience: Visibility) -> bool {
        self >= audience
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INTERNAL" => Ok(Visibility::Internal),
            "PRIVATE" => Ok(Visibility::Private),
            "PUBLIC" => Ok(Visibility::Public),
            other => Err(ParseEnumError::new("visibility", other)),
        }
    }
}
