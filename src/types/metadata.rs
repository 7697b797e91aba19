use std::collections::BTreeMap;

use crate::types::Visibility;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key/value metadata attached to an error. Keys are unique and iterate in ascending order.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A metadata value together with the audience it may be disclosed to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetadataValue {
    value: String,
    visibility: Visibility,
}

impl MetadataValue {
    #[inline]
    pub fn new(visibility: Visibility, value: impl Into<String>) -> Self {
        Self { value: value.into(), visibility }
    }

    /// Shorthand for an [`Visibility::Internal`] value.
    #[inline]
    pub fn internal(value: impl Into<String>) -> Self {
        Self::new(Visibility::Internal, value)
    }

    #[inline]
    pub fn private(value: impl Into<String>) -> Self {
        Self::new(Visibility::Private, value)
    }

    #[inline]
    pub fn public(value: impl Into<String>) -> Self {
        Self::new(Visibility::Public, value)
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}
