#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single caller-supplied translation of the error message.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedMessage {
    locale: String,
    message: String,
}

impl LocalizedMessage {
    #[inline]
    pub fn new(locale: impl Into<String>, message: impl Into<String>) -> Self {
        Self { locale: locale.into(), message: message.into() }
    }

    /// Locale identifier such as `en-US`.
    #[inline]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}
