//! Documentation links attached to an error.

use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single `(description, url)` pointer to documentation or a console page.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HelpLink {
    description: String,
    url: String,
}

impl HelpLink {
    #[inline]
    pub fn new(description: impl Into<String>, url: impl Into<String>) -> Self {
        Self { description: description.into(), url: url.into() }
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Ordered help links. Rendering preserves insertion order.
///
/// # Examples
///
/// ```
/// use status_rail::{Help, HelpLink};
///
/// let help = Help::new()
///     .with_link("Status Page", "https://status.example.com")
///     .with_link("Support", "https://support.example.com");
///
/// assert_eq!(help.links().len(), 2);
/// assert_eq!(help.links()[0], HelpLink::new("Status Page", "https://status.example.com"));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Help {
    links: ErrorVec<HelpLink>,
}

impl Help {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link, builder style.
    #[inline]
    #[must_use]
    pub fn with_link(mut self, description: impl Into<String>, url: impl Into<String>) -> Self {
        self.push(HelpLink::new(description, url));
        self
    }

    #[inline]
    pub fn links(&self) -> &[HelpLink] {
        &self.links
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[inline]
    pub(crate) fn push(&mut self, link: HelpLink) {
        self.links.push(link);
    }
}

impl FromIterator<HelpLink> for Help {
    fn from_iter<I: IntoIterator<Item = HelpLink>>(iter: I) -> Self {
        Self { links: iter.into_iter().collect() }
    }
}
