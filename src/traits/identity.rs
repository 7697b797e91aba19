//! Domain/reason identity shared by errors and templates.
//!
//! Two errors describe the same kind of failure when their `domain` and
//! `reason` are equal; code, message and every per-occurrence field are
//! ignored. Templates expose the same key so that a template can serve as the
//! exemplar when classifying errors read back from a chain.
//!
//! # Examples
//!
//! ```
//! use status_rail::traits::ErrorIdentity;
//! use status_rail::{ErrorTemplate, StatusError};
//!
//! let not_found = ErrorTemplate::new("shopify.users", "NOT_FOUND");
//! let err = StatusError::new("shopify.users", "NOT_FOUND");
//!
//! assert!(not_found.same_identity(&err));
//! assert!(not_found.matches(&err));
//! ```

use crate::types::StatusError;

/// Anything with a `domain`/`reason` identity key.
pub trait ErrorIdentity {
    /// Namespace of the reason, e.g. `"shopify.users"`.
    fn domain(&self) -> &str;

    /// Short identifier unique within the domain, e.g. `"NOT_FOUND"`.
    fn reason(&self) -> &str;

    /// Whether `other` carries the same identity key.
    #[inline]
    fn same_identity<O: ErrorIdentity + ?Sized>(&self, other: &O) -> bool {
        self.domain() == other.domain() && self.reason() == other.reason()
    }

    /// Whether `error` is a [`StatusError`] with the same identity key.
    ///
    /// Only the value itself is inspected; use [`crate::chain::is`] to search a
    /// whole chain.
    #[inline]
    fn matches(&self, error: &(dyn std::error::Error + 'static)) -> bool {
        error.downcast_ref::<StatusError>().is_some_and(|status| self.same_identity(status))
    }
}

impl<T: ErrorIdentity + ?Sized> ErrorIdentity for &T {
    #[inline]
    fn domain(&self) -> &str {
        (**self).domain()
    }

    #[inline]
    fn reason(&self) -> &str {
        (**self).reason()
    }
}
