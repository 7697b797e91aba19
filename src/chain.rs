//! Walking `source()` chains for structured errors.
//!
//! Errors travel through arbitrary wrapping layers, such as hand-written
//! wrappers or other `StatusError`s. These helpers look through
//! every layer for the first [`StatusError`] whose identity matches an
//! exemplar, the way `downcast_ref` does for a single layer.
//!
//! # Examples
//!
//! ```
//! use status_rail::{chain, ErrorTemplate, StatusError};
//!
//! let not_found = ErrorTemplate::new("shopify.users", "NOT_FOUND");
//! let err = StatusError::builder("shopify.api", "UPSTREAM_FAILED")
//!     .wrap(not_found.new_error())
//!     .build();
//!
//! let found = chain::find(&err, &not_found);
//! assert_eq!(found.map(StatusError::reason), Some("NOT_FOUND"));
//! assert!(!chain::is(&err, &ErrorTemplate::new("shopify.users", "GONE")));
//! ```

use core::iter::FusedIterator;
use std::error::Error;

use crate::traits::ErrorIdentity;
use crate::types::StatusError;

/// Iterator over an error and its `source()` ancestors, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

impl core::fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Chain").field("next", &self.next.map(|e| e.to_string())).finish()
    }
}

/// Iterates `error` and every layer below it.
#[inline]
pub fn iter<'a>(error: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(error) }
}

/// First layer that is a [`StatusError`] with the exemplar's domain and reason.
///
/// Never fails: a chain without a match yields `None`.
pub fn find<'a, I>(error: &'a (dyn Error + 'static), exemplar: &I) -> Option<&'a StatusError>
where
    I: ErrorIdentity + ?Sized,
{
    iter(error)
        .filter_map(|layer| layer.downcast_ref::<StatusError>())
        .find(|status| exemplar.same_identity(*status))
}

/// Whether any layer of `error` matches the exemplar.
#[inline]
pub fn is<I>(error: &(dyn Error + 'static), exemplar: &I) -> bool
where
    I: ErrorIdentity + ?Sized,
{
    find(error, exemplar).is_some()
}
