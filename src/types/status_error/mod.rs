//! The structured, immutable error value.
//!
//! A [`StatusError`] carries everything a caller needs to classify and explain
//! a failure across service boundaries:
//! - a [`Code`] with a fixed status mapping and default message
//! - a `domain`/`reason` identity key
//! - visibility-tagged [`Metadata`]
//! - optional retry guidance, help links, localization and debug info
//! - nested structured causes and one wrapped external error
//!
//! Values are built once through [`StatusErrorBuilder`] and never mutated
//! afterwards; [`StatusError::with_changes`] derives a new value instead.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::traits::ErrorIdentity;
use crate::types::{
    Code, DebugInfo, ErrorVec, Help, LocalizedMessage, Metadata, RetryInfo, Visibility,
};

mod builder;
mod changes;
mod traits;

pub use builder::StatusErrorBuilder;
pub use changes::ErrorChanges;

/// Version of the error model carried by every value.
pub const SPEC_VERSION: u32 = 1;

/// Opaque external error kept for chain interoperation.
pub type WrappedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Immutable structured error.
///
/// Two values describe the same kind of failure iff their domain and reason
/// match; see [`StatusError::is_same_kind`].
///
/// # Examples
///
/// ```
/// use status_rail::{Code, StatusError, Visibility};
///
/// let err = StatusError::builder("shopify.users", "NOT_FOUND")
///     .code(Code::NotFound)
///     .metadata_value(Visibility::Public, "userId", "123")
///     .build();
///
/// assert_eq!(err.message(), "resource not found");
/// assert!(err.to_string().contains("    - userId: 123 visibility=PUBLIC"));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct StatusError {
    pub(crate) spec_version: u32,
    pub(crate) code: Code,
    pub(crate) message: String,
    pub(crate) domain: Cow<'static, str>,
    pub(crate) reason: Cow<'static, str>,
    pub(crate) metadata: Metadata,
    pub(crate) causes: ErrorVec<Arc<StatusError>>,
    pub(crate) visibility: Visibility,
    pub(crate) subject: String,
    pub(crate) id: String,
    pub(crate) time: Option<DateTime<Utc>>,
    pub(crate) help: Option<Help>,
    pub(crate) debug_info: Option<DebugInfo>,
    pub(crate) localized_message: Option<LocalizedMessage>,
    pub(crate) retry_info: Option<RetryInfo>,
    pub(crate) source_id: String,
    pub(crate) wrapped: Option<WrappedError>,
}

impl StatusError {
    /// Creates an error with every option at its default:
    /// [`Code::Unknown`], empty message, [`Visibility::Internal`].
    #[inline]
    pub fn new(domain: impl Into<Cow<'static, str>>, reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            spec_version: SPEC_VERSION,
            code: Code::Unknown,
            message: String::new(),
            domain: domain.into(),
            reason: reason.into(),
            metadata: Metadata::new(),
            causes: ErrorVec::new(),
            visibility: Visibility::Internal,
            subject: String::new(),
            id: String::new(),
            time: None,
            help: None,
            debug_info: None,
            localized_message: None,
            retry_info: None,
            source_id: String::new(),
            wrapped: None,
        }
    }

    /// Starts building an error. Options apply in call order; later scalar
    /// options override earlier ones, metadata and help links accumulate.
    #[inline]
    pub fn builder(
        domain: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> StatusErrorBuilder {
        StatusErrorBuilder::from_error(Self::new(domain, reason))
    }

    /// Returns a new error equal to `self` except for what `f` changes.
    ///
    /// The receiver is never touched: metadata is copied into a fresh map, help
    /// links and debug frames into fresh sequences, and causes share their
    /// nested errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::{StatusError, Visibility};
    ///
    /// let base = StatusError::builder("shop.orders", "ORDER_LOCKED")
    ///     .metadata_value(Visibility::Public, "orderId", "42")
    ///     .build();
    ///
    /// let derived = base.with_changes(|c| {
    ///     c.id("err_123").metadata_value(Visibility::Private, "shard", "eu-1")
    /// });
    ///
    /// assert_eq!(derived.id(), Some("err_123"));
    /// assert_eq!(derived.metadata().len(), 2);
    /// assert_eq!(base.id(), None);
    /// assert_eq!(base.metadata().len(), 1);
    /// ```
    pub fn with_changes<F>(&self, f: F) -> StatusError
    where
        F: FnOnce(ErrorChanges) -> ErrorChanges,
    {
        f(ErrorChanges::new(self.clone())).finish()
    }

    #[inline]
    pub fn spec_version(&self) -> u32 {
        self.spec_version
    }

    #[inline]
    pub fn code(&self) -> Code {
        self.code
    }

    /// The explicit message, or the code's default message when none was set.
    #[inline]
    pub fn message(&self) -> &str {
        if self.message.is_empty() {
            self.code.message()
        } else {
            &self.message
        }
    }

    #[inline]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Structured nested causes. These are not part of [`std::error::Error::source`].
    #[inline]
    pub fn causes(&self) -> &[Arc<StatusError>] {
        &self.causes
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Locator of the offending input, such as a field path.
    #[inline]
    pub fn subject(&self) -> Option<&str> {
        non_empty(&self.subject)
    }

    /// Correlation identifier of this occurrence.
    #[inline]
    pub fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    #[inline]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    #[inline]
    pub fn help(&self) -> Option<&Help> {
        self.help.as_ref()
    }

    #[inline]
    pub fn debug_info(&self) -> Option<&DebugInfo> {
        self.debug_info.as_ref()
    }

    #[inline]
    pub fn localized_message(&self) -> Option<&LocalizedMessage> {
        self.localized_message.as_ref()
    }

    #[inline]
    pub fn retry_info(&self) -> Option<RetryInfo> {
        self.retry_info
    }

    /// Identifier of the component that produced the error.
    #[inline]
    pub fn source_id(&self) -> Option<&str> {
        non_empty(&self.source_id)
    }

    /// The wrapped external error, if any.
    #[inline]
    pub fn wrapped(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.wrapped.as_deref()
    }

    /// Whether `other` describes the same kind of failure (equal domain and reason).
    #[inline]
    pub fn is_same_kind<O: ErrorIdentity + ?Sized>(&self, other: &O) -> bool {
        self.domain() == other.domain() && self.reason() == other.reason()
    }

    /// Chain-aware identity check against an arbitrary error.
    ///
    /// A [`StatusError`] target matches on domain and reason alone. Any other
    /// target is looked up along the wrapped chain, where a layer matches when
    /// it is the very same error object.
    pub fn is(&self, target: &(dyn std::error::Error + 'static)) -> bool {
        if let Some(other) = target.downcast_ref::<StatusError>() {
            return self.is_same_kind(other);
        }

        let mut current = std::error::Error::source(self);
        while let Some(layer) = current {
            if core::ptr::addr_eq(layer as *const dyn std::error::Error, target as *const _) {
                return true;
            }
            current = layer.source();
        }
        false
    }
}

#[inline]
fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
