//! Reusable error families.
//!
//! An [`ErrorTemplate`] fixes the identity key and the shape shared by every
//! occurrence of one failure (code, message, visibility, help). It stamps new
//! [`StatusError`] values and classifies existing ones, but is not an error
//! itself.
//!
//! # Examples
//!
//! ```
//! use status_rail::{Code, ErrorTemplate, Visibility};
//!
//! let order_locked = ErrorTemplate::builder("shopify.orders", "ORDER_LOCKED")
//!     .code(Code::FailedPrecondition)
//!     .message("order is locked for editing")
//!     .visibility(Visibility::Public)
//!     .help_link("Order locking", "https://shopify.dev/docs/orders/locking")
//!     .build();
//!
//! let err = order_locked.new_error_with(|b| {
//!     b.metadata_value(Visibility::Public, "orderId", "42")
//!         .help_link("Status page", "https://status.shopify.com")
//! });
//!
//! assert_eq!(err.code(), Code::FailedPrecondition);
//! assert_eq!(err.help().map(|h| h.links().len()), Some(2));
//! assert!(order_locked.is(&err));
//! ```

use std::borrow::Cow;

use crate::traits::ErrorIdentity;
use crate::types::{Code, Help, HelpLink, StatusError, StatusErrorBuilder, Visibility};

/// Factory and identity predicate for one family of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTemplate {
    domain: Cow<'static, str>,
    reason: Cow<'static, str>,
    code: Code,
    message: String,
    visibility: Visibility,
    help: Option<Help>,
}

impl ErrorTemplate {
    /// Creates a template with [`Code::Unknown`], no message and
    /// [`Visibility::Internal`].
    pub fn new(domain: impl Into<Cow<'static, str>>, reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            domain: domain.into(),
            reason: reason.into(),
            code: Code::Unknown,
            message: String::new(),
            visibility: Visibility::Internal,
            help: None,
        }
    }

    /// Starts configuring a template.
    #[inline]
    pub fn builder(
        domain: impl Into<Cow<'static, str>>,
        reason: impl Into<Cow<'static, str>>,
    ) -> ErrorTemplateBuilder {
        ErrorTemplateBuilder { template: Self::new(domain, reason) }
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
    pub fn code(&self) -> Code {
        self.code
    }

    /// The configured default message; empty when none was set.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub fn help(&self) -> Option<&Help> {
        self.help.as_ref()
    }

    /// A [`StatusErrorBuilder`] preloaded with this template's baseline.
    ///
    /// Options applied afterwards override the baseline scalars and append to
    /// its help links.
    pub fn error_builder(&self) -> StatusErrorBuilder {
        let mut builder = StatusError::builder(self.domain.clone(), self.reason.clone())
            .code(self.code)
            .visibility(self.visibility);
        if !self.message.is_empty() {
            builder = builder.message(self.message.clone());
        }
        if let Some(help) = &self.help {
            builder = builder.help(help.clone());
        }
        builder
    }

    /// Stamps a new error carrying only the template baseline.
    #[inline]
    pub fn new_error(&self) -> StatusError {
        self.error_builder().build()
    }

    /// Stamps a new error, applying instance options after the baseline.
    #[inline]
    pub fn new_error_with<F>(&self, options: F) -> StatusError
    where
        F: FnOnce(StatusErrorBuilder) -> StatusErrorBuilder,
    {
        options(self.error_builder()).build()
    }

    /// Whether `error` itself is a [`StatusError`] of this family.
    ///
    /// Wrapping layers are not looked through; see [`crate::chain::find`].
    #[inline]
    pub fn is(&self, error: &(dyn std::error::Error + 'static)) -> bool {
        self.matches(error)
    }

    /// First error of this family along the `source()` chain of `error`.
    #[inline]
    pub fn find_in<'a>(&self, error: &'a (dyn std::error::Error + 'static)) -> Option<&'a StatusError> {
        crate::chain::find(error, self)
    }
}

impl ErrorIdentity for ErrorTemplate {
    #[inline]
    fn domain(&self) -> &str {
        &self.domain
    }

    #[inline]
    fn reason(&self) -> &str {
        &self.reason
    }
}

/// Configures an [`ErrorTemplate`].
#[must_use]
#[derive(Debug, Clone)]
pub struct ErrorTemplateBuilder {
    template: ErrorTemplate,
}

impl ErrorTemplateBuilder {
    #[inline]
    pub fn code(mut self, code: Code) -> Self {
        self.template.code = code;
        self
    }

    #[inline]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.template.message = message.into();
        self
    }

    #[inline]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.template.visibility = visibility;
        self
    }

    /// Replaces all help links.
    #[inline]
    pub fn help(mut self, help: Help) -> Self {
        self.template.help = Some(help);
        self
    }

    /// Appends a help link.
    #[inline]
    pub fn help_link(mut self, description: impl Into<String>, url: impl Into<String>) -> Self {
        self.template.help.get_or_insert_with(Help::new).push(HelpLink::new(description, url));
        self
    }

    #[inline]
    pub fn build(self) -> ErrorTemplate {
        self.template
    }
}
