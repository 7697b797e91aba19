use core::fmt::{self, Display};
use core::time::Duration;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{StatusError, WrappedError};
use crate::types::debug_info::{capture_stack, DEFAULT_STACK_DEPTH};
use crate::types::{
    Code, DebugInfo, Help, HelpLink, LocalizedMessage, MetadataValue, RetryInfo, Visibility,
};

/// Option pipeline for [`StatusError`].
///
/// Every option is total: empty strings and other degenerate inputs are stored
/// as given. Scalar options overwrite, metadata and help links accumulate, and
/// the two retry options replace each other.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use status_rail::{Code, StatusError, Visibility};
///
/// let err = StatusError::builder("shopify.api", "RATE_LIMIT_EXCEEDED")
///     .code(Code::ResourceExhausted)
///     .message("API rate limit exceeded")
///     .retry_offset(Duration::from_secs(60))
///     .metadata_value(Visibility::Public, "limit", "1000")
///     .build();
///
/// assert!(err.to_string().contains("retryInfo: retryOffset=1m0s"));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct StatusErrorBuilder {
    error: StatusError,
}

impl StatusErrorBuilder {
    #[inline]
    pub(crate) fn from_error(error: StatusError) -> Self {
        Self { error }
    }

    /// Finishes the pipeline.
    #[inline]
    pub fn build(self) -> StatusError {
        self.error
    }

    /// Applies a reusable option function.
    ///
    /// ```
    /// use status_rail::{StatusError, StatusErrorBuilder, Visibility};
    ///
    /// fn tenant(id: &str) -> impl FnOnce(StatusErrorBuilder) -> StatusErrorBuilder + '_ {
    ///     move |b| b.metadata_value(Visibility::Private, "tenant", id)
    /// }
    ///
    /// let err = StatusError::builder("billing", "QUOTA").apply(tenant("t-1")).build();
    /// assert_eq!(err.metadata()["tenant"].value(), "t-1");
    /// ```
    #[inline]
    pub fn apply<F>(self, option: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        option(self)
    }

    #[inline]
    pub fn code(mut self, code: Code) -> Self {
        self.error.code = code;
        self
    }

    /// Sets the message. An empty message falls back to the code's default.
    #[inline]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.error.message = message.into();
        self
    }

    /// Uses another error's rendered text as the message.
    #[inline]
    pub fn error_message<E: Display + ?Sized>(mut self, error: &E) -> Self {
        self.error.message = error.to_string();
        self
    }

    /// Merges entries into the metadata; existing keys are overwritten.
    pub fn metadata<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, MetadataValue)>,
        K: Into<String>,
    {
        self.error.metadata.extend(entries.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    #[inline]
    pub fn metadata_value(
        mut self,
        visibility: Visibility,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.error.metadata.insert(key.into(), MetadataValue::new(visibility, value));
        self
    }

    /// Like [`metadata_value`](Self::metadata_value) with a formatted value.
    ///
    /// ```
    /// use status_rail::{StatusError, Visibility};
    ///
    /// let order = 5432109876u64;
    /// let err = StatusError::builder("shopify.orders", "LOCKED")
    ///     .metadata_value_fmt(Visibility::Public, "orderId", format_args!("gid://shopify/Order/{order}"))
    ///     .build();
    /// assert_eq!(err.metadata()["orderId"].value(), "gid://shopify/Order/5432109876");
    /// ```
    #[inline]
    pub fn metadata_value_fmt(
        self,
        visibility: Visibility,
        key: impl Into<String>,
        value: fmt::Arguments<'_>,
    ) -> Self {
        self.metadata_value(visibility, key, std::fmt::format(value))
    }

    #[inline]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.error.visibility = visibility;
        self
    }

    #[inline]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.error.subject = subject.into();
        self
    }

    #[inline]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.error.id = id.into();
        self
    }

    #[inline]
    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.error.time = Some(time);
        self
    }

    /// Stamps the current wall-clock time.
    #[inline]
    pub fn time_now(self) -> Self {
        self.time(Utc::now())
    }

    #[inline]
    pub fn source_id(mut self, source_id: impl Into<String>) -> Self {
        self.error.source_id = source_id.into();
        self
    }

    /// Replaces all help links.
    #[inline]
    pub fn help(mut self, help: Help) -> Self {
        self.error.help = Some(help);
        self
    }

    /// Appends a help link after any existing ones.
    #[inline]
    pub fn help_link(mut self, description: impl Into<String>, url: impl Into<String>) -> Self {
        self.error.help.get_or_insert_with(Help::new).push(HelpLink::new(description, url));
        self
    }

    #[inline]
    pub fn help_link_fmt(self, description: impl Into<String>, url: fmt::Arguments<'_>) -> Self {
        self.help_link(description, std::fmt::format(url))
    }

    /// Replaces the debug info wholesale.
    #[inline]
    pub fn debug_info(mut self, debug_info: DebugInfo) -> Self {
        self.error.debug_info = Some(debug_info);
        self
    }

    /// Sets the debug detail, keeping any captured frames.
    pub fn debug_detail(mut self, detail: impl Into<String>) -> Self {
        self.error.debug_info.get_or_insert_with(DebugInfo::default).set_detail(detail.into());
        self
    }

    /// Captures up to [`DEFAULT_STACK_DEPTH`] frames of the caller's stack.
    #[inline]
    pub fn stack_trace(self) -> Self {
        self.stack_trace_depth(DEFAULT_STACK_DEPTH)
    }

    /// Captures up to `max_depth` frames, starting at the caller of this method.
    ///
    /// A depth of zero uses [`DEFAULT_STACK_DEPTH`]. An existing debug detail is kept.
    pub fn stack_trace_depth(mut self, max_depth: usize) -> Self {
        let frames = capture_stack(max_depth);
        self.error.debug_info.get_or_insert_with(DebugInfo::default).set_frames(frames);
        self
    }

    #[inline]
    pub fn localized_message(mut self, locale: impl Into<String>, message: impl Into<String>) -> Self {
        self.error.localized_message = Some(LocalizedMessage::new(locale, message));
        self
    }

    /// Sets a relative retry hint, clearing any absolute retry time.
    #[inline]
    pub fn retry_offset(mut self, offset: Duration) -> Self {
        self.error.retry_info = Some(RetryInfo::Offset(offset));
        self
    }

    /// Sets an absolute retry time, clearing any relative offset.
    #[inline]
    pub fn retry_time(mut self, time: DateTime<Utc>) -> Self {
        self.error.retry_info = Some(RetryInfo::Time(time));
        self
    }

    /// Appends one structured cause.
    #[inline]
    pub fn cause(mut self, cause: impl Into<Arc<StatusError>>) -> Self {
        self.error.causes.push(cause.into());
        self
    }

    /// Appends several structured causes in order.
    pub fn causes<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<StatusError>>,
    {
        self.error.causes.extend(causes.into_iter().map(Into::into));
        self
    }

    /// Wraps an external error; it becomes the [`source`](std::error::Error::source).
    #[inline]
    pub fn wrap<E>(mut self, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.error.wrapped = Some(Arc::new(error));
        self
    }

    /// Wraps a boxed error.
    #[inline]
    pub fn wrap_boxed(mut self, error: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        self.error.wrapped = Some(Arc::from(error));
        self
    }

    /// Wraps a shared error, keeping its identity for [`StatusError::is`].
    #[inline]
    pub fn wrap_shared(mut self, error: WrappedError) -> Self {
        self.error.wrapped = Some(error);
        self
    }
}
