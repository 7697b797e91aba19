//! Transient error classification for retry strategies.
//!
//! status-rail does not retry anything itself. It classifies errors so that a
//! resilience library, or a hand-written loop, can decide whether to try again
//! and how long to wait.
//!
//! [`StatusError`] is transient when its code names a temporary condition
//! ([`Code::Unavailable`], [`Code::ResourceExhausted`], [`Code::Aborted`],
//! [`Code::DeadlineExceeded`]) or when it carries retry guidance.
//!
//! # Examples
//!
//! ```
//! use core::time::Duration;
//! use status_rail::traits::TransientError;
//! use status_rail::{Code, StatusError};
//!
//! let limited = StatusError::builder("shopify.api", "RATE_LIMIT_EXCEEDED")
//!     .code(Code::ResourceExhausted)
//!     .retry_offset(Duration::from_secs(60))
//!     .build();
//!
//! assert!(limited.is_transient());
//! assert_eq!(limited.retry_after_hint(), Some(Duration::from_secs(60)));
//!
//! let missing = StatusError::builder("shopify.users", "NOT_FOUND").code(Code::NotFound).build();
//! assert!(missing.is_permanent());
//! ```

use core::time::Duration;

use chrono::Utc;

use crate::types::{Code, StatusError};

/// Classification of errors as transient or permanent.
///
/// Transient errors are temporary failures that may succeed if retried,
/// such as timeouts, rate limiting, or temporary unavailability.
///
/// # Examples
///
/// ```
/// use status_rail::traits::TransientError;
/// use core::time::Duration;
///
/// #[derive(Debug)]
/// struct RateLimitError {
///     retry_after_secs: u64,
/// }
///
/// impl TransientError for RateLimitError {
///     fn is_transient(&self) -> bool {
///         true
///     }
///
///     fn retry_after_hint(&self) -> Option<Duration> {
///         Some(Duration::from_secs(self.retry_after_secs))
///     }
/// }
/// ```
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    ///
    /// Default implementation returns `!self.is_transient()`.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Optional hint for how long to wait before retrying.
    ///
    /// Returns `None` by default, indicating no specific wait time is suggested.
    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        None
    }
}

impl TransientError for StatusError {
    fn is_transient(&self) -> bool {
        self.retry_info().is_some()
            || matches!(
                self.code(),
                Code::Unavailable
                    | Code::ResourceExhausted
                    | Code::Aborted
                    | Code::DeadlineExceeded
            )
    }

    /// The retry offset, or the time left until the retry time (zero once it
    /// has passed).
    fn retry_after_hint(&self) -> Option<Duration> {
        self.retry_info().map(|retry| retry.delay_from(Utc::now()))
    }
}

/// Extension methods for working with transient errors.
pub trait TransientErrorExt<T, E: TransientError> {
    /// Converts a transient error to `Some(Err(e))` for retry, or `None` to stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::traits::TransientErrorExt;
    /// use status_rail::{Code, StatusError};
    ///
    /// let busy: Result<(), StatusError> =
    ///     Err(StatusError::builder("db", "BUSY").code(Code::Unavailable).build());
    /// assert!(busy.retry_if_transient().is_some());
    ///
    /// let denied: Result<(), StatusError> =
    ///     Err(StatusError::builder("db", "DENIED").code(Code::PermissionDenied).build());
    /// assert!(denied.retry_if_transient().is_none());
    /// ```
    fn retry_if_transient(self) -> Option<Result<T, E>>;
}

impl<T, E: TransientError> TransientErrorExt<T, E> for Result<T, E> {
    fn retry_if_transient(self) -> Option<Result<T, E>> {
        match &self {
            Ok(_) => None,
            Err(e) if e.is_transient() => Some(self),
            Err(_) => None,
        }
    }
}
