//! Retry guidance carried by an error.
//!
//! [`RetryInfo`] only describes when a consumer may try again; nothing in this
//! crate performs retries.

use core::fmt;
use core::time::Duration;

use chrono::{DateTime, Utc};

use crate::types::error_formatter::{format_duration, format_timestamp};

/// Either a relative offset or an absolute instant, never both.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use status_rail::RetryInfo;
///
/// let retry = RetryInfo::after(Duration::from_secs(60));
/// assert_eq!(retry.retry_offset(), Some(Duration::from_secs(60)));
/// assert!(retry.retry_time().is_none());
/// assert_eq!(retry.to_string(), "retryOffset=1m0s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetryInfo {
    /// Retry once this much time has elapsed.
    Offset(Duration),
    /// Retry at or after this instant.
    Time(DateTime<Utc>),
}

impl RetryInfo {
    #[inline]
    pub fn after(offset: Duration) -> Self {
        RetryInfo::Offset(offset)
    }

    #[inline]
    pub fn at(time: DateTime<Utc>) -> Self {
        RetryInfo::Time(time)
    }

    #[inline]
    pub fn retry_offset(&self) -> Option<Duration> {
        match self {
            RetryInfo::Offset(offset) => Some(*offset),
            RetryInfo::Time(_) => None,
        }
    }

    #[inline]
    pub fn retry_time(&self) -> Option<DateTime<Utc>> {
        match self {
            RetryInfo::Offset(_) => None,
            RetryInfo::Time(time) => Some(*time),
        }
    }

    /// Time left to wait measured from `now`. An instant already in the past yields zero.
    pub fn delay_from(&self, now: DateTime<Utc>) -> Duration {
        match self {
            RetryInfo::Offset(offset) => *offset,
            RetryInfo::Time(time) => (*time - now).to_std().unwrap_or(Duration::ZERO),
        }
    }
}

impl fmt::Display for RetryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryInfo::Offset(offset) => write!(f, "retryOffset={}", format_duration(*offset)),
            RetryInfo::Time(time) => write!(f, "retryTime={}", format_timestamp(time)),
        }
    }
}
