//! Classification codes and their fixed message/status tables.
//!
//! | Code                  | Status | Default message                |
//! |-----------------------|--------|--------------------------------|
//! | `CANCELLED`           | 499    | the operation was cancelled    |
//! | `UNKNOWN`             | 500    | unknown error                  |
//! | `INVALID_ARGUMENT`    | 400    | invalid argument provided      |
//! | `DEADLINE_EXCEEDED`   | 504    | deadline exceeded              |
//! | `NOT_FOUND`           | 404    | resource not found             |
//! | `ALREADY_EXISTS`      | 409    | resource already exists        |
//! | `PERMISSION_DENIED`   | 403    | permission denied              |
//! | `RESOURCE_EXHAUSTED`  | 429    | resource exhausted             |
//! | `FAILED_PRECONDITION` | 400    | failed precondition            |
//! | `ABORTED`             | 409    | operation aborted              |
//! | `OUT_OF_RANGE`        | 400    | out of range                   |
//! | `UNIMPLEMENTED`       | 501    | not implemented                |
//! | `INTERNAL`            | 500    | internal error                 |
//! | `UNAVAILABLE`         | 503    | service unavailable            |
//! | `DATA_LOSS`           | 500    | data loss or corruption        |
//! | `UNAUTHENTICATED`     | 401    | unauthenticated                |
//!
//! The table is published: transport layers hardcode it, so entries never change.

use core::fmt;
use core::str::FromStr;

use crate::types::ParseEnumError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standardized classification of a failure.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Code {
    Cancelled = 1,
    #[default]
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl Code {
    /// Every code in discriminant order.
    pub const ALL: [Code; 16] = [
        Code::Cancelled,
        Code::Unknown,
        Code::InvalidArgument,
        Code::DeadlineExceeded,
        Code::NotFound,
        Code::AlreadyExists,
        Code::PermissionDenied,
        Code::ResourceExhausted,
        Code::FailedPrecondition,
        Code::Aborted,
        Code::OutOfRange,
        Code::Unimplemented,
        Code::Internal,
        Code::Unavailable,
        Code::DataLoss,
        Code::Unauthenticated,
    ];

    /// Maps a raw discriminant back to a code. Out-of-range values become [`Code::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::Code;
    ///
    /// assert_eq!(Code::from_i32(5), Code::NotFound);
    /// assert_eq!(Code::from_i32(999), Code::Unknown);
    /// ```
    #[inline]
    pub fn from_i32(value: i32) -> Self {
        match value {
            1..=16 => Self::ALL[(value - 1) as usize],
            _ => Code::Unknown,
        }
    }

    /// Returns the raw discriminant.
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Canonical upper-snake-case name, as rendered in `code: <NAME>`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// Default human message used when an error carries no explicit message.
    pub const fn message(self) -> &'static str {
        match self {
            Code::Cancelled => "the operation was cancelled",
            Code::Unknown => "unknown error",
            Code::InvalidArgument => "invalid argument provided",
            Code::DeadlineExceeded => "deadline exceeded",
            Code::NotFound => "resource not found",
            Code::AlreadyExists => "resource already exists",
            Code::PermissionDenied => "permission denied",
            Code::ResourceExhausted => "resource exhausted",
            Code::FailedPrecondition => "failed precondition",
            Code::Aborted => "operation aborted",
            Code::OutOfRange => "out of range",
            Code::Unimplemented => "not implemented",
            Code::Internal => "internal error",
            Code::Unavailable => "service unavailable",
            Code::DataLoss => "data loss or corruption",
            Code::Unauthenticated => "unauthenticated",
        }
    }

    /// HTTP-style status for this code.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::Code;
    ///
    /// assert_eq!(Code::NotFound.http_status(), 404);
    /// assert_eq!(Code::ResourceExhausted.http_status(), 429);
    /// ```
    pub const fn http_status(self) -> u16 {
        match self {
            Code::Cancelled => 499,
            Code::Unknown => 500,
            Code::InvalidArgument => 400,
            Code::DeadlineExceeded => 504,
            Code::NotFound => 404,
            Code::AlreadyExists => 409,
            Code::PermissionDenied => 403,
            Code::ResourceExhausted => 429,
            Code::FailedPrecondition => 400,
            Code::Aborted => 409,
            Code::OutOfRange => 400,
            Code::Unimplemented => 501,
            Code::Internal => 500,
            Code::Unavailable => 503,
            Code::DataLoss => 500,
            Code::Unauthenticated => 401,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<i32> for Code {
    #[inline]
    fn from(value: i32) -> Self {
        Code::from_i32(value)
    }
}

impl FromStr for Code {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("code", s))
    }
}
