//! Structured, immutable status errors.
//!
//! A [`StatusError`] carries a classification [`Code`], a `domain`/`reason`
//! identity key, visibility-tagged metadata, retry guidance, help links, debug
//! info and nested causes across service boundaries. It is built once, never
//! mutated, and renders to a deterministic text layout.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `status_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building an error
//!
//! ```
//! use core::time::Duration;
//! use status_rail::{Code, StatusError, Visibility};
//!
//! let err = StatusError::builder("shopify.api", "RATE_LIMIT_EXCEEDED")
//!     .code(Code::ResourceExhausted)
//!     .message("API rate limit exceeded")
//!     .retry_offset(Duration::from_secs(60))
//!     .metadata_value(Visibility::Public, "limit", "1000")
//!     .help_link("Rate limits", "https://shopify.dev/docs/api/usage/rate-limits")
//!     .build();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "API rate limit exceeded
//!   visibility: INTERNAL
//!   domain: shopify.api
//!   reason: RATE_LIMIT_EXCEEDED
//!   code: RESOURCE_EXHAUSTED
//!   retryInfo: retryOffset=1m0s
//!   metadata:
//!     - limit: 1000 visibility=PUBLIC
//!
//! - Rate limits: https://shopify.dev/docs/api/usage/rate-limits"
//! );
//! ```
//!
//! ## Error families
//!
//! ```
//! use status_rail::{chain, Code, ErrorTemplate, StatusError};
//!
//! let user_not_found = ErrorTemplate::builder("shopify.users", "NOT_FOUND")
//!     .code(Code::NotFound)
//!     .build();
//!
//! let err = StatusError::builder("shopify.api", "LOOKUP_FAILED")
//!     .wrap(user_not_found.new_error())
//!     .build();
//!
//! assert!(!user_not_found.is(&err));
//! assert!(chain::is(&err, &user_not_found));
//! ```
//!
//! ## Deriving a new occurrence
//!
//! ```
//! use status_rail::StatusError;
//!
//! let base = StatusError::new("shopify.orders", "ORDER_LOCKED");
//! let occurrence = base.with_changes(|c| c.id("err_42").source_id("orders-worker"));
//!
//! assert!(occurrence.is_same_kind(&base));
//! assert_eq!(base.id(), None);
//! ```

/// Walking `source()` chains for matching errors
pub mod chain;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Identity and retry classification traits
pub mod traits;
/// StatusError, ErrorTemplate and their field types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    BoxedStatusResult, Code, DebugInfo, ErrorChanges, ErrorTemplate, ErrorTemplateBuilder,
    ErrorVec, Help, HelpLink, LocalizedMessage, Metadata, MetadataValue, ParseEnumError,
    RetryInfo, StackFrame, StatusError, StatusErrorBuilder, StatusResult, Visibility,
    WrappedError, DEFAULT_STACK_DEPTH, SPEC_VERSION,
};
