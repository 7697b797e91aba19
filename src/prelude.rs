//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use status_rail::prelude::*;
//!
//! fn find_user(id: u64) -> StatusResult<String> {
//!     Err(StatusError::builder("shopify.users", "NOT_FOUND")
//!         .code(Code::NotFound)
//!         .metadata_value(Visibility::Public, "userId", id.to_string())
//!         .build())
//! }
//!
//! let err = find_user(7).unwrap_err();
//! assert!(err.is_permanent());
//! ```

// Core types
pub use crate::types::{
    Code, ErrorTemplate, MetadataValue, RetryInfo, StatusError, StatusResult, Visibility,
};

// Traits
pub use crate::traits::{ErrorIdentity, TransientError, TransientErrorExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceResultExt;
