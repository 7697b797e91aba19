//! Value types of the error model.
//!
//! [`StatusError`] is the aggregate; everything else here is one of its
//! fields or the [`ErrorTemplate`] that stamps it.
//!
//! # Examples
//!
//! ```
//! use status_rail::types::{Code, StatusError, Visibility};
//!
//! let err = StatusError::builder("shopify.users", "NOT_FOUND")
//!     .code(Code::NotFound)
//!     .visibility(Visibility::Public)
//!     .subject("$.userId")
//!     .build();
//!
//! assert_eq!(err.code().http_status(), 404);
//! assert_eq!(err.subject(), Some("$.userId"));
//! ```
use smallvec::SmallVec;

pub mod code;
pub mod debug_info;
pub mod error_formatter;
pub mod help;
pub mod localized;
pub mod metadata;
pub mod parse_error;
pub mod retry;
pub mod status_error;
pub mod template;
pub mod visibility;

pub use code::Code;
pub use debug_info::{DebugInfo, StackFrame, DEFAULT_STACK_DEPTH};
pub use help::{Help, HelpLink};
pub use localized::LocalizedMessage;
pub use metadata::{Metadata, MetadataValue};
pub use parse_error::ParseEnumError;
pub use retry::RetryInfo;
pub use status_error::{ErrorChanges, StatusError, StatusErrorBuilder, WrappedError, SPEC_VERSION};
pub use template::{ErrorTemplate, ErrorTemplateBuilder};
pub use visibility::Visibility;

/// SmallVec-backed collection used for help links and nested causes.
///
/// Uses inline storage for one element, the common case for both.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Result alias with [`StatusError`] as the failure.
pub type StatusResult<T> = Result<T, StatusError>;

/// Result alias with a boxed [`StatusError`] for a smaller stack footprint.
pub type BoxedStatusResult<T> = Result<T, Box<StatusError>>;
