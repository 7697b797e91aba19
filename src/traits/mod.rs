//! Traits shared across the crate.
//!
//! - [`ErrorIdentity`]: the `domain`/`reason` key that classifies a failure
//! - [`TransientError`]: retry classification for resilience code
//! - [`TransientErrorExt`]: `Result` helpers on top of [`TransientError`]

pub mod identity;
pub mod transient;

pub use identity::ErrorIdentity;
pub use transient::{TransientError, TransientErrorExt};
