//! Tracing integration for status-rail.
//!
//! Emits one structured event per error with the fields a log pipeline
//! filters on. Metadata values are never recorded here: they carry their own
//! visibility tags and redaction is the sink's job.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! status-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::{Level, Span};

use crate::types::StatusError;

/// Event level for a status code: 5xx is an error, 4xx a warning, anything
/// else informational.
#[inline]
pub fn level_for(error: &StatusError) -> Level {
    match error.code().http_status() {
        500.. => Level::ERROR,
        400..=499 => Level::WARN,
        _ => Level::INFO,
    }
}

impl StatusError {
    /// Records this error as a `tracing` event and returns it unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use status_rail::{Code, StatusError};
    ///
    /// let err = StatusError::builder("db", "TIMEOUT").code(Code::DeadlineExceeded).build().trace();
    /// ```
    pub fn trace(self) -> Self {
        emit(&self);
        self
    }
}

fn emit(error: &StatusError) {
    let span = Span::current();
    let span_name = span.metadata().map(|m| m.name()).unwrap_or("none");

    macro_rules! event_at {
        ($level:expr) => {
            tracing::event!(
                $level,
                domain = error.domain(),
                reason = error.reason(),
                code = error.code().as_str(),
                status = error.code().http_status(),
                visibility = error.visibility().as_str(),
                id = error.id().unwrap_or_default(),
                source_id = error.source_id().unwrap_or_default(),
                span = span_name,
                "{}",
                error.message()
            )
        };
    }

    let level = level_for(error);
    if level == Level::ERROR {
        event_at!(Level::ERROR);
    } else if level == Level::WARN {
        event_at!(Level::WARN);
    } else {
        event_at!(Level::INFO);
    }
}

/// Extension trait for `Result` types to record their errors.
pub trait TraceResultExt<T> {
    /// Records the error, if any, and passes the result through.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use status_rail::tracing_ext::TraceResultExt;
    ///
    /// fn load() -> Result<Config, StatusError> {
    ///     read_config().trace_err()
    /// }
    /// ```
    fn trace_err(self) -> Self;
}

impl<T> TraceResultExt<T> for Result<T, StatusError> {
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(error) = &self {
            emit(error);
        }
        self
    }
}
