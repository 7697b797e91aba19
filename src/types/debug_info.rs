//! Internal-only debugging payload: captured call-stack frames and free-text detail.
//!
//! Debug info is never tagged with a [`Visibility`](crate::Visibility); it is for
//! the owning service's operators and must not cross a trust boundary.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Frame budget used when a capture asks for a non-positive depth.
pub const DEFAULT_STACK_DEPTH: usize = 32;

/// Symbol prefixes belonging to the capture machinery rather than the caller.
const SKIPPED_PREFIXES: [&str; 3] = ["backtrace::", "core::ops::function", "alloc::boxed::Box"];

/// Upper bound on leading frames skipped while looking for the caller.
const MAX_SKIPPED_FRAMES: usize = 16;

/// One resolved call-stack frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrame {
    function: String,
    file: String,
    line: u32,
}

impl StackFrame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self { function: function.into(), file: file.into(), line }
    }

    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source path, empty when the binary carries no debug info.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file, self.line, self.function)
    }
}

/// Captured frames plus an optional detail message.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DebugInfo {
    stack_frames: Vec<StackFrame>,
    detail: String,
}

impl DebugInfo {
    pub fn new(stack_frames: Vec<StackFrame>, detail: impl Into<String>) -> Self {
        Self { stack_frames, detail: detail.into() }
    }

    /// Debug info holding only a detail message.
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self { stack_frames: Vec::new(), detail: detail.into() }
    }

    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Owned copy of the captured frames; mutating it never reaches the error.
    pub fn stack_frames(&self) -> Vec<StackFrame> {
        self.stack_frames.clone()
    }

    #[inline]
    pub fn frames(&self) -> &[StackFrame] {
        &self.stack_frames
    }

    /// Frames rendered as `<file>:<line> <function>`.
    pub fn stack_entries(&self) -> Vec<String> {
        self.stack_frames.iter().map(ToString::to_string).collect()
    }

    pub(crate) fn set_detail(&mut self, detail: String) {
        self.detail = detail;
    }

    pub(crate) fn set_frames(&mut self, frames: Vec<StackFrame>) {
        self.stack_frames = frames;
    }
}

/// Captures up to `max_depth` frames starting at the first frame outside this crate.
///
/// The walk stops as soon as `max_depth` frames are kept, and only visited
/// frames are symbolized. A depth of zero falls back to [`DEFAULT_STACK_DEPTH`].
pub(crate) fn capture_stack(max_depth: usize) -> Vec<StackFrame> {
    let max_depth = if max_depth == 0 { DEFAULT_STACK_DEPTH } else { max_depth };
    let mut frames = Vec::with_capacity(max_depth);
    let mut skipped = 0usize;

    backtrace::trace(|frame| {
        // One physical frame may resolve to several inlined symbols.
        backtrace::resolve_frame(frame, |symbol| {
            if frames.len() >= max_depth {
                return;
            }
            let function = symbol.name().map(|name| format!("{name:#}")).unwrap_or_default();
            if frames.is_empty() && is_internal_frame(&function) {
                skipped += 1;
                return;
            }
            let file = symbol.filename().map(|path| path.display().to_string()).unwrap_or_default();
            frames.push(StackFrame::new(function, file, symbol.lineno().unwrap_or(0)));
        });
        frames.len() < max_depth && skipped < MAX_SKIPPED_FRAMES
    });

    frames
}

fn is_internal_frame(function: &str) -> bool {
    let own = env!("CARGO_CRATE_NAME");
    let function = function.strip_prefix('<').unwrap_or(function);
    function.starts_with(own) || SKIPPED_PREFIXES.iter().any(|prefix| function.starts_with(prefix))
}
