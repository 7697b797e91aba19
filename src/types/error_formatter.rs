//! Deterministic text rendering of [`StatusError`].
//!
//! The layout is a published contract: log pipelines and tests assert on it
//! byte for byte.
//!
//! ```text
//! <message>
//!   visibility: <VISIBILITY>
//!   domain: <domain>
//!   reason: <reason>
//!   code: <CODE>
//!   id: <id>                                   (if set)
//!   time: <RFC 3339>                           (if set)
//!   subject: <subject>                         (if set)
//!   sourceId: <source id>                      (if set)
//!   retryInfo: retryOffset=<d> | retryTime=<t> (if set)
//!   metadata:                                  (if any, keys ascending)
//!     - <key>: <value> visibility=<VISIBILITY>
//!
//! - <description>: <url>                       (help links, insertion order)
//!
//! wrapped error: <wrapped error text>
//!
//! <debug detail>
//! <file>:<line> <function>
//! ```
//!
//! Exactly one blank line precedes each of the help, wrapped-error and debug
//! sections when they are present.

use core::fmt::{self, Write};
use core::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::StatusError;

/// Writes the full rendering of `error` into `out`.
pub(crate) fn write_status_error<W: Write>(error: &StatusError, out: &mut W) -> fmt::Result {
    out.write_str(error.message().trim())?;

    write!(out, "\n  visibility: {}", error.visibility())?;
    write!(out, "\n  domain: {}", error.domain())?;
    write!(out, "\n  reason: {}", error.reason())?;
    write!(out, "\n  code: {}", error.code())?;

    if let Some(id) = error.id() {
        write!(out, "\n  id: {}", id)?;
    }
    if let Some(time) = error.time() {
        write!(out, "\n  time: {}", format_timestamp(&time))?;
    }
    if let Some(subject) = error.subject() {
        write!(out, "\n  subject: {}", subject)?;
    }
    if let Some(source_id) = error.source_id() {
        write!(out, "\n  sourceId: {}", source_id)?;
    }
    if let Some(retry) = error.retry_info() {
        write!(out, "\n  retryInfo: {}", retry)?;
    }

    if !error.metadata().is_empty() {
        out.write_str("\n  metadata:")?;
        for (key, value) in error.metadata() {
            write!(out, "\n    - {}: {} visibility={}", key, value.value(), value.visibility())?;
        }
    }

    if let Some(help) = error.help().filter(|help| !help.is_empty()) {
        out.write_str("\n")?;
        for link in help.links() {
            write!(out, "\n- {}: {}", link.description(), link.url())?;
        }
    }

    if let Some(wrapped) = error.wrapped() {
        write!(out, "\n\nwrapped error: {}", wrapped)?;
    }

    if let Some(debug) = error.debug_info() {
        out.write_str("\n")?;
        if !debug.detail().is_empty() {
            write!(out, "\n{}", debug.detail())?;
        }
        for frame in debug.frames() {
            write!(out, "\n{}", frame)?;
        }
    }

    Ok(())
}

/// RFC 3339 with whole seconds and a `Z` suffix, e.g. `2024-01-15T14:30:45Z`.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Compact duration notation: `0s`, `250ms`, `1.5s`, `1m0s`, `2h0m5s`.
///
/// Sub-second values use the largest unit below one second (`ns`, `µs`, `ms`);
/// anything longer is spelled out in hours, minutes and fractional seconds with
/// trailing zeros dropped.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use status_rail::types::error_formatter::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(60)), "1m0s");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
/// assert_eq!(format_duration(Duration::from_secs(3725)), "1h2m5s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    let mut out = String::with_capacity(16);

    if nanos == 0 {
        out.push_str("0s");
    } else if nanos < 1_000 {
        out.push_str(&nanos.to_string());
        out.push_str("ns");
    } else if nanos < 1_000_000 {
        push_fraction(&mut out, nanos, 1_000);
        out.push_str("µs");
    } else if nanos < 1_000_000_000 {
        push_fraction(&mut out, nanos, 1_000_000);
        out.push_str("ms");
    } else {
        let total_secs = duration.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = u128::from(total_secs % 60) * 1_000_000_000 + u128::from(duration.subsec_nanos());

        if hours > 0 {
            out.push_str(&hours.to_string());
            out.push('h');
        }
        if hours > 0 || minutes > 0 {
            out.push_str(&minutes.to_string());
            out.push('m');
        }
        push_fraction(&mut out, seconds, 1_000_000_000);
        out.push('s');
    }

    out
}

/// Writes `value / unit` with the remainder as a decimal fraction, trailing zeros trimmed.
fn push_fraction(out: &mut String, value: u128, unit: u128) {
    let whole = value / unit;
    let remainder = value % unit;
    out.push_str(&whole.to_string());

    if remainder > 0 {
        let width = unit.ilog10() as usize;
        let digits = format!("{:0width$}", remainder, width = width);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}
