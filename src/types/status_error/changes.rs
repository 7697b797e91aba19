use core::fmt;
use core::time::Duration;

use chrono::{DateTime, Utc};

use super::StatusError;
use crate::types::{
    Help, HelpLink, LocalizedMessage, Metadata, MetadataValue, RetryInfo, Visibility,
};

/// Change options accepted by [`StatusError::with_changes`].
///
/// Only per-occurrence fields can change; code, message, visibility and the
/// domain/reason identity stay as they were.
#[must_use]
#[derive(Debug)]
pub struct ErrorChanges {
    error: StatusError,
}

impl ErrorChanges {
    #[inline]
    pub(crate) fn new(copy: StatusError) -> Self {
        Self { error: copy }
    }

    #[inline]
    pub(crate) fn finish(self) -> StatusError {
        self.error
    }

    /// Replaces the whole metadata map.
    pub fn metadata<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, MetadataValue)>,
        K: Into<String>,
    {
        self.error.metadata = entries.into_iter().map(|(k, v)| (k.into(), v)).collect::<Metadata>();
        self
    }

    /// Inserts or overwrites one metadata entry.
    #[inline]
    pub fn metadata_value(
        mut self,
        visibility: Visibility,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.error.metadata.insert(key.into(), MetadataValue::new(visibility, value));
        self
    }

    #[inline]
    pub fn metadata_value_fmt(
        self,
        visibility: Visibility,
        key: impl Into<String>,
        value: fmt::Arguments<'_>,
    ) -> Self {
        self.metadata_value(visibility, key, std::fmt::format(value))
    }

    #[inline]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.error.id = id.into();
        self
    }

    #[inline]
    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.error.time = Some(time);
        self
    }

    #[inline]
    pub fn source_id(mut self, source_id: impl Into<String>) -> Self {
        self.error.source_id = source_id.into();
        self
    }

    /// Appends a help link after the existing ones.
    #[inline]
    pub fn help_link(mut self, description: impl Into<String>, url: impl Into<String>) -> Self {
        self.error.help.get_or_insert_with(Help::new).push(HelpLink::new(description, url));
        self
    }

    #[inline]
    pub fn help_link_fmt(self, description: impl Into<String>, url: fmt::Arguments<'_>) -> Self {
        self.help_link(description, std::fmt::format(url))
    }

    /// Replaces any retry info with a relative offset.
    #[inline]
    pub fn retry_offset(mut self, offset: Duration) -> Self {
        self.error.retry_info = Some(RetryInfo::Offset(offset));
        self
    }

    /// Replaces any retry info with an absolute time.
    #[inline]
    pub fn retry_time(mut self, time: DateTime<Utc>) -> Self {
        self.error.retry_info = Some(RetryInfo::Time(time));
        self
    }

    #[inline]
    pub fn localized_message(mut self, locale: impl Into<String>, message: impl Into<String>) -> Self {
        self.error.localized_message = Some(LocalizedMessage::new(locale, message));
        self
    }
}
