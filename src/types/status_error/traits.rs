use core::fmt::Display;

use super::StatusError;
use crate::traits::ErrorIdentity;
use crate::types::error_formatter::write_status_error;

impl Display for StatusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write_status_error(self, f)
    }
}

impl std::error::Error for StatusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.wrapped {
            Some(wrapped) => Some(&**wrapped),
            None => None,
        }
    }
}

impl ErrorIdentity for StatusError {
    #[inline]
    fn domain(&self) -> &str {
        &self.domain
    }

    #[inline]
    fn reason(&self) -> &str {
        &self.reason
    }
}
