use core::fmt;

/// Returned when a canonical name does not match any [`Code`](crate::Code) or
/// [`Visibility`](crate::Visibility) variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    kind: &'static str,
    input: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self { kind, input: input.into() }
    }

    /// Which enumeration was being parsed (`"code"` or `"visibility"`).
    #[inline]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} name: {:?}", self.kind, self.input)
    }
}

impl core::error::Error for ParseEnumError {}
