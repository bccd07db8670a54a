//! Error kinds for faultline operations

use std::fmt;

/// The kind of error that occurred.
///
/// This enum categorizes errors so callers can write clear handling logic:
/// match on the kind (or use the `is_*` predicates) instead of inspecting
/// message strings. The set is open for extension; classification compares
/// kind values, never enumeration order, so adding a kind does not break
/// existing predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested entity does not exist
    NotFound,

    /// The caller supplied invalid input
    InvalidInput,

    /// An internal failure the caller cannot act on
    Internal,

    /// The caller is not allowed to perform the operation
    Unauthorized,
}

impl ErrorKind {
    /// Returns the wire name of this kind as a static string.
    ///
    /// These names appear in rendered errors and log output, so they are
    /// stable: `NOT_FOUND`, `INVALID_INPUT`, `INTERNAL`, `UNAUTHORIZED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::Internal => "INTERNAL",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(ErrorKind::InvalidInput.to_string(), "INVALID_INPUT");
        assert_eq!(ErrorKind::Internal.to_string(), "INTERNAL");
        assert_eq!(ErrorKind::Unauthorized.to_string(), "UNAUTHORIZED");
    }

    #[test]
    fn test_kind_equality() {
        assert_eq!(ErrorKind::NotFound, ErrorKind::NotFound);
        assert_ne!(ErrorKind::NotFound, ErrorKind::Internal);
    }
}
