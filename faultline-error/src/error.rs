//! The application Error type

use crate::ErrorKind;
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;

/// The application error type for all faultline operations.
///
/// An `Error` carries:
/// - `kind`: what category of error occurred
/// - `message`: human-readable description
/// - `details`: key-value pairs for debugging (always present, possibly empty)
/// - `source`: the underlying error, if this one wraps another
///
/// # Example
///
/// ```rust
/// use faultline_error::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::InvalidInput, "user id must be positive")
///     .with_detail("user_id", -1);
///
/// assert_eq!(err.kind(), ErrorKind::InvalidInput);
/// assert_eq!(err.to_string(), "[INVALID_INPUT] user id must be positive");
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    details: Map<String, Value>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new error with the given kind and message.
    ///
    /// Details start out as an empty map, so callers may read or insert
    /// without a presence check.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Map::new(),
            source: None,
        }
    }

    /// Wrap an existing error with a kind and message.
    ///
    /// The cause stays reachable through [`std::error::Error::source`], so
    /// classification still sees it after any number of wrapping layers.
    pub fn wrap(source: impl Into<anyhow::Error>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, message).set_source(source)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the detail key-value pairs
    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// Get the wrapped source error (if any)
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Add a detail to the error.
    ///
    /// Inserts or overwrites the entry for `key`; the last write for a given
    /// key wins. Returns the error so detail insertion chains at the
    /// construction site.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }
}

// =============================================================================
// Display - compact, single-line format for logs
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "[{}] {}: {}", self.kind, self.message, source)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.kind, self.message)?;

        if !self.details.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Details:")?;
            for (key, value) in &self.details {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// =============================================================================
// Convenient From implementations (be careful not to leak raw errors!)
// =============================================================================

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Unauthorized,
            _ => ErrorKind::Internal,
        };
        Error::new(kind, err.to_string()).set_source(err)
    }
}

// =============================================================================
// Convenience constructors
// =============================================================================

impl Error {
    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Create an Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create an Internal error wrapping its cause
    pub fn internal(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::wrap(source, ErrorKind::Internal, message)
    }
}

// =============================================================================
// Chain-aware classification
// =============================================================================

/// Find the kind of the first application [`Error`] in an error chain.
///
/// Walks the chain through [`std::error::Error::source`] starting at `err`
/// itself and returns the kind of the first link that is an application
/// `Error`. Returns `None` when no link in the chain is one.
///
/// Classification is tag-based, not string-matched: intermediate layers can
/// wrap an error with extra context without losing the original kind.
pub fn find_kind(err: &(dyn StdError + 'static)) -> Option<ErrorKind> {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(link) = current {
        if let Some(app) = link.downcast_ref::<Error>() {
            return Some(app.kind());
        }
        current = link.source();
    }
    None
}

/// Check whether an error chain classifies as the given kind.
pub fn is_kind(err: &(dyn StdError + 'static), kind: ErrorKind) -> bool {
    find_kind(err) == Some(kind)
}

/// Check whether an error chain classifies as NotFound
pub fn is_not_found(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::NotFound)
}

/// Check whether an error chain classifies as InvalidInput
pub fn is_invalid_input(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::InvalidInput)
}

/// Check whether an error chain classifies as Internal
pub fn is_internal(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::Internal)
}

/// Check whether an error chain classifies as Unauthorized
pub fn is_unauthorized(err: &(dyn StdError + 'static)) -> bool {
    is_kind(err, ErrorKind::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::NotFound, "user 42 not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "user 42 not found");
        assert!(err.source_ref().is_none());
        // details are present from construction, just empty
        assert!(err.details().is_empty());
    }

    #[test]
    fn test_wrap_keeps_cause_reachable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "db down");
        let err = Error::wrap(io_err, ErrorKind::Internal, "lookup failed");

        let source = StdError::source(&err).expect("cause should be reachable");
        let io_back = source
            .downcast_ref::<std::io::Error>()
            .expect("cause should still be the io error");
        assert_eq!(io_back.kind(), std::io::ErrorKind::ConnectionRefused);
        assert_eq!(io_back.to_string(), "db down");
    }

    #[test]
    fn test_with_detail_last_write_wins() {
        let err = Error::new(ErrorKind::InvalidInput, "bad field")
            .with_detail("x", 1)
            .with_detail("x", 2)
            .with_detail("field", "username");

        assert_eq!(err.details()["x"], json!(2));
        assert_eq!(err.details()["field"], json!("username"));
    }

    #[test]
    fn test_display_without_cause() {
        let err = Error::new(ErrorKind::Unauthorized, "token expired");
        assert_eq!(err.to_string(), "[UNAUTHORIZED] token expired");
    }

    #[test]
    fn test_display_with_cause() {
        let io_err = std::io::Error::other("disk failure");
        let err = Error::wrap(io_err, ErrorKind::Internal, "could not load users");
        assert_eq!(
            err.to_string(),
            "[INTERNAL] could not load users: disk failure"
        );
    }

    #[test]
    fn test_render_contains_kind_name() {
        let cases = [
            (ErrorKind::NotFound, "NOT_FOUND"),
            (ErrorKind::InvalidInput, "INVALID_INPUT"),
            (ErrorKind::Internal, "INTERNAL"),
            (ErrorKind::Unauthorized, "UNAUTHORIZED"),
        ];
        for (kind, name) in cases {
            let rendered = Error::new(kind, "m").to_string();
            assert!(rendered.contains(name), "{rendered} missing {name}");
        }
    }

    #[test]
    fn test_classification_on_outermost_error() {
        let err = Error::not_found("missing");
        assert!(is_not_found(&err));
        assert!(!is_invalid_input(&err));
    }

    #[test]
    fn test_classification_on_foreign_error() {
        let err = std::io::Error::other("plain io failure");
        assert!(find_kind(&err).is_none());
        assert!(!is_not_found(&err));
    }

    /// A wrapping layer that is not an application error, standing in for
    /// an intermediate library adding context.
    #[derive(Debug)]
    struct LayerError {
        source: Error,
    }

    impl fmt::Display for LayerError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "while handling request: {}", self.source)
        }
    }

    impl StdError for LayerError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.source)
        }
    }

    #[test]
    fn test_classification_walks_through_foreign_layer() {
        let outer = LayerError {
            source: Error::not_found("user 7 not found"),
        };
        assert!(is_not_found(&outer));
        assert_eq!(find_kind(&outer), Some(ErrorKind::NotFound));
    }

    #[test]
    fn test_classification_walks_through_anyhow_context() {
        let err = Error::not_found("user 7 not found");
        let chained = anyhow::Error::from(err).context("request handler");
        let dyn_err: &(dyn StdError + 'static) = chained.as_ref();
        assert!(is_not_found(dyn_err));
    }

    #[test]
    fn test_classification_first_link_wins() {
        // An outer application error shadows whatever it wraps, so layers
        // that reclassify an error really do change its classification.
        let inner = Error::not_found("row missing");
        let outer = Error::wrap(inner, ErrorKind::Internal, "repository failure");
        assert!(is_internal(&outer));
        assert!(!is_not_found(&outer));
    }

    #[test]
    fn test_from_io_error_mapping() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err: Error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        let err: Error = std::io::Error::other("broken pipe").into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(Error::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(Error::invalid_input("x").kind(), ErrorKind::InvalidInput);
        assert_eq!(Error::unauthorized("x").kind(), ErrorKind::Unauthorized);

        let err = Error::internal("db query failed", std::io::Error::other("timeout"));
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn test_debug_format_lists_details() {
        let err = Error::invalid_input("bad request")
            .with_detail("field", "email")
            .with_detail("length", 0);
        let debug = format!("{:?}", err);
        assert!(debug.contains("INVALID_INPUT"));
        assert!(debug.contains("field"));
        assert!(debug.contains("email"));
    }
}
