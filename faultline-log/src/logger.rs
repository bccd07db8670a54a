//! The leveled logger

use crate::{Entry, Level};
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// A leveled logger that writes structured JSON lines to a shared sink.
///
/// Calls below the configured minimum level are a no-op: nothing is written
/// and nothing is buffered. Everything else becomes exactly one
/// newline-terminated record on the sink.
///
/// The sink sits behind a mutex, so concurrent log calls from clones of the
/// same logger interleave whole lines, never partial ones. Calls are
/// synchronous and block for as long as the sink blocks.
///
/// # Example
///
/// ```rust
/// use faultline_log::{Level, Logger};
/// use serde_json::json;
///
/// let logger = Logger::stderr(Level::Info);
/// logger.info("user fetched", &[("user_id", json!(7))]);
/// logger.debug("dropped: below threshold", &[]);
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Arc<Mutex<dyn Write + Send>>,
    min_level: Level,
    fields: Map<String, Value>,
}

impl Logger {
    /// Create a logger writing to `sink`, dropping records below `min_level`.
    pub fn new(sink: impl Write + Send + 'static, min_level: Level) -> Self {
        Self::shared(Arc::new(Mutex::new(sink)), min_level)
    }

    /// Create a logger over an already-shared sink.
    ///
    /// Use this when several loggers (or other writers) must serialize onto
    /// the same destination through one mutex.
    pub fn shared(sink: Arc<Mutex<dyn Write + Send>>, min_level: Level) -> Self {
        Self {
            sink,
            min_level,
            fields: Map::new(),
        }
    }

    /// Create a logger writing to standard output.
    pub fn stdout(min_level: Level) -> Self {
        Self::new(std::io::stdout(), min_level)
    }

    /// Create a logger writing to standard error.
    pub fn stderr(min_level: Level) -> Self {
        Self::new(std::io::stderr(), min_level)
    }

    /// The configured minimum level.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether a record at `level` would be emitted.
    ///
    /// Lets callers skip building expensive field values for records that
    /// would be dropped anyway.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Derive a logger that attaches `pairs` to every subsequent record.
    ///
    /// Returns a new logger sharing this one's sink and threshold; the
    /// receiver is untouched. Persistent fields merge with per-call pairs at
    /// emission time, per-call pairs winning on key collision. Derivations
    /// stack.
    pub fn with_fields(&self, pairs: &[(&str, Value)]) -> Logger {
        let mut fields = self.fields.clone();
        for (key, value) in pairs {
            fields.insert((*key).to_string(), value.clone());
        }
        Logger {
            sink: Arc::clone(&self.sink),
            min_level: self.min_level,
            fields,
        }
    }

    /// Emit one record at `level`.
    ///
    /// Serialization failures never reach the caller: the record is replaced
    /// by a single plain-text diagnostic line on the same sink. Sink write
    /// failures are swallowed as well; the logger has no error channel.
    pub fn log(&self, level: Level, message: &str, pairs: &[(&str, Value)]) {
        if !self.enabled(level) {
            return;
        }

        let mut fields = self.fields.clone();
        for (key, value) in pairs {
            fields.insert((*key).to_string(), value.clone());
        }

        let entry = Entry {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            level: level.as_str().to_string(),
            message: message.to_string(),
            fields,
        };

        // A poisoned sink must not kill logging; take the inner writer anyway.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match serde_json::to_string(&entry) {
            Ok(line) => {
                let _ = writeln!(sink, "{}", line);
            }
            Err(err) => {
                let _ = writeln!(sink, "failed to serialize log entry: {}", err);
            }
        }
    }

    /// Emit a DEBUG record
    pub fn debug(&self, message: &str, pairs: &[(&str, Value)]) {
        self.log(Level::Debug, message, pairs);
    }

    /// Emit an INFO record
    pub fn info(&self, message: &str, pairs: &[(&str, Value)]) {
        self.log(Level::Info, message, pairs);
    }

    /// Emit a WARN record
    pub fn warn(&self, message: &str, pairs: &[(&str, Value)]) {
        self.log(Level::Warn, message, pairs);
    }

    /// Emit an ERROR record
    pub fn error(&self, message: &str, pairs: &[(&str, Value)]) {
        self.log(Level::Error, message, pairs);
    }
}
