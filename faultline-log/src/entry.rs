//! The wire-level log record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One structured log record, produced fresh per log call and never retained.
///
/// Serializes to a single self-describing JSON object. `fields` is omitted
/// entirely when no key-value pairs were supplied; field ordering within the
/// record is not guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Wall-clock capture time, RFC 3339 (UTC, seconds precision)
    pub timestamp: String,
    /// Uppercase severity name
    pub level: String,
    /// Message, passed through verbatim
    pub message: String,
    /// String-keyed bag of arbitrary JSON values
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
}
