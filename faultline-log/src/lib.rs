//! # faultline-log
//!
//! Leveled structured logger emitting JSON lines.
//!
//! ## Core Concepts
//! - **Level**: totally ordered severity (`Debug < Info < Warn < Error`);
//!   records below the logger's minimum level are dropped by design
//! - **Entry**: the per-call wire record (timestamp, level, message, fields)
//! - **Logger**: a shared, mutex-guarded sink plus a threshold; cloning and
//!   deriving share the sink
//!
//! Loggers are constructed explicitly and passed to the components that log.
//! There is no process-wide default instance.
//!
//! ## Usage
//!
//! ```rust
//! use faultline_log::{Level, Logger};
//! use serde_json::json;
//!
//! let logger = Logger::stderr(Level::Info).with_fields(&[("component", json!("store"))]);
//! logger.warn("invalid user id", &[("user_id", json!(-1))]);
//! ```

mod entry;
mod level;
mod logger;

pub use entry::Entry;
pub use level::{Level, ParseLevelError};
pub use logger::Logger;
