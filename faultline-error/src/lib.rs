//! # faultline-error
//!
//! Classified, wrappable application errors for faultline.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: know what category of error occurred (e.g., NotFound,
//!   InvalidInput) and branch on the tag, never on message strings
//! - **Details**: key-value pairs that locate the failure without parsing
//!   the message
//! - **Source**: wrap underlying errors without losing them; the cause stays
//!   reachable through the whole chain
//!
//! ## Usage
//!
//! ```rust
//! use faultline_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::NotFound, "user 42 not found")
//!         .with_detail("user_id", 42))
//! }
//! ```
//!
//! ## Principles
//!
//! - Fallible functions return `Result<T, faultline_error::Error>`
//! - External errors are wrapped with `Error::wrap` / `set_source`
//! - A layer that classifies and acts on an error does not re-log it at the
//!   same or higher severity; one final top-level log is the only sanctioned
//!   duplicate
//! - Classification walks the full chain, so wrapping for context never
//!   hides the original kind

mod error;
mod kind;

pub use error::{
    find_kind, is_internal, is_invalid_input, is_kind, is_not_found, is_unauthorized, Error,
};
pub use kind::ErrorKind;

/// Result type alias using the faultline Error
pub type Result<T> = std::result::Result<T, Error>;
