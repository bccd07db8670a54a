//! # faultline-service
//!
//! Demonstration service layer showing how a consumer composes the
//! faultline error taxonomy and logger: validate input, perform a lookup,
//! log at the appropriate level, return classified errors.
//!
//! The logger is injected at construction; the service holds no global
//! state and no default logger.

mod service;
mod store;

pub use service::UserService;
pub use store::{InMemoryStore, User, UserStore};
