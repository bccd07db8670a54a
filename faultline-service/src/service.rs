//! User lookup and creation workflows

use crate::store::{User, UserStore};
use faultline_error::{Error, Result};
use faultline_log::Logger;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

/// First id handed out by [`UserService::create_user`].
const FIRST_ALLOCATED_ID: i64 = 100;

/// User-facing business logic over a backing store.
///
/// The service logs at the point of detection and returns classified errors;
/// callers that classify and convert an error must not re-log it at the same
/// or higher severity. One final top-level log for operator visibility is
/// the only sanctioned duplicate.
pub struct UserService<S: UserStore> {
    store: S,
    logger: Logger,
    next_id: AtomicI64,
}

impl<S: UserStore> UserService<S> {
    /// Create a service over `store`, logging through `logger`.
    pub fn new(store: S, logger: Logger) -> Self {
        Self {
            store,
            logger,
            next_id: AtomicI64::new(FIRST_ALLOCATED_ID),
        }
    }

    /// Fetch a user by id.
    ///
    /// Ids must be positive; zero and negative ids classify as InvalidInput
    /// and carry the offending id as a `user_id` detail. A store miss
    /// classifies as NotFound with the same detail.
    pub fn get_user(&self, id: i64) -> Result<User> {
        if id <= 0 {
            self.logger.warn("invalid user id", &[("user_id", json!(id))]);
            return Err(Error::invalid_input("user id must be positive")
                .with_detail("user_id", id));
        }

        let user = self.store.get(id).ok_or_else(|| {
            Error::not_found(format!("user {} not found", id)).with_detail("user_id", id)
        })?;

        self.logger.debug("user fetched", &[("user_id", json!(id))]);
        Ok(user)
    }

    /// Create a user.
    ///
    /// Name and email are both required; the missing one is named in a
    /// `field` detail. Ids are allocated from a service-local counter.
    pub fn create_user(&self, name: &str, email: &str) -> Result<User> {
        if name.is_empty() {
            return Err(Error::invalid_input("name is required").with_detail("field", "name"));
        }
        if email.is_empty() {
            return Err(Error::invalid_input("email is required").with_detail("field", "email"));
        }

        self.logger.info(
            "creating user",
            &[("name", json!(name)), ("email", json!(email))],
        );

        let user = User::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            name,
            email,
        );

        self.logger.info("user created", &[("user_id", json!(user.id))]);
        Ok(user)
    }
}
