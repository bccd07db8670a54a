//! User records and the backing-store seam

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Backing store seam.
///
/// The service only ever reads through this trait, so tests swap in
/// whatever store shape they need.
pub trait UserStore {
    /// Fetch a user by id, `None` on miss.
    fn get(&self, id: i64) -> Option<User>;
}

/// In-memory store, useful for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: HashMap<i64, User>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Create a store seeded with the given users
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
        }
    }

    /// Fixture store backing the CLI demo, ids 1 through 3
    pub fn demo() -> Self {
        Self::with_users([
            User::new(1, "Alice Arnold", "alice@example.com"),
            User::new(2, "Bart Bell", "bart@example.com"),
            User::new(3, "Cleo Chen", "cleo@example.com"),
        ])
    }

    /// Insert or replace a user
    pub fn insert(&mut self, user: User) {
        self.users.insert(user.id, user);
    }
}

impl UserStore for InMemoryStore {
    fn get(&self, id: i64) -> Option<User> {
        self.users.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store_hit_and_miss() {
        let store = InMemoryStore::with_users([User::new(1, "Alice Arnold", "alice@example.com")]);
        assert_eq!(store.get(1).unwrap().name, "Alice Arnold");
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_demo_store_is_seeded() {
        let store = InMemoryStore::demo();
        assert!(store.get(1).is_some());
        assert!(store.get(2).is_some());
        assert!(store.get(3).is_some());
        assert!(store.get(4).is_none());
    }
}
