//! In-memory user directory.

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::auth::Principal;
use crate::config::UserConfig;

/// Thread-safe lookup of users by id and by bearer token.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: DashMap<u64, Principal>,
    tokens: DashMap<String, u64>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the directory from configured users.
    pub fn from_config(users: &[UserConfig]) -> Self {
        let directory = Self::new();
        for user in users {
            directory.insert(
                Principal {
                    id: user.id,
                    username: user.username.clone(),
                    password_expires: user.password_expires,
                },
                &user.token,
            );
        }
        tracing::info!(users = directory.users.len(), "User directory loaded");
        directory
    }

    /// Register (or replace) a user reachable through `token`.
    pub fn insert(&self, principal: Principal, token: &str) {
        self.tokens.insert(token.to_string(), principal.id);
        self.users.insert(principal.id, principal);
    }

    /// Resolve a bearer token to its user.
    pub fn authenticate(&self, token: &str) -> Option<Principal> {
        let id = *self.tokens.get(token)?;
        self.get(id)
    }

    pub fn get(&self, id: u64) -> Option<Principal> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    /// All users ordered by id.
    pub fn list(&self) -> Vec<Principal> {
        let mut users: Vec<_> = self.users.iter().map(|entry| entry.value().clone()).collect();
        users.sort_by_key(|p| p.id);
        users
    }

    /// Move the password expiry of user `id`. Returns false if the user is unknown.
    pub fn set_password_expiry(&self, id: u64, expires: DateTime<Utc>) -> bool {
        match self.users.get_mut(&id) {
            Some(mut entry) => {
                entry.password_expires = expires;
                true
            }
            None => false,
        }
    }
}
