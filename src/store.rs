//! Account storage consulted by the registration and login controllers.

use crate::error::HttpError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// One registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

/// Account lookup and creation.
///
/// Controllers hold this as `Arc<dyn AccountStore>`; swapping the backing
/// store (or a test double) never touches controller code.
pub trait AccountStore: Send + Sync {
    /// Account by id, if registered.
    fn find_by_user_id(&self, user_id: &str) -> Option<User>;

    /// Persist a new account. Fails with [`HttpError::AccountConflict`]
    /// when the id is already taken.
    fn add(&self, user: User) -> Result<(), HttpError>;

    /// Snapshot of all registered accounts.
    fn all(&self) -> Vec<User>;
}

/// In-memory store. Writes serialize through the lock; readers get
/// cloned snapshots so no lock guard escapes.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryAccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for MemoryAccountStore {
    fn find_by_user_id(&self, user_id: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(user_id)
            .cloned()
    }

    fn add(&self, user: User) -> Result<(), HttpError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if users.contains_key(&user.user_id) {
            return Err(HttpError::AccountConflict {
                user_id: user.user_id,
            });
        }
        users.insert(user.user_id.clone(), user);
        Ok(())
    }

    fn all(&self) -> Vec<User> {
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect()
    }
}
