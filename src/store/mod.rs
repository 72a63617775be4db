//! In-memory user table.
//!
//! A single [`RwLock`] guards both the id → record map and the id counter,
//! so id assignment and insertion happen under the same write guard.
//! Lookups take the shared guard and may run alongside each other.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::models::{User, UserId};

/// Errors from store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("name is required")]
    EmptyName,

    #[error("user {0} not found")]
    NotFound(UserId),

    #[error("user ids exhausted")]
    IdsExhausted,
}

#[derive(Debug)]
struct Table {
    users: HashMap<UserId, User>,
    /// Next id to hand out. Only ever increases.
    next_id: UserId,
}

/// Concurrency-safe mapping from id to [`User`].
#[derive(Debug)]
pub struct UserStore {
    table: RwLock<Table>,
}

impl UserStore {
    /// Create an empty store. The first inserted record receives id `1`.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Store `user` under a fresh id and return that id.
    ///
    /// Ids come from a monotonic counter, so an id freed by [`delete`](Self::delete)
    /// is never handed out again.
    pub fn insert(&self, user: User) -> Result<UserId, StoreError> {
        if !user.has_name() {
            return Err(StoreError::EmptyName);
        }

        let mut table = self.write();
        let id = table.next_id;
        table.next_id = id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        table.users.insert(id, user);
        Ok(id)
    }

    /// Return a copy of the record stored under `id`.
    pub fn get(&self, id: UserId) -> Result<User, StoreError> {
        self.read()
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Remove the record stored under `id`.
    pub fn delete(&self, id: UserId) -> Result<(), StoreError> {
        self.write()
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every mutation is a single map call made while holding the guard, so a
    // panic elsewhere cannot leave the table half-written. Recover from poison.
    fn read(&self) -> RwLockReadGuard<'_, Table> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
