use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::models::{CreateUser, UpdateUser, User};

/// Users the in-memory store can start with, for demos.
pub const DEMO_USERS: [(&str, &str); 3] = [
    ("John Doe", "john.doe@example.com"),
    ("Jane Smith", "jane.smith@example.com"),
    ("Bob Johnson", "bob.johnson@example.com"),
];

/// Repository trait for User storage.
///
/// Implementations own the records and enforce their invariants: `create`
/// and `update` validate and reject duplicate emails atomically with the
/// write they guard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All current users, as copies
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// Create a new user with a fresh id
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Apply the supplied fields to an existing user
    async fn update(&self, id: &str, changes: UpdateUser) -> UserResult<User>;

    /// Delete a user by ID; `false` when there was nothing to delete
    async fn delete(&self, id: &str) -> UserResult<bool>;

    /// Number of stored users
    async fn count(&self) -> UserResult<usize>;
}

/// Records plus an email index, guarded together by one lock.
#[derive(Debug, Default)]
struct UserTable {
    users: HashMap<String, User>,
    ids_by_email: HashMap<String, String>,
}

impl UserTable {
    fn email_owner(&self, email: &str) -> Option<&str> {
        self.ids_by_email.get(email).map(String::as_str)
    }

    fn insert(&mut self, user: User) {
        self.ids_by_email.insert(user.email.clone(), user.id.clone());
        self.users.insert(user.id.clone(), user);
    }

    fn replace(&mut self, previous_email: &str, user: User) {
        if previous_email != user.email {
            self.ids_by_email.remove(previous_email);
        }
        self.insert(user);
    }

    fn remove(&mut self, id: &str) -> Option<User> {
        let user = self.users.remove(id)?;
        self.ids_by_email.remove(&user.email);
        Some(user)
    }
}

/// In-memory implementation of UserRepository.
///
/// A single reader/writer lock covers the whole table. Writers hold it for
/// the entire operation, so the uniqueness check and the write it guards
/// cannot interleave with another writer.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable::default())),
            ids,
        }
    }

    /// Store pre-populated with [`DEMO_USERS`].
    pub fn with_demo_users() -> Self {
        let ids = UuidIdGenerator;
        let mut table = UserTable::default();
        for (name, email) in DEMO_USERS {
            table.insert(User::new(ids.generate(), name.to_string(), email.to_string()));
        }

        Self {
            table: Arc::new(RwLock::new(table)),
            ids: Arc::new(ids),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let table = self.table.read().await;

        let mut users: Vec<User> = table.users.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        Ok(users)
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.users.get(id).cloned())
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        if table.email_owner(&input.email).is_some() {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let user = User::new(self.ids.generate(), input.name, input.email);
        user.check()?;

        if table.users.contains_key(&user.id) {
            return Err(UserError::Internal(format!(
                "generated id '{}' is already in use",
                user.id
            )));
        }

        table.insert(user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn update(&self, id: &str, changes: UpdateUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        let current = table
            .users
            .get(id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        if let Some(email) = changes.requested_email() {
            if email != current.email {
                if let Some(owner) = table.email_owner(email) {
                    if owner != id {
                        return Err(UserError::DuplicateEmail(email.to_string()));
                    }
                }
            }
        }

        let candidate = current.with_changes(&changes);
        candidate.check()?;

        let previous_email = current.email.clone();
        table.replace(&previous_email, candidate.clone());

        tracing::info!(user_id = %candidate.id, "Updated user");
        Ok(candidate)
    }

    async fn delete(&self, id: &str) -> UserResult<bool> {
        let mut table = self.table.write().await;

        if table.remove(id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> UserResult<usize> {
        let table = self.table.read().await;
        Ok(table.users.len())
    }
}
