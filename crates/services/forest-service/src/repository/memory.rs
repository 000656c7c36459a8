//! In-process repositories backed by vectors.
//!
//! They stand in for the SeaORM stores where no database is available,
//! mainly in tests. Rows are shaped by the same record hooks the SeaORM
//! stores use, so both keep the same insert and update rules.

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{CatalogRecord, User, MSG_USERNAME_DUPLICATE};

use super::{CatalogRepository, UserRepository};

/// Vector-backed [`CatalogRepository`].
pub struct MemoryCatalog<T> {
    rows: RwLock<Vec<T>>,
    ordered_by_name: bool,
}

impl<T: CatalogRecord> MemoryCatalog<T> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Start with existing rows; ids are kept as given.
    pub fn seeded(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
            ordered_by_name: false,
        }
    }

    /// List active rows sorted by name.
    pub fn ordered_by_name(mut self) -> Self {
        self.ordered_by_name = true;
        self
    }
}

impl<T: CatalogRecord> Default for MemoryCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: CatalogRecord> CatalogRepository<T> for MemoryCatalog<T> {
    async fn list_active(&self) -> AppResult<Vec<T>> {
        let mut active: Vec<T> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.is_active())
            .cloned()
            .collect();

        if self.ordered_by_name {
            active.sort_by(|a, b| a.name().cmp(b.name()));
        }
        Ok(active)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<T>> {
        Ok(self.rows.read().await.iter().find(|row| row.id() == id).cloned())
    }

    async fn insert(&self, record: T) -> AppResult<T> {
        let mut record = record.for_insert();
        let mut rows = self.rows.write().await;
        let next_id = rows.iter().map(|row| row.id()).max().unwrap_or(0) + 1;

        record.set_id(next_id);
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: T) -> AppResult<T> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id() == record.id())
            .ok_or(AppError::NotFound)?;

        *row = record.replacing(&*row);
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id() == id) {
            Some(row) => {
                row.set_active(false);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Vector-backed [`UserRepository`].
#[derive(Default)]
pub struct MemoryUsers {
    rows: RwLock<Vec<User>>,
}

impl MemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing accounts; ids are kept as given.
    pub fn seeded(rows: Vec<User>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_active_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|user| user.active && user.username == username)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.rows.read().await.iter().find(|user| user.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users = self.rows.read().await.clone();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|existing| existing.username == user.username) {
            return Err(AppError::conflict(MSG_USERNAME_DUPLICATE));
        }

        user.id = rows.iter().map(|existing| existing.id).max().unwrap_or(0) + 1;
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|existing| existing.id == user.id)
            .ok_or(AppError::NotFound)?;

        *row = user.clone();
        Ok(user)
    }

    async fn hard_delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|user| user.id != id);

        if rows.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
