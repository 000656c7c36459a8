//! User service - authentication and account administration.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::{PasswordDigest, User, MSG_PASSWORD_REQUIRED, MSG_USERNAME_DUPLICATE};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// The active account matching the credentials.
    ///
    /// An unknown username and a wrong password are indistinguishable.
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>>;

    /// List every account
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get account by ID
    async fn get_user(&self, id: i32) -> AppResult<Option<User>>;

    /// Create an account, hashing the plain-text password
    async fn register(&self, user: User, password: &str) -> AppResult<User>;

    /// Replace an account; `None` or a blank password keeps the stored digest
    async fn update_user(&self, user: User, password: Option<&str>) -> AppResult<User>;

    /// Permanently delete an account
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    async fn ensure_username_free(&self, user: &User) -> AppResult<()> {
        let taken = self
            .repo
            .find_by_username(user.username.trim())
            .await?
            .is_some_and(|existing| existing.id != user.id);

        if taken {
            warn!(username = %user.username, "Username already in use");
            return Err(AppError::conflict(MSG_USERNAME_DUPLICATE));
        }
        Ok(())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.repo.find_active_by_username(username).await? else {
            warn!(username, "Login attempt for unknown or inactive user");
            return Ok(None);
        };

        if PasswordDigest::from_stored(user.password_hash.as_str()).matches(password) {
            info!(username, "User authenticated");
            Ok(Some(user))
        } else {
            warn!(username, "Login attempt with wrong password");
            Ok(None)
        }
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn register(&self, mut user: User, password: &str) -> AppResult<User> {
        user.check()?;
        if password.trim().is_empty() {
            return Err(AppError::validation(MSG_PASSWORD_REQUIRED));
        }
        self.ensure_username_free(&user).await?;

        user.password_hash = PasswordDigest::from_plain(password).into_string();
        let created = self.repo.create(user).await?;
        info!(user_id = created.id, username = %created.username, "User registered");
        Ok(created)
    }

    async fn update_user(&self, mut user: User, password: Option<&str>) -> AppResult<User> {
        user.check()?;
        let existing = self
            .repo
            .find_by_id(user.id)
            .await?
            .ok_or(AppError::NotFound)?;
        self.ensure_username_free(&user).await?;

        user.password_hash = match password.filter(|p| !p.trim().is_empty()) {
            Some(plain) => PasswordDigest::from_plain(plain).into_string(),
            None => existing.password_hash,
        };

        let updated = self.repo.update(user).await?;
        info!(user_id = updated.id, "User updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.hard_delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
