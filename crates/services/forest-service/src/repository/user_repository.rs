//! User account repository. Accounts are removed with a hard delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, Unchanged,
};

use super::entities::usuario::{self, ActiveModel, Entity as UsuarioEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active account by username
    async fn find_active_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find an account by username, active or not
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find an account by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Every account, ordered by username
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert an account; `password_hash` must already be a digest
    async fn create(&self, user: User) -> AppResult<User>;

    /// Replace every column of the account with the user's id
    async fn update(&self, user: User) -> AppResult<User>;

    /// Permanently delete an account
    async fn hard_delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_active_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UsuarioEntity::find()
            .filter(usuario::Column::Username.eq(username))
            .filter(usuario::Column::Activo.eq(true))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UsuarioEntity::find()
            .filter(usuario::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UsuarioEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UsuarioEntity::find()
            .order_by_asc(usuario::Column::Username)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(user.username.trim().to_string()),
            password: Set(user.password_hash),
            email: Set(user.email),
            nombre_completo: Set(user.full_name),
            rol: Set(user.role),
            activo: Set(user.active),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Unchanged(user.id),
            username: Set(user.username.trim().to_string()),
            password: Set(user.password_hash),
            email: Set(user.email),
            nombre_completo: Set(user.full_name),
            rol: Set(user.role),
            activo: Set(user.active),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn hard_delete(&self, id: i32) -> AppResult<()> {
        let result = UsuarioEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
