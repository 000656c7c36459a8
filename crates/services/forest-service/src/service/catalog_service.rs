//! Catalog service - validation and name uniqueness over a catalog repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::CatalogRecord;

use crate::repository::CatalogRepository;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService<T: CatalogRecord>: Send + Sync {
    /// Active records
    async fn list_all(&self) -> AppResult<Vec<T>>;

    /// Record by id, active or not
    async fn get_by_id(&self, id: i32) -> AppResult<Option<T>>;

    async fn create(&self, record: T) -> AppResult<T>;

    /// Replace the record with the same id
    async fn update(&self, record: T) -> AppResult<T>;

    /// Create when the id is 0, update otherwise
    async fn save(&self, record: T) -> AppResult<T> {
        if record.id() == 0 {
            self.create(record).await
        } else {
            self.update(record).await
        }
    }

    /// Logical delete; `false` when the id does not exist
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// True when another active record already uses `name`, ignoring case
    async fn name_in_use(&self, name: &str, exclude_id: i32) -> AppResult<bool>;
}

/// Concrete implementation of CatalogService using a repository.
///
/// The uniqueness check reads the active list and then writes, so two
/// concurrent saves of the same name can both succeed.
pub struct CatalogManager<T: CatalogRecord> {
    repo: Arc<dyn CatalogRepository<T>>,
}

impl<T: CatalogRecord> CatalogManager<T> {
    /// Create new catalog service instance with repository
    pub fn new(repo: Arc<dyn CatalogRepository<T>>) -> Self {
        Self { repo }
    }

    async fn ensure_unique(&self, record: &T, creating: bool) -> AppResult<()> {
        let Some(rule) = T::UNIQUE_NAME else {
            return Ok(());
        };

        if self.name_in_use(record.name(), record.id()).await? {
            let message = if creating { rule.on_create } else { rule.on_update };
            warn!(entity = T::LABEL, name = %record.name(), "Duplicate name rejected");
            return Err(AppError::conflict(message));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: CatalogRecord> CatalogService<T> for CatalogManager<T> {
    async fn list_all(&self) -> AppResult<Vec<T>> {
        self.repo.list_active().await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<T>> {
        self.repo.find_by_id(id).await
    }

    async fn create(&self, record: T) -> AppResult<T> {
        if let Err(e) = record.check() {
            warn!(entity = T::LABEL, error = %e, "Validation failed on create");
            return Err(e.into());
        }
        self.ensure_unique(&record, true).await?;

        let created = self.repo.insert(record).await?;
        info!(entity = T::LABEL, id = created.id(), "Record created");
        Ok(created)
    }

    async fn update(&self, record: T) -> AppResult<T> {
        if let Err(e) = record.check() {
            warn!(entity = T::LABEL, id = record.id(), error = %e, "Validation failed on update");
            return Err(e.into());
        }
        self.ensure_unique(&record, false).await?;

        let updated = self.repo.update(record).await?;
        info!(entity = T::LABEL, id = updated.id(), "Record updated");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let deleted = self.repo.soft_delete(id).await?;
        if deleted {
            info!(entity = T::LABEL, id, "Record deactivated");
        } else {
            warn!(entity = T::LABEL, id, "Delete requested for unknown id");
        }
        Ok(deleted)
    }

    async fn name_in_use(&self, name: &str, exclude_id: i32) -> AppResult<bool> {
        let active = self.repo.list_active().await?;
        Ok(active
            .iter()
            .any(|record| record.id() != exclude_id && record.same_name(name)))
    }
}
