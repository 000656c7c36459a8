//! Generic repository over the soft-deletable catalog tables.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeUtc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, QueryFilter, QueryOrder,
};

use common::{AppError, AppResult};
use domain::CatalogRecord;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Catalog repository trait for dependency injection.
///
/// Deleting only clears the active flag; rows are never removed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogRepository<T: CatalogRecord>: Send + Sync {
    /// Active rows only
    async fn list_active(&self) -> AppResult<Vec<T>>;

    /// Lookup by primary key, active or not
    async fn find_by_id(&self, id: i32) -> AppResult<Option<T>>;

    /// Insert and return the stored record with its new id
    async fn insert(&self, record: T) -> AppResult<T>;

    /// Replace the row with the record's id
    async fn update(&self, record: T) -> AppResult<T>;

    /// Clear the active flag; `false` when no row has that id
    async fn soft_delete(&self, id: i32) -> AppResult<bool>;
}

/// Maps a SeaORM entity onto its domain record.
pub trait CatalogTable: EntityTrait {
    type Record: CatalogRecord;

    fn active_column() -> Self::Column;

    /// Column the active list is sorted by, if any
    fn order_column() -> Option<Self::Column> {
        None
    }

    fn to_record(model: Self::Model) -> Self::Record;

    /// Columns written by an insert of a record already shaped by
    /// [`CatalogRecord::for_insert`].
    fn new_row(record: &Self::Record, now: DateTimeUtc) -> Self::ActiveModel;

    /// Columns written by an update, keyed by the record id, of a record
    /// already shaped by [`CatalogRecord::replacing`].
    fn replace_row(record: &Self::Record, now: DateTimeUtc) -> Self::ActiveModel;

    fn deactivate_row(id: i32, now: DateTimeUtc) -> Self::ActiveModel;
}

/// SeaORM-backed implementation of [`CatalogRepository`] for any catalog table.
pub struct CatalogStore<E> {
    db: DatabaseConnection,
    table: PhantomData<fn() -> E>,
}

impl<E> CatalogStore<E> {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            table: PhantomData,
        }
    }
}

#[async_trait]
impl<E> CatalogRepository<E::Record> for CatalogStore<E>
where
    E: CatalogTable,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    async fn list_active(&self) -> AppResult<Vec<E::Record>> {
        let mut query = E::find().filter(E::active_column().eq(true));
        if let Some(column) = E::order_column() {
            query = query.order_by_asc(column);
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;
        Ok(models.into_iter().map(E::to_record).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<E::Record>> {
        let model = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(E::to_record))
    }

    async fn insert(&self, record: E::Record) -> AppResult<E::Record> {
        let model = E::new_row(&record.for_insert(), Utc::now())
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(E::to_record(model))
    }

    async fn update(&self, record: E::Record) -> AppResult<E::Record> {
        let stored = self.find_by_id(record.id()).await?.ok_or(AppError::NotFound)?;
        let record = record.replacing(&stored);

        match E::replace_row(&record, Utc::now()).update(&self.db).await {
            Ok(model) => Ok(E::to_record(model)),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn soft_delete(&self, id: i32) -> AppResult<bool> {
        match E::deactivate_row(id, Utc::now()).update(&self.db).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(AppError::from(e)),
        }
    }
}
