//! Activity type database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use crate::repository::CatalogTable;
use domain::ActivityType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tipo_actividad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub activo: bool,
    pub creado_en: DateTimeUtc,
    pub actualizado_en: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ActivityType {
    fn from(model: Model) -> Self {
        ActivityType {
            id: model.id,
            name: model.nombre,
            description: model.descripcion,
            active: model.activo,
        }
    }
}

impl CatalogTable for Entity {
    type Record = ActivityType;

    fn active_column() -> Column {
        Column::Activo
    }

    fn to_record(model: Model) -> ActivityType {
        ActivityType::from(model)
    }

    fn new_row(kind: &ActivityType, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            nombre: Set(kind.name.clone()),
            descripcion: Set(kind.description.clone()),
            activo: Set(kind.active),
            creado_en: Set(now),
            actualizado_en: Set(now),
        }
    }

    fn replace_row(kind: &ActivityType, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: Unchanged(kind.id),
            nombre: Set(kind.name.clone()),
            descripcion: Set(kind.description.clone()),
            activo: Set(kind.active),
            actualizado_en: Set(now),
            ..Default::default()
        }
    }

    fn deactivate_row(id: i32, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: Unchanged(id),
            activo: Set(false),
            actualizado_en: Set(now),
            ..Default::default()
        }
    }
}
