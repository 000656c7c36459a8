//! Conservation state database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use crate::repository::CatalogTable;
use domain::ConservationState;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "estado_conservacion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub creado_en: DateTimeUtc,
    pub actualizado_en: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ConservationState {
    fn from(model: Model) -> Self {
        ConservationState {
            id: model.id,
            name: model.nombre,
            description: model.descripcion,
            active: model.activo,
        }
    }
}

impl CatalogTable for Entity {
    type Record = ConservationState;

    fn active_column() -> Column {
        Column::Activo
    }

    fn order_column() -> Option<Column> {
        Some(Column::Nombre)
    }

    fn to_record(model: Model) -> ConservationState {
        ConservationState::from(model)
    }

    fn new_row(state: &ConservationState, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            nombre: Set(state.name.clone()),
            descripcion: Set(state.description.clone()),
            activo: Set(state.active),
            creado_en: Set(now),
            actualizado_en: Set(now),
        }
    }

    fn replace_row(state: &ConservationState, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: Unchanged(state.id),
            nombre: Set(state.name.clone()),
            descripcion: Set(state.description.clone()),
            activo: Set(state.active),
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
