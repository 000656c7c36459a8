//! Zone database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use crate::repository::CatalogTable;
use domain::{ForestType, Zone};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "zones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    /// Forest type display name
    pub tipo_bosque: Option<String>,
    pub area_ha: Option<f64>,
    pub activo: bool,
    pub creado_en: DateTimeUtc,
    pub actualizado_en: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Zone {
    fn from(model: Model) -> Self {
        Zone {
            id: model.id,
            name: model.nombre,
            forest_type: model.tipo_bosque.as_deref().map(ForestType::parse),
            area_ha: model.area_ha,
            active: model.activo,
        }
    }
}

fn stored_forest_type(zone: &Zone) -> Option<String> {
    zone.forest_type.map(|kind| kind.display_name().to_string())
}

impl CatalogTable for Entity {
    type Record = Zone;

    fn active_column() -> Column {
        Column::Activo
    }

    fn order_column() -> Option<Column> {
        Some(Column::Nombre)
    }

    fn to_record(model: Model) -> Zone {
        Zone::from(model)
    }

    fn new_row(zone: &Zone, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            nombre: Set(zone.name.clone()),
            tipo_bosque: Set(stored_forest_type(zone)),
            area_ha: Set(zone.area_ha),
            activo: Set(zone.active),
            creado_en: Set(now),
            actualizado_en: Set(now),
        }
    }

    /// The active flag column is never written by an update.
    fn replace_row(zone: &Zone, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: Unchanged(zone.id),
            nombre: Set(zone.name.clone()),
            tipo_bosque: Set(stored_forest_type(zone)),
            area_ha: Set(zone.area_ha),
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
