//! Tree species database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use crate::repository::CatalogTable;
use domain::TreeSpecies;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tree_species")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre_comun: String,
    pub nombre_cientifico: Option<String>,
    pub estado_conservacion_id: Option<i32>,
    pub zona_id: Option<i32>,
    pub activo: bool,
    pub creado_en: DateTimeUtc,
    pub actualizado_en: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TreeSpecies {
    fn from(model: Model) -> Self {
        TreeSpecies {
            id: model.id,
            common_name: model.nombre_comun,
            scientific_name: model.nombre_cientifico,
            conservation_state_id: model.estado_conservacion_id,
            zone_id: model.zona_id,
            active: model.activo,
        }
    }
}

impl CatalogTable for Entity {
    type Record = TreeSpecies;

    fn active_column() -> Column {
        Column::Activo
    }

    fn to_record(model: Model) -> TreeSpecies {
        TreeSpecies::from(model)
    }

    fn new_row(species: &TreeSpecies, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            nombre_comun: Set(species.common_name.clone()),
            nombre_cientifico: Set(species.scientific_name.clone()),
            estado_conservacion_id: Set(species.conservation_state_id),
            zona_id: Set(species.zone_id),
            activo: Set(species.active),
            creado_en: Set(now),
            actualizado_en: Set(now),
        }
    }

    fn replace_row(species: &TreeSpecies, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: Unchanged(species.id),
            nombre_comun: Set(species.common_name.clone()),
            nombre_cientifico: Set(species.scientific_name.clone()),
            estado_conservacion_id: Set(species.conservation_state_id),
            zona_id: Set(species.zone_id),
            activo: Set(species.active),
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
