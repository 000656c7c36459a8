//! Conservation activity database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use crate::repository::CatalogTable;
use domain::ConservationActivity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "conservation_activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre_actividad: String,
    /// Free text as entered in the form
    pub fecha_actividad: String,
    pub responsable: String,
    pub tipo_actividad_id: Option<i32>,
    pub zona_id: Option<i32>,
    pub activo: bool,
    pub creado_en: DateTimeUtc,
    pub actualizado_en: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ConservationActivity {
    fn from(model: Model) -> Self {
        ConservationActivity {
            id: model.id,
            name: model.nombre_actividad,
            date: model.fecha_actividad,
            responsible: model.responsable,
            activity_type_id: model.tipo_actividad_id,
            zone_id: model.zona_id,
            active: model.activo,
        }
    }
}

impl CatalogTable for Entity {
    type Record = ConservationActivity;

    fn active_column() -> Column {
        Column::Activo
    }

    fn to_record(model: Model) -> ConservationActivity {
        ConservationActivity::from(model)
    }

    fn new_row(activity: &ConservationActivity, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            nombre_actividad: Set(activity.name.clone()),
            fecha_actividad: Set(activity.date.clone()),
            responsable: Set(activity.responsible.clone()),
            tipo_actividad_id: Set(activity.activity_type_id),
            zona_id: Set(activity.zone_id),
            activo: Set(activity.active),
            creado_en: Set(now),
            actualizado_en: Set(now),
        }
    }

    fn replace_row(activity: &ConservationActivity, now: DateTimeUtc) -> ActiveModel {
        ActiveModel {
            id: Unchanged(activity.id),
            nombre_actividad: Set(activity.name.clone()),
            fecha_actividad: Set(activity.date.clone()),
            responsable: Set(activity.responsible.clone()),
            tipo_actividad_id: Set(activity.activity_type_id),
            zona_id: Set(activity.zone_id),
            activo: Set(activity.active),
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
