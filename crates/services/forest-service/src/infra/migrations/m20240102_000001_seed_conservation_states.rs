//! Migration: seed the conservation state catalog.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_reference_tables::EstadoConservacion;

const STATES: &[(&str, &str)] = &[
    ("Preocupación menor", "Especie abundante y de amplia distribución."),
    ("Casi amenazada", "Cerca de calificar para una categoría de amenaza."),
    ("Vulnerable", "Riesgo alto de extinción en estado silvestre."),
    ("En peligro", "Riesgo muy alto de extinción en estado silvestre."),
    ("En peligro crítico", "Riesgo extremadamente alto de extinción en estado silvestre."),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(EstadoConservacion::Table)
            .columns([EstadoConservacion::Nombre, EstadoConservacion::Descripcion]);

        for (name, description) in STATES {
            insert
                .values([(*name).into(), (*description).into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        manager.exec_stmt(insert.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = STATES.iter().map(|(name, _)| *name).collect();
        let delete = Query::delete()
            .from_table(EstadoConservacion::Table)
            .and_where(Expr::col(EstadoConservacion::Nombre).is_in(names))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
