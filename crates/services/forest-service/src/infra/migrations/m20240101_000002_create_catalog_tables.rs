//! Migration: tree species and conservation activities.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_reference_tables::{EstadoConservacion, TipoActividad, Zones};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TreeSpecies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TreeSpecies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TreeSpecies::NombreComun).string_len(150).not_null())
                    .col(ColumnDef::new(TreeSpecies::NombreCientifico).string_len(200).null())
                    .col(ColumnDef::new(TreeSpecies::EstadoConservacionId).integer().null())
                    .col(ColumnDef::new(TreeSpecies::ZonaId).integer().null())
                    .col(ColumnDef::new(TreeSpecies::Activo).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(TreeSpecies::CreadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TreeSpecies::ActualizadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tree_species_estado_conservacion")
                            .from(TreeSpecies::Table, TreeSpecies::EstadoConservacionId)
                            .to(EstadoConservacion::Table, EstadoConservacion::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tree_species_zona")
                            .from(TreeSpecies::Table, TreeSpecies::ZonaId)
                            .to(Zones::Table, Zones::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ConservationActivities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConservationActivities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConservationActivities::NombreActividad)
                            .string_len(150)
                            .not_null(),
                    )
                    // Free text, never parsed as a date
                    .col(ColumnDef::new(ConservationActivities::FechaActividad).text().not_null())
                    .col(
                        ColumnDef::new(ConservationActivities::Responsable)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ConservationActivities::TipoActividadId).integer().null())
                    .col(ColumnDef::new(ConservationActivities::ZonaId).integer().null())
                    .col(
                        ColumnDef::new(ConservationActivities::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ConservationActivities::CreadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ConservationActivities::ActualizadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conservation_activities_tipo_actividad")
                            .from(ConservationActivities::Table, ConservationActivities::TipoActividadId)
                            .to(TipoActividad::Table, TipoActividad::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conservation_activities_zona")
                            .from(ConservationActivities::Table, ConservationActivities::ZonaId)
                            .to(Zones::Table, Zones::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConservationActivities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TreeSpecies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TreeSpecies {
    Table,
    Id,
    NombreComun,
    NombreCientifico,
    EstadoConservacionId,
    ZonaId,
    Activo,
    CreadoEn,
    ActualizadoEn,
}

#[derive(Iden)]
enum ConservationActivities {
    Table,
    Id,
    NombreActividad,
    FechaActividad,
    Responsable,
    TipoActividadId,
    ZonaId,
    Activo,
    CreadoEn,
    ActualizadoEn,
}
