//! Migration: zones, conservation states and activity types.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Zones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Zones::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Zones::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(Zones::TipoBosque).string_len(50).null())
                    .col(ColumnDef::new(Zones::AreaHa).double().null())
                    .col(ColumnDef::new(Zones::Activo).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(Zones::CreadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Zones::ActualizadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EstadoConservacion::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EstadoConservacion::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EstadoConservacion::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(EstadoConservacion::Descripcion).text().null())
                    .col(
                        ColumnDef::new(EstadoConservacion::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(EstadoConservacion::CreadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(EstadoConservacion::ActualizadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TipoActividad::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TipoActividad::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TipoActividad::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(TipoActividad::Descripcion).text().not_null())
                    .col(ColumnDef::new(TipoActividad::Activo).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(TipoActividad::CreadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TipoActividad::ActualizadoEn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Active zones are listed by name
        manager
            .create_index(
                Index::create()
                    .name("idx_zones_activo_nombre")
                    .table(Zones::Table)
                    .col(Zones::Activo)
                    .col(Zones::Nombre)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TipoActividad::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EstadoConservacion::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Zones::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Zones {
    Table,
    Id,
    Nombre,
    TipoBosque,
    AreaHa,
    Activo,
    CreadoEn,
    ActualizadoEn,
}

#[derive(Iden)]
pub enum EstadoConservacion {
    Table,
    Id,
    Nombre,
    Descripcion,
    Activo,
    CreadoEn,
    ActualizadoEn,
}

#[derive(Iden)]
pub enum TipoActividad {
    Table,
    Id,
    Nombre,
    Descripcion,
    Activo,
    CreadoEn,
    ActualizadoEn,
}
