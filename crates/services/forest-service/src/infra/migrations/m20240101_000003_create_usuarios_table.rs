//! Migration: create the usuarios table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::Username)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    // Hex SHA-256 digest
                    .col(ColumnDef::new(Usuarios::Password).string_len(64).not_null())
                    .col(ColumnDef::new(Usuarios::Email).string_len(150).null())
                    .col(ColumnDef::new(Usuarios::NombreCompleto).string_len(150).null())
                    .col(ColumnDef::new(Usuarios::Rol).string_len(20).not_null())
                    .col(ColumnDef::new(Usuarios::Activo).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Usuarios {
    Table,
    Id,
    Username,
    Password,
    Email,
    NombreCompleto,
    Rol,
    Activo,
}
