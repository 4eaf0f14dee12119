//! Database migrations for the cafeteria service

use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

/// Migration names are recorded in `seaql_migrations` and must stay unique.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241210_000001_create_menus::Migration),
            Box::new(m20241210_000002_create_submenus::Migration),
            Box::new(m20241210_000003_create_dishes::Migration),
        ]
    }
}

#[derive(DeriveIden)]
enum Menus {
    Table,
    Id,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Submenus {
    Table,
    Id,
    Title,
    Description,
    MenuId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Dishes {
    Table,
    Id,
    Title,
    Description,
    Price,
    SubmenuId,
    CreatedAt,
    UpdatedAt,
}

fn timestamp(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// SQLite keeps NUMERIC columns holding whole values as integers, which the
/// driver will not decode as a decimal; REAL affinity avoids that.
fn price(backend: DatabaseBackend) -> ColumnDef {
    let mut col = ColumnDef::new(Dishes::Price);
    match backend {
        DatabaseBackend::Sqlite => col.double(),
        _ => col.decimal_len(12, 2),
    };
    col.not_null().to_owned()
}

mod m20241210_000001_create_menus {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241210_000001_create_menus"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Menus::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Menus::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Menus::Title).string().not_null())
                        .col(ColumnDef::new(Menus::Description).string().not_null())
                        .col(timestamp(Menus::CreatedAt))
                        .col(timestamp(Menus::UpdatedAt))
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Menus::Table).to_owned())
                .await
        }
    }
}

mod m20241210_000002_create_submenus {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241210_000002_create_submenus"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Submenus::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Submenus::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Submenus::Title).string().not_null())
                        .col(ColumnDef::new(Submenus::Description).string().not_null())
                        .col(ColumnDef::new(Submenus::MenuId).uuid().not_null())
                        .col(timestamp(Submenus::CreatedAt))
                        .col(timestamp(Submenus::UpdatedAt))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_submenus_menu")
                                .from(Submenus::Table, Submenus::MenuId)
                                .to(Menus::Table, Menus::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_submenus_menu_id")
                        .table(Submenus::Table)
                        .col(Submenus::MenuId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Submenus::Table).to_owned())
                .await
        }
    }
}

mod m20241210_000003_create_dishes {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241210_000003_create_dishes"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Dishes::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Dishes::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Dishes::Title).string().not_null())
                        .col(ColumnDef::new(Dishes::Description).string().not_null())
                        .col(price(manager.get_database_backend()))
                        .col(ColumnDef::new(Dishes::SubmenuId).uuid().not_null())
                        .col(timestamp(Dishes::CreatedAt))
                        .col(timestamp(Dishes::UpdatedAt))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_dishes_submenu")
                                .from(Dishes::Table, Dishes::SubmenuId)
                                .to(Submenus::Table, Submenus::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_dishes_submenu_id")
                        .table(Dishes::Table)
                        .col(Dishes::SubmenuId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Dishes::Table).to_owned())
                .await
        }
    }
}
