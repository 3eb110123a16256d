//! Create `ad` table with FKs to `user` (author) and `category`.
//!
//! Deleting a user removes their ads; deleting a category detaches its ads.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ad::Table)
                    .if_not_exists()
                    .col(pk_auto(Ad::Id))
                    .col(string_len(Ad::Name, 256).not_null())
                    .col(integer(Ad::AuthorId).not_null())
                    .col(integer(Ad::Price).not_null())
                    .col(ColumnDef::new(Ad::Description).text().null())
                    .col(boolean(Ad::IsPublished).not_null().default(false))
                    .col(ColumnDef::new(Ad::Image).string_len(512).null())
                    .col(ColumnDef::new(Ad::CategoryId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ad_author")
                            .from(Ad::Table, Ad::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ad_category")
                            .from(Ad::Table, Ad::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ad::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Ad { Table, Id, Name, AuthorId, Price, Description, IsPublished, Image, CategoryId }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Category { Table, Id }
