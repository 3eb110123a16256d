//! Create `user_location` join table (user <-> location, many-to-many).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLocation::Table)
                    .if_not_exists()
                    .col(integer(UserLocation::UserId).not_null())
                    .col(integer(UserLocation::LocationId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_user_location")
                            .col(UserLocation::UserId)
                            .col(UserLocation::LocationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_location_user")
                            .from(UserLocation::Table, UserLocation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_location_location")
                            .from(UserLocation::Table, UserLocation::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserLocation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserLocation { Table, UserId, LocationId }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Location { Table, Id }
