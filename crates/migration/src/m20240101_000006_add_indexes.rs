use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ad: author lookups drive the user list filter and total_ads count
        manager
            .create_index(
                Index::create()
                    .name("idx_ad_author_published")
                    .table(Ad::Table)
                    .col(Ad::AuthorId)
                    .col(Ad::IsPublished)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ad_category")
                    .table(Ad::Table)
                    .col(Ad::CategoryId)
                    .to_owned(),
            )
            .await?;

        // UserLocation: reverse lookup by location
        manager
            .create_index(
                Index::create()
                    .name("idx_user_location_location")
                    .table(UserLocation::Table)
                    .col(UserLocation::LocationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_user_location_location").table(UserLocation::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_ad_category").table(Ad::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_ad_author_published").table(Ad::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Ad { Table, AuthorId, IsPublished, CategoryId }

#[derive(DeriveIden)]
enum UserLocation { Table, LocationId }
