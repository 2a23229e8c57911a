use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieInfo::Table)
                    .if_not_exists()
                    .col(string_len(MovieInfo::MovieId, 10).primary_key())
                    .col(string_len_null(MovieInfo::MovieName, 20))
                    .col(string_len_null(MovieInfo::ReleaseDate, 20))
                    .col(string_len_null(MovieInfo::Country, 20))
                    .col(string_len_null(MovieInfo::MovieType, 10))
                    .col(integer_null(MovieInfo::Year))
                    .col(double_null(MovieInfo::Box))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActorInfo::Table)
                    .if_not_exists()
                    .col(string_len(ActorInfo::ActorId, 10).primary_key())
                    .col(string_len_null(ActorInfo::ActorName, 20))
                    .col(string_len_null(ActorInfo::Gender, 2))
                    .col(string_len_null(ActorInfo::Country, 20))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieActorRelation::Table)
                    .if_not_exists()
                    .col(string_len(MovieActorRelation::Id, 10).primary_key())
                    .col(string_len_null(MovieActorRelation::MovieId, 10))
                    .col(string_len_null(MovieActorRelation::ActorId, 10))
                    .col(string_len_null(MovieActorRelation::RelationType, 20))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieActorRelation::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ActorInfo::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieInfo::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum MovieInfo {
    Table,
    MovieId,
    MovieName,
    ReleaseDate,
    Country,
    MovieType,
    Year,
    Box,
}

#[derive(DeriveIden)]
enum ActorInfo {
    Table,
    ActorId,
    ActorName,
    Gender,
    Country,
}

#[derive(DeriveIden)]
enum MovieActorRelation {
    Table,
    Id,
    MovieId,
    ActorId,
    RelationType,
}
