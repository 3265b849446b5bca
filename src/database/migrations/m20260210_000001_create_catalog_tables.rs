use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create studios table
        manager
            .create_table(
                Table::create()
                    .table(Studios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Studios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Studios::Name).string().not_null())
                    .col(ColumnDef::new(Studios::Country).string().not_null())
                    .col(
                        ColumnDef::new(Studios::EstablishedYear)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Studios::Ceo).string().not_null())
                    .col(ColumnDef::new(Studios::Headquarter).string().not_null())
                    .col(
                        ColumnDef::new(Studios::HasPic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Studios::PicExtension).string())
                    .to_owned(),
            )
            .await?;

        // Create movies table; a studio owns its movies, so removing the
        // studio removes them too
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string().not_null())
                    .col(ColumnDef::new(Movies::ReleaseDate).string().not_null())
                    .col(ColumnDef::new(Movies::Duration).integer().not_null())
                    .col(ColumnDef::new(Movies::Description).string().not_null())
                    .col(ColumnDef::new(Movies::Budget).double().not_null())
                    .col(
                        ColumnDef::new(Movies::BoxOfficeCollection)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Movies::Rating).double().not_null())
                    .col(
                        ColumnDef::new(Movies::AwardNomination)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Movies::AwardWin).integer().not_null())
                    .col(ColumnDef::new(Movies::StudioId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movies_studio_id")
                            .from(Movies::Table, Movies::StudioId)
                            .to(Studios::Table, Studios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create actors table
        manager
            .create_table(
                Table::create()
                    .table(Actors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Actors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Actors::Name).string().not_null())
                    .col(ColumnDef::new(Actors::Dob).string().not_null())
                    .col(ColumnDef::new(Actors::BirthPlace).string().not_null())
                    .col(ColumnDef::new(Actors::Gender).string().not_null())
                    .col(ColumnDef::new(Actors::Nationality).string().not_null())
                    .col(ColumnDef::new(Actors::Role).string().not_null())
                    .col(ColumnDef::new(Actors::AwardWon).integer().not_null())
                    .col(ColumnDef::new(Actors::DebutYear).integer().not_null())
                    .col(ColumnDef::new(Actors::NetWorth).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create movie_actors association table; deleting either side
        // removes the matching rows
        manager
            .create_table(
                Table::create()
                    .table(MovieActors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MovieActors::ActorId).integer().not_null())
                    .col(ColumnDef::new(MovieActors::MovieId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(MovieActors::ActorId)
                            .col(MovieActors::MovieId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actors_actor_id")
                            .from(MovieActors::Table, MovieActors::ActorId)
                            .to(Actors::Table, Actors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actors_movie_id")
                            .from(MovieActors::Table, MovieActors::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieActors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Actors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Studios::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Studios {
    Table,
    Id,
    Name,
    Country,
    EstablishedYear,
    Ceo,
    Headquarter,
    HasPic,
    PicExtension,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    ReleaseDate,
    Duration,
    Description,
    Budget,
    BoxOfficeCollection,
    Rating,
    AwardNomination,
    AwardWin,
    StudioId,
}

#[derive(DeriveIden)]
enum Actors {
    Table,
    Id,
    Name,
    Dob,
    BirthPlace,
    Gender,
    Nationality,
    Role,
    AwardWon,
    DebutYear,
    NetWorth,
}

#[derive(DeriveIden)]
enum MovieActors {
    Table,
    ActorId,
    MovieId,
}
