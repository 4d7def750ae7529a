use sea_orm_migration::prelude::*;

use super::m20250101_000004_create_artists::Artist;
use super::m20250101_000007_create_presentations::Presentation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PresentationArtist::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PresentationArtist::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PresentationArtist::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PresentationArtist::PresentationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PresentationArtist::ArtistId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PresentationArtist::Schedule)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_presentation_artist_presentation_id")
                            .from(PresentationArtist::Table, PresentationArtist::PresentationId)
                            .to(Presentation::Table, Presentation::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_presentation_artist_artist_id")
                            .from(PresentationArtist::Table, PresentationArtist::ArtistId)
                            .to(Artist::Table, Artist::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PresentationArtist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PresentationArtist {
    #[sea_orm(iden = "Presentation_Artist")]
    Table,
    Id,
    CreatedAt,
    PresentationId,
    ArtistId,
    Schedule,
}
