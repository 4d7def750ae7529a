use sea_orm_migration::prelude::*;

use super::m20250101_000003_create_music_genders::MusicGender;
use super::m20250101_000004_create_artists::Artist;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtistGender::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtistGender::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArtistGender::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArtistGender::ArtistId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ArtistGender::MusicGenderId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_gender_artist_id")
                            .from(ArtistGender::Table, ArtistGender::ArtistId)
                            .to(Artist::Table, Artist::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_gender_music_gender_id")
                            .from(ArtistGender::Table, ArtistGender::MusicGenderId)
                            .to(MusicGender::Table, MusicGender::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtistGender::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArtistGender {
    #[sea_orm(iden = "Artist_Gender")]
    Table,
    Id,
    CreatedAt,
    ArtistId,
    MusicGenderId,
}
