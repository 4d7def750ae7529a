use sea_orm_migration::prelude::*;

use super::m20250101_000006_create_events::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Presentation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Presentation::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Presentation::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Presentation::EventId).big_integer().not_null())
                    // Lineup times are local wall-clock, stored without a zone
                    .col(ColumnDef::new(Presentation::DateStart).timestamp().not_null())
                    .col(ColumnDef::new(Presentation::DateEnd).timestamp().null())
                    .col(ColumnDef::new(Presentation::Flyer).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_presentation_event_id")
                            .from(Presentation::Table, Presentation::EventId)
                            .to(Event::Table, Event::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Presentation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Presentation {
    #[sea_orm(iden = "Presentation")]
    Table,
    Id,
    CreatedAt,
    EventId,
    DateStart,
    DateEnd,
    Flyer,
}
