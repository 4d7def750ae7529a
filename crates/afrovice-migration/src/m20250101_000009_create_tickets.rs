use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_users::User;
use super::m20250101_000007_create_presentations::Presentation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ticket::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Ticket::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Ticket::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Ticket::PresentationId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_user_id")
                            .from(Ticket::Table, Ticket::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_presentation_id")
                            .from(Ticket::Table, Ticket::PresentationId)
                            .to(Presentation::Table, Presentation::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    #[sea_orm(iden = "Ticket")]
    Table,
    Id,
    CreatedAt,
    UserId,
    PresentationId,
}
