use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_users::User;
use super::m20250101_000007_create_presentations::Presentation;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Comment::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Comment::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Comment::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Comment::Message).text().not_null())
        .col(ColumnDef::new(Comment::PresentationId).big_integer().null())
        .col(ColumnDef::new(Comment::UserId).big_integer().null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_comment_presentation_id")
                .from(Comment::Table, Comment::PresentationId)
                .to(Presentation::Table, Presentation::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_comment_user_id")
                .from(Comment::Table, Comment::UserId)
                .to(User::Table, User::Id),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    #[sea_orm(iden = "Comment")]
    Table,
    Id,
    CreatedAt,
    Message,
    PresentationId,
    UserId,
}
