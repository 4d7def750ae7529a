use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MusicGender::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(MusicGender::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(MusicGender::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(MusicGender::Name)
                .string()
                .not_null()
                .unique_key(),
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
            .drop_table(Table::drop().table(MusicGender::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MusicGender {
    #[sea_orm(iden = "Music_Gender")]
    Table,
    Id,
    CreatedAt,
    Name,
}
