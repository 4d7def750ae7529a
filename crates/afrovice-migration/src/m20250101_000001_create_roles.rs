use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Role::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Role::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Role::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Role::Name).string().not_null().unique_key())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Role {
    #[sea_orm(iden = "Role")]
    Table,
    Id,
    CreatedAt,
    Name,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_table_sql() {
        let sql = create_table().to_string(PostgresQueryBuilder);
        assert!(sql.starts_with(r#"CREATE TABLE IF NOT EXISTS "Role""#));
        assert!(sql.contains(r#""id" bigserial"#));
        assert!(sql.contains(r#""created_at" timestamp with time zone NOT NULL"#));
        assert!(sql.contains("UNIQUE"));
    }
}
