use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogpost::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blogpost::PostId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Blogpost::AuthorId).big_integer().not_null())
                    .col(ColumnDef::new(Blogpost::Title).string().not_null())
                    .col(ColumnDef::new(Blogpost::Content).text().not_null())
                    .col(
                        ColumnDef::new(Blogpost::Tags)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(Blogpost::Images)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(Blogpost::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Blogpost::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blogpost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blogpost {
    Table,
    PostId,
    AuthorId,
    Title,
    Content,
    Tags,
    Images,
    CreatedAt,
    UpdatedAt,
}
