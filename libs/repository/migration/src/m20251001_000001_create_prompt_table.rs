use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prompts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prompts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Prompts::Title).string().not_null())
                    .col(ColumnDef::new(Prompts::PromptText).text().not_null())
                    .col(ColumnDef::new(Prompts::ThumbnailUrl).string())
                    .col(ColumnDef::new(Prompts::MediaUrl).string())
                    .col(
                        ColumnDef::new(Prompts::MediaType)
                            .string()
                            .not_null()
                            .default("image"),
                    )
                    .col(ColumnDef::new(Prompts::SourceName).string())
                    .col(ColumnDef::new(Prompts::SourceUrl).string())
                    .col(
                        ColumnDef::new(Prompts::ViewCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Prompts::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Prompts::AdditionalInfo).json())
                    .col(
                        ColumnDef::new(Prompts::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Prompts::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prompts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Prompts {
    Table,
    Id,
    Title,
    PromptText,
    ThumbnailUrl,
    MediaUrl,
    MediaType,
    SourceName,
    SourceUrl,
    ViewCount,
    IsFeatured,
    AdditionalInfo,
    CreatedAt,
    UpdatedAt,
}
