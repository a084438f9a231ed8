use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_prompt_table::Prompts;
use crate::m20251001_000002_create_tag_table::Tags;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromptTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PromptTags::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PromptTags::PromptId).string().not_null())
                    .col(ColumnDef::new(PromptTags::TagId).string().not_null())
                    .col(
                        ColumnDef::new(PromptTags::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_prompt_tags_prompt_id")
                            .from(PromptTags::Table, PromptTags::PromptId)
                            .to(Prompts::Table, Prompts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_prompt_tags_tag_id")
                            .from(PromptTags::Table, PromptTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PromptTags::Table)
                    .name("idx_prompt_tags_prompt_id_tag_id")
                    .col(PromptTags::PromptId)
                    .col(PromptTags::TagId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PromptTags::Table)
                    .name("idx_prompt_tags_tag_id")
                    .col(PromptTags::TagId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PromptTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromptTags {
    Table,
    Id,
    PromptId,
    TagId,
    CreatedAt,
}
