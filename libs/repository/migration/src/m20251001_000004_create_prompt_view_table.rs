use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_prompt_table::Prompts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromptViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PromptViews::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PromptViews::PromptId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PromptViews::SessionId).string())
                    .col(
                        ColumnDef::new(PromptViews::ViewedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_prompt_views_prompt_id")
                            .from(PromptViews::Table, PromptViews::PromptId)
                            .to(Prompts::Table, Prompts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PromptViews::Table)
                    .name("idx_prompt_views_prompt_id_session_id")
                    .col(PromptViews::PromptId)
                    .col(PromptViews::SessionId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PromptViews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromptViews {
    Table,
    Id,
    PromptId,
    SessionId,
    ViewedAt,
}
