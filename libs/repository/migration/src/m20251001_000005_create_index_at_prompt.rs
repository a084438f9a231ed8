use sea_orm_migration::prelude::*;

use crate::m20251001_000001_create_prompt_table::Prompts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Prompts::Table)
                    .name("idx_prompts_created_at")
                    .col(Prompts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Prompts::Table)
                    .name("idx_prompts_view_count")
                    .col(Prompts::ViewCount)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Prompts::Table)
                    .name("idx_prompts_media_type")
                    .col(Prompts::MediaType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_prompts_created_at",
            "idx_prompts_view_count",
            "idx_prompts_media_type",
        ] {
            manager
                .drop_index(
                    Index::drop().table(Prompts::Table).name(name).to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
