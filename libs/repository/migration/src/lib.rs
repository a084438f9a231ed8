pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_prompt_table;
mod m20251001_000002_create_tag_table;
mod m20251001_000003_create_prompt_tag_table;
mod m20251001_000004_create_prompt_view_table;
mod m20251001_000005_create_index_at_prompt;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_prompt_table::Migration),
            Box::new(m20251001_000002_create_tag_table::Migration),
            Box::new(m20251001_000003_create_prompt_tag_table::Migration),
            Box::new(m20251001_000004_create_prompt_view_table::Migration),
            Box::new(m20251001_000005_create_index_at_prompt::Migration),
        ]
    }
}
