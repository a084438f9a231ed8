#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use migration::{Migrator, MigratorTrait};
use repository::active_models::{prelude::*, *};
use repository::{Catalog, Repository};
use sea_orm::{
    ActiveValue, ConnectOptions, Database, DatabaseConnection, EntityTrait,
};

pub async fn connect() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    Database::connect(opt).await.unwrap()
}

pub async fn setup() -> (Catalog, DatabaseConnection) {
    let db = connect().await;
    Migrator::up(&db, None).await.unwrap();

    let catalog = Catalog::new(Repository::from_connection(db.clone()));
    (catalog, db)
}

pub fn minutes(n: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + TimeDelta::try_minutes(n).unwrap()
}

pub struct NewPrompt<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub prompt_text: &'a str,
    pub media_type: &'a str,
    pub view_count: i64,
    pub created_minute: i64,
}

impl Default for NewPrompt<'_> {
    fn default() -> Self {
        Self {
            id: "",
            title: "untitled",
            prompt_text: "a prompt",
            media_type: "image",
            view_count: 0,
            created_minute: 0,
        }
    }
}

pub async fn insert_prompt(db: &DatabaseConnection, new: NewPrompt<'_>) {
    let model = prompt::ActiveModel {
        id: ActiveValue::Set(new.id.to_string()),
        title: ActiveValue::Set(new.title.to_string()),
        prompt_text: ActiveValue::Set(new.prompt_text.to_string()),
        thumbnail_url: ActiveValue::Set(None),
        media_url: ActiveValue::Set(Some(format!(
            "https://cdn.example.com/{}.png",
            new.id
        ))),
        media_type: ActiveValue::Set(new.media_type.to_string()),
        source_name: ActiveValue::Set(None),
        source_url: ActiveValue::Set(None),
        view_count: ActiveValue::Set(new.view_count),
        is_featured: ActiveValue::Set(false),
        additional_info: ActiveValue::Set(None),
        created_at: ActiveValue::Set(minutes(new.created_minute)),
        updated_at: ActiveValue::Set(minutes(new.created_minute)),
    };

    Prompt::insert(model)
        .exec_without_returning(db)
        .await
        .unwrap();
}

pub async fn insert_tag(db: &DatabaseConnection, slug: &str, tag_type: &str) {
    let model = tag::ActiveModel {
        id: ActiveValue::Set(format!("tag-{slug}")),
        name: ActiveValue::Set(slug.to_string()),
        slug: ActiveValue::Set(slug.to_string()),
        tag_type: ActiveValue::Set(tag_type.to_string()),
        color: ActiveValue::Set("#ff00ff".to_string()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(minutes(0)),
        updated_at: ActiveValue::Set(minutes(0)),
    };

    Tag::insert(model).exec_without_returning(db).await.unwrap();
}

pub async fn link(db: &DatabaseConnection, prompt_id: &str, slug: &str) {
    let model = prompt_tag::ActiveModel {
        id: ActiveValue::Set(format!("{prompt_id}-{slug}")),
        prompt_id: ActiveValue::Set(prompt_id.to_string()),
        tag_id: ActiveValue::Set(format!("tag-{slug}")),
        created_at: ActiveValue::Set(minutes(0)),
    };

    PromptTag::insert(model)
        .exec_without_returning(db)
        .await
        .unwrap();
}

pub async fn view_count(db: &DatabaseConnection, prompt_id: &str) -> i64 {
    Prompt::find_by_id(prompt_id.to_string())
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .view_count
}

/// P1 "Neon City" (10 views, midjourney) and P2 "Ocean Dream" (5 views,
/// sora), with P2 the more recent one.
pub async fn seed_neon_and_ocean(db: &DatabaseConnection) {
    insert_tag(db, "midjourney", "model").await;
    insert_tag(db, "sora", "model").await;

    insert_prompt(
        db,
        NewPrompt {
            id: "p1",
            title: "Neon City",
            prompt_text: "rain soaked streets, neon signs",
            view_count: 10,
            created_minute: 1,
            ..Default::default()
        },
    )
    .await;
    insert_prompt(
        db,
        NewPrompt {
            id: "p2",
            title: "Ocean Dream",
            prompt_text: "slow pan over waves at dusk",
            media_type: "video",
            view_count: 5,
            created_minute: 2,
            ..Default::default()
        },
    )
    .await;

    link(db, "p1", "midjourney").await;
    link(db, "p2", "sora").await;
}
