use anyhow::anyhow;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::warn;

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct TagRepository {
    db: DatabaseConnection,
}

impl TagRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TryFrom<tag::Model> for TagEntity {
    type Error = anyhow::Error;

    fn try_from(value: tag::Model) -> Result<Self, Self::Error> {
        let tag_type = value.tag_type.parse::<TagType>().map_err(|_| {
            anyhow!("tag {} has unknown type {}", value.slug, value.tag_type)
        })?;

        Ok(Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            tag_type,
            color: value.color,
            description: value.description,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        })
    }
}

/// Converts store rows, dropping tags whose type is neither facet.
pub(crate) fn into_tag_entities(
    models: impl IntoIterator<Item = tag::Model>,
) -> impl Iterator<Item = TagEntity> {
    models
        .into_iter()
        .filter_map(|model| match TagEntity::try_from(model) {
            Ok(tag) => Some(tag),
            Err(e) => {
                warn!(task = "convert tag", error = e.to_string());
                None
            }
        })
}

impl TagRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<TagEntity>> {
        let tags = Tag::find()
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await?;

        Ok(into_tag_entities(tags).collect())
    }

    pub async fn find_directory(&self) -> anyhow::Result<TagDirectory> {
        Ok(self.find_all().await?.into_iter().collect())
    }
}
