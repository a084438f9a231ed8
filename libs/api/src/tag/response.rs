use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub tag_type: String,
    pub color: String,
    pub description: Option<String>,
}

impl From<TagEntity> for Tag {
    fn from(value: TagEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            tag_type: String::from(value.tag_type),
            color: value.color,
            description: value.description,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetTagsResponse {
    pub models: Vec<Tag>,
    pub categories: Vec<Tag>,
}

impl From<TagDirectory> for GetTagsResponse {
    fn from(value: TagDirectory) -> Self {
        Self {
            models: value.models.into_iter().map(Tag::from).collect(),
            categories: value.categories.into_iter().map(Tag::from).collect(),
        }
    }
}
