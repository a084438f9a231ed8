use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    pub color: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TagType {
    Model,
    #[default]
    Category,
}

impl From<TagType> for String {
    fn from(value: TagType) -> Self {
        value.to_string()
    }
}

/// Tags split into the two filter facets of the gallery.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct TagDirectory {
    pub models: Vec<Tag>,
    pub categories: Vec<Tag>,
}

impl FromIterator<Tag> for TagDirectory {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let (models, categories) = iter
            .into_iter()
            .partition(|tag| tag.tag_type == TagType::Model);

        Self { models, categories }
    }
}

impl TagDirectory {
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.categories.is_empty()
    }
}
