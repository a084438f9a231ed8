use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tag::{Tag, TagType};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub prompt_text: String,
    pub thumbnail_url: Option<String>,
    pub media_url: Option<String>,
    pub media_type: MediaType,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
    pub view_count: u64,
    pub is_featured: bool,
    pub additional_info: Option<Value>,
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
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        value.to_string()
    }
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// A prompt together with the tags it is associated with, ordered by tag
/// name.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct PromptWithTags {
    #[serde(flatten)]
    pub prompt: Prompt,
    pub tags: Vec<Tag>,
}

impl PromptWithTags {
    pub fn new(prompt: Prompt, tags: Vec<Tag>) -> Self {
        Self { prompt, tags }
    }

    /// The gallery shows a single model badge per prompt.
    pub fn model_tag(&self) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.tag_type == TagType::Model)
    }

    pub fn category_tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags
            .iter()
            .filter(|tag| tag.tag_type == TagType::Category)
    }

    pub fn has_any_slug(&self, slugs: &[String]) -> bool {
        self.tags.iter().any(|tag| slugs.contains(&tag.slug))
    }
}
