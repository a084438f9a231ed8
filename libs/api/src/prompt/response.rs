use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::tag::response::Tag;

#[derive(Serialize, ToSchema)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub prompt_text: String,
    pub thumbnail_url: Option<String>,
    pub media_url: Option<String>,
    pub media_type: String,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
    pub view_count: u64,
    pub is_featured: bool,
    #[schema(value_type = Option<Object>)]
    pub additional_info: Option<serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
    pub tags: Vec<Tag>,
}

impl From<PromptWithTagsEntity> for Prompt {
    fn from(value: PromptWithTagsEntity) -> Self {
        let PromptWithTagsEntity { prompt, tags } = value;
        Self {
            id: prompt.id,
            title: prompt.title,
            prompt_text: prompt.prompt_text,
            thumbnail_url: prompt.thumbnail_url,
            media_url: prompt.media_url,
            media_type: String::from(prompt.media_type),
            source_name: prompt.source_name,
            source_url: prompt.source_url,
            view_count: prompt.view_count,
            is_featured: prompt.is_featured,
            additional_info: prompt.additional_info,
            created_at: prompt.created_at.to_rfc3339(),
            updated_at: prompt.updated_at.to_rfc3339(),
            tags: tags.into_iter().map(Tag::from).collect(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPromptsResponse {
    pub prompts: Vec<Prompt>,
    pub total: u64,
    pub has_more: bool,
    /// Query string of the next page, present while `hasMore` is true
    pub next: Option<String>,
}

impl GetPromptsResponse {
    pub fn new(page: PromptsPage, next: Option<String>) -> Self {
        Self {
            prompts: page.prompts.into_iter().map(Prompt::from).collect(),
            total: page.total,
            has_more: page.has_more,
            next,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetPromptResponse {
    pub prompt: Option<Prompt>,
}

#[derive(Serialize, ToSchema)]
pub struct PostViewResponse {
    /// Whether the view is on record for this session
    pub counted: bool,
}
