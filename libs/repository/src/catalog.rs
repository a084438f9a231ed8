//! The gallery's read operations and view counting.
//!
//! Every operation here swallows store failures: the error is logged and the
//! caller gets an empty page, `None` or `false`, so the gallery can always
//! render its empty state.

use entity::prelude::*;
use tracing::{error, info};

use crate::Repository;

#[derive(Clone, Debug)]
pub struct Catalog {
    repo: Repository,
}

impl Catalog {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn fetch_prompts(
        &self,
        filters: &PromptFilters,
        page: PageRequest,
    ) -> PromptsPage {
        match self.repo.prompt.find(filters, page).await {
            Ok(result) => {
                info!(
                    task = "fetch prompts",
                    page = page.number(),
                    returned = result.prompts.len(),
                    total = result.total,
                );
                result
            }
            Err(e) => {
                error!(task = "fetch prompts", error = e.to_string());
                PromptsPage::empty()
            }
        }
    }

    pub async fn get_prompt_by_id(
        &self,
        id: &str,
    ) -> Option<PromptWithTagsEntity> {
        match self.repo.prompt.find_by_id(id).await {
            Ok(Some(prompt)) => Some(prompt),
            Ok(None) => {
                info!(task = "get prompt", id, "prompt was not found");
                None
            }
            Err(e) => {
                error!(task = "get prompt", id, error = e.to_string());
                None
            }
        }
    }

    pub async fn list_tags(&self) -> TagDirectory {
        self.repo.tag.find_directory().await.unwrap_or_else(|e| {
            error!(task = "list tags", error = e.to_string());
            TagDirectory::default()
        })
    }

    /// `true` once the view is on record for this session, whether it was
    /// counted by this call or an earlier one.
    pub async fn record_view(&self, prompt_id: &str, session_id: &str) -> bool {
        match self.repo.prompt_view.record(prompt_id, session_id).await {
            Ok(counted) => {
                info!(task = "record view", prompt_id, counted);
                true
            }
            Err(e) => {
                error!(task = "record view", prompt_id, error = e.to_string());
                false
            }
        }
    }
}
