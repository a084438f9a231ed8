use serde::{Deserialize, Serialize};

use crate::prompt::PromptWithTags;

pub const PROMPTS_PER_PAGE: u64 = 12;

/// A 1-based page number. Anything below 1 is treated as the first page.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PageRequest(u64);

impl Default for PageRequest {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u64> for PageRequest {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl PageRequest {
    pub fn new(page: u64) -> Self {
        Self(page.max(1))
    }

    pub fn number(&self) -> u64 {
        self.0
    }

    pub fn offset(&self) -> u64 {
        (self.0 - 1).saturating_mul(PROMPTS_PER_PAGE)
    }

    pub fn limit(&self) -> u64 {
        PROMPTS_PER_PAGE
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct PromptsPage {
    pub prompts: Vec<PromptWithTags>,
    pub total: u64,
    pub has_more: bool,
}

impl PromptsPage {
    pub fn new(
        prompts: Vec<PromptWithTags>,
        total: u64,
        page: PageRequest,
    ) -> Self {
        let seen = page.offset().saturating_add(prompts.len() as u64);
        Self {
            has_more: seen < total,
            prompts,
            total,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
