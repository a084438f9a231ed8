use chrono::{DateTime, Utc};

#[derive(Debug, Default, PartialEq, Clone)]
pub struct PromptView {
    pub id: String,
    pub prompt_id: String,
    pub session_id: Option<String>,
    pub viewed_at: DateTime<Utc>,
}
