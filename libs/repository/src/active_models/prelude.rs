pub use super::prompt::Entity as Prompt;
pub use super::prompt_tag::Entity as PromptTag;
pub use super::prompt_view::Entity as PromptView;
pub use super::tag::Entity as Tag;
