pub mod filter;
pub mod prompt;
pub mod prompt_view;
pub mod prompts_page;
pub mod tag;

pub mod prelude {
    pub use crate::filter::{
        FilterQuery, MediaTypeFilter, PromptFilters, SortOption,
    };
    pub use crate::prompt::{
        MediaType, Prompt as PromptEntity,
        PromptWithTags as PromptWithTagsEntity,
    };
    pub use crate::prompt_view::PromptView as PromptViewEntity;
    pub use crate::prompts_page::{PageRequest, PromptsPage, PROMPTS_PER_PAGE};
    pub use crate::tag::{Tag as TagEntity, TagDirectory, TagType};
}
