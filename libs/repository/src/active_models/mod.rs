pub mod prelude;

pub mod prompt;
pub mod prompt_tag;
pub mod prompt_view;
pub mod tag;
