//! Catalog pages

mod story_index;

pub use story_index::{MockButton, StoryIndex};
