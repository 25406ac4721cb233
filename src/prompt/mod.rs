mod builder;
mod catalog;
mod engine;

pub use builder::{PreparedPrompt, PromptBuilder};
pub use catalog::{ActionConfig, ActionId};
pub use engine::TeraEngine;
