#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod article;
pub mod config;
pub mod error;
pub mod gateway;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod utils;

pub use config::Config;
pub use error::{ReferentError, Result};
pub use pipeline::{ArticleDigest, GenerationRequest, Pipeline};
