use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder for any field the extractor could not recover. Clients compare
/// against this exact string.
pub const NOT_FOUND: &str = "Не найдено";

/// Title, publish date and body text recovered from one page. Every field is
/// always populated; missing ones hold [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: String,
    pub date: String,
    pub content: String,
}

impl ExtractionResult {
    pub fn has_content(&self) -> bool {
        self.content != NOT_FOUND
    }
}

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects.
    pub final_url: Url,
    pub status: u16,
    pub body: String,
}
