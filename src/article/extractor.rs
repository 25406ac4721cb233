use super::cascade::{Cascade, Pick, clean_text};
use super::types::{ExtractionResult, NOT_FOUND};
use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE_CASCADE: LazyLock<Cascade> = LazyLock::new(|| {
    Cascade::compile(
        "title",
        &[
            ("h1", Pick::Text),
            ("title", Pick::Text),
            (r#"meta[property="og:title"]"#, Pick::Attr("content")),
            (r#"meta[name="twitter:title"]"#, Pick::Attr("content")),
            (".title", Pick::Text),
            (".post-title", Pick::Text),
            (".article-title", Pick::Text),
            ("[class*='title']", Pick::Text),
        ],
    )
});

static DATE_CASCADE: LazyLock<Cascade> = LazyLock::new(|| {
    Cascade::compile(
        "date",
        &[
            ("time[datetime]", Pick::AttrOrText("datetime")),
            ("time", Pick::Text),
            (r#"[class*="date"]"#, Pick::Text),
            (r#"[class*="published"]"#, Pick::Text),
            (r#"[class*="time"]"#, Pick::Text),
            (
                r#"meta[property="article:published_time"]"#,
                Pick::Attr("content"),
            ),
            (r#"meta[name="date"]"#, Pick::Attr("content")),
            (r#"meta[name="publishdate"]"#, Pick::Attr("content")),
        ],
    )
});

static CONTENT_CASCADE: LazyLock<Cascade> = LazyLock::new(|| {
    Cascade::compile(
        "content",
        &[
            ("article", Pick::CleanText),
            (".post", Pick::CleanText),
            (".content", Pick::CleanText),
            (".article-content", Pick::CleanText),
            (".post-content", Pick::CleanText),
            (".entry-content", Pick::CleanText),
            ("[class*='article']", Pick::CleanText),
            ("[class*='content']", Pick::CleanText),
            ("main", Pick::CleanText),
        ],
    )
});

static BODY: LazyLock<Option<Selector>> = LazyLock::new(|| Selector::parse("body").ok());

pub fn title_cascade() -> &'static Cascade {
    &TITLE_CASCADE
}

pub fn date_cascade() -> &'static Cascade {
    &DATE_CASCADE
}

pub fn content_cascade() -> &'static Cascade {
    &CONTENT_CASCADE
}

/// Recovers title, date and body text from raw HTML. Never fails: anything
/// it cannot find comes back as [`NOT_FOUND`].
#[derive(Debug, Clone, Copy)]
pub struct ContentExtractor {
    min_content_chars: usize,
}

impl ContentExtractor {
    pub fn new(min_content_chars: usize) -> Self {
        Self { min_content_chars }
    }

    pub fn extract(&self, html: &str) -> ExtractionResult {
        let document = Html::parse_document(html);

        let title = TITLE_CASCADE.first_accepted(&document, |v| !v.is_empty());
        let date = DATE_CASCADE.first_accepted(&document, |v| !v.is_empty());
        let content = self
            .main_content(&document)
            .or_else(|| body_text(&document));

        ExtractionResult {
            title: title.unwrap_or_else(|| NOT_FOUND.to_string()),
            date: date.unwrap_or_else(|| NOT_FOUND.to_string()),
            content: content.unwrap_or_else(|| NOT_FOUND.to_string()),
        }
    }

    /// First content candidate strictly longer than the threshold, in chars.
    fn main_content(&self, document: &Html) -> Option<String> {
        let min = self.min_content_chars;
        CONTENT_CASCADE.first_accepted(document, |v| v.chars().count() > min)
    }
}

fn body_text(document: &Html) -> Option<String> {
    let selector = BODY.as_ref()?;
    let text = clean_text(document.select(selector).next()?);
    (!text.is_empty()).then_some(text)
}
