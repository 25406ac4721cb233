pub mod cascade;
pub mod extractor;
pub mod fetcher;
pub mod normalizer;
pub mod types;

pub use extractor::ContentExtractor;
pub use fetcher::ArticleFetcher;
pub use normalizer::{NormalizedUrl, normalize_url};
pub use types::{ExtractionResult, FetchedPage, NOT_FOUND};
