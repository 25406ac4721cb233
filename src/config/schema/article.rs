use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout for the article GET (default: 30)
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
    /// Redirect hops followed before giving up (default: 10)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_max_redirects() -> usize {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout_secs(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// A content candidate is accepted only when its cleaned text is longer
    /// than this many characters (default: 100)
    #[serde(default = "default_min_content_chars")]
    pub min_content_chars: usize,
}

fn default_min_content_chars() -> usize {
    100
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_content_chars: default_min_content_chars(),
        }
    }
}
