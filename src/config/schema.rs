use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_RESULT_LIMIT: u32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound the search API accepts for `srlimit`
pub const MAX_RESULT_LIMIT: u32 = 500;

fn default_user_agent() -> String {
    format!("wiki-search/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Wikipedia language edition ("en", "ru", "de", ...)
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    pub result_limit: u32,
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            api_url: None,
            page_url: None,
            result_limit: DEFAULT_RESULT_LIMIT,
            user_agent: default_user_agent(),
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Search API endpoint, explicit override first, else derived from `language`
    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.wikipedia.org/w/api.php", self.language))
    }

    /// Article view endpoint; page ids are appended as `?curid=<id>`
    pub fn page_url(&self) -> String {
        self.page_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.wikipedia.org/w/index.php", self.language))
    }
}
