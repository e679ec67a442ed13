/// One article matched by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub page_id: u64,
    pub title: String,
    pub snippet: String, // sanitized, empty when the server sent none
}

impl SearchResult {
    /// Canonical view URL for this article, e.g. "https://en.wikipedia.org/w/index.php?curid=736"
    pub fn url(&self, page_url: &str) -> String {
        crate::browser::article_url(page_url, self.page_id)
    }
}

/// Parsed payload of a single search request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>, // server relevance order
    pub total_hits: Option<u64>,
    pub suggestion: Option<String>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
