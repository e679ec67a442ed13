pub mod client;
pub mod encode;
pub mod error;
pub mod parse;
pub mod sanitize;
pub mod types;

pub use client::{SearchService, WikipediaClient};
pub use encode::encode_query;
pub use error::SearchError;
pub use parse::{parse_search_response, parse_search_results};
pub use sanitize::sanitize_snippet;
pub use types::{SearchResponse, SearchResult};
