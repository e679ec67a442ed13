use anyhow::{Context, Result};
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

use crate::config::Config;
use crate::wikipedia::encode::encode_query;
use crate::wikipedia::error::SearchError;
use crate::wikipedia::parse::parse_search_response;
use crate::wikipedia::types::SearchResponse;

/// Anything that can turn a user query into a ranked result list
pub trait SearchService {
    fn search(&self, query: &str) -> Result<SearchResponse, SearchError>;
}

fn http_builder(config: &Config) -> ClientBuilder {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.read_timeout_secs))
}

/// Blocking client for the MediaWiki search API
pub struct WikipediaClient {
    http: Client,
    api_url: String,
    result_limit: u32,
}

impl WikipediaClient {
    /// Create a client from config. Built once per process and reused.
    pub fn new(config: &Config) -> Result<Self> {
        let http = http_builder(config)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self::with_http_client(http, config))
    }

    /// Wrap an already-configured HTTP client
    pub fn with_http_client(http: Client, config: &Config) -> Self {
        Self {
            http,
            api_url: config.api_url(),
            result_limit: config.result_limit,
        }
    }

    /// Build the full request URL for an already-encoded query
    pub fn search_url(&self, encoded_query: &str) -> String {
        format!(
            "{}?action=query&list=search&utf8=&format=json&srsearch={}&srlimit={}",
            self.api_url, encoded_query, self.result_limit
        )
    }

    /// Fetch the raw response body for an already-encoded query.
    ///
    /// Only a success status yields `Ok`; the body is the server's payload
    /// verbatim.
    pub fn fetch(&self, encoded_query: &str) -> Result<String, SearchError> {
        let url = self.search_url(encoded_query);
        log::debug!("Sending request: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| SearchError::from_transport(&e))?;

        let status = response.status();
        log::debug!("Response status: {}", status);

        if !status.is_success() {
            if log::log_enabled!(log::Level::Debug) {
                let body = response.text().unwrap_or_default();
                log::debug!(
                    "Error body (first 500 chars): {}",
                    body.chars().take(500).collect::<String>()
                );
            }
            return Err(SearchError::Http {
                code: status.as_u16(),
            });
        }

        response.text().map_err(|e| SearchError::from_transport(&e))
    }
}

impl SearchService for WikipediaClient {
    fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let body = self.fetch(&encode_query(query))?;
        let response = parse_search_response(&body)?;
        log::debug!(
            "Parsed {} results (total hits: {:?})",
            response.results.len(),
            response.total_hits
        );
        Ok(response)
    }
}
