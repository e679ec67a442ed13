use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::wikipedia::error::SearchError;
use crate::wikipedia::sanitize::sanitize_snippet;
use crate::wikipedia::types::{SearchResponse, SearchResult};

/// Top-level shape of `action=query&list=search`; the error envelope shares it
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    query: Option<Value>,
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct RawQuery {
    #[serde(default)]
    search: Vec<Value>,
    searchinfo: Option<RawSearchInfo>,
}

#[derive(Debug, Deserialize)]
struct RawSearchInfo {
    totalhits: Option<u64>,
    suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHit {
    pageid: u64,
    title: String,
    #[serde(default)]
    snippet: Option<String>,
}

impl From<RawHit> for SearchResult {
    fn from(hit: RawHit) -> Self {
        SearchResult {
            page_id: hit.pageid,
            title: hit.title,
            snippet: hit.snippet.as_deref().map(sanitize_snippet).unwrap_or_default(),
        }
    }
}

fn malformed(detail: impl Into<String>) -> SearchError {
    SearchError::MalformedResponse {
        detail: detail.into(),
    }
}

/// Decode `value` as `T`, accepting only a JSON object.
///
/// Derived struct impls also take sequences positionally, so the shape is
/// checked before handing the value to serde.
fn from_object<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, SearchError> {
    if !value.is_object() {
        return Err(malformed(format!("`{}` is not an object", what)));
    }
    serde_json::from_value(value).map_err(|e| malformed(format!("`{}`: {}", what, e)))
}

/// Parse a raw search response body.
///
/// A `query` object without a `search` array is a valid empty result.
///
/// # Errors
/// - `MalformedResponse` if the body is not JSON, `query` is missing, or a hit
///   lacks an integer `pageid` or a string `title`
/// - `Api` if the server returned an error envelope
pub fn parse_search_response(body: &str) -> Result<SearchResponse, SearchError> {
    let envelope: Value = serde_json::from_str(body).map_err(|e| malformed(e.to_string()))?;
    let envelope: RawEnvelope = from_object(envelope, "response")?;

    if let Some(err) = envelope.error {
        let err: RawApiError = from_object(err, "error")?;
        return Err(SearchError::Api {
            code: err.code,
            info: err.info,
        });
    }

    let query = envelope
        .query
        .ok_or_else(|| malformed("missing `query` object"))?;
    let query: RawQuery = from_object(query, "query")?;

    let results = query
        .search
        .into_iter()
        .map(|hit| from_object::<RawHit>(hit, "search[]").map(SearchResult::from))
        .collect::<Result<Vec<_>, _>>()?;

    let (total_hits, suggestion) = match query.searchinfo {
        Some(info) => (info.totalhits, info.suggestion.filter(|s| !s.is_empty())),
        None => (None, None),
    };

    Ok(SearchResponse {
        results,
        total_hits,
        suggestion,
    })
}

/// Parse a raw search response body into just the ordered result list
pub fn parse_search_results(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    parse_search_response(body).map(|response| response.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EINSTEIN: &str = r#"{
        "batchcomplete": "",
        "continue": {"sroffset": 10, "continue": "-||"},
        "query": {
            "searchinfo": {"totalhits": 5821, "suggestion": "einstein"},
            "search": [
                {"ns": 0, "title": "Albert Einstein", "pageid": 736, "size": 200000,
                 "snippet": "<span class=\"searchmatch\">Einstein</span> was a &quot;physicist&quot;"},
                {"ns": 0, "title": "Einstein family", "pageid": 1503580,
                 "snippet": ""},
                {"ns": 0, "title": "Einsteinium", "pageid": 9476}
            ]
        }
    }"#;

    #[test]
    fn test_parses_results_in_source_order() {
        let results = parse_search_results(EINSTEIN).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].page_id, 736);
        assert_eq!(results[0].title, "Albert Einstein");
        assert_eq!(results[0].snippet, "Einstein was a \"physicist\"");
        assert_eq!(results[1].title, "Einstein family");
        assert_eq!(results[2].page_id, 9476);
    }

    #[test]
    fn test_missing_and_empty_snippet_are_empty() {
        let results = parse_search_results(EINSTEIN).unwrap();
        assert_eq!(results[1].snippet, "");
        assert_eq!(results[2].snippet, "");
    }

    #[test]
    fn test_null_snippet_is_empty() {
        let body = r#"{"query":{"search":[{"pageid":1,"title":"A","snippet":null}]}}"#;
        let results = parse_search_results(body).unwrap();
        assert_eq!(results[0].snippet, "");
    }

    #[test]
    fn test_captures_search_info() {
        let response = parse_search_response(EINSTEIN).unwrap();
        assert_eq!(response.total_hits, Some(5821));
        assert_eq!(response.suggestion.as_deref(), Some("einstein"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let body = r#"{"query":{"search":[
            {"pageid":7,"title":"Same"},
            {"pageid":7,"title":"Same"}
        ]}}"#;
        assert_eq!(parse_search_results(body).unwrap().len(), 2);
    }

    #[test]
    fn test_query_without_search_is_empty() {
        let body = r#"{"batchcomplete":"","query":{"searchinfo":{"totalhits":0}}}"#;
        let response = parse_search_response(body).unwrap();
        assert!(response.is_empty());
        assert_eq!(response.total_hits, Some(0));
    }

    #[test]
    fn test_missing_query_is_malformed() {
        let err = parse_search_results(r#"{"batchcomplete":""}"#).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_search_results("<html>Bad gateway</html>").unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_object_hit_is_malformed() {
        let err = parse_search_results(r#"{"query":{"search":[42]}}"#).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_array_shaped_hit_is_malformed() {
        let body = r#"{"query":{"search":[[736,"Albert Einstein"]]}}"#;
        let err = parse_search_results(body).unwrap_err();
        assert_eq!(
            err,
            SearchError::MalformedResponse {
                detail: "`search[]` is not an object".to_string(),
            }
        );
    }

    #[test]
    fn test_array_shaped_query_is_malformed() {
        for body in [r#"{"query":[[]]}"#, r#"{"query":[[{"pageid":1,"title":"A"}], null]}"#] {
            let err = parse_search_results(body).unwrap_err();
            assert_eq!(
                err,
                SearchError::MalformedResponse {
                    detail: "`query` is not an object".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_top_level_array_is_malformed() {
        let err = parse_search_results(r#"[{"query":{}}]"#).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_missing_pageid_is_malformed() {
        let err = parse_search_results(r#"{"query":{"search":[{"title":"A"}]}}"#).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_integer_pageid_is_malformed() {
        let body = r#"{"query":{"search":[{"pageid":"736","title":"A"}]}}"#;
        let err = parse_search_results(body).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_missing_title_is_malformed() {
        let err = parse_search_results(r#"{"query":{"search":[{"pageid":1}]}}"#).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_api_error_envelope() {
        let body = r#"{"error":{"code":"nosrsearch","info":"The \"srsearch\" parameter must be set.","*":"..."}}"#;
        let err = parse_search_results(body).unwrap_err();
        assert_eq!(
            err,
            SearchError::Api {
                code: "nosrsearch".to_string(),
                info: "The \"srsearch\" parameter must be set.".to_string(),
            }
        );
    }
}
