use std::fmt;

/// Failure of a search round-trip, categorized so the caller can pick a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Server answered with a non-success status
    Http { code: u16 },
    /// Connect or read timeout fired
    Timeout,
    /// DNS, connection or other transport failure
    Network { detail: String },
    /// Body was not JSON or did not have the expected shape
    MalformedResponse { detail: String },
    /// Server returned a MediaWiki error envelope
    Api { code: String, info: String },
}

impl SearchError {
    /// Classify a transport-level reqwest error
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else if let Some(status) = err.status() {
            SearchError::Http {
                code: status.as_u16(),
            }
        } else {
            SearchError::Network {
                detail: err.to_string(),
            }
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Http { code } => write!(f, "HTTP error {}", code),
            SearchError::Timeout => write!(f, "Request timed out"),
            SearchError::Network { detail } => write!(f, "Network error: {}", detail),
            SearchError::MalformedResponse { detail } => {
                write!(f, "Malformed server response: {}", detail)
            }
            SearchError::Api { code, info } => write!(f, "API error ({}): {}", code, info),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_status() {
        let err = SearchError::Http { code: 503 };
        assert_eq!(err.to_string(), "HTTP error 503");
    }

    #[test]
    fn test_display_api_error() {
        let err = SearchError::Api {
            code: "badvalue".to_string(),
            info: "Unrecognized value".to_string(),
        };
        assert_eq!(err.to_string(), "API error (badvalue): Unrecognized value");
    }
}
