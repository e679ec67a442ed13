use super::schema::{Config, MAX_RESULT_LIMIT};

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.language.is_empty()
        || !config
            .language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        errors.push(format!(
            "language: invalid '{}' - expected a language code like 'en' or 'zh-yue'",
            config.language
        ));
    }

    if let Some(ref url) = config.api_url {
        if !is_http_url(url) {
            errors.push(format!("api_url: invalid '{}' - must start with http:// or https://", url));
        }
    }

    if let Some(ref url) = config.page_url {
        if !is_http_url(url) {
            errors.push(format!("page_url: invalid '{}' - must start with http:// or https://", url));
        }
    }

    if config.result_limit == 0 || config.result_limit > MAX_RESULT_LIMIT {
        errors.push(format!(
            "result_limit: must be between 1 and {}, got {}",
            MAX_RESULT_LIMIT, config.result_limit
        ));
    }

    if config.user_agent.trim().is_empty() {
        errors.push("user_agent: must not be empty".to_string());
    }

    if config.connect_timeout_secs == 0 {
        errors.push("connect_timeout_secs: must be positive".to_string());
    }

    if config.read_timeout_secs == 0 {
        errors.push("read_timeout_secs: must be positive".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
