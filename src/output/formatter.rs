use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::browser::OpenOutcome;
use crate::wikipedia::{SearchError, SearchResponse};

/// Shown in place of an empty snippet
pub const NO_SNIPPET_PLACEHOLDER: &str = "(no preview available)";

const SNIPPET_INDENT: &str = "   ";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
pub fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the search summary line, e.g. "Showing 10 of 5821 results"
fn format_summary(response: &SearchResponse) -> Option<String> {
    let total = response.total_hits?;
    let shown = response.results.len() as u64;
    if total > shown {
        Some(format!("Showing {} of {} results", shown, total))
    } else {
        None
    }
}

/// Format search results as a 1-based numbered list.
///
/// Each entry is the title followed by an indented snippet line. Snippets are
/// truncated to `width` when a terminal width is known.
pub fn format_results(response: &SearchResponse, use_colors: bool, width: Option<usize>) -> String {
    let mut lines = Vec::new();

    if let Some(suggestion) = &response.suggestion {
        if use_colors {
            lines.push(format!("Did you mean: {}?", suggestion.italic()));
        } else {
            lines.push(format!("Did you mean: {}?", suggestion));
        }
    }
    if let Some(summary) = format_summary(response) {
        lines.push(summary);
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }

    for (idx, result) in response.results.iter().enumerate() {
        let index_str = format!("{}.", idx + 1);

        let snippet = if result.snippet.is_empty() {
            NO_SNIPPET_PLACEHOLDER.to_string()
        } else {
            format!("{}...", result.snippet)
        };
        let snippet = match width {
            Some(w) if w > SNIPPET_INDENT.len() + 10 => {
                truncate_text(&snippet, w - SNIPPET_INDENT.len())
            }
            _ => snippet,
        };

        if use_colors {
            lines.push(format!("{} {}", index_str.dimmed(), result.title.bold()));
            lines.push(format!("{}{}", SNIPPET_INDENT, snippet.dimmed()));
        } else {
            lines.push(format!("{} {}", index_str, result.title));
            lines.push(format!("{}{}", SNIPPET_INDENT, snippet));
        }
    }

    lines.join("\n")
}

/// User-facing message for a failed search
pub fn format_search_error(err: &SearchError) -> String {
    match err {
        SearchError::Http { code: 403 } => {
            "Access denied (HTTP 403): the server rejected the request. Check the user_agent setting."
                .to_string()
        }
        SearchError::Http { code: 404 } => {
            "Not found (HTTP 404): check the api_url setting.".to_string()
        }
        SearchError::Http { code } if *code >= 500 => {
            format!("Wikipedia server error (HTTP {}). Try again later.", code)
        }
        SearchError::Http { code } => format!("Search failed with HTTP status {}.", code),
        SearchError::Timeout => "Timed out waiting for a response from the server.".to_string(),
        SearchError::Network { detail } => format!("Network error: {}", detail),
        SearchError::MalformedResponse { .. } => {
            "Could not process the server response: unexpected data format.".to_string()
        }
        SearchError::Api { code, info } => format!("Wikipedia API error ({}): {}", code, info),
    }
}

/// Report what happened when an article was handed to the browser
pub fn format_open_outcome(title: &str, url: &str, outcome: &OpenOutcome) -> String {
    match outcome {
        OpenOutcome::Opened => format!("Opening article: {}", title),
        OpenOutcome::Unsupported => {
            format!("Could not open a browser here. Article link: {}", url)
        }
        OpenOutcome::Failed(detail) => format!(
            "Failed to open browser: {}\nArticle link: {}",
            detail, url
        ),
    }
}
