use std::io::{self, ErrorKind};

/// Result of asking the platform to open a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// No browser integration in this environment (headless box, SSH session)
    Unsupported,
    Failed(String),
}

/// The platform's "open this URL" capability
pub trait UrlOpener {
    fn open_url(&self, url: &str) -> OpenOutcome;
}

/// Opens URLs in the user's default browser via the `webbrowser` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> OpenOutcome {
        if !webbrowser::Browser::is_available() {
            return OpenOutcome::Unsupported;
        }
        classify_open_result(webbrowser::open(url))
    }
}

/// Map what `webbrowser::open` returned onto an outcome.
/// "No browser found" and "platform not supported" both mean Unsupported.
fn classify_open_result(result: io::Result<()>) -> OpenOutcome {
    match result {
        Ok(()) => OpenOutcome::Opened,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::Unsupported) => {
            OpenOutcome::Unsupported
        }
        Err(e) => OpenOutcome::Failed(e.to_string()),
    }
}

/// Canonical article link for a page id
///
/// # Arguments
/// * `page_url` - Article view endpoint (e.g., "https://en.wikipedia.org/w/index.php")
/// * `page_id` - Page identifier from the search API
pub fn article_url(page_url: &str, page_id: u64) -> String {
    format!("{}?curid={}", page_url, page_id)
}

/// Open an article and return the URL together with what the platform reported
pub fn open_article(opener: &dyn UrlOpener, page_url: &str, page_id: u64) -> (String, OpenOutcome) {
    let url = article_url(page_url, page_id);
    log::debug!("Opening {}", url);
    let outcome = opener.open_url(&url);
    (url, outcome)
}
