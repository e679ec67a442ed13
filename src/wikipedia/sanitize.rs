use regex::{Captures, Regex};
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

// Only these five entities are decoded; anything else passes through as-is.
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(quot|amp|lt|gt|nbsp);").expect("entity pattern is valid"));

/// Turn a search-engine snippet into plain text for the terminal.
///
/// Strips markup tags (the engine wraps matched terms in
/// `<span class="searchmatch">`), decodes `&quot; &amp; &lt; &gt; &nbsp;`
/// in a single pass, and trims the result.
///
/// Each entity is decoded exactly once, so `&amp;lt;` yields `&lt;`. Chained
/// `replace` calls (amp first, then lt) would turn it into `<` instead.
pub fn sanitize_snippet(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let stripped = TAG_RE.replace_all(raw, "");
    let decoded = ENTITY_RE.replace_all(&stripped, |caps: &Captures| {
        match &caps[1] {
            "quot" => "\"",
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            _ => " ", // nbsp
        }
    });

    decoded.trim().to_string()
}
