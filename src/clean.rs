//! Article text cleanup.
//!
//! NewsAPI bodies arrive as HTML fragments cut off with a `[+1234 chars]`
//! marker. The summarizer expects plain prose, so these are scrubbed first.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::Html;

lazy_static! {
    static ref TRUNCATION_MARKER: Regex = Regex::new(r"\[\+\d+\s*chars\]").unwrap();
    static ref TRAILING_NUMBER: Regex = Regex::new(r"\d{3,5}$").unwrap();
}

/// Strip markup, truncation markers and a stray trailing number from `raw`.
pub fn clean_content(raw: &str) -> String {
    let text = strip_tags(raw);
    let text = TRUNCATION_MARKER.replace_all(&text, "");
    let text = TRAILING_NUMBER.replace(text.trim(), "");
    text.trim().to_string()
}

/// Text content of an HTML fragment, with entities decoded.
fn strip_tags(raw: &str) -> String {
    if !raw.contains('<') && !raw.contains('&') {
        return raw.to_string();
    }
    let fragment = Html::parse_fragment(raw);
    fragment.root_element().text().collect()
}
