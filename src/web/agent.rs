use regex::Regex;
use std::sync::LazyLock;

static BROWSER_AGENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)mozilla|chrome|safari|apple|webkit").unwrap());

/// Whether the user agent looks like a web browser (as opposed to curl, wget, ...).
///
/// Browsers get HTML pages and form-driven lookups; everything else gets plain
/// text and path-driven lookups.
pub fn is_browser(user_agent: &str) -> bool {
    BROWSER_AGENT.is_match(user_agent)
}
