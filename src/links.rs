use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

use crate::domain::{ensure_scheme, has_scheme, has_valid_tld, strip_trailing_punctuation};

static LINK_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)https?://\S+|www\.\S+|\b[a-z0-9][a-z0-9-]*(?:\.[a-z0-9-]+)*\.[a-z]{2,}\b\S*",
    )
    .unwrap()
});
static EMAIL_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Which kind of token an extraction pass looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractKind {
    Links,
    Emails,
}

impl ExtractKind {
    pub fn extract(self, text: &str) -> Vec<String> {
        match self {
            ExtractKind::Links => extract_links(text),
            ExtractKind::Emails => extract_emails(text),
        }
    }
}

/// Collects distinct strings, keeping the order they were first seen.
pub fn unique_in_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn is_valid_link(candidate: &str) -> bool {
    Url::parse(candidate)
        .ok()
        .and_then(|url| url.host_str().map(|host| !host.is_empty()))
        .unwrap_or(false)
}

/// Finds URL-like tokens in free text.
///
/// Scheme-less tokens get `https://`, trailing sentence punctuation is cut,
/// and anything `url` refuses to parse is dropped. Duplicates are compared
/// as exact strings, so `https://a.io` and `https://a.io/` both survive.
pub fn extract_links(text: &str) -> Vec<String> {
    let candidates = LINK_CANDIDATE.find_iter(text).filter_map(|m| {
        // Addresses and their domain halves are not links. An `@` after the
        // first `/` belongs to the path, as in `medium.com/@user`.
        let token = m.as_str();
        let authority = token.split('/').next().unwrap_or(token);
        if text[..m.start()].ends_with('@') || (!has_scheme(token) && authority.contains('@')) {
            return None;
        }

        let with_scheme = ensure_scheme(token);
        let candidate = strip_trailing_punctuation(&with_scheme);
        if is_valid_link(candidate) {
            Some(candidate.to_string())
        } else {
            debug!(
                action = "reject",
                component = "link_extraction",
                candidate = candidate,
                "Dropped candidate that is not a valid URL"
            );
            None
        }
    });

    unique_in_order(candidates)
}

/// Finds `local@domain.tld` tokens in free text, first occurrence first.
pub fn extract_emails(text: &str) -> Vec<String> {
    let candidates = EMAIL_CANDIDATE.find_iter(text).filter_map(|m| {
        let candidate = strip_trailing_punctuation(m.as_str());
        let domain = candidate.rsplit_once('@').map(|(_, domain)| domain)?;
        has_valid_tld(domain).then(|| candidate.to_string())
    });

    unique_in_order(candidates)
}
