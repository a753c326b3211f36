//! # Link Extraction
//!
//! Pulls absolute HTTP(S) links out of markdown text.
//!
//! Matching is deliberately simple: `[text](target)` where the text stops at
//! the first `]` and the target at the first `)`. Brackets and parentheses
//! cannot be escaped or nested. Each target is then parsed as an absolute URL
//! and kept only for the `http` and `https` schemes. Anything else is skipped
//! without failing the call.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::models::ApiEndpoint;

static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("inline link pattern is valid")
});

/// Caller policy applied to every extracted URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Append `/` to URLs that do not already end with one, so that paths can
    /// be concatenated onto them.
    pub trailing_slash: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            trailing_slash: true,
        }
    }
}

/// Extract links with the default policy (trailing slash enforced).
pub fn extract_links(text: &str) -> Vec<ApiEndpoint> {
    extract_links_with(text, &LinkOptions::default())
}

/// Extract `[text](url)` links whose target is an absolute HTTP(S) URL.
///
/// Results are in order of appearance. Duplicates are kept.
pub fn extract_links_with(text: &str, options: &LinkOptions) -> Vec<ApiEndpoint> {
    INLINE_LINK
        .captures_iter(text)
        .filter_map(|caps| {
            let description = caps.get(1)?.as_str();
            let target = caps.get(2)?.as_str();
            let url = parse_http_url(target)?;
            Some(ApiEndpoint::new(
                canonical(&url, options),
                description.trim(),
            ))
        })
        .collect()
}

fn parse_http_url(target: &str) -> Option<Url> {
    let url = match Url::parse(target) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("skipping invalid URL {target:?}: {e}");
            return None;
        }
    };

    match url.scheme() {
        "http" | "https" => Some(url),
        scheme => {
            log::debug!("skipping {scheme} URL {target:?}");
            None
        }
    }
}

fn canonical(url: &Url, options: &LinkOptions) -> String {
    let mut s = String::from(url.as_str());
    if options.trailing_slash && !s.ends_with('/') {
        s.push('/');
    }
    s
}
