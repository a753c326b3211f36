//! Crate-level tests: parsing, link extraction and categories working together.

use pretty_assertions::assert_eq;

use crate::{ApiEndpoint, LinkOptions, categories, extract_links, parse_sections};

const TOOLS_README: &str = "\
# Git Tools

Replace `github.com` with one of these.

## Editors

- [github.dev](https://github.dev) - Open in the web editor
- [StackBlitz](https://stackblitz.com/github) - Run in the browser

## LLM Context

- [Uithub](https://uithub.com) - Repository as plain text
- [Internal](/docs) - Not a tool

# License

MIT
";

#[test]
fn section_content_feeds_link_extraction() {
    let root = parse_sections(TOOLS_README);
    let editors = root.find(&["Git Tools", "Editors"]).unwrap();

    assert_eq!(
        extract_links(editors.content()),
        vec![
            ApiEndpoint::new("https://github.dev/", "github.dev"),
            ApiEndpoint::new("https://stackblitz.com/github/", "StackBlitz"),
        ]
    );
}

#[test]
fn categories_from_readme() {
    let root = parse_sections(TOOLS_README);
    let found = categories(&root, &LinkOptions::default());

    assert_eq!(found.len(), 2);
    assert_eq!(found[1].name, "LLM Context");
    assert_eq!(
        found[1].endpoints,
        vec![ApiEndpoint::new("https://uithub.com/", "Uithub").with_category("LLM Context")]
    );
}

#[test]
fn every_extracted_url_is_http() {
    let root = parse_sections(TOOLS_README);
    for (_, section) in root.walk() {
        for endpoint in extract_links(&section.content) {
            assert!(
                endpoint.url.starts_with("http://") || endpoint.url.starts_with("https://"),
                "unexpected url {}",
                endpoint.url
            );
            assert!(endpoint.url.ends_with('/'));
        }
    }
}

#[test]
fn endpoint_serialization_omits_missing_category() {
    let json = serde_json::to_string(&ApiEndpoint::new("https://x.test/", "X")).unwrap();
    assert_eq!(json, r#"{"url":"https://x.test/","description":"X"}"#);
}
