//! End-to-end tests for the parsing module: markdown text in, section tree out.


use pretty_assertions::assert_eq;

use crate::parsing::parse_sections;

const README: &str = "\
# Git Tools

A list of tools.

## Editors

Edit repositories in the browser.

- [VS Code Web](https://vscode.dev/github)
- [Gitpod](https://gitpod.io/#)

## LLM Context

Chat with your code.

```sh
curl https://example.test
  --silent
```

### Nested

Deeper text.

# Contributing

Open a pull request.
";

#[test]
fn readme_shape() {
    let root = parse_sections(README);

    assert_eq!(root.content, "");
    assert_eq!(
        root.children.keys().collect::<Vec<_>>(),
        vec!["Git Tools", "Contributing"]
    );

    let tools = root.child("Git Tools").unwrap();
    assert_eq!(tools.content, "A list of tools.");
    assert_eq!(
        tools.children.keys().collect::<Vec<_>>(),
        vec!["Editors", "LLM Context"]
    );
}

#[test]
fn readme_content_joins() {
    let root = parse_sections(README);

    assert_eq!(
        root.find(&["Git Tools", "Editors"]).unwrap().content,
        "Edit repositories in the browser.\n- [VS Code Web](https://vscode.dev/github)\n- [Gitpod](https://gitpod.io/#)"
    );
    assert_eq!(
        root.find(&["Git Tools", "LLM Context"]).unwrap().content,
        "Chat with your code.\n```sh\ncurl https://example.test\n  --silent\n```"
    );
    assert_eq!(
        root.find(&["Git Tools", "LLM Context", "Nested"])
            .unwrap()
            .content,
        "Deeper text."
    );
    assert_eq!(
        root.child("Contributing").unwrap().content,
        "Open a pull request."
    );
}

#[test]
fn empty_document() {
    let root = parse_sections("");
    assert!(root.is_empty());
}

#[test]
fn blank_lines_only() {
    let root = parse_sections("\n\n   \n");
    assert!(root.is_empty());
}

#[test]
fn crlf_document_matches_lf_document() {
    let lf = parse_sections(README);
    let crlf = parse_sections(&README.replace('\n', "\r\n"));
    assert_eq!(crlf, lf);
}

#[test]
fn soft_wrapped_paragraph_is_reflowed() {
    let root = parse_sections("# A\n\nline one\nline two\n\nnext para\n");
    assert_eq!(
        root.child("A").unwrap().content,
        "line one\n\nline two\n\nnext para"
    );
}

#[test]
fn each_parse_returns_a_fresh_tree() {
    let mut first = parse_sections(README);
    first.content.push_str("mutated");
    let second = parse_sections(README);
    assert_eq!(second.content, "");
}

#[test]
fn tree_snapshot() {
    let root = parse_sections("# Tools\n\nIntro\n\n## Editors\n\nEdit online\n");
    insta::assert_yaml_snapshot!(root, @r#"
    content: ""
    children:
      Tools:
        content: Intro
        children:
          Editors:
            content: Edit online
            children: {}
    "#);
}

#[test]
fn tree_serializes_to_json() {
    let root = parse_sections("# A\n\ntext\n");
    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "content": "",
            "children": {
                "A": { "content": "text", "children": {} }
            }
        })
    );
}

#[test]
fn indented_code_keeps_its_indentation() {
    let root = parse_sections("# A\n\nPara\n\n    first\n        second\n");
    assert_eq!(
        root.child("A").unwrap().content,
        "Para\n    first\n        second"
    );
}
