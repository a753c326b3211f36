use serde::{Deserialize, Serialize};

/// An absolute HTTP(S) link found in section content, with its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    /// Canonical URL, scheme `http` or `https`.
    pub url: String,
    /// Trimmed link text.
    pub description: String,
    /// Label of the category the link was found under, if the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ApiEndpoint {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
            category: None,
        }
    }

    /// Attach a caller-supplied category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Point this endpoint at a repository by appending `repo` to its URL.
    ///
    /// See [`repo_path`] for how `repo` is cleaned up first.
    #[must_use]
    pub fn for_repo(&self, repo: &str) -> Self {
        Self {
            url: format!("{}{}", self.url, repo_path(repo)),
            ..self.clone()
        }
    }
}

/// Repository path as it is appended to an endpoint URL: the leading `/` is
/// dropped, and so is the extension of the last segment, so
/// `/owner/repo.json` becomes `owner/repo`.
pub fn repo_path(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[segment_start..].rfind('.') {
        Some(dot) => &path[..segment_start + dot],
        None => path,
    }
}
