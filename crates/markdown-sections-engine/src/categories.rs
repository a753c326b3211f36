//! Category view over a section tree.
//!
//! Link-list documents are laid out as one top-level heading whose
//! subsections are categories, each holding a list of links. This module
//! flattens that layout into [`Category`] values.

use serde::Serialize;

use crate::{
    links::{LinkOptions, extract_links_with},
    models::{ApiEndpoint, Section},
};

/// One subsection of the category container, with the links found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub content: String,
    pub endpoints: Vec<ApiEndpoint>,
}

impl Category {
    /// This category with every endpoint pointed at `repo`.
    #[must_use]
    pub fn for_repo(&self, repo: &str) -> Self {
        Self {
            endpoints: self
                .endpoints
                .iter()
                .map(|endpoint| endpoint.for_repo(repo))
                .collect(),
            ..self.clone()
        }
    }
}

/// Categories under the first top-level section of `root`.
pub fn categories(root: &Section, options: &LinkOptions) -> Vec<Category> {
    match root.children.first() {
        Some((_, container)) => categories_in(container, options),
        None => Vec::new(),
    }
}

/// Categories under the top-level section titled `title`.
///
/// Returns `None` if there is no such section.
pub fn categories_under(root: &Section, title: &str, options: &LinkOptions) -> Option<Vec<Category>> {
    root.child(title)
        .map(|container| categories_in(container, options))
}

fn categories_in(container: &Section, options: &LinkOptions) -> Vec<Category> {
    container
        .children
        .iter()
        .map(|(name, section)| Category {
            name: name.clone(),
            content: section.content.clone(),
            endpoints: extract_links_with(&section.content, options)
                .into_iter()
                .map(|endpoint| endpoint.with_category(name.as_str()))
                .collect(),
        })
        .collect()
}

/// All endpoints across `categories`, in category order.
pub fn all_endpoints(categories: &[Category]) -> Vec<ApiEndpoint> {
    categories
        .iter()
        .flat_map(|category| category.endpoints.iter().cloned())
        .collect()
}
