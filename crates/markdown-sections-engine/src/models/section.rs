//! The section tree produced by the tree builder.
//!
//! Each heading in a document becomes a [`Section`] owning the content that
//! follows it and the sections nested under it. The root section stands for
//! the document itself (implicit depth 0) and holds any content that appears
//! before the first heading.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named node in the section tree.
///
/// Children are keyed by heading title in document order. A later heading
/// with a title already present at the same nesting point replaces the
/// earlier section but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub content: String,
    pub children: IndexMap<String, Section>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized text directly owned by this section.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn children(&self) -> &IndexMap<String, Section> {
        &self.children
    }

    /// Look up a direct child by heading title.
    pub fn child(&self, title: &str) -> Option<&Section> {
        self.children.get(title)
    }

    /// Follow a path of heading titles down the tree.
    ///
    /// An empty path returns `self`.
    pub fn find(&self, path: &[&str]) -> Option<&Section> {
        path.iter()
            .try_fold(self, |section, title| section.child(title))
    }

    /// True when the section has neither content nor children.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.children.is_empty()
    }

    /// Depth-first, pre-order iterator over all descendants with their title paths.
    ///
    /// The section itself is not yielded.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self
                .children
                .iter()
                .rev()
                .map(|(title, section)| (vec![title.as_str()], section))
                .collect(),
        }
    }
}

/// Iterator returned by [`Section::walk`].
pub struct Walk<'a> {
    stack: Vec<(Vec<&'a str>, &'a Section)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Vec<&'a str>, &'a Section);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, section) = self.stack.pop()?;
        for (title, child) in section.children.iter().rev() {
            let mut child_path = path.clone();
            child_path.push(title.as_str());
            self.stack.push((child_path, child));
        }
        Some((path, section))
    }
}
