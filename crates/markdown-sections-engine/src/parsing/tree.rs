use crate::models::{Block, BlockKind, Section};

use super::normalize::{is_list_item, normalize};

/// A section whose scope has not ended yet.
#[derive(Debug)]
struct OpenSection {
    title: String,
    depth: u8,
    section: Section,
}

/// Builds a [`Section`] tree from a stream of blocks.
///
/// The root stands for implicit depth 0 and is never closed. Every heading
/// closes the open sections whose depth is equal or greater, then opens a new
/// section under whatever is left on top. A closed section is inserted into its
/// parent by title, so siblings keep document order and a repeated title
/// replaces the earlier section in place.
#[derive(Debug, Default)]
pub struct SectionTreeBuilder {
    root: Section,
    stack: Vec<OpenSection>,
}

impl SectionTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: &Block) {
        match &block.kind {
            BlockKind::Heading { depth, text } => self.open_section(*depth, text),
            kind => self.append_content(&block.raw, kind),
        }
    }

    pub fn finish(mut self) -> Section {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.root
    }

    fn open_section(&mut self, depth: u8, title: &str) {
        while self.stack.last().is_some_and(|open| open.depth >= depth) {
            self.close_top();
        }

        log::trace!("opening section {title:?} at depth {depth}");
        self.stack.push(OpenSection {
            title: title.to_string(),
            depth,
            section: Section::new(),
        });
    }

    fn close_top(&mut self) {
        let Some(closed) = self.stack.pop() else {
            return;
        };
        let parent = self.current_mut();
        if parent
            .children
            .insert(closed.title.clone(), closed.section)
            .is_some()
        {
            log::debug!("duplicate section title {:?} replaced earlier section", closed.title);
        }
    }

    fn current_mut(&mut self) -> &mut Section {
        match self.stack.last_mut() {
            Some(open) => &mut open.section,
            None => &mut self.root,
        }
    }

    fn append_content(&mut self, raw: &str, kind: &BlockKind) {
        let normalized = normalize(raw, kind);
        if normalized.is_empty() {
            return;
        }

        let section = self.current_mut();
        if section.content.is_empty() {
            section.content = normalized;
            return;
        }

        if is_list_item(&normalized) || kind.is_code() {
            section.content.push('\n');
        } else {
            section.content.push_str("\n\n");
        }
        section.content.push_str(&normalized);
    }
}

/// Build the section tree for an ordered sequence of blocks.
///
/// Never fails: unknown block kinds are treated as content and empty input
/// yields an empty root.
pub fn build_tree(blocks: &[Block]) -> Section {
    let mut builder = SectionTreeBuilder::new();
    for block in blocks {
        builder.push(block);
    }
    builder.finish()
}
