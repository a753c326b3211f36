//! # Section Parsing
//!
//! Turns markdown text into a tree of named sections.
//!
//! ## Parsing Phases
//!
//! 1. **Lexing** (`lexer`): `pulldown-cmark` events are folded into a flat,
//!    ordered list of top-level [`Block`](crate::models::Block)s, each carrying its exact source text.
//!
//! 2. **Tree Construction** (`tree`): a `SectionTreeBuilder` keeps a stack of open
//!    sections and attaches every heading under the nearest shallower one.
//!    Content blocks are run through `normalize` before being appended.
//!
//! ## Key Invariants
//!
//! - A heading closes every open section of equal or greater depth
//! - Content belongs to the most recently opened section only
//! - Nothing here fails: odd heading progressions still yield a valid tree

pub mod lexer;
pub mod normalize;
pub mod tree;

#[cfg(test)]
mod tests;

use crate::models::Section;

/// Parse a whole markdown document into its section tree.
pub fn parse_sections(markdown: &str) -> Section {
    tree::build_tree(&lexer::lex(markdown))
}
