pub mod categories;
pub mod io;
pub mod links;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use categories::*;
pub use io::*;
pub use links::{LinkOptions, extract_links, extract_links_with};
pub use models::{block::*, endpoint::*, section::*};
pub use parsing::{
    lexer::lex,
    normalize::normalize,
    parse_sections,
    tree::{SectionTreeBuilder, build_tree},
};
