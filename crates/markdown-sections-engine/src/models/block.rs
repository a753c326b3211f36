/// The kind of a top-level markdown block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// An ATX or setext heading.
    Heading {
        /// Heading level (1 = outermost).
        depth: u8,
        /// Plain heading text with inline markup stripped.
        text: String,
    },
    Paragraph,
    /// An indented or fenced code block.
    Code,
    List,
    BlockQuote,
    Html,
    Table,
    /// A thematic break (`---`, `***`).
    Rule,
    /// Any other top-level construct (footnote definitions, metadata blocks, ...).
    Other,
}

impl BlockKind {
    /// Short type tag for this kind, e.g. `"paragraph"` or `"code"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Code => "code",
            BlockKind::List => "list",
            BlockKind::BlockQuote => "blockquote",
            BlockKind::Html => "html",
            BlockKind::Table => "table",
            BlockKind::Rule => "hr",
            BlockKind::Other => "other",
        }
    }

    #[must_use]
    pub fn is_heading(&self) -> bool {
        matches!(self, BlockKind::Heading { .. })
    }

    #[must_use]
    pub fn is_code(&self) -> bool {
        matches!(self, BlockKind::Code)
    }
}

/// One lexical unit of a markdown document, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// Exact source text of the block.
    pub raw: String,
}

impl Block {
    pub fn new(kind: BlockKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    /// Convenience constructor for a heading block.
    pub fn heading(depth: u8, text: impl Into<String>) -> Self {
        let text = text.into();
        let raw = format!("{} {}", "#".repeat(depth as usize), text);
        Self {
            kind: BlockKind::Heading { depth, text },
            raw,
        }
    }

    pub fn paragraph(raw: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, raw)
    }

    pub fn code(raw: impl Into<String>) -> Self {
        Self::new(BlockKind::Code, raw)
    }

    pub fn list(raw: impl Into<String>) -> Self {
        Self::new(BlockKind::List, raw)
    }
}
