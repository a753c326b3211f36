//! Block lexing on top of `pulldown-cmark`.
//!
//! The CommonMark parser does the real work. This module only folds its
//! offset-annotated event stream into top-level [`Block`]s.

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::models::{Block, BlockKind};

/// Split markdown text into its top-level blocks, in source order.
///
/// Line endings are converted to `\n` first, so every `raw` slice uses
/// `\n` only. Never fails; empty input yields no blocks.
pub fn lex(markdown: &str) -> Vec<Block> {
    let text = normalize_line_endings(markdown);
    let mut lexer = BlockLexer::new(&text);

    for (event, range) in Parser::new_ext(&text, options()).into_offset_iter() {
        lexer.process_event(event, range);
    }

    let blocks = lexer.finish();
    log::trace!("lexed {} top-level blocks", blocks.len());
    blocks
}

pub(crate) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// A top-level block whose end event has not been seen yet.
struct OpenBlock {
    kind: BlockKind,
    start: usize,
}

/// Tracks nesting while walking the event stream.
///
/// Only events at nesting depth 0 open or close blocks. Everything nested
/// inside (list items, emphasis, links) belongs to the enclosing block and is
/// covered by its source range.
struct BlockLexer<'a> {
    source: &'a str,
    depth: usize,
    open: Option<OpenBlock>,
    /// Plain text collected while inside a heading.
    heading_text: String,
    out: Vec<Block>,
}

impl<'a> BlockLexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            depth: 0,
            open: None,
            heading_text: String::new(),
            out: Vec::new(),
        }
    }

    fn process_event(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => {
                if self.depth == 0 {
                    let kind = kind_of(&tag);
                    let start = if kind.is_code() {
                        self.line_start(range.start)
                    } else {
                        range.start
                    };
                    self.open = Some(OpenBlock { kind, start });
                    self.heading_text.clear();
                }
                self.depth += 1;
            }
            Event::End(_) => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.close(range.end);
                }
            }
            Event::Text(text) | Event::Code(text) if self.in_heading() => {
                self.heading_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if self.in_heading() => {
                self.heading_text.push(' ');
            }
            Event::Rule if self.depth == 0 => {
                self.out
                    .push(Block::new(BlockKind::Rule, &self.source[range]));
            }
            _ => {}
        }
    }

    /// Indented code ranges begin after the indent; back up to the start of
    /// the line when only whitespace precedes `offset`.
    fn line_start(&self, offset: usize) -> usize {
        let before = &self.source[..offset];
        let start = before.rfind('\n').map_or(0, |i| i + 1);
        if before[start..].trim().is_empty() {
            start
        } else {
            offset
        }
    }

    fn in_heading(&self) -> bool {
        matches!(
            self.open,
            Some(OpenBlock {
                kind: BlockKind::Heading { .. },
                ..
            })
        )
    }

    fn close(&mut self, end: usize) {
        let Some(OpenBlock { kind, start }) = self.open.take() else {
            return;
        };

        let kind = match kind {
            BlockKind::Heading { depth, .. } => BlockKind::Heading {
                depth,
                text: std::mem::take(&mut self.heading_text).trim().to_string(),
            },
            other => other,
        };

        let raw = self.source.get(start..end).unwrap_or_default();
        self.out.push(Block::new(kind, raw));
    }

    fn finish(self) -> Vec<Block> {
        self.out
    }
}

fn kind_of(tag: &Tag<'_>) -> BlockKind {
    match tag {
        Tag::Heading { level, .. } => BlockKind::Heading {
            depth: *level as u8,
            text: String::new(),
        },
        Tag::Paragraph => BlockKind::Paragraph,
        Tag::CodeBlock(_) => BlockKind::Code,
        Tag::List(_) => BlockKind::List,
        Tag::BlockQuote(_) => BlockKind::BlockQuote,
        Tag::HtmlBlock => BlockKind::Html,
        Tag::Table(_) => BlockKind::Table,
        _ => BlockKind::Other,
    }
}
