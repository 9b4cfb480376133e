//! Markdown document compilation.
//!
//! [`compile`] drives the whole pipeline: segment the document into
//! blocks, classify each block, strip its block-level markup, run the
//! surviving text through the inline parser and assemble one HTML node
//! tree rooted at a `div`.

use thiserror::Error;

use crate::html::HtmlNode;
use crate::parsing::blocks::{BlockType, classify_block, segment_blocks};
use crate::parsing::inline::{ParseError, SpanKind, TextSpan, parse_inline};

/// Compilation failure for one document.
///
/// Every error is fatal to the current conversion; there is no partial
/// output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Inline(#[from] ParseError),
    /// A link or image span reached node conversion without a url. The
    /// inline parser never produces such a span, so this marks an
    /// internal mismatch rather than bad input.
    #[error("Cannot map a {kind:?} span without a url to an HTML node")]
    SpanMissingUrl { kind: SpanKind },
}

/// Compiles a markdown document into an HTML node tree.
///
/// The root is always a `div` parent with one child per block, in block
/// order.
pub fn compile(markdown: &str) -> Result<HtmlNode, CompileError> {
    let mut children = Vec::new();
    for block in segment_blocks(markdown) {
        children.push(compile_block(&block)?);
    }
    Ok(HtmlNode::parent("div", children))
}

fn compile_block(block: &str) -> Result<HtmlNode, CompileError> {
    match classify_block(block) {
        BlockType::Paragraph => paragraph_node(block),
        BlockType::Heading(level) => heading_node(block, level),
        BlockType::Code => code_node(block),
        BlockType::Quote => quote_node(block),
        BlockType::UnorderedList => unordered_list_node(block),
        BlockType::OrderedList => ordered_list_node(block),
    }
}

fn paragraph_node(block: &str) -> Result<HtmlNode, CompileError> {
    Ok(HtmlNode::parent("p", inline_children(block)?))
}

fn heading_node(block: &str, level: u8) -> Result<HtmlNode, CompileError> {
    // The classifier guarantees `level` hashes and one space up front.
    let text = &block[level as usize + 1..];
    Ok(HtmlNode::parent(&format!("h{level}"), inline_children(text)?))
}

fn code_node(block: &str) -> Result<HtmlNode, CompileError> {
    // The classifier guarantees non-overlapping three-backtick fences.
    let inner = &block[3..block.len() - 3];
    let code = HtmlNode::parent("code", inline_children(inner)?);
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn quote_node(block: &str) -> Result<HtmlNode, CompileError> {
    let text = block
        .lines()
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
}

fn unordered_list_node(block: &str) -> Result<HtmlNode, CompileError> {
    let mut items = Vec::new();
    for line in block.lines() {
        let text = line
            .strip_prefix("* ")
            .or_else(|| line.strip_prefix("- "))
            .unwrap_or(line);
        items.push(HtmlNode::parent("li", inline_children(text)?));
    }
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_node(block: &str) -> Result<HtmlNode, CompileError> {
    let mut items = Vec::new();
    for (i, line) in block.lines().enumerate() {
        let text = line.strip_prefix(&format!("{}. ", i + 1)).unwrap_or(line);
        items.push(HtmlNode::parent("li", inline_children(text)?));
    }
    Ok(HtmlNode::parent("ol", items))
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>, CompileError> {
    parse_inline(text)?.into_iter().map(span_to_node).collect()
}

/// Fixed mapping from span kinds to HTML leaves.
fn span_to_node(span: TextSpan) -> Result<HtmlNode, CompileError> {
    match span.kind {
        SpanKind::Plain => Ok(HtmlNode::text(span.text)),
        SpanKind::Bold => Ok(HtmlNode::leaf("b", span.text)),
        SpanKind::Italic => Ok(HtmlNode::leaf("i", span.text)),
        SpanKind::Code => Ok(HtmlNode::leaf("code", span.text)),
        SpanKind::Link => {
            let url = span
                .url
                .ok_or(CompileError::SpanMissingUrl { kind: span.kind })?;
            Ok(HtmlNode::leaf_with_attrs(
                "a",
                span.text,
                vec![("href".to_string(), url)],
            ))
        }
        SpanKind::Image => {
            let url = span
                .url
                .ok_or(CompileError::SpanMissingUrl { kind: span.kind })?;
            Ok(HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src".to_string(), url), ("alt".to_string(), span.text)],
            ))
        }
    }
}
