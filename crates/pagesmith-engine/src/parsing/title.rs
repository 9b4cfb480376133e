//! Page title extraction.

use thiserror::Error;

use crate::parsing::blocks::{BlockType, classify_block, segment_blocks};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    /// The document has no level-1 heading to take a title from. Page
    /// generation treats this as fatal for the page.
    #[error("No title found: the document has no level-1 heading")]
    NoTitleFound,
}

/// Returns the trimmed text of the document's first level-1 heading.
///
/// Scans blocks in order and ignores every other heading level, so a
/// document may open with subheadings and still take its title from an
/// `# ...` block further down.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    segment_blocks(markdown)
        .into_iter()
        .find(|block| classify_block(block) == BlockType::Heading(1))
        .map(|block| block[2..].trim().to_string())
        .ok_or(TitleError::NoTitleFound)
}
