/// The shape of one markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Decides what kind of block a trimmed, non-empty chunk of markdown is.
///
/// Checks run in a fixed order and the first match wins; a block that
/// matches nothing is a paragraph. Heading and code only inspect the
/// block's opening run and its fences, while the quote and list checks
/// must hold on every line.
pub fn classify_block(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }
    if is_code(block) {
        return BlockType::Code;
    }
    if is_quote(block) {
        return BlockType::Quote;
    }
    if is_unordered_list(block) {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

/// One to six `#` characters followed by a space; seven hashes or a
/// missing space disqualify.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Opening and closing fence, which must not overlap.
fn is_code(block: &str) -> bool {
    block.len() >= 6 && block.starts_with("```") && block.ends_with("```")
}

fn is_quote(block: &str) -> bool {
    block.lines().all(|line| line.starts_with('>'))
}

fn is_unordered_list(block: &str) -> bool {
    block
        .lines()
        .all(|line| line.starts_with("* ") || line.starts_with("- "))
}

/// Items must be numbered `1. `, `2. `, ... with no gaps or offsets.
fn is_ordered_list(block: &str) -> bool {
    block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}
