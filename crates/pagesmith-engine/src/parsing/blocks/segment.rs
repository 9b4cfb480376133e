/// Splits a markdown document into blocks.
///
/// A run of one or more blank or whitespace-only lines acts as a single
/// block separator. Every line of a block is trimmed of leading and
/// trailing whitespace, so indented source (say, markdown embedded in
/// an indented string) still segments cleanly. Pieces with no content
/// at all are discarded and block order is preserved.
pub fn segment_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in markdown.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}
