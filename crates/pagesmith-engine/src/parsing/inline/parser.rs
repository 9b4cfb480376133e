//! Inline span parsing.
//!
//! Turns one block's worth of markdown text into a flat list of
//! [`TextSpan`]s by running a fixed sequence of splitting passes:
//!
//! 1. links `[label](url)`
//! 2. images `![alt](url)`
//! 3. bold `**`
//! 4. italic `*`
//! 5. code `` ` ``
//!
//! Each pass splits `Plain` spans only and passes already-typed spans
//! through untouched, so earlier passes take precedence. The link pass
//! skips matches directly preceded by `!` and leaves them for the image
//! pass. Bold runs before italic because `*` is a prefix of `**`.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::types::{SpanKind, TextSpan};

const BOLD_DELIMITER: &str = "**";
const ITALIC_DELIMITER: &str = "*";
const CODE_DELIMITER: &str = "`";

/// Inline markup that cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A delimiter opened but never closed, so the text cannot be split
    /// into alternating outside/inside runs.
    #[error("Unmatched '{delimiter}' delimiter in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },
}

/// Parses inline markup into a list of typed spans.
///
/// The output preserves source order and omits empty spans, so plain text
/// without any markup comes back as a single `Plain` span and an empty
/// input yields an empty list.
pub fn parse_inline(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_links(spans);
    let spans = split_images(spans);
    let spans = split_on_delimiter(spans, BOLD_DELIMITER, SpanKind::Bold)?;
    let spans = split_on_delimiter(spans, ITALIC_DELIMITER, SpanKind::Italic)?;
    split_on_delimiter(spans, CODE_DELIMITER, SpanKind::Code)
}

/// Collects every well-formed `[label](url)` pair in the text, left to
/// right. A pattern directly preceded by `!` is an image and is not
/// reported here.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    bracket_matches(text, link_regex(), true)
        .into_iter()
        .map(|(_, label, url)| (label.to_string(), url.to_string()))
        .collect()
}

/// Collects every well-formed `![alt](url)` pair in the text, left to
/// right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    bracket_matches(text, image_regex(), false)
        .into_iter()
        .map(|(_, label, url)| (label.to_string(), url.to_string()))
        .collect()
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"))
}

/// Scans for bracket-paren matches, returning each match's byte range,
/// label and url. With `skip_banged` the scan ignores matches directly
/// preceded by `!` and resumes one byte into them, so a well-formed
/// pattern nested in a malformed image still surfaces. Malformed
/// patterns never match at all.
fn bracket_matches<'t>(
    text: &'t str,
    pattern: &Regex,
    skip_banged: bool,
) -> Vec<(Range<usize>, &'t str, &'t str)> {
    let mut matches = Vec::new();
    let mut search_from = 0;
    while let Some(caps) = pattern.captures_at(text, search_from) {
        let whole = caps.get(0).expect("Match has a whole capture");
        if skip_banged && whole.start() > 0 && text.as_bytes()[whole.start() - 1] == b'!' {
            search_from = whole.start() + 1;
            continue;
        }
        let label = caps.get(1).map_or("", |c| c.as_str());
        let url = caps.get(2).map_or("", |c| c.as_str());
        matches.push((whole.range(), label, url));
        search_from = whole.end();
    }
    matches
}

/// Splits plain spans on well-formed `[label](url)` patterns.
fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracket_patterns(spans, link_regex(), SpanKind::Link)
}

/// Splits plain spans on well-formed `![alt](url)` patterns.
fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracket_patterns(spans, image_regex(), SpanKind::Image)
}

/// Shared splitting loop for link and image extraction.
///
/// Walks matches left to right, emitting the text between matches as
/// `Plain` spans and each match as a span of `kind`. Text without any
/// match stays a single untouched span.
fn split_bracket_patterns(spans: Vec<TextSpan>, pattern: &Regex, kind: SpanKind) -> Vec<TextSpan> {
    let skip_banged = kind == SpanKind::Link;
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let text = span.text.as_str();
        let mut matched = false;
        let mut last_match_end = 0;
        for (range, label, url) in bracket_matches(text, pattern, skip_banged) {
            if range.start > last_match_end {
                out.push(TextSpan::plain(&text[last_match_end..range.start]));
            }
            out.push(TextSpan {
                text: label.to_string(),
                kind,
                url: Some(url.to_string()),
            });
            matched = true;
            last_match_end = range.end;
        }
        if !matched {
            out.push(span);
            continue;
        }
        if last_match_end < text.len() {
            out.push(TextSpan::plain(&text[last_match_end..]));
        }
    }
    out
}

/// Splits plain spans on a paired delimiter, typing the inside runs.
///
/// Splitting on the delimiter must produce an odd number of pieces;
/// an even count means some delimiter is unpaired. Odd-indexed pieces
/// were between a delimiter pair and take `kind`, even-indexed pieces
/// stay plain, and empty pieces are dropped.
fn split_on_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(ParseError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }
        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(piece));
            } else {
                out.push(TextSpan::new(piece, kind));
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bold(text: &str) -> TextSpan {
        TextSpan::new(text, SpanKind::Bold)
    }

    fn italic(text: &str) -> TextSpan {
        TextSpan::new(text, SpanKind::Italic)
    }

    fn code(text: &str) -> TextSpan {
        TextSpan::new(text, SpanKind::Code)
    }

    #[test]
    fn splits_bold_word() {
        let spans = parse_inline("This is **bold** text.").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                bold("bold"),
                TextSpan::plain(" text."),
            ]
        );
    }

    #[test]
    fn splits_repeated_bold() {
        let spans = parse_inline("This is **bold** text. And **this too**.").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                bold("bold"),
                TextSpan::plain(" text. And "),
                bold("this too"),
                TextSpan::plain("."),
            ]
        );
    }

    #[test]
    fn splits_italic_word() {
        let spans = parse_inline("This is *italic* text.").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                italic("italic"),
                TextSpan::plain(" text."),
            ]
        );
    }

    #[test]
    fn splits_bold_and_italic_in_one_line() {
        let spans = parse_inline("**bold** and *italic*").unwrap();
        assert_eq!(
            spans,
            vec![bold("bold"), TextSpan::plain(" and "), italic("italic")]
        );
    }

    #[test]
    fn splits_code_span() {
        let spans = parse_inline("This is `code` text.").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                code("code"),
                TextSpan::plain(" text."),
            ]
        );
    }

    #[test]
    fn markup_at_start_has_no_leading_plain_span() {
        let spans = parse_inline("**Bold** at front.").unwrap();
        assert_eq!(spans, vec![bold("Bold"), TextSpan::plain(" at front.")]);
    }

    #[test]
    fn markup_at_end_has_no_trailing_plain_span() {
        let spans = parse_inline("A **bolded last part.**").unwrap();
        assert_eq!(spans, vec![TextSpan::plain("A "), bold("bolded last part.")]);
    }

    #[test]
    fn unmatched_delimiter_is_an_error() {
        let err = parse_inline("This is *bold** text.").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnbalancedDelimiter {
                delimiter: "**".to_string(),
                text: "This is *bold** text.".to_string(),
            }
        );
    }

    #[test]
    fn unmatched_code_tick_is_an_error() {
        let err = parse_inline("a `dangling code span").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnbalancedDelimiter {
                delimiter: "`".to_string(),
                text: "a `dangling code span".to_string(),
            }
        );
    }

    #[test]
    fn plain_text_stays_one_span() {
        let spans = parse_inline("nothing special here").unwrap();
        assert_eq!(spans, vec![TextSpan::plain("nothing special here")]);
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert_eq!(parse_inline("").unwrap(), vec![]);
    }

    #[test]
    fn adjacent_markup_produces_no_empty_spans() {
        let spans = parse_inline("**a****b**").unwrap();
        assert_eq!(spans, vec![bold("a"), bold("b")]);
    }

    #[test]
    fn extracts_single_link() {
        let spans =
            parse_inline("This is text with a link [to the docs](https://docs.rs)").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is text with a link "),
                TextSpan::link("to the docs", "https://docs.rs"),
            ]
        );
    }

    #[test]
    fn extracts_single_image() {
        let spans = parse_inline(
            "This is text with an image ![site logo](https://www.example.com/img/logo-full-small.webp)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is text with an image "),
                TextSpan::image(
                    "site logo",
                    "https://www.example.com/img/logo-full-small.webp"
                ),
            ]
        );
    }

    #[test]
    fn splits_consecutive_links_and_keeps_typed_spans() {
        let seeded = vec![
            bold("Bold first part"),
            TextSpan::plain(
                "[first link](http://first.com) and [second link](https://second.de)[third link](https://third.net) *italic ending*",
            ),
        ];
        let spans = split_links(seeded);
        assert_eq!(
            spans,
            vec![
                bold("Bold first part"),
                TextSpan::link("first link", "http://first.com"),
                TextSpan::plain(" and "),
                TextSpan::link("second link", "https://second.de"),
                TextSpan::link("third link", "https://third.net"),
                TextSpan::plain(" *italic ending*"),
            ]
        );
    }

    #[test]
    fn splits_consecutive_images_and_keeps_typed_spans() {
        let seeded = vec![
            bold("Bold first part"),
            TextSpan::plain(
                "![first image](http://first.com/first.jpg) and ![second image](https://second.de/logo.webp)![third image](https://third.net/image.png) *italic ending*",
            ),
        ];
        let spans = split_images(seeded);
        assert_eq!(
            spans,
            vec![
                bold("Bold first part"),
                TextSpan::image("first image", "http://first.com/first.jpg"),
                TextSpan::plain(" and "),
                TextSpan::image("second image", "https://second.de/logo.webp"),
                TextSpan::image("third image", "https://third.net/image.png"),
                TextSpan::plain(" *italic ending*"),
            ]
        );
    }

    #[test]
    fn broken_link_markup_stays_literal() {
        let spans = parse_inline("This is [a link](http://example.com").unwrap();
        assert_eq!(
            spans,
            vec![TextSpan::plain("This is [a link](http://example.com")]
        );
    }

    #[test]
    fn link_markup_is_not_an_image() {
        let seeded = vec![TextSpan::plain(
            "This is [an image link](http://example.com/logo.webp)",
        )];
        let spans = split_images(seeded);
        assert_eq!(
            spans,
            vec![TextSpan::plain(
                "This is [an image link](http://example.com/logo.webp)"
            )]
        );
    }

    #[test]
    fn leading_bang_makes_an_image_not_a_link() {
        let spans = parse_inline("![img](u1) and [link](u2)").unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::image("img", "u1"),
                TextSpan::plain(" and "),
                TextSpan::link("link", "u2"),
            ]
        );
    }

    #[test]
    fn mixed_images_and_links_split_by_position() {
        let spans = parse_inline(
            "[first link_t](first link) ![first image](first image link)![second image](second image link) [second link text](second link)   ![third image](third image link)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::link("first link_t", "first link"),
                TextSpan::plain(" "),
                TextSpan::image("first image", "first image link"),
                TextSpan::image("second image", "second image link"),
                TextSpan::plain(" "),
                TextSpan::link("second link text", "second link"),
                TextSpan::plain("   "),
                TextSpan::image("third image", "third image link"),
            ]
        );
    }

    #[test]
    fn full_pipeline_orders_every_kind() {
        let spans = parse_inline(
            "This is **text** with an *italic* word and a `code block` and an ![old photo](https://images.example.com/fJRm4Vk.jpeg) and a [link](https://docs.rs)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is "),
                bold("text"),
                TextSpan::plain(" with an "),
                italic("italic"),
                TextSpan::plain(" word and a "),
                code("code block"),
                TextSpan::plain(" and an "),
                TextSpan::image("old photo", "https://images.example.com/fJRm4Vk.jpeg"),
                TextSpan::plain(" and a "),
                TextSpan::link("link", "https://docs.rs"),
            ]
        );
    }

    #[test]
    fn delimiter_split_leaves_typed_spans_alone() {
        let seeded = vec![
            bold("**bold**"),
            italic("*italic*"),
            code("`code`"),
        ];
        let spans = split_on_delimiter(seeded.clone(), "**", SpanKind::Bold).unwrap();
        assert_eq!(spans, seeded);
        let spans = split_on_delimiter(seeded.clone(), "*", SpanKind::Italic).unwrap();
        assert_eq!(spans, seeded);
        let spans = split_on_delimiter(seeded.clone(), "`", SpanKind::Code).unwrap();
        assert_eq!(spans, seeded);
    }

    #[test]
    fn delimiter_split_types_pieces_by_the_given_kind() {
        let seeded = vec![TextSpan::plain(
            "This is really *italic* but will be considered `code`.",
        )];
        let spans = split_on_delimiter(seeded, "*", SpanKind::Code).unwrap();
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("This is really "),
                code("italic"),
                TextSpan::plain(" but will be considered `code`."),
            ]
        );
    }

    #[test]
    fn extracts_link_pairs() {
        let text = "This is text with a link [to the docs](https://docs.rs) and [to the book](https://doc.rust-lang.org/book/)";
        assert_eq!(
            extract_links(text),
            vec![
                ("to the docs".to_string(), "https://docs.rs".to_string()),
                (
                    "to the book".to_string(),
                    "https://doc.rust-lang.org/book/".to_string()
                ),
            ]
        );
    }

    #[test]
    fn extracts_image_pairs() {
        let text = "This is text with a ![diagram](https://images.example.com/aKaOqIh.gif) and ![old photo](https://images.example.com/fJRm4Vk.jpeg)";
        assert_eq!(
            extract_images(text),
            vec![
                (
                    "diagram".to_string(),
                    "https://images.example.com/aKaOqIh.gif".to_string()
                ),
                (
                    "old photo".to_string(),
                    "https://images.example.com/fJRm4Vk.jpeg".to_string()
                ),
            ]
        );
    }

    #[test]
    fn extraction_ignores_malformed_patterns() {
        assert_eq!(extract_images("No image here."), vec![]);
        assert_eq!(
            extract_links("This is text with a link [to the docs(https://docs.rs)"),
            vec![]
        );
    }

    #[test]
    fn link_extraction_skips_image_patterns() {
        assert_eq!(
            extract_links("look: ![pic](u1) and [page](u2)"),
            vec![("page".to_string(), "u2".to_string())]
        );
    }
}
