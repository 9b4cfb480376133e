//! Inline markup parsing.

mod parser;
mod types;

pub use parser::{ParseError, extract_images, extract_links, parse_inline};
pub use types::{SpanKind, TextSpan};
