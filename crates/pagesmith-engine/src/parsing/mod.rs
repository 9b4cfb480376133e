//! The markdown compilation pipeline: block segmentation and
//! classification, inline span parsing, HTML tree assembly and title
//! extraction.

pub mod blocks;
mod compile;
pub mod inline;
mod title;

pub use compile::{CompileError, compile};
pub use title::{TitleError, extract_title};
