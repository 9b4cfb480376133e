pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlNode, RenderError};
pub use io::*;
pub use parsing::{CompileError, TitleError, compile, extract_title};
pub use site::*;
