//! Site generation: turning a tree of markdown content into a published
//! tree of HTML pages, with static assets mirrored alongside.

use std::path::Path;

use crate::html::RenderError;
use crate::io::{self, IoError};
use crate::parsing::{CompileError, TitleError, compile, extract_title};

/// Placeholder in a template that receives the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder in a template that receives the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Title(#[from] TitleError),
}

/// What one site build produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
}

/// Generate one HTML page from a markdown source file
///
/// Fills every `{{ Title }}` and `{{ Content }}` placeholder in the
/// template, creating the destination's parent directories as needed.
pub fn generate_page(source: &Path, template: &str, destination: &Path) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {}",
        source.display(),
        destination.display()
    );

    let markdown = io::read_file(source)?;
    let content = compile(&markdown)?.render()?;
    let title = extract_title(&markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);

    io::write_file(destination, &page)?;
    Ok(())
}

/// Generate a page for every markdown file under the content directory
///
/// The content tree's layout is reproduced under the output directory,
/// with each `.md` file rewritten to `.html`. Files that are not
/// markdown are left out. Returns the number of pages generated.
pub fn generate_pages(
    content_dir: &Path,
    template: &str,
    output_dir: &Path,
) -> Result<usize, SiteError> {
    let files = io::scan_markdown_files(content_dir)?;
    for file in &files {
        let relative = file
            .strip_prefix(content_dir)
            .expect("Scanned file lives under the content root");
        let destination = output_dir.join(relative).with_extension("html");
        generate_page(file, template, &destination)?;
    }
    Ok(files.len())
}

/// Build the whole site
///
/// Mirrors the static directory into the output directory, then
/// generates every content page through the template. A failed page
/// fails the whole build.
pub fn build_site(
    content_dir: &Path,
    static_dir: &Path,
    template_path: &Path,
    output_dir: &Path,
) -> Result<BuildSummary, SiteError> {
    io::mirror_dir(static_dir, output_dir)?;
    let template = io::read_file(template_path)?;
    let pages = generate_pages(content_dir, &template, output_dir)?;
    Ok(BuildSummary { pages })
}
