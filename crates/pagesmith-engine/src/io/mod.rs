use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories if needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}

/// Mirror a directory tree into a target directory
///
/// Whatever lived in the target before is deleted first, so the target
/// always ends up an exact copy of the source.
pub fn mirror_dir(source: &Path, target: &Path) -> Result<(), IoError> {
    if !source.exists() || !source.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "{} is not a directory",
            source.display()
        )));
    }

    if target.exists() {
        fs::remove_dir_all(target).map_err(IoError::Io)?;
    }
    fs::create_dir_all(target).map_err(IoError::Io)?;

    copy_directory_recursive(source, target)
}

fn copy_directory_recursive(source: &Path, target: &Path) -> Result<(), IoError> {
    let entries = fs::read_dir(source).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        let destination = target.join(entry.file_name());

        if path.is_dir() {
            fs::create_dir_all(&destination).map_err(IoError::Io)?;
            copy_directory_recursive(&path, &destination)?;
        } else {
            fs::copy(&path, &destination).map_err(IoError::Io)?;
        }
    }

    Ok(())
}

/// Scan for markdown files under a content directory
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidSourceDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
