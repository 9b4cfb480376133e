use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory to act as a site root
pub fn create_test_site_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
