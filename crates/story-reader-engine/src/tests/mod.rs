use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary library directory
pub fn create_test_library_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a chapter file inside a story folder, creating the folder if needed
pub fn create_test_chapter(
    library_dir: &TempDir,
    story: &str,
    filename: &str,
    content: &str,
) -> PathBuf {
    let story_dir = library_dir.path().join(story);
    fs::create_dir_all(&story_dir).unwrap();
    let file_path = story_dir.join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
