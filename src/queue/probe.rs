use crate::utils::error::QueueError;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One job folder under the print engine's working root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFolder {
    pub path: PathBuf,
    pub is_empty: bool,
}

/// Scan the working root and classify each immediate subdirectory as an
/// active or empty job folder. Read-only; order is stable within a call.
pub fn probe(root: &Path) -> Result<Vec<JobFolder>, QueueError> {
    if !root.is_dir() {
        return Err(QueueError::PathNotFound {
            path: root.display().to_string(),
        });
    }

    let mut folders = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            let is_empty = !contains_any_file(&path);
            folders.push(JobFolder { path, is_empty });
        }
    }

    folders.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(folders)
}

// A job folder is active only if a regular file exists somewhere beneath
// it. Job folders nest per-page subfolders, so stopping at direct
// children would misclassify them; nested empty subfolders alone do not
// make a folder active.
fn contains_any_file(dir: &Path) -> bool {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_type().is_file())
}
