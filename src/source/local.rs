use super::{EntryType, SourceAdapter, TakeError, TransferCandidate};
use crate::utils::error::QueueError;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists files directly under a local directory, filtered by a glob
/// pattern and sorted by name for deterministic batch selection.
pub struct LocalSource {
    source: PathBuf,
}

impl LocalSource {
    pub fn new(source: PathBuf) -> Self {
        Self { source }
    }
}

impl SourceAdapter for LocalSource {
    fn list(&mut self, pattern: &str) -> Result<Vec<TransferCandidate>, QueueError> {
        if !self.source.is_dir() {
            return Err(QueueError::SourceUnavailable {
                path: self.source.display().to_string(),
            });
        }

        let matcher = Pattern::new(pattern).map_err(|e| QueueError::InvalidPattern {
            pattern: pattern.to_string(),
            cause: e.to_string(),
        })?;

        let mut candidates = Vec::new();
        for entry in fs::read_dir(&self.source)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !matcher.matches(&name) {
                continue;
            }
            candidates.push(TransferCandidate {
                path: entry.path().display().to_string(),
                size_hint: entry.metadata().ok().map(|m| m.len()),
                entry_type: EntryType::File,
                name,
            });
        }

        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(candidates)
    }

    fn take(&mut self, candidate: &TransferCandidate, destination: &Path) -> Result<(), TakeError> {
        // Rename overwrites any same-named file already in the hotfolder.
        let target = destination.join(&candidate.name);
        fs::rename(&candidate.path, &target).map_err(|e| TakeError::Move(e.to_string()))
    }
}
