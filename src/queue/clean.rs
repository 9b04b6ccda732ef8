use crate::queue::probe::JobFolder;
use crate::utils::error::QueueError;
use log::{error, info};
use std::fs;

/// Delete the empty job folders left behind by the print engine. Best
/// effort: one failed deletion never stops the remaining ones. Returns
/// the collected failures.
pub fn clean(folders: &[JobFolder]) -> Vec<QueueError> {
    let mut failures = Vec::new();

    for folder in folders.iter().filter(|f| f.is_empty) {
        // Empty of files, but it may still hold empty subdirectories.
        match fs::remove_dir_all(&folder.path) {
            Ok(()) => info!("Removed empty job folder {}", folder.path.display()),
            Err(e) => {
                let failure = QueueError::DeletionFailed {
                    path: folder.path.display().to_string(),
                    cause: e.to_string(),
                };
                error!("{failure}");
                failures.push(failure);
            }
        }
    }

    failures
}
