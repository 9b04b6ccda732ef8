use crate::source::{SourceAdapter, TakeError, TransferCandidate};
use log::{error, info};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The file is in the hotfolder and gone from the source.
    Moved,
    /// Local rename failed; the source file is untouched.
    MoveFailed,
    /// Remote download failed; the source file is untouched.
    DownloadFailed,
    /// Downloaded but the source copy could not be deleted. Both copies
    /// exist and the next run will fetch the file again.
    DeleteFailed,
}

#[derive(Debug)]
pub struct TransferResult {
    pub candidate: TransferCandidate,
    pub outcome: TransferOutcome,
    pub message: String,
}

impl TransferResult {
    pub fn is_success(&self) -> bool {
        self.outcome == TransferOutcome::Moved
    }
}

/// Move up to `limit` candidates into the destination, in the order the
/// source listed them. Candidates past the limit are left untouched. A
/// failed candidate never stops the rest of the batch; every outcome is
/// logged and returned.
pub fn transfer(
    adapter: &mut dyn SourceAdapter,
    candidates: &[TransferCandidate],
    destination: &Path,
    limit: usize,
) -> Vec<TransferResult> {
    let mut results = Vec::new();

    for candidate in candidates.iter().take(limit) {
        let (outcome, message) = match adapter.take(candidate, destination) {
            Ok(()) => (
                TransferOutcome::Moved,
                format!(
                    "File {} moved to {}",
                    candidate.name,
                    destination.display()
                ),
            ),
            Err(TakeError::Move(cause)) => (
                TransferOutcome::MoveFailed,
                format!("Failed to move {}: {cause}", candidate.name),
            ),
            Err(TakeError::Download(cause)) => (
                TransferOutcome::DownloadFailed,
                format!("Failed to download {}: {cause}", candidate.name),
            ),
            Err(TakeError::Delete(cause)) => (
                TransferOutcome::DeleteFailed,
                format!(
                    "Downloaded {} but could not delete the source copy: {cause}",
                    candidate.name
                ),
            ),
        };

        if outcome == TransferOutcome::Moved {
            info!("{message}");
        } else {
            error!("{message}");
        }

        results.push(TransferResult {
            candidate: candidate.clone(),
            outcome,
            message,
        });
    }

    results
}
