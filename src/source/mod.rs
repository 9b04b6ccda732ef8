pub mod local;
pub mod remote;

pub use local::LocalSource;
pub use remote::RemoteSource;

use crate::utils::error::QueueError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Dir,
}

/// A file identified as eligible for transfer but not yet moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCandidate {
    pub name: String,
    pub path: String,
    pub size_hint: Option<u64>,
    pub entry_type: EntryType,
}

/// What went wrong while taking one candidate. Per-file and never fatal
/// to the batch.
#[derive(Debug)]
pub enum TakeError {
    /// Local rename into the hotfolder failed; the source file is intact.
    Move(String),
    /// Remote download failed; the source file is intact.
    Download(String),
    /// Download succeeded but the source copy could not be deleted. The
    /// hotfolder now holds a copy the next run will fetch again.
    Delete(String),
}

/// One end of the transfer. Lists eligible candidates and takes them one
/// at a time into the destination directory, removing each from the
/// source. Boxed so tests can inject a double without a network endpoint.
pub trait SourceAdapter {
    /// Eligible candidates at the source, in the order they should be
    /// attempted.
    fn list(&mut self, pattern: &str) -> Result<Vec<TransferCandidate>, QueueError>;

    /// Move one candidate into `destination`.
    fn take(&mut self, candidate: &TransferCandidate, destination: &Path) -> Result<(), TakeError>;
}
