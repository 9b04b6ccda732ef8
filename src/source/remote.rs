use super::{EntryType, SourceAdapter, TakeError, TransferCandidate};
use crate::ssh::SshClient;
use crate::transfer::progress::ProgressTracker;
use crate::utils::error::QueueError;
use anyhow::Result;
use ssh2::Sftp;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const CHUNK_SIZE: usize = 1024 * 1024;

/// Lists and fetches files from a directory on an SFTP server. One
/// session is opened per batch and dropped when the run ends.
pub struct RemoteSource {
    sftp: Sftp,
    source: String,
}

impl RemoteSource {
    pub fn new(client: SshClient, source: String) -> Result<Self> {
        // The Sftp handle keeps the underlying session alive; the client
        // wrapper itself is no longer needed.
        let sftp = client.sftp()?;
        Ok(Self { sftp, source })
    }

    fn remote_path(&self, name: &str) -> String {
        format!("{}/{}", self.source.trim_end_matches('/'), name)
    }

    fn download(&self, candidate: &TransferCandidate, target: &Path) -> Result<()> {
        let progress = ProgressTracker::new(candidate.size_hint.unwrap_or(0), &candidate.name);

        let mut remote_file = self.sftp.open(Path::new(&candidate.path))?;
        let mut local_file = File::create(target)?;

        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut transferred = 0u64;
        loop {
            match remote_file.read(&mut buffer) {
                Ok(0) => break,
                Ok(bytes_read) => {
                    local_file.write_all(&buffer[..bytes_read])?;
                    transferred += bytes_read as u64;
                    progress.update(transferred);
                }
                Err(e) => {
                    progress.finish_with_error(&e.to_string());
                    return Err(e.into());
                }
            }
        }

        local_file.flush()?;
        progress.finish();
        Ok(())
    }
}

impl SourceAdapter for RemoteSource {
    fn list(&mut self, pattern: &str) -> Result<Vec<TransferCandidate>, QueueError> {
        let entries = self.sftp.readdir(Path::new(&self.source))?;

        let mut candidates = Vec::new();
        for (path, stat) in entries {
            let name = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };
            if !eligible(&name, stat.is_dir(), pattern) {
                continue;
            }
            candidates.push(TransferCandidate {
                path: self.remote_path(&name),
                size_hint: stat.size,
                entry_type: EntryType::File,
                name,
            });
        }

        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(candidates)
    }

    fn take(&mut self, candidate: &TransferCandidate, destination: &Path) -> Result<(), TakeError> {
        let target = destination.join(&candidate.name);

        if let Err(e) = self.download(candidate, &target) {
            // Don't leave a partial file where the print system will
            // pick it up.
            let _ = std::fs::remove_file(&target);
            return Err(TakeError::Download(e.to_string()));
        }

        self.sftp
            .unlink(Path::new(&candidate.path))
            .map_err(|e| TakeError::Delete(e.to_string()))
    }
}

// Only regular files whose trailing 4 characters match the pattern's
// trailing 4 characters are eligible. This is a fixed-length suffix
// comparison, not a glob: ".xml" out of "*.xml".
fn eligible(name: &str, is_dir: bool, pattern: &str) -> bool {
    if name == "." || name == ".." || is_dir {
        return false;
    }
    tail4(name) == tail4(pattern)
}

fn tail4(s: &str) -> &str {
    match s.char_indices().rev().nth(3) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
