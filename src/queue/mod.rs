pub mod clean;
pub mod probe;

pub use clean::clean;
pub use probe::{probe, JobFolder};

use crate::config::QueueManagerConfig;
use crate::source::{LocalSource, RemoteSource, SourceAdapter};
use crate::ssh::SshClient;
use crate::transfer::transfer;
use anyhow::{Context, Result};
use log::{error, info, warn};
use std::path::PathBuf;

/// Admit more work while at most `threshold` job folders are in flight.
/// The comparison is inclusive: a count exactly at the threshold admits.
pub fn should_admit(active_folders: usize, threshold: usize) -> bool {
    active_folders <= threshold
}

/// One full queue-manager run: optional cleanup, admission check against
/// the print engine's working directory, then a bounded transfer batch
/// into the hotfolder.
pub fn run_queue_manager(config: &QueueManagerConfig) -> Result<()> {
    info!(
        "Wasatch jobs queue manager started: source={} destination={} local_source={} \
         file_limit={} file_extension={} hosonsoft_path={} hosonsoft_threshold={} clean_first={}",
        config.source,
        config.destination.display(),
        config.local_source,
        config.file_limit,
        config.file_extension,
        config.hosonsoft_path.display(),
        config.hosonsoft_threshold,
        config.clean_first,
    );

    let working_root = config.hosonsoft_path.join("temp");
    let folders = probe(&working_root)?;

    if config.clean_first {
        let failures = clean(&folders);
        if !failures.is_empty() {
            warn!("{} empty job folders could not be removed", failures.len());
        }
    }

    let active = folders.iter().filter(|f| !f.is_empty).count();
    if !should_admit(active, config.hosonsoft_threshold) {
        warn!(
            "Files not moved, threshold not reached ({active} active jobs, threshold {})",
            config.hosonsoft_threshold
        );
        return Ok(());
    }

    let mut adapter: Box<dyn SourceAdapter> = if config.local_source {
        Box::new(LocalSource::new(PathBuf::from(&config.source)))
    } else {
        let sftp = config
            .sftp
            .as_ref()
            .context("SFTP connection settings missing for remote source")?;
        let client = match SshClient::connect(sftp) {
            Ok(client) => client,
            Err(e) => {
                error!("SFTP login to {} failed: {e}", sftp.host);
                return Err(e);
            }
        };
        Box::new(RemoteSource::new(client, config.source.clone())?)
    };

    let candidates = adapter.list(&config.file_extension)?;
    if candidates.is_empty() {
        info!("No files waiting at {}", config.source);
        return Ok(());
    }

    let results = transfer(
        adapter.as_mut(),
        &candidates,
        &config.destination,
        config.file_limit,
    );
    let moved = results.iter().filter(|r| r.is_success()).count();
    info!(
        "{moved} of {} attempted files moved to {}",
        results.len(),
        config.destination.display()
    );

    Ok(())
}
