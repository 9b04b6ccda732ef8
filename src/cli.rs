use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wasatch")]
#[command(about = "Queue-gated file feeder for the Wasatch hotfolder")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
#[derive(Debug)]
pub enum Commands {
    /// Enqueue files for the Wasatch hotfolder
    QueueManager {
        /// Location containing files (local directory or SFTP path)
        source: String,

        /// Wasatch hotfolder
        destination: PathBuf,

        /// Treat the source as a local directory instead of an SFTP path
        #[arg(long)]
        local_source: bool,

        /// Maximum number of files moved per run
        #[arg(long, default_value = "5")]
        wasatch_file_limit: usize,

        /// Wasatch valid file extension
        #[arg(long, default_value = "*.xml")]
        wasatch_file_extension: String,

        /// Hosonsoft PrintExp installation directory
        #[arg(long, default_value = r"C:\Program Files (x86)\PrintExp_V5.6.2.56.R")]
        hosonsoft_path: PathBuf,

        /// Hosonsoft print jobs threshold
        #[arg(long, default_value = "2")]
        hosonsoft_threshold: usize,

        /// Delete empty job folders before checking the threshold
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        clean_first: bool,

        /// SFTP server hostname or IP address
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// SFTP server port
        #[arg(short, long, default_value = "22")]
        port: u16,

        /// SFTP username
        #[arg(short, long)]
        username: Option<String>,

        /// SFTP password (if not provided, read from SFTP_PASSWORD or prompted)
        #[arg(short = 'P', long)]
        password: Option<String>,
    },
    /// Submit log data to the API server
    HotXmlLog,
}
