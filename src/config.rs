use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use dialoguer::Password;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub operation: Operation,
}

#[derive(Debug, Clone)]
pub enum Operation {
    QueueManager(QueueManagerConfig),
    HotXmlLog(ApiConfig),
}

/// Everything one queue-manager run needs, resolved up front. Nothing
/// reads process-wide state after this is built.
#[derive(Debug, Clone)]
pub struct QueueManagerConfig {
    pub source: String,
    pub destination: PathBuf,
    pub local_source: bool,
    pub file_limit: usize,
    pub file_extension: String,
    pub hosonsoft_path: PathBuf,
    pub hosonsoft_threshold: usize,
    pub clean_first: bool,
    pub sftp: Option<SftpConfig>,
}

#[derive(Debug, Clone)]
pub struct SftpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_url: String,
    pub login_url: String,
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let operation = match &cli.command {
            Commands::QueueManager {
                source,
                destination,
                local_source,
                wasatch_file_limit,
                wasatch_file_extension,
                hosonsoft_path,
                hosonsoft_threshold,
                clean_first,
                host,
                port,
                username,
                password,
            } => {
                let sftp = if *local_source {
                    None
                } else {
                    Some(Self::resolve_sftp(host, *port, username, password)?)
                };

                Operation::QueueManager(QueueManagerConfig {
                    source: source.clone(),
                    destination: destination.clone(),
                    local_source: *local_source,
                    file_limit: *wasatch_file_limit,
                    file_extension: wasatch_file_extension.clone(),
                    hosonsoft_path: hosonsoft_path.clone(),
                    hosonsoft_threshold: *hosonsoft_threshold,
                    clean_first: *clean_first,
                    sftp,
                })
            }
            Commands::HotXmlLog => Operation::HotXmlLog(ApiConfig::from_env()?),
        };

        Ok(Config { operation })
    }

    fn resolve_sftp(
        host: &Option<String>,
        port: u16,
        username: &Option<String>,
        password: &Option<String>,
    ) -> Result<SftpConfig> {
        let host = host
            .clone()
            .context("--host is required for a remote source")?;
        let username = username
            .clone()
            .context("--username is required for a remote source")?;

        // Flag wins, then the environment, then an interactive prompt.
        let password = match password {
            Some(password) => password.clone(),
            None => match env::var("SFTP_PASSWORD") {
                Ok(password) => password,
                Err(_) => Password::new()
                    .with_prompt(format!("Enter password for {username}@{host}"))
                    .interact()?,
            },
        };

        Ok(SftpConfig {
            host,
            port,
            username,
            password,
        })
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: env::var("API_URL").context("API_URL is not set")?,
            login_url: env::var("API_LOGIN_URL").context("API_LOGIN_URL is not set")?,
            username: env::var("API_USERNAME").context("API_USERNAME is not set")?,
            password: env::var("API_PASSWORD").context("API_PASSWORD is not set")?,
        })
    }
}
