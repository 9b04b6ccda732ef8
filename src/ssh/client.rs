use crate::config::SftpConfig;
use crate::utils::error::QueueError;
use anyhow::{Context, Result};
use ssh2::Session;
use std::net::TcpStream;

pub struct SshClient {
    pub session: Session,
}

impl SshClient {
    pub fn connect(config: &SftpConfig) -> Result<Self> {
        let tcp = TcpStream::connect(format!("{}:{}", config.host, config.port))
            .context("Failed to connect to SFTP server")?;

        let mut session = Session::new().context("Failed to create SSH session")?;
        session.set_tcp_stream(tcp);
        session.handshake().context("SSH handshake failed")?;

        // A rejected password is an expected operational outcome, not a
        // crash; callers map it to a dedicated failure status.
        if session
            .userauth_password(&config.username, &config.password)
            .is_err()
            || !session.authenticated()
        {
            return Err(QueueError::AuthenticationFailed.into());
        }

        Ok(SshClient { session })
    }

    pub fn sftp(&self) -> Result<ssh2::Sftp> {
        self.session.sftp().context("Failed to create SFTP session")
    }
}
