pub mod client;

pub use client::SshClient;
