pub mod api;
pub mod cli;
pub mod config;
pub mod queue;
pub mod source;
pub mod ssh;
pub mod transfer;
pub mod utils;

use anyhow::Result;
use config::{Config, Operation};

pub async fn run(config: Config) -> Result<()> {
    match config.operation {
        Operation::QueueManager(cfg) => queue::run_queue_manager(&cfg),
        Operation::HotXmlLog(cfg) => api::submit_hot_xml_log(&cfg).await,
    }
}
