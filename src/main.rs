use anyhow::Result;
use clap::Parser;
use wasatch_tools::{cli::Cli, config::Config, run, utils::error::QueueError};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    if let Err(e) = run(config).await {
        eprintln!("\n❌ {e}\n");
        // A rejected remote login gets its own exit status so the
        // scheduler can tell it apart from ordinary faults.
        let code = match e.downcast_ref::<QueueError>() {
            Some(QueueError::AuthenticationFailed) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }

    Ok(())
}
