use anyhow::{Context, Result};
use clap::Parser;
use statuswatch_core::api::HttpStatusFetcher;
use statuswatch_core::models::{Configuration, Credentials};
use statuswatch_core::notify::TelegramNotifier;
use statuswatch_core::poller::{CycleOutcome, PollLoop};
use statuswatch_core::services::logging::init_logging;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "statuswatch")]
#[command(version)]
#[command(about = "Review-status poller with Telegram notifications")]
struct Cli {
    /// Path to the configuration file (default: XDG config dir)
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Override the poll interval in seconds
    #[arg(long)]
    interval: Option<u64>,

    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A .env file is honored for local runs; deployments set the environment
    // directly.
    let _ = dotenvy::dotenv();

    let config_path = match cli.config_file {
        Some(path) => path,
        None => Configuration::default_config_path()
            .context("Could not resolve the default config path")?,
    };
    let mut config = Configuration::load_from_file(&config_path).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            config_path.display()
        )
    })?;
    if let Some(interval) = cli.interval {
        config.poll_interval_seconds = interval;
    }

    init_logging(config.log_level.clone()).map_err(|error| anyhow::anyhow!("{error}"))?;

    if let Err(errors) = config.validate() {
        for error in &errors {
            tracing::error!(error = %error, "invalid configuration");
        }
        std::process::exit(1);
    }

    // Missing credentials are fatal before the loop ever starts.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(error) => {
            tracing::error!(error = %error, "cannot start without credentials");
            std::process::exit(1);
        }
    };

    let fetcher = Arc::new(HttpStatusFetcher::new(
        config.endpoint.clone(),
        credentials.api_token.clone(),
    ));
    let notifier = Arc::new(TelegramNotifier::new(
        credentials.bot_token.clone(),
        credentials.chat_id.clone(),
    ));

    // Fetch window starts at "now": only state changes after startup are
    // reported.
    let initial_cursor = chrono::Utc::now().timestamp();
    let mut poll_loop = PollLoop::new(
        fetcher,
        notifier,
        Duration::from_secs(config.poll_interval_seconds),
        initial_cursor,
    );

    if cli.once {
        match poll_loop.run_cycle().await {
            CycleOutcome::Completed => Ok(()),
            CycleOutcome::Recovered => std::process::exit(1),
        }
    } else {
        poll_loop.run().await;
        Ok(())
    }
}
