use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use arcade_sales::config::Config;
use arcade_sales::console::{self, Prompt};
use arcade_sales::state::AppState;

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize structured logging
    init_tracing(&config.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.data_dir.display(),
        "Starting arcade sales"
    );

    let mut state = AppState::new(config);
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout().lock());
    console::run(&mut state, &mut prompt)?;

    tracing::info!("Shutting down");
    Ok(())
}

/// Initialize the `tracing` subscriber with an environment-based filter.
///
/// Logs go to stderr so the menus on stdout stay readable.
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("arcade_sales={log_level}").into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
