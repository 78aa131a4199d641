mod analyzer;
mod config;
mod models;
mod orchestrator;
mod report;
mod run;
mod scenario;
mod util;

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (config_path, args) = run::split_config_flag(&args)?;
    let config = config::Config::load(config_path.as_deref())?;
    init_tracing(&config.log.filter);

    run::as_cli(&args, &config).await
}

/// Log to stderr so stdout stays the report. `RUST_LOG` wins over the config.
fn init_tracing(filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(filter))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
