use std::path::PathBuf;

use clap::Parser;

use sb_core::config::AppConfig;
use sb_shell::bootstrap::{load_config, resolve_app_paths, run_app, tracing::init_tracing_subscriber};

/// SafeBuddy first-run shell
#[derive(Debug, Parser)]
#[command(name = "safebuddy", version, about)]
struct Args {
    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Data directory holding the launch flag store and logs
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::empty(),
    };
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    let paths = resolve_app_paths(&config)?;
    init_tracing_subscriber(config.file_logging.then_some(paths.logs_dir.as_path()))?;

    run_app(config, paths).await
}
