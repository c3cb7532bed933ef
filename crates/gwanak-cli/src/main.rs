use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gwanak_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "gwanak")]
#[command(author, version, about = "The Seoul National University homepage, in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/gwanak/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// List the campus carousel slides
    Slides {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the carousel headless and print every state change
    Autoplay {
        /// How long to run
        #[arg(short = 's', long, default_value_t = 30)]
        seconds: u64,
        /// Seconds before the carousel counts as scrolled into view
        #[arg(short = 'r', long, default_value_t = 0)]
        reveal_after: u64,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let config = load_config(&config_path)?;
            // The alternate screen owns stdout and stderr, so the TUI logs to a file
            init_logging(&config, true)?;
            commands::run::run(config).await
        }
        Commands::Slides { json } => {
            let config = load_config(&config_path)?;
            init_logging(&config, false)?;
            commands::slides::run(json)
        }
        Commands::Autoplay {
            seconds,
            reveal_after,
        } => {
            let config = load_config(&config_path)?;
            init_logging(&config, false)?;
            commands::autoplay::run(&config, seconds, reveal_after).await
        }
        Commands::InitConfig { force } => {
            // Must work even when the existing file is broken
            init_logging(&AppConfig::default(), false)?;
            commands::init_config::run(&config_path, force)
        }
    }
}

fn load_config(path: &Path) -> Result<Arc<AppConfig>> {
    let config = AppConfig::load_from(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    Ok(Arc::new(config))
}

/// RUST_LOG wins over `general.log_level`
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
