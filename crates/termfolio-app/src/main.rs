//! Termfolio binary - composition root.
//!
//! 1. Parse CLI flags and read the configuration file
//! 2. Initialize tracing on stderr so stdout carries only the transcript
//! 3. Wire the theme manager and close signal into a terminal session
//! 4. Run the line-mode shell on stdin/stdout
//! 5. Remember the chosen theme in the config file, as the site does between visits

mod cli;
mod shell;
mod theme;

use std::sync::Arc;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use termfolio_core::{TermfolioConfig, Theme};

use crate::cli::CliArgs;
use crate::shell::Shell;
use crate::theme::{remember_theme, ThemeManager};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config_path = args.resolve_config_path();

    // Read before tracing exists so the file's log level can apply; failures are reported below.
    let loaded = TermfolioConfig::load(&config_path);
    let config_level = loaded.as_ref().ok().map(|c| c.general.log_level.clone());

    let filter = match args.log_level.as_deref() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(args.resolve_log_level(config_level.as_deref()))),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    tracing::info!("Starting Termfolio v{}", env!("CARGO_PKG_VERSION"));

    // A file that exists but failed to load is left alone rather than overwritten.
    let config_unreadable = loaded.is_err() && config_path.exists();
    let mut config = match loaded {
        Ok(config) => {
            tracing::info!(path = %config_path.display(), "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "Using default configuration");
            TermfolioConfig::default()
        }
    };

    if args.write_config {
        config.save(&config_path)?;
        println!("Configuration written to {}", config_path.display());
        return Ok(());
    }

    let initial = if args.light {
        Theme::Light
    } else {
        config.general.theme
    };
    let theme = Arc::new(ThemeManager::new(initial));

    let rng = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded replies");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut shell = Shell::build(config.terminal.clone(), Arc::clone(&theme), rng, std::io::stdout())?;
    shell.start()?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    shell.run(stdin).await?;

    if config_unreadable {
        tracing::warn!(path = %config_path.display(), "Config file unreadable, theme not remembered");
    } else if let Err(e) = remember_theme(&mut config, &config_path, initial, theme.current()) {
        tracing::warn!(path = %config_path.display(), error = %e, "Failed to remember theme");
    }

    tracing::info!("Termfolio stopped");
    Ok(())
}
