//! matchlog binary entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matchlog::cli::{Cli, Commands, ConfigCommands};
use matchlog::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;

    init_logging(&config, cli.verbose);

    match &cli.command {
        Commands::Condense(args) => commands::condense::handle(args, &config),
        Commands::Payload(args) => commands::payload::handle(args, &config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Init { force } => {
                commands::config::handle_init(config_path.clone(), *force)
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "matchlog", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins, then `--verbose`, then the configured level.
fn init_logging(config: &Config, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|e| {
            eprintln!("Invalid log level {:?}: {}, falling back to warn", default_level, e);
            EnvFilter::new("warn")
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
