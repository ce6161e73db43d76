mod builder;
mod catalog;
mod cli;
mod config;
mod display;
mod error;
mod formatters;
mod loaders;
mod models;
mod orchestrator;
mod selectors;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "daily-tip")]
#[command(about = "Show a random tip from one or more tip collections", long_about = None)]
#[command(disable_help_flag = true, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Collections to draw the tip from (file names without .json)
    #[arg(value_name = "COLLECTION")]
    collections: Vec<String>,

    /// Output format (defaults to the config file, then shell)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to config file (defaults to ./daily-tip.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing the tip collections
    #[arg(long, global = true)]
    collections_dir: Option<PathBuf>,

    /// Print usage and the available collections
    #[arg(short, long)]
    help: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Bundle every collection into a browser data script
    Bundle {
        /// Output directory (defaults to bundle_dir from the config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize daily-tip.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path } => cli::config::init(path).map(|()| 0),
        },
        Some(Commands::Bundle { out }) => {
            cli::bundle::run(cli.config, cli.collections_dir, out).map(|()| 0)
        }
        None => cli::tip::run(cli::tip::TipOptions {
            collections: cli.collections,
            format: cli.format,
            config: cli.config,
            collections_dir: cli.collections_dir,
            help: cli.help,
        }),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
