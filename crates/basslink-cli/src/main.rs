//! Route guard inspector for BassLink
//!
//! Evaluates a navigation against a route table the way a mounted guard
//! would, and inspects or resets a tab's remembered redirect.

use basslink_core::RoleClass;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "basslink-guard")]
#[command(about = "BassLink route guard inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Guard configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one navigation against a route table
    Check {
        /// Route table file (TOML, `[[routes]]` entries)
        #[arg(short, long)]
        routes: PathBuf,

        /// Pathname being visited
        #[arg(short, long)]
        path: String,

        /// Role of the signed-in identity; omit for a signed-out visitor
        #[arg(long)]
        role: Option<RoleClass>,

        /// Directory holding per-tab storage; omit for throwaway storage
        #[arg(short, long)]
        state_dir: Option<PathBuf>,

        /// Tab whose storage is used
        #[arg(short, long, default_value = "default")]
        tab: String,
    },

    /// Inspect or reset the remembered redirect of a tab
    Memory {
        #[command(subcommand)]
        command: commands::memory::MemoryCommand,

        /// Directory holding per-tab storage
        #[arg(short, long)]
        state_dir: PathBuf,

        /// Tab whose storage is used
        #[arg(short, long, default_value = "default")]
        tab: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::host::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check {
            routes,
            path,
            role,
            state_dir,
            tab,
        } => {
            let outcome = commands::check::run(
                &config,
                &routes,
                &path,
                role,
                state_dir.as_deref(),
                &tab,
            )?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Memory {
            command,
            state_dir,
            tab,
        } => {
            let report = commands::memory::run(&config, command, &state_dir, &tab)?;
            println!("{report}");
        }
    }

    Ok(())
}
