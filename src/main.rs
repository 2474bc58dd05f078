#![cfg(feature = "cli")]
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use emeprobe::capability::DrmCapability;
use emeprobe::config::MediaKeySystemConfig;
use emeprobe::keysystem::{display_name, KEY_SYSTEMS};
use emeprobe::probe::{any_supported, summarize};

#[derive(Parser)]
#[command(name = "emeprobe", version, about = "emeprobe CLI")]
struct Cli {
    #[arg(short = 'd', long = "debug", action = ArgAction::SetTrue)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the well-known key systems with their display names.
    Registry,
    /// Print a preset Media Key System configuration as JSON.
    Config {
        #[arg(short = 'p', long = "preset", default_value = "software")]
        preset: String,
    },
    /// Reshape a JSON array of raw probe responses and print the summary.
    ///
    /// Expects the file to hold the raw response maps collected from a host
    /// web view, one object per probed key system.
    Summarize {
        results_path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    match cli.command {
        Commands::Registry => {
            for key_system in KEY_SYSTEMS {
                println!("{key_system:<45} {}", display_name(key_system));
            }
        }
        Commands::Config { preset } => {
            let config = match preset.as_str() {
                "software" => MediaKeySystemConfig::software(),
                "hardware" => MediaKeySystemConfig::hardware(),
                other => anyhow::bail!("unknown preset {other:?} (expected software or hardware)"),
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Summarize { results_path } => {
            let raw = fs::read_to_string(&results_path)
                .with_context(|| format!("reading {}", results_path.display()))?;
            let maps: Vec<serde_json::Map<String, serde_json::Value>> =
                serde_json::from_str(&raw)
                    .context("results file must be a JSON array of response objects")?;
            let results = maps
                .iter()
                .map(DrmCapability::from_map)
                .collect::<emeprobe::error::Result<Vec<_>>>()?;

            println!("{}", summarize(&results));
            if any_supported(&results) {
                println!("\nAt least one key system is supported.");
            } else {
                println!("\nNo key system is supported.");
            }
        }
    }

    Ok(())
}
