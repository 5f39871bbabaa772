//! # Hueport - color token export
//!
//! Command-line front end for [`hueport_resolve`]. It reads a YAML
//! configuration, resolves colors from exported document snapshots and
//! prints the resulting appearance set.
//!
//! ```text
//! hueport colors --config hueport.yaml --snapshots ./snapshots --format text
//! ```
//!
//! The binary is a thin wrapper around [`run`], which tests call directly.

pub mod logging;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hueport_resolve::{ColorResolver, Config, SnapshotClient};
use tracing::info;

pub use output::Format;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "hueport.yaml";

/// Export color tokens from design documents.
#[derive(Debug, Parser)]
#[command(name = "hueport", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `HUEPORT_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve light, dark and high-contrast colors.
    Colors(ColorsArgs),
}

#[derive(Debug, Args)]
pub struct ColorsArgs {
    /// Configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Directory of exported documents (`<id>/styles.json`, `<id>/nodes.json`).
    #[arg(short, long)]
    pub snapshots: PathBuf,

    /// Only export styles whose name matches, e.g. "colors/*, accent?".
    #[arg(short, long)]
    pub filter: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

/// Runs a parsed command and returns what should be printed.
///
/// # Errors
///
/// Returns an error chain describing which step failed.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Colors(args) => colors(args),
    }
}

fn colors(args: &ColorsArgs) -> Result<String> {
    let config = Config::from_file(&args.config)
        .with_context(|| format!("could not load {}", args.config.display()))?;
    let client = SnapshotClient::new(&args.snapshots);
    let resolver = ColorResolver::from_config(client, &config);
    info!(
        config = %args.config.display(),
        snapshots = %resolver.client().root().display(),
        strategy = resolver.strategy().name(),
        "resolving colors"
    );

    let set = resolver
        .load(args.filter.as_deref())
        .context("could not resolve colors")?;
    output::render(&set, args.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_colors_command() {
        let cli = Cli::try_parse_from([
            "hueport", "-vv", "colors", "--snapshots", "snaps", "--filter", "colors/*",
            "--format", "text",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Colors(args) = cli.command;
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG));
        assert_eq!(args.snapshots, PathBuf::from("snaps"));
        assert_eq!(args.filter.as_deref(), Some("colors/*"));
        assert_eq!(args.format, Format::Text);
    }

    #[test]
    fn snapshots_is_required() {
        assert!(Cli::try_parse_from(["hueport", "colors"]).is_err());
    }
}
