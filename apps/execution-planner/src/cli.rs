//! Command-line interface

use clap::{Parser, Subcommand};

/// Execution Planner CLI
#[derive(Debug, Parser)]
#[command(name = "execution-planner")]
#[command(about = "Plans best executions across several venues' order books")]
#[command(version)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Snapshot file, overriding `snapshot.path` from the configuration
    #[arg(short, long, global = true)]
    pub snapshot: Option<String>,

    /// Subcommand to run (defaults to `console`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Serve the HTTP API
    Serve,
    /// Start the interactive console
    Console,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["execution-planner"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn parses_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "execution-planner",
            "serve",
            "--config",
            "planner.yaml",
            "--snapshot",
            "books.txt",
        ])
        .unwrap();

        assert_eq!(cli.command, Some(Commands::Serve));
        assert_eq!(cli.config.as_deref(), Some("planner.yaml"));
        assert_eq!(cli.snapshot.as_deref(), Some("books.txt"));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["execution-planner", "trade"]).is_err());
    }
}
