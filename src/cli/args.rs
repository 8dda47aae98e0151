//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_ENV, ENV_VAR};

/// Vet Clinic API - administration backend for a veterinary clinic
#[derive(Parser, Debug)]
#[command(name = "vet-clinic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Environment name; selects `config/<env>.yml`
    #[arg(short, long, global = true, env = ENV_VAR, default_value = DEFAULT_ENV)]
    pub env: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Insert master data into the configured database
    Seed,
}

/// Arguments for the serve command.
///
/// Anything not given falls back to the `server` section of the config file.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Drop all tables and re-run all migrations
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from(["vet-clinic", "serve", "--port", "9000"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["vet-clinic", "migrate", "fresh", "--env", "test", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.env, "test");
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Fresh
            })
        ));
    }
}
