//! Command-line interface for garagebook.
//!
//! This module provides the CLI structure and command definitions for the
//! `gbook` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, CustomerCommand, JobCommand, OutputFormat, ShowCommand, StatusCommand,
    ThemeCommand, VehicleCommand,
};

/// gbook - Track customers, vehicles, and job orders for an auto repair shop
///
/// All records live in a local database; every successful add rewrites the
/// persisted snapshot, so the collection survives across runs.
#[derive(Debug, Parser)]
#[command(name = "gbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage customers
    #[command(subcommand)]
    Customer(CustomerCommand),

    /// Manage vehicles
    #[command(subcommand)]
    Vehicle(VehicleCommand),

    /// Manage job orders
    #[command(subcommand)]
    Job(JobCommand),

    /// Show the customer cards
    Show(ShowCommand),

    /// Show or toggle the theme
    #[command(subcommand)]
    Theme(ThemeCommand),

    /// Start the interactive shell
    Shell,

    /// Show store status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "gbook");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        for (verbose, expected) in [
            (0, crate::logging::Verbosity::Normal),
            (1, crate::logging::Verbosity::Verbose),
            (2, crate::logging::Verbosity::Trace),
        ] {
            let cli = Cli {
                config: None,
                verbose,
                quiet: false,
                command: Command::Status(StatusCommand { json: false }),
            };
            assert_eq!(cli.verbosity(), expected);
        }
    }

    #[test]
    fn test_parse_customer_add() {
        let args = vec!["gbook", "customer", "add", "Jane Doe", "555-1234"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Customer(CustomerCommand::Add { name, phone }) => {
                assert_eq!(name, "Jane Doe");
                assert_eq!(phone, "555-1234");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_vehicle_add() {
        let args = vec![
            "gbook", "vehicle", "add", "17", "--make", "Toyota", "--model", "Corolla", "--year",
            "2020", "--vin", "ABC123",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Vehicle(VehicleCommand::Add {
                customer,
                make,
                model,
                year,
                vin,
            }) => {
                assert_eq!(customer, 17);
                assert_eq!(make, "Toyota");
                assert_eq!(model, "Corolla");
                assert_eq!(year, "2020");
                assert_eq!(vin, "ABC123");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_vehicle_add_year_and_vin_optional() {
        let args = vec![
            "gbook", "vehicle", "add", "17", "--make", "Toyota", "--model", "Corolla",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Vehicle(VehicleCommand::Add { year, vin, .. }) => {
                assert_eq!(year, "");
                assert_eq!(vin, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_job_add() {
        let args = vec![
            "gbook",
            "job",
            "add",
            "17",
            "--description",
            "Oil change",
            "--cost",
            "49.99",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Job(JobCommand::Add { .. })));
    }

    #[test]
    fn test_parse_show_json() {
        let args = vec!["gbook", "show", "--format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Show(cmd) => assert_eq!(cmd.format, OutputFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_theme_toggle() {
        let args = vec!["gbook", "theme", "toggle"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Theme(ThemeCommand::Toggle)));
    }

    #[test]
    fn test_parse_shell() {
        let args = vec!["gbook", "shell"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Shell));
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["gbook", "-c", "/custom/config.toml", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose_and_quiet_flags() {
        let cli = Cli::try_parse_from(vec!["gbook", "-v", "status"]).unwrap();
        assert_eq!(cli.verbose, 1);

        let cli = Cli::try_parse_from(vec!["gbook", "-q", "status"]).unwrap();
        assert!(cli.quiet);
    }
}
