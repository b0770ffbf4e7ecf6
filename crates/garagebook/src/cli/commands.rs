//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Customer commands.
#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Add a customer
    Add {
        /// Customer name
        name: String,

        /// Phone number
        phone: String,
    },
}

/// Vehicle commands.
#[derive(Debug, Subcommand)]
pub enum VehicleCommand {
    /// Add a vehicle to a customer
    Add {
        /// Id of the owning customer
        customer: i64,

        /// Vehicle make
        #[arg(long)]
        make: String,

        /// Vehicle model
        #[arg(long)]
        model: String,

        /// Model year
        #[arg(long, default_value = "")]
        year: String,

        /// Vehicle identification number
        #[arg(long, default_value = "")]
        vin: String,
    },
}

/// Job-order commands.
#[derive(Debug, Subcommand)]
pub enum JobCommand {
    /// Add a job order to a customer
    Add {
        /// Id of the owning customer
        customer: i64,

        /// What the job is
        #[arg(long)]
        description: String,

        /// Quoted cost
        #[arg(long)]
        cost: String,
    },
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Show only this customer
    #[arg(long)]
    pub customer: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Theme commands.
#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Show the active theme
    Show,

    /// Flip between light and dark
    Toggle,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_customer_command_debug() {
        let cmd = CustomerCommand::Add {
            name: "Jane Doe".to_string(),
            phone: "555-1234".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Add"));
        assert!(debug_str.contains("Jane Doe"));
    }

    #[test]
    fn test_vehicle_command_debug() {
        let cmd = VehicleCommand::Add {
            customer: 1,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: "2020".to_string(),
            vin: "ABC123".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Toyota"));
    }

    #[test]
    fn test_show_command_debug() {
        let cmd = ShowCommand {
            customer: Some(5),
            format: OutputFormat::Json,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("customer"));
    }

    #[test]
    fn test_theme_command_debug() {
        let cmd = ThemeCommand::Toggle;
        assert!(format!("{cmd:?}").contains("Toggle"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }

    #[test]
    fn test_output_format_clone() {
        let format = OutputFormat::Json;
        let cloned = format;
        assert_eq!(format, cloned);
    }
}
