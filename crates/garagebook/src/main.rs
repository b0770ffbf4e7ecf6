//! `gbook` - CLI for garagebook
//!
//! This binary provides the command-line interface for managing the shop's
//! customers, vehicles, and job orders.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use garagebook::cli::{
    Cli, Command, ConfigCommand, CustomerCommand, JobCommand, OutputFormat, ShowCommand,
    StatusCommand, ThemeCommand, VehicleCommand,
};
use garagebook::customer::{JobDraft, VehicleDraft};
use garagebook::{init_logging, view, Config, Error, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Customer(cmd) => handle_customer(&config, cmd),
        Command::Vehicle(cmd) => handle_vehicle(&config, cmd),
        Command::Job(cmd) => handle_job(&config, cmd),
        Command::Show(cmd) => handle_show(&config, &cmd),
        Command::Theme(cmd) => handle_theme(&config, &cmd),
        Command::Shell => handle_shell(&config),
        Command::Status(cmd) => handle_status(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Report a validation failure as a user notice instead of a process error.
fn notify_or_fail(result: garagebook::Result<i64>, added: &str) -> anyhow::Result<()> {
    match result {
        Ok(id) => {
            println!("Added {added} (id {id})");
            Ok(())
        }
        Err(e) if e.is_validation() => {
            eprintln!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_customer(config: &Config, cmd: CustomerCommand) -> anyhow::Result<()> {
    let mut session = Session::open(config)?;
    match cmd {
        CustomerCommand::Add { name, phone } => {
            let label = format!("customer '{}'", name.trim());
            notify_or_fail(session.add_customer(&name, &phone), &label)
        }
    }
}

fn handle_vehicle(config: &Config, cmd: VehicleCommand) -> anyhow::Result<()> {
    let mut session = Session::open(config)?;
    match cmd {
        VehicleCommand::Add {
            customer,
            make,
            model,
            year,
            vin,
        } => {
            let draft = VehicleDraft {
                make,
                model,
                year,
                vin,
            };
            notify_or_fail(session.add_vehicle(customer, draft), "vehicle")
        }
    }
}

fn handle_job(config: &Config, cmd: JobCommand) -> anyhow::Result<()> {
    let mut session = Session::open(config)?;
    match cmd {
        JobCommand::Add {
            customer,
            description,
            cost,
        } => {
            let draft = JobDraft { description, cost };
            notify_or_fail(session.add_job(customer, draft), "job order")
        }
    }
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let session = Session::open(config)?;

    let customers = session.store().customers();
    let selected = match cmd.customer {
        None => customers,
        Some(id) => {
            let customer = session
                .store()
                .get(id)
                .ok_or(Error::UnknownCustomer { id })?;
            std::slice::from_ref(customer)
        }
    };

    match cmd.format {
        OutputFormat::Plain => {
            print!(
                "{}",
                view::render(selected, &config.shop.name, session.theme())
            );
        }
        OutputFormat::Json => println!("{}", view::render_json(selected)?),
    }
    Ok(())
}

fn handle_theme(config: &Config, cmd: &ThemeCommand) -> anyhow::Result<()> {
    let mut session = Session::open(config)?;
    match cmd {
        ThemeCommand::Show => println!("Theme: {}", session.theme()),
        ThemeCommand::Toggle => println!("Theme: {}", session.toggle_theme()?),
    }
    Ok(())
}

fn handle_shell(config: &Config) -> anyhow::Result<()> {
    let mut session = Session::open(config)?;
    garagebook::shell::run(&mut session, &config.shop.name)?;
    Ok(())
}

fn handle_status(config: &Config, cmd: &StatusCommand) -> anyhow::Result<()> {
    let session = Session::open(config)?;
    let store = session.store();
    let vehicles: usize = store.customers().iter().map(|c| c.vehicles.len()).sum();
    let jobs: usize = store.customers().iter().map(|c| c.jobs.len()).sum();
    let stats = session.store_stats()?;

    if cmd.json {
        let status = serde_json::json!({
            "customers": store.len(),
            "vehicles": vehicles,
            "jobs": jobs,
            "theme": session.theme().to_string(),
            "database_path": session.database_path().display().to_string(),
            "slots": stats.slot_count,
            "db_size_bytes": stats.db_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("gbook status");
        println!("------------");
        println!("Customers:     {}", store.len());
        println!("Vehicles:      {vehicles}");
        println!("Job orders:    {jobs}");
        println!("Theme:         {}", session.theme());
        println!("Database:      {}", session.database_path().display());
        println!("Slots:         {}", stats.slot_count);
        println!("Size (bytes):  {}", stats.db_size_bytes);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:  {}", config.database_path().display());
                println!();
                println!("[Shop]");
                println!("  Name:           {}", config.shop.name);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
