//! Interactive shell for garagebook.
//!
//! The shell reproduces the card-form flow: draft fields are set one line at
//! a time per customer, and `add` submits the draft, clearing it only when
//! the add succeeds. Draft state lives in the shell and is gone when the
//! shell exits.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::forms::{FormState, JobField, VehicleField};
use crate::session::Session;
use crate::view;

const HELP: &str = "\
Commands:
  customer                      add a customer (prompts for name and phone)
  vehicle <id> <field> <value>  set a vehicle form field (make, model, year, vin)
  vehicle <id> add              submit the vehicle form for that customer
  job <id> <field> <value>      set a job form field (description, cost)
  job <id> add                  submit the job form for that customer
  show                          render the customer cards
  theme                         toggle dark mode
  help                          show this help
  quit                          leave the shell
";

/// Run the shell over stdin/stdout until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if I/O or a storage write fails. Validation failures
/// and unknown ids are reported to the user and do not end the shell.
pub fn run(session: &mut Session, shop_name: &str) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(session, shop_name, stdin.lock(), stdout.lock())
}

/// Run the shell over arbitrary input/output streams.
///
/// # Errors
///
/// Returns an error if I/O or a storage write fails.
pub fn run_with<R: BufRead, W: Write>(
    session: &mut Session,
    shop_name: &str,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut forms = FormState::new();

    writeln!(out, "{shop_name} - interactive shell")?;
    writeln!(out, "Type 'help' for commands.")?;

    loop {
        write!(out, "gbook> ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();

        match command {
            "help" => write!(out, "{HELP}")?,
            "quit" | "exit" => break,
            "show" => {
                let rendered = view::render(session.store().customers(), shop_name, session.theme());
                write!(out, "{rendered}")?;
            }
            "theme" => {
                let theme = session.toggle_theme()?;
                writeln!(out, "Theme: {theme}")?;
            }
            "customer" => add_customer(session, &mut input, &mut out)?,
            "vehicle" => vehicle_line(session, &mut forms, &rest, &mut out)?,
            "job" => job_line(session, &mut forms, &rest, &mut out)?,
            other => writeln!(out, "Unknown command '{other}'. Type 'help' for commands.")?,
        }
    }

    Ok(())
}

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    Ok(read_line(input)?.map(|line| line.trim_end_matches(['\r', '\n']).to_string()))
}

/// The sidebar form: prompt for both fields, then submit.
fn add_customer<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(name) = prompt(input, out, "Customer Name: ")? else {
        return Ok(());
    };
    let Some(phone) = prompt(input, out, "Phone Number: ")? else {
        return Ok(());
    };

    match session.add_customer(&name, &phone) {
        Ok(id) => writeln!(out, "Added customer '{}' (id {id})", name.trim())?,
        Err(e) if e.is_validation() => writeln!(out, "{e}")?,
        Err(e) => return Err(e),
    }
    Ok(())
}

fn vehicle_line<W: Write>(
    session: &mut Session,
    forms: &mut FormState,
    args: &[&str],
    out: &mut W,
) -> Result<()> {
    let Some((customer_id, action, value)) = split_form_args(args, out)? else {
        return Ok(());
    };

    if action == "add" {
        let draft = forms.vehicle_draft(customer_id);
        match session.add_vehicle(customer_id, draft) {
            Ok(id) => {
                forms.clear_vehicle(customer_id);
                writeln!(out, "Added vehicle (id {id})")?;
            }
            Err(e) if e.is_validation() || e.is_unknown_customer() => writeln!(out, "{e}")?,
            Err(e) => return Err(e),
        }
        return Ok(());
    }

    match action.parse::<VehicleField>() {
        Ok(field) => forms.set_vehicle_field(customer_id, field, &value),
        Err(msg) => writeln!(out, "{msg}")?,
    }
    Ok(())
}

fn job_line<W: Write>(
    session: &mut Session,
    forms: &mut FormState,
    args: &[&str],
    out: &mut W,
) -> Result<()> {
    let Some((customer_id, action, value)) = split_form_args(args, out)? else {
        return Ok(());
    };

    if action == "add" {
        let draft = forms.job_draft(customer_id);
        match session.add_job(customer_id, draft) {
            Ok(id) => {
                forms.clear_job(customer_id);
                writeln!(out, "Added job order (id {id})")?;
            }
            Err(e) if e.is_validation() || e.is_unknown_customer() => writeln!(out, "{e}")?,
            Err(e) => return Err(e),
        }
        return Ok(());
    }

    match action.parse::<JobField>() {
        Ok(field) => forms.set_job_field(customer_id, field, &value),
        Err(msg) => writeln!(out, "{msg}")?,
    }
    Ok(())
}

/// Split `<id> <action> [value...]`; reports malformed lines to the user.
fn split_form_args<W: Write>(args: &[&str], out: &mut W) -> Result<Option<(i64, String, String)>> {
    let (Some(id_word), Some(action)) = (args.first(), args.get(1)) else {
        writeln!(out, "Usage: <id> <field> <value>, or <id> add")?;
        return Ok(None);
    };

    let Ok(customer_id) = id_word.parse::<i64>() else {
        writeln!(out, "'{id_word}' is not a customer id")?;
        return Ok(None);
    };

    let value = args[2..].join(" ");
    Ok(Some((customer_id, (*action).to_string(), value)))
}
