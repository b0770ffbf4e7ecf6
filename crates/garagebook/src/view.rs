//! Rendering of the customer collection as nested cards.
//!
//! The view is pure: it reads store state and produces a string. Plain
//! output is styled by the active theme; JSON output is the persisted
//! representation, pretty-printed, and never styled.

use std::fmt::Write as _;

use crate::customer::Customer;
use crate::error::Result;
use crate::theme::Theme;

/// ANSI styles applied to plain output.
///
/// The light stylesheet is all empty strings, so light output carries no
/// escape sequences at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stylesheet {
    /// Style for the page header and card titles.
    pub heading: &'static str,
    /// Style for secondary lines (ids, section labels).
    pub dim: &'static str,
    /// Reset sequence.
    pub reset: &'static str,
}

impl Stylesheet {
    /// The stylesheet for the given theme.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                heading: "",
                dim: "",
                reset: "",
            },
            Theme::Dark => Self {
                heading: "\x1b[1;36m",
                dim: "\x1b[2m",
                reset: "\x1b[0m",
            },
        }
    }
}

/// Render the collection as a plain-text card list.
///
/// One card per customer in insertion order: name, id, phone, then the
/// nested vehicle and job-order sections.
#[must_use]
pub fn render(customers: &[Customer], shop_name: &str, theme: Theme) -> String {
    let style = Stylesheet::for_theme(theme);
    let mut out = String::new();

    let _ = writeln!(out, "{}{}{}", style.heading, shop_name, style.reset);
    let _ = writeln!(out, "{}", "=".repeat(shop_name.len()));
    let _ = writeln!(out);

    if customers.is_empty() {
        let _ = writeln!(out, "No customers on file.");
        return out;
    }

    for customer in customers {
        let _ = writeln!(out, "{}{}{}", style.heading, customer.name, style.reset);
        let _ = writeln!(out, "  {}ID: {}{}", style.dim, customer.id, style.reset);
        let _ = writeln!(out, "  {}", customer.phone);

        let _ = writeln!(out, "  {}Vehicles{}", style.dim, style.reset);
        if customer.vehicles.is_empty() {
            let _ = writeln!(out, "    (none)");
        }
        for vehicle in &customer.vehicles {
            let _ = writeln!(
                out,
                "    {} {} {} - {}",
                vehicle.year, vehicle.make, vehicle.model, vehicle.vin
            );
        }

        let _ = writeln!(out, "  {}Job Orders{}", style.dim, style.reset);
        if customer.jobs.is_empty() {
            let _ = writeln!(out, "    (none)");
        }
        for job in &customer.jobs {
            let _ = writeln!(
                out,
                "    {} - ${} [{}]",
                job.description, job.cost, job.status
            );
        }

        let _ = writeln!(out);
    }

    out
}

/// Render the collection as pretty-printed JSON.
///
/// This is the exact persisted representation of the data blob.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(customers: &[Customer]) -> Result<String> {
    Ok(serde_json::to_string_pretty(customers)?)
}
