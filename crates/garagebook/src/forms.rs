//! Per-customer draft inputs for the vehicle and job forms.
//!
//! `FormState` is owned by whichever front-end is collecting input (the
//! interactive shell); it lives and dies with that front-end and never
//! enters the store. A successful add clears the draft for that customer
//! only.

use std::collections::HashMap;

use crate::customer::{JobDraft, VehicleDraft};

/// A field of the vehicle form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleField {
    /// Vehicle make.
    Make,
    /// Vehicle model.
    Model,
    /// Model year.
    Year,
    /// Vehicle identification number.
    Vin,
}

impl std::str::FromStr for VehicleField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "make" => Ok(Self::Make),
            "model" => Ok(Self::Model),
            "year" => Ok(Self::Year),
            "vin" => Ok(Self::Vin),
            other => Err(format!(
                "unknown vehicle field '{other}' (expected make, model, year, or vin)"
            )),
        }
    }
}

/// A field of the job-order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    /// Job description.
    Description,
    /// Quoted cost.
    Cost,
}

impl std::str::FromStr for JobField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(Self::Description),
            "cost" => Ok(Self::Cost),
            other => Err(format!(
                "unknown job field '{other}' (expected description or cost)"
            )),
        }
    }
}

/// Transient draft values for every customer's forms, keyed by customer id.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    vehicle_drafts: HashMap<i64, VehicleDraft>,
    job_drafts: HashMap<i64, JobDraft>,
}

impl FormState {
    /// Create an empty form state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field of a customer's vehicle draft.
    pub fn set_vehicle_field(&mut self, customer_id: i64, field: VehicleField, value: &str) {
        let draft = self.vehicle_drafts.entry(customer_id).or_default();
        match field {
            VehicleField::Make => draft.make = value.to_string(),
            VehicleField::Model => draft.model = value.to_string(),
            VehicleField::Year => draft.year = value.to_string(),
            VehicleField::Vin => draft.vin = value.to_string(),
        }
    }

    /// Set one field of a customer's job draft.
    pub fn set_job_field(&mut self, customer_id: i64, field: JobField, value: &str) {
        let draft = self.job_drafts.entry(customer_id).or_default();
        match field {
            JobField::Description => draft.description = value.to_string(),
            JobField::Cost => draft.cost = value.to_string(),
        }
    }

    /// The current vehicle draft for a customer (empty if none was started).
    #[must_use]
    pub fn vehicle_draft(&self, customer_id: i64) -> VehicleDraft {
        self.vehicle_drafts
            .get(&customer_id)
            .cloned()
            .unwrap_or_default()
    }

    /// The current job draft for a customer (empty if none was started).
    #[must_use]
    pub fn job_draft(&self, customer_id: i64) -> JobDraft {
        self.job_drafts
            .get(&customer_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Clear a customer's vehicle draft after a successful add.
    pub fn clear_vehicle(&mut self, customer_id: i64) {
        self.vehicle_drafts.remove(&customer_id);
    }

    /// Clear a customer's job draft after a successful add.
    pub fn clear_job(&mut self, customer_id: i64) {
        self.job_drafts.remove(&customer_id);
    }
}
