//! Core record types for garagebook.
//!
//! This module defines the shop's data model: customers, the vehicles and
//! job orders they own, and the transient draft values a form accumulates
//! before a successful add.

use serde::{Deserialize, Serialize};

/// The status of a job order.
///
/// New job orders always start as `Pending`; no transition operation is
/// exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    /// The job has been logged and not yet worked on.
    Pending,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// A vehicle owned by exactly one customer for its entire lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier within the owning customer's list.
    pub id: i64,
    /// Vehicle make (non-empty).
    pub make: String,
    /// Vehicle model (non-empty).
    pub model: String,
    /// Model year, kept as the string the user entered.
    pub year: String,
    /// Vehicle identification number.
    pub vin: String,
}

/// A billable repair task owned by exactly one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOrder {
    /// Unique identifier within the owning customer's list.
    pub id: i64,
    /// What the job is (non-empty).
    pub description: String,
    /// Quoted cost, kept as the numeric-formatted string the user entered.
    pub cost: String,
    /// Current status.
    pub status: JobStatus,
}

/// A shop client record owning vehicles and job orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier across the whole collection, derived from the
    /// creation timestamp in milliseconds.
    pub id: i64,
    /// Customer name (non-empty).
    pub name: String,
    /// Phone number (non-empty).
    pub phone: String,
    /// Vehicles on file, in insertion order.
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    /// Job orders on file, in insertion order.
    #[serde(default)]
    pub jobs: Vec<JobOrder>,
}

impl Customer {
    /// Create a customer with empty vehicle and job lists.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            vehicles: Vec::new(),
            jobs: Vec::new(),
        }
    }
}

/// Unsaved vehicle form values, held per customer until a successful add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleDraft {
    /// Vehicle make field.
    pub make: String,
    /// Vehicle model field.
    pub model: String,
    /// Model year field.
    pub year: String,
    /// VIN field.
    pub vin: String,
}

impl VehicleDraft {
    /// Turn this draft into a vehicle with the given id.
    ///
    /// Field values are stored as entered; validation happens before the
    /// draft reaches this point.
    #[must_use]
    pub fn into_vehicle(self, id: i64) -> Vehicle {
        Vehicle {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            vin: self.vin,
        }
    }
}

/// Unsaved job-order form values, held per customer until a successful add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    /// Description field.
    pub description: String,
    /// Cost field.
    pub cost: String,
}

impl JobDraft {
    /// Turn this draft into a job order with the given id and the initial
    /// `Pending` status.
    #[must_use]
    pub fn into_job(self, id: i64) -> JobOrder {
        JobOrder {
            id,
            description: self.description,
            cost: self.cost,
            status: JobStatus::Pending,
        }
    }
}
