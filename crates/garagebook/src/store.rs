//! In-memory state container for the customer collection.
//!
//! `ShopStore` owns the collection and exposes the only mutation paths:
//! validating add operations that preserve insertion order. It holds no
//! handle to persistence or rendering; callers decide when a snapshot is
//! written out.

use chrono::Utc;

use crate::customer::{Customer, JobDraft, JobOrder, Vehicle, VehicleDraft};
use crate::error::{Error, Result};

/// Validation notice when a customer is added with a missing field.
const NOTICE_CUSTOMER_FIELDS: &str = "Please enter both name and phone number.";

/// Validation notice when a vehicle is added with a missing field.
const NOTICE_VEHICLE_FIELDS: &str = "Make and Model are required.";

/// Validation notice when a job order is added with a missing field.
const NOTICE_JOB_FIELDS: &str = "Job description and cost are required.";

/// The in-memory collection of customer records.
///
/// Ids derive from the creation timestamp in milliseconds; the store bumps
/// past the last issued id so records created in the same millisecond stay
/// unique across the whole collection.
#[derive(Debug, Clone, Default)]
pub struct ShopStore {
    customers: Vec<Customer>,
    last_id: i64,
}

impl ShopStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over an existing collection, seeding the id source
    /// past the highest persisted id.
    #[must_use]
    pub fn from_customers(customers: Vec<Customer>) -> Self {
        let last_id = customers
            .iter()
            .flat_map(|c| {
                std::iter::once(c.id)
                    .chain(c.vehicles.iter().map(|v| v.id))
                    .chain(c.jobs.iter().map(|j| j.id))
            })
            .max()
            .unwrap_or(0);
        Self { customers, last_id }
    }

    /// The customer collection, in insertion order.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Look up a customer by id.
    #[must_use]
    pub fn get(&self, customer_id: i64) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }

    /// Number of customers on file.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Add a customer with empty vehicle and job lists.
    ///
    /// # Errors
    ///
    /// Returns a validation error if name or phone is empty after trimming;
    /// the collection is left unchanged.
    pub fn add_customer(&mut self, name: &str, phone: &str) -> Result<&Customer> {
        if name.trim().is_empty() || phone.trim().is_empty() {
            return Err(Error::validation(NOTICE_CUSTOMER_FIELDS));
        }

        let id = self.next_id();
        self.customers.push(Customer::new(id, name, phone));
        let idx = self.customers.len() - 1;
        Ok(&self.customers[idx])
    }

    /// Append a vehicle to the given customer's list.
    ///
    /// # Errors
    ///
    /// Returns a validation error if make or model is empty after trimming,
    /// or an unknown-customer error if no customer has that id. In either
    /// case no list is changed.
    pub fn add_vehicle(&mut self, customer_id: i64, draft: VehicleDraft) -> Result<&Vehicle> {
        if draft.make.trim().is_empty() || draft.model.trim().is_empty() {
            return Err(Error::validation(NOTICE_VEHICLE_FIELDS));
        }

        let idx = self.position(customer_id)?;
        let id = self.next_id();
        let vehicles = &mut self.customers[idx].vehicles;
        vehicles.push(draft.into_vehicle(id));
        let last = vehicles.len() - 1;
        Ok(&self.customers[idx].vehicles[last])
    }

    /// Append a job order with status `Pending` to the given customer's list.
    ///
    /// # Errors
    ///
    /// Returns a validation error if description or cost is empty after
    /// trimming, or an unknown-customer error if no customer has that id. In
    /// either case no list is changed.
    pub fn add_job(&mut self, customer_id: i64, draft: JobDraft) -> Result<&JobOrder> {
        if draft.description.trim().is_empty() || draft.cost.trim().is_empty() {
            return Err(Error::validation(NOTICE_JOB_FIELDS));
        }

        let idx = self.position(customer_id)?;
        let id = self.next_id();
        let jobs = &mut self.customers[idx].jobs;
        jobs.push(draft.into_job(id));
        let last = jobs.len() - 1;
        Ok(&self.customers[idx].jobs[last])
    }

    /// Index of the customer with the given id.
    fn position(&self, customer_id: i64) -> Result<usize> {
        self.customers
            .iter()
            .position(|c| c.id == customer_id)
            .ok_or(Error::UnknownCustomer { id: customer_id })
    }

    /// Issue a fresh id: the current time in milliseconds, bumped past the
    /// last issued id when creations land in the same millisecond.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}
