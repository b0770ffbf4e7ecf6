//! Session glue between the in-memory store and the local store.
//!
//! A session loads the persisted state once at open, routes every mutation
//! through the store, and invokes the explicit save operation only after a
//! mutation succeeds. Rendering reads the store and never writes.

use tracing::info;

use crate::config::Config;
use crate::customer::{JobDraft, VehicleDraft};
use crate::error::Result;
use crate::storage::LocalStore;
use crate::store::ShopStore;
use crate::theme::{self, Theme};

/// An open shop session: the customer store, the backing local store, and
/// the theme preference.
#[derive(Debug)]
pub struct Session {
    store: ShopStore,
    local: LocalStore,
    theme: Theme,
}

impl Session {
    /// Open a session against the configured database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the persisted
    /// blob does not parse.
    pub fn open(config: &Config) -> Result<Self> {
        let local = LocalStore::open(config.database_path())?;
        Self::with_local(local)
    }

    /// Open a session over an already-open local store.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted blob or theme slot cannot be read.
    pub fn with_local(local: LocalStore) -> Result<Self> {
        let customers = local.load_customers()?;
        let theme = theme::load(&local)?;
        info!("Session opened with {} customers", customers.len());
        Ok(Self {
            store: ShopStore::from_customers(customers),
            local,
            theme,
        })
    }

    /// The customer store.
    #[must_use]
    pub fn store(&self) -> &ShopStore {
        &self.store
    }

    /// The active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Add a customer and persist the new snapshot. Returns the new id.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a required field is empty, in which
    /// case nothing is mutated or written; or a storage error if the save
    /// fails.
    pub fn add_customer(&mut self, name: &str, phone: &str) -> Result<i64> {
        let id = self.store.add_customer(name, phone)?.id;
        self.save()?;
        Ok(id)
    }

    /// Add a vehicle to a customer and persist the new snapshot. Returns
    /// the new vehicle id.
    ///
    /// # Errors
    ///
    /// Returns a validation or unknown-customer error (nothing mutated or
    /// written), or a storage error if the save fails.
    pub fn add_vehicle(&mut self, customer_id: i64, draft: VehicleDraft) -> Result<i64> {
        let id = self.store.add_vehicle(customer_id, draft)?.id;
        self.save()?;
        Ok(id)
    }

    /// Add a job order to a customer and persist the new snapshot. Returns
    /// the new job id.
    ///
    /// # Errors
    ///
    /// Returns a validation or unknown-customer error (nothing mutated or
    /// written), or a storage error if the save fails.
    pub fn add_job(&mut self, customer_id: i64, draft: JobDraft) -> Result<i64> {
        let id = self.store.add_job(customer_id, draft)?.id;
        self.save()?;
        Ok(id)
    }

    /// Flip the theme preference and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme = theme::toggle(&self.local, self.theme)?;
        Ok(self.theme)
    }

    /// Statistics of the backing local store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn store_stats(&self) -> Result<crate::storage::StoreStats> {
        self.local.stats()
    }

    /// Path of the backing database file.
    #[must_use]
    pub fn database_path(&self) -> &std::path::Path {
        self.local.path()
    }

    /// Write the full customer snapshot, overwriting the previous blob.
    fn save(&self) -> Result<()> {
        self.local.save_customers(self.store.customers())
    }
}
