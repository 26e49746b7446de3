//! # Storage Layer
//!
//! This module defines the storage abstraction for contacts. The [`ContactStore`]
//! trait lets the command layer work the same way against any backend.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the default store
//!   - A map keyed by contact id, gone when the process exits
//!   - Seeded explicitly (see [`crate::commands::seed`])
//!
//! - [`fs::FileStore`]: a single JSON file
//!   - The whole map is rewritten on every mutation
//!   - Lets the CLI keep contacts between invocations
//!
//! ## Semantics live above
//!
//! Backends only save, fetch, list and remove whole records. Id generation,
//! shallow merges and idempotent deletes are implemented once in
//! `commands/*.rs` on top of these primitives.
//!
//! ## Listing Order
//!
//! Listing order is not part of the contract. Both backends return the newest
//! record first, falling back to last name, via [`newest_first`].

use crate::error::Result;
use crate::model::ContactRecord;
use std::cmp::Ordering;

pub mod fs;
pub mod memory;

/// Abstract interface for contact storage.
pub trait ContactStore {
    /// Save a contact (create or replace)
    fn save_contact(&mut self, contact: &ContactRecord) -> Result<()>;

    /// Get a contact by id. Absence is `Ok(None)`, never an error.
    fn get_contact(&self, id: &str) -> Result<Option<ContactRecord>>;

    /// List every contact
    fn list_contacts(&self) -> Result<Vec<ContactRecord>>;

    /// Remove a contact, reporting whether anything was there
    fn remove_contact(&mut self, id: &str) -> Result<bool>;

    fn contains_contact(&self, id: &str) -> Result<bool> {
        Ok(self.get_contact(id)?.is_some())
    }
}

pub(crate) fn newest_first(a: &ContactRecord, b: &ContactRecord) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.last.as_deref().unwrap_or("").cmp(b.last.as_deref().unwrap_or("")))
}

impl<T: ContactStore + ?Sized> ContactStore for Box<T> {
    fn save_contact(&mut self, contact: &ContactRecord) -> Result<()> {
        (**self).save_contact(contact)
    }

    fn get_contact(&self, id: &str) -> Result<Option<ContactRecord>> {
        (**self).get_contact(id)
    }

    fn list_contacts(&self) -> Result<Vec<ContactRecord>> {
        (**self).list_contacts()
    }

    fn remove_contact(&mut self, id: &str) -> Result<bool> {
        (**self).remove_contact(id)
    }
}
