//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every companion operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the contact store and the catalog client
//! - **Dispatches** to the appropriate command function
//! - **Supplies** the configured catalog credentials
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//!
//! ## Generic Over Backends
//!
//! `CompanionApi<S: ContactStore, C: Catalog>`:
//! - Production: `CompanionApi<InMemoryStore | FileStore, HttpCatalog>`
//! - Testing: `CompanionApi<InMemoryStore, StubCatalog>`

use crate::catalog::{Catalog, Credentials, ResourceKind};
use crate::commands;
use crate::error::Result;
use crate::model::ContactFields;
use crate::store::ContactStore;

/// The main API facade for companion operations.
pub struct CompanionApi<S: ContactStore, C: Catalog> {
    store: S,
    catalog: C,
    credentials: Credentials,
}

impl<S: ContactStore, C: Catalog> CompanionApi<S, C> {
    pub fn new(store: S, catalog: C, credentials: Credentials) -> Self {
        Self {
            store,
            catalog,
            credentials,
        }
    }

    /// Populates the store with the sample contacts.
    pub fn seed(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn list_contacts(&self, query: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn view_contact(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn create_contact(
        &mut self,
        id: Option<String>,
        fields: ContactFields,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, id, fields)
    }

    pub fn create_empty_contact(&mut self) -> Result<commands::CmdResult> {
        commands::create::empty(&mut self.store)
    }

    pub fn update_contact(
        &mut self,
        id: &str,
        fields: ContactFields,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, fields)
    }

    pub fn set_favorite(&mut self, id: &str, value: &str) -> Result<commands::CmdResult> {
        commands::favorite::run(&mut self.store, id, value)
    }

    pub fn delete_contact(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub async fn contact_profile(&self, id: &str) -> Result<commands::CmdResult> {
        commands::profile::run(&self.store, &self.catalog, &self.credentials, id).await
    }

    pub async fn fetch_resource(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<commands::CmdResult> {
        commands::fetch::run(&self.catalog, &self.credentials, kind, id).await
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
