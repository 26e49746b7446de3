//! # Companion Architecture
//!
//! Companion keeps a small book of contacts and cross-references them with an
//! external comics catalog. It is a **UI-agnostic library** with a CLI client on
//! top; the same core could sit behind a web page.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store + catalog          │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Create/merge/delete semantics, profile lookups           │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                           │
//!                  ▼                           ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Storage (store/)             │ │  Catalog (catalog/)       │
//! │  - ContactStore trait         │ │  - Catalog trait          │
//! │  - InMemoryStore, FileStore   │ │  - HttpCatalog (reqwest)  │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! Search ([`search`]) sits beside the commands: it takes the full listing and
//! returns what to display, in display order.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Remote lookups are the only operations that suspend.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`search`]: Fuzzy ranking and display ordering
//! - [`catalog`]: Remote catalog lookups and entity types
//! - [`model`]: Contact records and partial field sets
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod store;
