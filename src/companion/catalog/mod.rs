//! # Remote Catalog
//!
//! Lookups against the external comics catalog. The [`Catalog`] trait is the
//! seam: [`http::HttpCatalog`] talks to the real service, tests plug in stubs.
//!
//! A lookup is one GET for one resource:
//!
//! ```text
//! GET {base_url}/{characters|comics|series|stories|events}/{id}?apikey=..&hash=..&ts=..
//! ```
//!
//! The service wraps everything in `{ "data": { "results": [...] } }`. Only the
//! first result is ever used. No retries, no caching: each call is a fresh
//! request.

use crate::error::{CompanionError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub mod http;
pub mod types;

pub use types::RemoteEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Character,
    Comic,
    Series,
    Story,
    Event,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Character,
        ResourceKind::Comic,
        ResourceKind::Series,
        ResourceKind::Story,
        ResourceKind::Event,
    ];

    /// The collection segment of the upstream URL.
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Character => "characters",
            ResourceKind::Comic => "comics",
            ResourceKind::Series => "series",
            ResourceKind::Story => "stories",
            ResourceKind::Event => "events",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Character => "character",
            ResourceKind::Comic => "comic",
            ResourceKind::Series => "series",
            ResourceKind::Story => "story",
            ResourceKind::Event => "event",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CompanionError;

    /// Accepts both the singular kind and the collection segment.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower || kind.path_segment() == lower)
            .ok_or_else(|| CompanionError::Validation(format!("Unknown resource kind: {}", s)))
    }
}

/// Opaque authentication material, passed through as query parameters.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub hash: String,
    pub ts: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        hash: impl Into<String>,
        ts: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            hash: hash.into(),
            ts: ts.into(),
        }
    }

    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("apikey", self.api_key.as_str()),
            ("hash", self.hash.as_str()),
            ("ts", self.ts.as_str()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("hash", &"<redacted>")
            .field("ts", &self.ts)
            .finish()
    }
}

/// A source of catalog entities.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch the first result for `kind`/`id`, raw.
    async fn fetch_one(
        &self,
        kind: ResourceKind,
        id: &str,
        credentials: &Credentials,
    ) -> Result<Value>;
}

#[derive(Deserialize)]
struct Envelope {
    data: Container,
}

#[derive(Deserialize)]
struct Container {
    results: Vec<Value>,
}

/// Pulls `data.results[0]` out of an upstream body.
pub fn unwrap_first(kind: ResourceKind, id: &str, body: Value) -> Result<Value> {
    let envelope: Envelope = serde_json::from_value(body).map_err(|e| {
        CompanionError::UpstreamFailure(format!("unexpected {} response: {}", kind, e))
    })?;

    envelope
        .data
        .results
        .into_iter()
        .next()
        .ok_or_else(|| CompanionError::UpstreamNotFound {
            kind,
            id: id.to_string(),
            status: None,
        })
}

/// The numeric id at the end of a resource URI, e.g. `.../comics/21366`.
pub fn resource_id_from_uri(uri: &str) -> Option<String> {
    let (_, tail) = uri.rsplit_once('/')?;
    if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
        Some(tail.to_string())
    } else {
        None
    }
}

pub(crate) fn validate_id(kind: ResourceKind, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(CompanionError::Validation(format!("Missing {} id", kind)));
    }
    Ok(())
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned catalog: answers from a map and records every lookup.
    #[derive(Default)]
    pub struct StubCatalog {
        entities: HashMap<(ResourceKind, String), Value>,
        calls: Mutex<Vec<(ResourceKind, String)>>,
    }

    impl StubCatalog {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, kind: ResourceKind, id: &str, entity: Value) -> Self {
            self.entities.insert((kind, id.to_string()), entity);
            self
        }

        pub fn calls(&self) -> Vec<(ResourceKind, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Catalog for StubCatalog {
        async fn fetch_one(
            &self,
            kind: ResourceKind,
            id: &str,
            _credentials: &Credentials,
        ) -> Result<Value> {
            validate_id(kind, id)?;
            self.calls.lock().unwrap().push((kind, id.to_string()));
            self.entities
                .get(&(kind, id.to_string()))
                .cloned()
                .ok_or_else(|| CompanionError::UpstreamNotFound {
                    kind,
                    id: id.to_string(),
                    status: Some(404),
                })
        }
    }
}
