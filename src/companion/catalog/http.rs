//! HTTP backend for the catalog.
//!
//! Implements the [`Catalog`] trait with a plain GET per lookup.

use super::{unwrap_first, validate_id, Catalog, Credentials, ResourceKind};
use crate::error::{CompanionError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Catalog API backend
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a backend for `base_url`.
    ///
    /// Without a timeout a hanging upstream blocks the lookup indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(CompanionError::Http)?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// `{base_url}/{segment}/{id}`, without the credential query. The id is
    /// percent-encoded as a single path segment.
    pub fn resource_url(&self, kind: ResourceKind, id: &str) -> Result<Url> {
        let invalid =
            || CompanionError::Config(format!("invalid catalog base url: {}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(kind.path_segment())
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn fetch_one(
        &self,
        kind: ResourceKind,
        id: &str,
        credentials: &Credentials,
    ) -> Result<Value> {
        validate_id(kind, id)?;
        let url = self.resource_url(kind, id)?;
        debug!(%kind, id, url = %url, "fetching catalog resource");

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .query(&credentials.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%kind, id, status = status.as_u16(), "catalog lookup failed");
            return Err(CompanionError::UpstreamNotFound {
                kind,
                id: id.to_string(),
                status: Some(status.as_u16()),
            });
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            CompanionError::UpstreamFailure(format!("{} response is not JSON: {}", kind, e))
        })?;

        unwrap_first(kind, id, body)
    }
}
