use crate::catalog::{Catalog, Credentials, RemoteEntity, ResourceKind};
use crate::commands::CmdResult;
use crate::error::Result;
use tracing::debug;

/// Detail for one catalog entity: a single upstream lookup, typed by kind.
pub async fn run<C: Catalog + ?Sized>(
    catalog: &C,
    credentials: &Credentials,
    kind: ResourceKind,
    id: &str,
) -> Result<CmdResult> {
    let id = id.trim();
    let raw = catalog.fetch_one(kind, id, credentials).await?;
    let entity = RemoteEntity::from_value(kind, raw)?;
    debug!(%kind, id, title = entity.title(), "fetched catalog entity");

    Ok(CmdResult::default().with_entity(entity))
}
