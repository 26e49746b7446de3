use crate::catalog::{Catalog, Credentials, ResourceKind};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;

use super::fetch;
use super::helpers::require_contact;

/// A contact's character page: the local record plus its catalog character.
///
/// The character is looked up by the contact's `marvel_id`, or by the contact
/// id when no correlation id is set.
pub async fn run<S, C>(
    store: &S,
    catalog: &C,
    credentials: &Credentials,
    contact_id: &str,
) -> Result<CmdResult>
where
    S: ContactStore,
    C: Catalog + ?Sized,
{
    let contact = require_contact(store, contact_id)?;
    let character_id = contact.character_id().to_string();

    let result = fetch::run(catalog, credentials, ResourceKind::Character, &character_id).await?;
    Ok(result.with_affected_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::StubCatalog;
    use crate::catalog::RemoteEntity;
    use crate::commands::seed;
    use crate::error::CompanionError;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        seed::run(&mut store).unwrap();
        store
    }

    #[tokio::test]
    async fn looks_up_character_by_marvel_id() {
        let store = seeded();
        let catalog = StubCatalog::new().with(
            ResourceKind::Character,
            "1009368",
            json!({"id": 1009368, "name": "Iron Man"}),
        );

        let result = run(&store, &catalog, &Credentials::default(), "iron-man")
            .await
            .unwrap();
        assert_eq!(result.affected_contacts[0].id, "iron-man");
        assert!(matches!(
            result.entity,
            Some(RemoteEntity::Character(ref c)) if c.name == "Iron Man"
        ));
        assert_eq!(
            catalog.calls(),
            vec![(ResourceKind::Character, "1009368".to_string())]
        );
    }

    #[tokio::test]
    async fn falls_back_to_contact_id_without_marvel_id() {
        let mut store = InMemoryStore::new();
        crate::commands::create::run(&mut store, Some("1011334".into()), Default::default())
            .unwrap();
        let catalog = StubCatalog::new().with(
            ResourceKind::Character,
            "1011334",
            json!({"id": 1011334, "name": "3-D Man"}),
        );

        let result = run(&store, &catalog, &Credentials::default(), "1011334")
            .await
            .unwrap();
        assert_eq!(result.entity.unwrap().title(), "3-D Man");
    }

    #[tokio::test]
    async fn unknown_contact_is_not_found_without_a_lookup() {
        let store = seeded();
        let catalog = StubCatalog::new();
        let err = run(&store, &catalog, &Credentials::default(), "hulk")
            .await
            .unwrap_err();
        assert!(matches!(err, CompanionError::NotFound(_)));
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_character_is_upstream_not_found() {
        let store = seeded();
        let catalog = StubCatalog::new();
        let err = run(&store, &catalog, &Credentials::default(), "spider-man")
            .await
            .unwrap_err();
        assert!(matches!(err, CompanionError::UpstreamNotFound { .. }));
    }
}
