use crate::error::{CompanionError, Result};
use crate::model::ContactRecord;
use crate::store::ContactStore;

/// Rejects blank ids, the equivalent of a missing route parameter.
pub fn require_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CompanionError::Validation("Missing contact id".to_string()));
    }
    Ok(id)
}

/// Fetches a contact, turning absence into `NotFound`.
pub fn require_contact<S: ContactStore>(store: &S, id: &str) -> Result<ContactRecord> {
    let id = require_id(id)?;
    store
        .get_contact(id)?
        .ok_or_else(|| CompanionError::NotFound(id.to_string()))
}

/// Label used in messages: super name, then full name, then the id.
pub fn display_name(contact: &ContactRecord) -> String {
    contact
        .super_name
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| contact.full_name())
        .unwrap_or_else(|| contact.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn blank_id_is_validation_error() {
        assert!(matches!(require_id("  "), Err(CompanionError::Validation(_))));
        assert_eq!(require_id(" a ").unwrap(), "a");
    }

    #[test]
    fn missing_contact_is_not_found() {
        let fixture = StoreFixture::new();
        assert!(matches!(
            require_contact(&fixture.store, "ghost"),
            Err(CompanionError::NotFound(id)) if id == "ghost"
        ));
    }

    #[test]
    fn display_name_falls_back() {
        let fixture = StoreFixture::new()
            .with_contact("a", "Tony", "Stark", "")
            .with_favorite("b", "Hulk");
        let a = require_contact(&fixture.store, "a").unwrap();
        let b = require_contact(&fixture.store, "b").unwrap();
        assert_eq!(display_name(&a), "Tony Stark");
        assert_eq!(display_name(&b), "Hulk");
    }
}
