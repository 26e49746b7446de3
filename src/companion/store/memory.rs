use super::{newest_first, ContactStore};
use crate::error::Result;
use crate::model::ContactRecord;
use std::collections::HashMap;

/// In-memory storage.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: HashMap<String, ContactRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl ContactStore for InMemoryStore {
    fn save_contact(&mut self, contact: &ContactRecord) -> Result<()> {
        self.contacts.insert(contact.id.clone(), contact.clone());
        Ok(())
    }

    fn get_contact(&self, id: &str) -> Result<Option<ContactRecord>> {
        Ok(self.contacts.get(id).cloned())
    }

    fn list_contacts(&self) -> Result<Vec<ContactRecord>> {
        let mut contacts: Vec<ContactRecord> = self.contacts.values().cloned().collect();
        contacts.sort_by(newest_first);
        Ok(contacts)
    }

    fn remove_contact(&mut self, id: &str) -> Result<bool> {
        Ok(self.contacts.remove(id).is_some())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContactFields;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        added: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                added: 0,
            }
        }

        /// Adds a contact whose `created_at` is one second after the previous one.
        pub fn with_contact(mut self, id: &str, first: &str, last: &str, super_name: &str) -> Self {
            let mut contact = ContactRecord::new(
                id.to_string(),
                ContactFields {
                    first: Some(first.to_string()),
                    last: Some(last.to_string()),
                    super_name: Some(super_name.to_string()),
                    ..ContactFields::default()
                },
            );
            contact.created_at = Utc::now() - Duration::hours(1) + Duration::seconds(self.added);
            self.added += 1;
            self.store.save_contact(&contact).unwrap();
            self
        }

        pub fn with_favorite(mut self, id: &str, super_name: &str) -> Self {
            let contact = ContactRecord::new(
                id.to_string(),
                ContactFields {
                    super_name: Some(super_name.to_string()),
                    favorite: Some(true),
                    ..ContactFields::default()
                },
            );
            self.store.save_contact(&contact).unwrap();
            self
        }
    }
}
