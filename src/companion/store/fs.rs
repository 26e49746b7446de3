use super::{newest_first, ContactStore};
use crate::error::{CompanionError, Result};
use crate::model::ContactRecord;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// File-backed storage: one JSON object mapping id to record.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// True once the data file has been written at least once.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CompanionError::Io)?;
            }
        }
        Ok(())
    }

    fn load(&self) -> Result<HashMap<String, ContactRecord>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(CompanionError::Io)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        let contacts: HashMap<String, ContactRecord> =
            serde_json::from_str(&content).map_err(CompanionError::Serialization)?;
        Ok(contacts)
    }

    fn write(&self, contacts: &HashMap<String, ContactRecord>) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(contacts).map_err(CompanionError::Serialization)?;
        fs::write(&self.path, content).map_err(CompanionError::Io)?;
        debug!(path = %self.path.display(), count = contacts.len(), "wrote contact file");
        Ok(())
    }
}

impl ContactStore for FileStore {
    fn save_contact(&mut self, contact: &ContactRecord) -> Result<()> {
        let mut contacts = self.load()?;
        contacts.insert(contact.id.clone(), contact.clone());
        self.write(&contacts)
    }

    fn get_contact(&self, id: &str) -> Result<Option<ContactRecord>> {
        Ok(self.load()?.remove(id))
    }

    fn list_contacts(&self) -> Result<Vec<ContactRecord>> {
        let mut contacts: Vec<ContactRecord> = self.load()?.into_values().collect();
        contacts.sort_by(newest_first);
        Ok(contacts)
    }

    fn remove_contact(&mut self, id: &str) -> Result<bool> {
        let mut contacts = self.load()?;
        if contacts.remove(id).is_none() {
            return Ok(false);
        }
        self.write(&contacts)?;
        Ok(true)
    }
}
