use crate::catalog::RemoteEntity;
use crate::model::ContactRecord;

pub mod create;
pub mod delete;
pub mod favorite;
pub mod fetch;
pub mod helpers;
pub mod list;
pub mod profile;
pub mod seed;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<ContactRecord>,
    pub listed_contacts: Vec<ContactRecord>,
    pub entity: Option<RemoteEntity>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<ContactRecord>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<ContactRecord>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_entity(mut self, entity: RemoteEntity) -> Self {
        self.entity = Some(entity);
        self
    }
}
