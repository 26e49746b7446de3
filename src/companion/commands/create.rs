use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ContactFields, ContactRecord};
use crate::store::ContactStore;
use tracing::info;
use uuid::Uuid;

const GENERATED_ID_LEN: usize = 8;

/// Creates a contact. A blank or missing `id` gets a fresh random one; an
/// existing `id` is replaced wholesale.
pub fn run<S: ContactStore>(
    store: &mut S,
    id: Option<String>,
    fields: ContactFields,
) -> Result<CmdResult> {
    let id = match id.map(|id| id.trim().to_string()) {
        Some(id) if !id.is_empty() => id,
        _ => generate_id(store)?,
    };

    let contact = ContactRecord::new(id, fields);
    store.save_contact(&contact)?;
    info!(id = %contact.id, "contact created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact created: {}",
        contact.id
    )));
    result.affected_contacts.push(contact);
    Ok(result)
}

/// The "New" action: an empty record, ready for editing.
pub fn empty<S: ContactStore>(store: &mut S) -> Result<CmdResult> {
    run(store, None, ContactFields::default())
}

fn generate_id<S: ContactStore>(store: &S) -> Result<String> {
    loop {
        let candidate = Uuid::new_v4().simple().to_string()[..GENERATED_ID_LEN].to_string();
        if !store.contains_contact(&candidate)? {
            return Ok(candidate);
        }
    }
}
