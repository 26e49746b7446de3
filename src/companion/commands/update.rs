use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactFields;
use crate::store::ContactStore;
use tracing::info;

use super::helpers::{display_name, require_contact};

/// Shallow-merges `fields` over an existing contact.
pub fn run<S: ContactStore>(store: &mut S, id: &str, fields: ContactFields) -> Result<CmdResult> {
    let mut contact = require_contact(store, id)?;

    if fields.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "Nothing to change for {}",
            display_name(&contact)
        )));
        result.affected_contacts.push(contact);
        return Ok(result);
    }

    contact.merge(fields);
    store.save_contact(&contact)?;
    info!(id = %contact.id, "contact updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated: {}",
        display_name(&contact)
    )));
    result.affected_contacts.push(contact);
    Ok(result)
}
