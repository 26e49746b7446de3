use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;
use tracing::info;

use super::helpers::require_id;

/// Removes a contact. Deleting something that is not there is fine.
pub fn run<S: ContactStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let id = require_id(id)?;
    let mut result = CmdResult::default();

    if store.remove_contact(id)? {
        info!(id, "contact deleted");
        result.add_message(CmdMessage::success(format!("Contact deleted: {}", id)));
    } else {
        result.add_message(CmdMessage::info(format!("No contact with id {}", id)));
    }
    Ok(result)
}
