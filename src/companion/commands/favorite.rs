use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactFields;
use crate::store::ContactStore;

use super::helpers::display_name;
use super::update;

/// Form-style boolean: only the literal `"true"` counts.
pub fn parse_flag(value: &str) -> bool {
    value == "true"
}

pub fn run<S: ContactStore>(store: &mut S, id: &str, value: &str) -> Result<CmdResult> {
    let favorite = parse_flag(value);
    let mut result = update::run(store, id, ContactFields::favorite(favorite))?;

    // Replace the generic update message with a specific one.
    result.messages.clear();
    if let Some(contact) = result.affected_contacts.first() {
        let verb = if favorite { "Starred" } else { "Unstarred" };
        result.add_message(CmdMessage::success(format!(
            "{}: {}",
            verb,
            display_name(contact)
        )));
    }
    Ok(result)
}
