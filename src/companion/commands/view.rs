use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;

use super::helpers::require_contact;

/// Local detail for one contact.
pub fn run<S: ContactStore>(store: &S, id: &str) -> Result<CmdResult> {
    let contact = require_contact(store, id)?;
    Ok(CmdResult::default().with_listed_contacts(vec![contact]))
}
