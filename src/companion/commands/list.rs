use crate::commands::CmdResult;
use crate::error::Result;
use crate::search::search;
use crate::store::ContactStore;
use tracing::debug;

/// The list view: every contact, optionally filtered by `query`.
pub fn run<S: ContactStore>(store: &S, query: Option<&str>) -> Result<CmdResult> {
    let contacts = store.list_contacts()?;
    let total = contacts.len();
    let listed = search(contacts, query);
    debug!(total, shown = listed.len(), query = query.unwrap_or(""), "listed contacts");

    Ok(CmdResult::default().with_listed_contacts(listed))
}
