use crate::catalog_store::{CatalogStore, PropertyLookup};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Looks up a property page. An unknown id is a normal outcome, reported as
/// a message with no detail.
pub fn run<S: DataStore>(
    store: &CatalogStore<S>,
    id: &str,
    related_limit: usize,
) -> Result<CmdResult> {
    match store.property(id, related_limit) {
        PropertyLookup::Found(detail) => Ok(CmdResult::default().with_detail(*detail)),
        PropertyLookup::NotFound(id) => Ok(CmdResult::default()
            .with_message(CmdMessage::warning(format!("Property not found: {}", id)))),
    }
}
