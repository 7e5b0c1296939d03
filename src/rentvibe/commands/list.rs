use crate::catalog_store::CatalogStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sort::SortOrder;
use crate::store::DataStore;

/// Lists whatever the store currently displays, in `sort` order.
pub fn run<S: DataStore>(store: &CatalogStore<S>, sort: SortOrder) -> Result<CmdResult> {
    let listed = sort.sorted(store.displayed());
    let count = CmdMessage::info(format!("{} properties found", listed.len()));
    Ok(CmdResult::default()
        .with_listed_properties(listed)
        .with_message(count)
        .with_message(CmdMessage::info(format!("Sorted by {}", sort.label()))))
}
