use crate::catalog_store::CatalogStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn toggle<S: DataStore>(store: &mut CatalogStore<S>, id: &str) -> Result<CmdResult> {
    let title = store.catalog().find(id).map(|p| p.title.clone());
    let now_favorite = store.toggle_favorite(id)?;

    let mut result = CmdResult::default();
    let name = title.as_deref().unwrap_or(id);
    result.add_message(if now_favorite {
        CmdMessage::success(format!("Saved {} to favorites", name))
    } else {
        CmdMessage::success(format!("Removed {} from favorites", name))
    });
    if title.is_none() {
        result.add_message(CmdMessage::warning(format!(
            "No property with id {} in the catalog",
            id
        )));
    }
    Ok(result)
}

/// The saved-properties view.
pub fn list<S: DataStore>(store: &CatalogStore<S>) -> Result<CmdResult> {
    let saved = store.favorite_properties();
    let mut result = CmdResult::default();
    if saved.is_empty() {
        result.add_message(CmdMessage::info("No saved properties yet."));
    }
    Ok(result.with_listed_properties(saved))
}
