use crate::catalog_store::CatalogStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::FilterSpec;
use crate::sort::SortOrder;
use crate::store::DataStore;

/// Applies `spec` and lists the new result in `sort` order.
pub fn run<S: DataStore>(
    store: &mut CatalogStore<S>,
    spec: &FilterSpec,
    sort: SortOrder,
) -> Result<CmdResult> {
    store.apply_filter(spec);
    let mut result = listing(store, sort);
    for term in unknown_terms(store, spec) {
        result.add_message(CmdMessage::warning(term));
    }
    Ok(result)
}

/// Applies the spec encoded in a URL query string. A query with no usable
/// parameters leaves the current result as it was.
pub fn run_query<S: DataStore>(
    store: &mut CatalogStore<S>,
    query: &str,
    sort: SortOrder,
) -> Result<CmdResult> {
    match FilterSpec::from_query_string(query) {
        Some(spec) => run(store, &spec, sort),
        None => Ok(listing(store, sort)),
    }
}

/// Drops any applied filter and lists the full catalog.
pub fn clear<S: DataStore>(store: &mut CatalogStore<S>, sort: SortOrder) -> Result<CmdResult> {
    store.clear_filter();
    Ok(listing(store, sort))
}

fn listing<S: DataStore>(store: &CatalogStore<S>, sort: SortOrder) -> CmdResult {
    let listed = sort.sorted(store.displayed());
    let message = if store.has_filter_applied() && listed.is_empty() {
        CmdMessage::warning("No properties match your filters.")
    } else {
        CmdMessage::info(format!("{} properties found", listed.len()))
    };
    CmdResult::default()
        .with_listed_properties(listed)
        .with_message(message)
        .with_message(CmdMessage::info(format!("Sorted by {}", sort.label())))
}

/// Type and amenity values no picker offers. They still filter (and match
/// nothing), but are most likely typos.
fn unknown_terms<S: DataStore>(store: &CatalogStore<S>, spec: &FilterSpec) -> Vec<String> {
    let mut unknown = Vec::new();
    if let Some(property_type) = &spec.property_type {
        if !store.catalog().property_types().contains(&property_type.as_str()) {
            unknown.push(format!("Unknown property type: {}", property_type));
        }
    }
    let amenities = store.catalog().amenities();
    for amenity in &spec.amenities {
        if !amenities.contains(&amenity.as_str()) {
            unknown.push(format!("Unknown amenity: {}", amenity));
        }
    }
    unknown
}
