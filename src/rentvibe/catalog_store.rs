//! # Catalog Store
//!
//! Owns the session's state: the catalog, the published [`ResultSequence`],
//! and the [`FavoriteSet`]. Every mutation goes through a `&mut self` method,
//! so there is exactly one writer.
//!
//! ## Unfiltered vs. empty
//!
//! "No filter applied yet" and "a filter matched nothing" are different
//! states. [`ResultSequence::Unfiltered`] displays the whole catalog;
//! `Filtered(vec![])` displays nothing.
//!
//! ## Favorites durability
//!
//! [`CatalogStore::toggle_favorite`] writes the full set through the
//! [`DataStore`] before it returns. Loading is forgiving: a missing or corrupt
//! favorites entry yields an empty set and a warning.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::filter::{self, FilterSpec};
use crate::model::{FavoriteSet, PropertyRecord};
use crate::store::DataStore;
use tracing::{debug, info, warn};

pub const DEFAULT_RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSequence {
    Unfiltered,
    Filtered(Vec<PropertyRecord>),
}

/// A property page: the record plus what the page shows around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDetail {
    pub property: PropertyRecord,
    pub is_favorite: bool,
    pub related: Vec<PropertyRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyLookup {
    Found(Box<PropertyDetail>),
    NotFound(String),
}

pub struct CatalogStore<S: DataStore> {
    catalog: Catalog,
    results: ResultSequence,
    favorites: FavoriteSet,
    store: S,
}

impl<S: DataStore> CatalogStore<S> {
    /// Creates the store and restores favorites from `store`.
    pub fn new(catalog: Catalog, store: S) -> Self {
        let mut this = Self {
            catalog,
            results: ResultSequence::Unfiltered,
            favorites: FavoriteSet::new(),
            store,
        };
        this.load_favorites();
        this
    }

    /// Restores favorites from storage, falling back to the empty set.
    pub fn load_favorites(&mut self) {
        self.favorites = match self.store.load_favorites() {
            Ok(ids) => FavoriteSet::from_ids(ids),
            Err(e) => {
                warn!(error = %e, "favorites storage unreadable, starting empty");
                FavoriteSet::new()
            }
        };
        debug!(count = self.favorites.len(), "favorites loaded");
    }

    pub fn apply_filter(&mut self, spec: &FilterSpec) {
        let matched = filter::apply(self.catalog.records(), spec);
        debug!(
            matched = matched.len(),
            total = self.catalog.len(),
            active = spec.is_active(),
            "filter applied"
        );
        self.results = ResultSequence::Filtered(matched);
    }

    pub fn clear_filter(&mut self) {
        debug!("filter cleared");
        self.results = ResultSequence::Unfiltered;
    }

    /// Adds or removes `id` and persists the new set. Returns whether `id` is
    /// now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let now_favorite = self.favorites.toggle(id);
        if let Err(e) = self.store.save_favorites(self.favorites.ids()) {
            // keep memory consistent with what is on disk
            self.favorites.toggle(id);
            return Err(e);
        }
        info!(id, favorite = now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn results(&self) -> &ResultSequence {
        &self.results
    }

    pub fn has_filter_applied(&self) -> bool {
        matches!(self.results, ResultSequence::Filtered(_))
    }

    /// What a listing view shows: the filtered records, or the whole catalog
    /// when no filter has been applied.
    pub fn displayed(&self) -> &[PropertyRecord] {
        match &self.results {
            ResultSequence::Unfiltered => self.catalog.records(),
            ResultSequence::Filtered(records) => records.as_slice(),
        }
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Favorited records in catalog order. Ids with no catalog record are skipped.
    pub fn favorite_properties(&self) -> Vec<PropertyRecord> {
        self.catalog
            .records()
            .iter()
            .filter(|r| self.favorites.contains(&r.id))
            .cloned()
            .collect()
    }

    pub fn property(&self, id: &str, related_limit: usize) -> PropertyLookup {
        let Some(property) = self.catalog.find(id) else {
            return PropertyLookup::NotFound(id.to_string());
        };
        let related = self
            .catalog
            .records()
            .iter()
            .filter(|r| r.id != property.id)
            .take(related_limit)
            .cloned()
            .collect();
        PropertyLookup::Found(Box::new(PropertyDetail {
            property: property.clone(),
            is_favorite: self.is_favorite(id),
            related,
        }))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RentError;
    use crate::model::StoredUser;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn ids(records: &[PropertyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn starts_unfiltered_showing_catalog() {
        let store = StoreFixture::new().seeded();
        assert_eq!(store.results(), &ResultSequence::Unfiltered);
        assert!(!store.has_filter_applied());
        assert_eq!(store.displayed().len(), 6);
    }

    #[test]
    fn empty_result_is_distinct_from_unfiltered() {
        let mut store = StoreFixture::new().seeded();
        store.apply_filter(&FilterSpec::new().with_property_type("Penthouse"));

        assert!(store.has_filter_applied());
        assert_eq!(store.results(), &ResultSequence::Filtered(vec![]));
        assert!(store.displayed().is_empty());
    }

    #[test]
    fn clear_filter_restores_catalog() {
        let mut store = StoreFixture::new().seeded();
        store.apply_filter(&FilterSpec::new().with_search_query("sea"));
        assert_eq!(ids(store.displayed()), ["2"]);

        store.clear_filter();
        assert!(!store.has_filter_applied());
        assert_eq!(store.displayed().len(), 6);
    }

    #[test]
    fn applying_default_spec_publishes_whole_catalog() {
        let mut store = StoreFixture::new().seeded();
        store.apply_filter(&FilterSpec::default());
        assert!(store.has_filter_applied());
        assert_eq!(store.displayed(), store.catalog().records());
    }

    #[test]
    fn each_apply_replaces_previous_result() {
        let mut store = StoreFixture::new().seeded();
        store.apply_filter(&FilterSpec::new().with_property_type("Villa"));
        store.apply_filter(&FilterSpec::new().with_property_type("House"));
        assert_eq!(ids(store.displayed()), ["6"]);
    }

    #[test]
    fn toggle_persists_and_reloads() {
        let mut store = StoreFixture::new().seeded();
        assert!(store.toggle_favorite("3").unwrap());
        assert_eq!(store.store().raw_favorites(), Some(r#"["3"]"#));

        store.load_favorites();
        assert!(store.is_favorite("3"));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut store = StoreFixture::new().with_favorites(&["1"]).seeded();
        let before = store.favorites().clone();
        store.toggle_favorite("5").unwrap();
        store.toggle_favorite("5").unwrap();
        assert_eq!(store.favorites(), &before);
        assert_eq!(store.store().load_favorites().unwrap(), ["1"]);
    }

    #[test]
    fn toggle_member_twice_keeps_stored_order() {
        let mut store = StoreFixture::new().with_favorites(&["1", "4"]).seeded();
        let before = store.favorites().clone();
        store.toggle_favorite("1").unwrap();
        store.toggle_favorite("1").unwrap();
        assert_eq!(store.favorites(), &before);
        assert_eq!(store.store().raw_favorites(), Some(r#"["1","4"]"#));
    }

    #[test]
    fn corrupt_favorites_start_empty() {
        let store = StoreFixture::new().with_raw_favorites("{oops").seeded();
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn favorite_properties_follow_catalog_order_and_skip_stale() {
        let store = StoreFixture::new()
            .with_favorites(&["6", "gone", "2"])
            .seeded();
        assert_eq!(ids(&store.favorite_properties()), ["2", "6"]);
        assert_eq!(store.favorites().len(), 3);
    }

    #[test]
    fn property_lookup() {
        let store = StoreFixture::new().with_favorites(&["4"]).seeded();
        match store.property("4", DEFAULT_RELATED_LIMIT) {
            PropertyLookup::Found(detail) => {
                assert_eq!(detail.property.title, "Luxury Villa in Jubilee Hills");
                assert!(detail.is_favorite);
                assert_eq!(ids(&detail.related), ["1", "2", "3"]);
            }
            other => panic!("expected Found, got {:?}", other),
        }
        assert_eq!(
            store.property("99", DEFAULT_RELATED_LIMIT),
            PropertyLookup::NotFound("99".into())
        );
    }

    struct FailingStore;

    impl DataStore for FailingStore {
        fn load_favorites(&self) -> Result<Vec<String>> {
            Err(RentError::Store("unavailable".into()))
        }
        fn save_favorites(&mut self, _ids: &[String]) -> Result<()> {
            Err(RentError::Store("read-only".into()))
        }
        fn load_users(&self) -> Result<Vec<StoredUser>> {
            Ok(Vec::new())
        }
        fn save_users(&mut self, _users: &[StoredUser]) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_save_leaves_set_unchanged() {
        let mut store = CatalogStore::new(Catalog::seed(), FailingStore);
        assert!(store.favorites().is_empty());
        assert!(store.toggle_favorite("1").is_err());
        assert!(!store.is_favorite("1"));
    }

    #[test]
    fn works_over_empty_catalog() {
        let mut store = CatalogStore::new(Catalog::new(vec![]).unwrap(), InMemoryStore::new());
        store.apply_filter(&FilterSpec::new().with_bedrooms(2));
        assert!(store.displayed().is_empty());
    }
}
