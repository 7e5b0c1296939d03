use super::DataStore;
use crate::error::{RentError, Result};
use crate::model::StoredUser;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Favorites are kept as serialized JSON, like the file store, so that
/// corrupt content can be simulated.
#[derive(Default)]
pub struct InMemoryStore {
    favorites: Option<String>,
    users: Vec<StoredUser>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The serialized favorites as they would sit on disk.
    pub fn raw_favorites(&self) -> Option<&str> {
        self.favorites.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load_favorites(&self) -> Result<Vec<String>> {
        match &self.favorites {
            Some(raw) => serde_json::from_str(raw).map_err(RentError::Serialization),
            None => Ok(Vec::new()),
        }
    }

    fn save_favorites(&mut self, ids: &[String]) -> Result<()> {
        self.favorites = Some(serde_json::to_string(ids)?);
        Ok(())
    }

    fn load_users(&self) -> Result<Vec<StoredUser>> {
        Ok(self.users.clone())
    }

    fn save_users(&mut self, users: &[StoredUser]) -> Result<()> {
        self.users = users.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::catalog::Catalog;
    use crate::catalog_store::CatalogStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_favorites(mut self, ids: &[&str]) -> Self {
            let ids: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
            self.store.save_favorites(&ids).unwrap();
            self
        }

        pub fn with_raw_favorites(mut self, raw: &str) -> Self {
            self.store.favorites = Some(raw.to_string());
            self
        }

        /// A catalog store over the seed catalog.
        pub fn seeded(self) -> CatalogStore<InMemoryStore> {
            CatalogStore::new(Catalog::seed(), self.store)
        }
    }
}
