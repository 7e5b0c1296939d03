//! # API Facade
//!
//! The single entry point for every rentvibe operation, whatever the UI.
//! Each method dispatches to a `commands::*` function and returns
//! `Result<CmdResult>`; no business logic and no I/O live here.
//!
//! `RentApi<S: DataStore>` owns the session's [`CatalogStore`], so one API
//! value is one session: a filter applied through [`RentApi::search`] stays
//! published until the next search or [`RentApi::clear_search`].
//!
//! - Production: `RentApi<FileStore>`
//! - Testing: `RentApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::catalog_store::CatalogStore;
use crate::commands;
use crate::config::RentConfig;
use crate::error::Result;
use crate::filter::FilterSpec;
use crate::model::Credentials;
use crate::sort::SortOrder;
use crate::store::DataStore;

pub struct RentApi<S: DataStore> {
    store: CatalogStore<S>,
    config: RentConfig,
    paths: commands::RentPaths,
}

impl<S: DataStore> RentApi<S> {
    pub fn new(catalog: Catalog, store: S, config: RentConfig, paths: commands::RentPaths) -> Self {
        Self {
            store: CatalogStore::new(catalog, store),
            config,
            paths,
        }
    }

    /// Builds the session catalog from config: the configured JSON file, or
    /// the built-in listings.
    pub fn from_config(store: S, config: RentConfig, paths: commands::RentPaths) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::seed(),
        };
        Ok(Self::new(catalog, store, config, paths))
    }

    pub fn list(&self, sort: Option<SortOrder>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.sort_or_default(sort))
    }

    pub fn search(
        &mut self,
        spec: &FilterSpec,
        sort: Option<SortOrder>,
    ) -> Result<commands::CmdResult> {
        let sort = self.sort_or_default(sort);
        commands::search::run(&mut self.store, spec, sort)
    }

    pub fn search_query(
        &mut self,
        query: &str,
        sort: Option<SortOrder>,
    ) -> Result<commands::CmdResult> {
        let sort = self.sort_or_default(sort);
        commands::search::run_query(&mut self.store, query, sort)
    }

    pub fn clear_search(&mut self, sort: Option<SortOrder>) -> Result<commands::CmdResult> {
        let sort = self.sort_or_default(sort);
        commands::search::clear(&mut self.store, sort)
    }

    pub fn view(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id, self.config.related_limit)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::favorites::toggle(&mut self.store, id)
    }

    pub fn favorites(&self) -> Result<commands::CmdResult> {
        commands::favorites::list(&self.store)
    }

    pub fn register(&mut self, credentials: &Credentials) -> Result<commands::CmdResult> {
        commands::auth::register(
            self.store.store_mut(),
            credentials,
            self.config.hash_iterations,
        )
    }

    pub fn login(&self, credentials: &Credentials) -> Result<commands::CmdResult> {
        commands::auth::login(self.store.store(), credentials)
    }

    pub fn logout(&self) -> Result<commands::CmdResult> {
        commands::auth::logout()
    }

    pub fn me(&self) -> Result<commands::CmdResult> {
        commands::auth::me()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn catalog_store(&self) -> &CatalogStore<S> {
        &self.store
    }

    fn sort_or_default(&self, sort: Option<SortOrder>) -> SortOrder {
        sort.unwrap_or(self.config.default_sort)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RentPaths};
