//! Dispatcher Factory
//!
//! Constructs the theme store named by the configuration and injects it into
//! a `ContentDispatcher`. This is the dependency injection point for the
//! application; the store lives as long as the dispatcher that owns it.

use std::sync::Arc;

use crate::application::ContentDispatcher;
use crate::config::Config;
use crate::domain::ports::ThemeStore;
use crate::error::SwatchResult;
use crate::infrastructure::{MemoryThemeStore, SnapshotThemeStore};

/// Create the configured theme store.
///
/// Without a snapshot the store is empty and every lookup is a miss.
pub fn create_store(config: &Config) -> SwatchResult<Arc<dyn ThemeStore>> {
    match &config.store.snapshot {
        Some(path) => Ok(Arc::new(SnapshotThemeStore::load(path.clone())?)),
        None => {
            tracing::warn!("no theme snapshot configured, serving an empty store");
            Ok(Arc::new(MemoryThemeStore::new()))
        }
    }
}

/// Create a dispatcher with the configured store and cache policy.
pub fn create_dispatcher(config: &Config) -> SwatchResult<ContentDispatcher> {
    let store = create_store(config)?;
    Ok(create_dispatcher_with_store(config, store))
}

/// Create a dispatcher around an existing store.
pub fn create_dispatcher_with_store(
    config: &Config,
    store: Arc<dyn ThemeStore>,
) -> ContentDispatcher {
    ContentDispatcher::new(store).with_cache(config.cache_directive())
}
