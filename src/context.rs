//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use star_tags_client::{ClientConfig, StarTagClient, TagStore};
use tokio::sync::Mutex;

use crate::navigator::BrowserNavigator;
use crate::store::AppStore;

/// Backend address baked in at build time
const API_URL: Option<&str> = option_env!("STAR_TAGS_API_URL");

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Reactive mirror of the tag store
    pub store: AppStore,
    /// Tag store driving all backend calls; actions hold the lock while they run
    pub tag_store: Arc<Mutex<TagStore>>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        let config = API_URL
            .map(ClientConfig::with_base_url)
            .unwrap_or_default();
        log::info!("using backend at {}", config.base_url);
        let client = StarTagClient::with_navigator(config, Arc::new(BrowserNavigator));
        Self {
            store,
            tag_store: Arc::new(Mutex::new(TagStore::new(Arc::new(client)))),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
