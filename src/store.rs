//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store mirrors
//! the [`TagStore`] snapshot after each action.

use leptos::prelude::*;
use reactive_stores::Store;
use star_tags_client::{Language, Repo, RepoFilter, TagStore, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in backend user
    pub user: Option<User>,
    /// Tag names, in taxonomy order
    pub tags: Vec<String>,
    /// Languages across the whole star list
    pub languages: Vec<Language>,
    /// Repositories matching the current filter
    pub filtered_repos: Vec<Repo>,
    /// Current filter
    pub filter: RepoFilter,
    /// Size of the unfiltered star list
    pub repo_count: usize,
    /// Repository whose README is open
    pub readme_repo: Option<String>,
    /// Rendered README HTML for `readme_repo`
    pub readme_html: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy the tag store's lists into the reactive store
pub fn store_publish(store: &AppStore, tag_store: &TagStore) {
    *store.tags().write() = tag_store.tags.clone();
    *store.filtered_repos().write() = tag_store.filtered_repos.clone();
    *store.filter().write() = tag_store.filter.clone();
    *store.repo_count().write() = tag_store.all_repos.len();
}

/// Open a README in the side panel
pub fn store_show_readme(store: &AppStore, repo_name: String, html: String) {
    *store.readme_repo().write() = Some(repo_name);
    *store.readme_html().write() = Some(html);
}

/// Close the README panel
pub fn store_close_readme(store: &AppStore) {
    *store.readme_repo().write() = None;
    *store.readme_html().write() = None;
}
