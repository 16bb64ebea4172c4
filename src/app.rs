//! Star Tags App
//!
//! Main application component with three-column layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{ReadmePanel, RepoList, Sidebar};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(store);
    provide_context(ctx.clone());

    // Load everything once on mount
    actions::load_data(ctx);

    view! {
        <div class="app-layout">
            // Left: tags and languages
            <Sidebar />

            // Center: filtered repositories
            <RepoList />

            // Right: README, shown when one is open
            <ReadmePanel />
        </div>
    }
}
