//! README Panel Component
//!
//! Right column showing the backend-rendered README of one repository.

use leptos::prelude::*;

use crate::store::{store_close_readme, use_app_store, AppStateStoreFields};

#[component]
pub fn ReadmePanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.readme_html().get().map(|html| {
            let title = store.readme_repo().get().unwrap_or_default();
            view! {
                <div class="readme-column">
                    <div class="readme-header">
                        <span class="readme-title">{title}</span>
                        <button class="close-btn" on:click=move |_| store_close_readme(&store)>"×"</button>
                    </div>
                    <div class="readme-content" inner_html=html></div>
                </div>
            }
        })}
    }
}
