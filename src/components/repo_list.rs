//! Repository List Component
//!
//! Center column showing the filtered star list with tag chips.

use leptos::prelude::*;
use star_tags_client::Repo;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Tag chip with a remove button
#[component]
fn TagChip(repo_name: String, tag: String) -> impl IntoView {
    let ctx = use_app_context();
    let label = tag.clone();

    view! {
        <span class="tag-chip">
            <span class="tag-chip-name">{label}</span>
            <button
                class="tag-chip-remove"
                on:click=move |_| actions::remove_repo_tag(ctx.clone(), repo_name.clone(), tag.clone())
            >
                "×"
            </button>
        </span>
    }
}

/// Dropdown of tags the repository does not carry yet
#[component]
fn TagPicker(repo_name: String, current: Vec<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let available = move || {
        store
            .tags()
            .get()
            .into_iter()
            .filter(|tag| !current.contains(tag))
            .collect::<Vec<_>>()
    };

    view! {
        <select
            class="tag-picker"
            prop:value=""
            on:change=move |ev| {
                let tag = event_target_value(&ev);
                if !tag.is_empty() {
                    actions::add_repo_tag(ctx.clone(), repo_name.clone(), tag);
                }
            }
        >
            <option value="">"+ tag"</option>
            {move || available()
                .into_iter()
                .map(|tag| {
                    let value = tag.clone();
                    view! { <option value=value>{tag}</option> }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn RepoCard(repo: Repo) -> impl IntoView {
    let ctx = use_app_context();
    let name = repo.name.clone();
    let language = repo.language.clone().unwrap_or_default();
    let description = repo.description.clone().unwrap_or_default();

    let chips = repo
        .tags
        .iter()
        .map(|tag| view! { <TagChip repo_name=name.clone() tag=tag.clone() /> })
        .collect_view();

    let topics = repo
        .topics
        .iter()
        .map(|topic| view! { <span class="topic">{topic.clone()}</span> })
        .collect_view();

    let title = name.clone();
    let readme_name = name.clone();

    view! {
        <div class="repo-card">
            <div class="repo-header">
                <span class="repo-name">{title}</span>
                <span class="repo-stars">{format!("★ {}", repo.star_count)}</span>
                <span class="repo-language">{language}</span>
                <button
                    class="repo-readme-btn"
                    on:click=move |_| actions::open_readme(ctx.clone(), readme_name.clone())
                >
                    "README"
                </button>
            </div>
            <p class="repo-description">{description}</p>
            <div class="repo-topics">{topics}</div>
            <div class="repo-tags">
                {chips}
                <TagPicker repo_name=name current=repo.tags />
            </div>
        </div>
    }
}

#[component]
pub fn RepoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <main class="main-content">
            <h1>"Starred"</h1>
            <div class="repo-list">
                <For
                    each=move || store.filtered_repos().get()
                    key=|repo| (repo.name.clone(), repo.tags.clone())
                    children=move |repo| view! { <RepoCard repo=repo /> }
                />
            </div>
            <p class="repo-count">
                {move || format!(
                    "{} of {} repos",
                    store.filtered_repos().with(|repos| repos.len()),
                    store.repo_count().get(),
                )}
            </p>
        </main>
    }
}
