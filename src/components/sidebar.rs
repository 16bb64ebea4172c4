//! Sidebar Component
//!
//! Left column: user badge, built-in filters, the tag list with add, rename
//! and delete, and the language list.

use leptos::prelude::*;
use star_tags_client::RepoFilter;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Label for repositories without a language
const NO_LANGUAGE: &str = "(none)";

/// Clickable row selecting a filter
#[component]
fn FilterRow(
    #[prop(into)] label: String,
    filter: RepoFilter,
    #[prop(optional, into)] color: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let active = {
        let filter = filter.clone();
        move || store.filter().get() == filter
    };

    view! {
        <div
            class=move || if active() { "filter-row selected" } else { "filter-row" }
            on:click=move |_| actions::filter_repos(ctx.clone(), filter.clone())
        >
            {color.map(|c| view! {
                <span class="tag-color-dot" style=format!("background-color: {};", c)></span>
            })}
            <span class="filter-label">{label}</span>
        </div>
    }
}

/// Tag add input
#[component]
fn TagAddInput() -> impl IntoView {
    let ctx = use_app_context();
    let (new_tag_name, set_new_tag_name) = signal(String::new());

    let add_tag = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_tag_name.get().trim().to_string();
        if name.is_empty() { return; }
        actions::add_tag(ctx.clone(), name);
        set_new_tag_name.set(String::new());
    };

    view! {
        <form class="tag-add-form" on:submit=add_tag>
            <input
                type="text"
                placeholder="Add tag..."
                prop:value=move || new_tag_name.get()
                on:input=move |ev| set_new_tag_name.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}

/// One tag with inline rename and delete
#[component]
fn TagRow(tag: String) -> impl IntoView {
    let ctx = use_app_context();
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(tag.clone());

    let save = {
        let ctx = ctx.clone();
        let tag = tag.clone();
        move || {
            set_editing.set(false);
            let new_name = draft.get_untracked().trim().to_string();
            if new_name.is_empty() || new_name == tag {
                return;
            }
            actions::rename_tag(ctx.clone(), tag.clone(), new_name);
        }
    };

    let on_delete = {
        let tag = tag.clone();
        Callback::new(move |_| actions::delete_tag(ctx.clone(), tag.clone()))
    };

    view! {
        <div class="tag-row">
            {move || if editing.get() {
                let save_on_blur = save.clone();
                let save_on_enter = save.clone();
                view! {
                    <input
                        type="text"
                        class="tag-rename-input"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:blur=move |_| save_on_blur()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                save_on_enter();
                            } else if ev.key() == "Escape" {
                                set_editing.set(false);
                            }
                        }
                    />
                }.into_any()
            } else {
                let tag = tag.clone();
                let label = tag.clone();
                let filter = RepoFilter::Tag(tag.clone());
                view! {
                    <FilterRow label=label filter=filter />
                    <button
                        class="tag-edit-btn"
                        title="Rename tag"
                        on:click=move |_| {
                            set_draft.set(tag.clone());
                            set_editing.set(true);
                        }
                    >
                        "✎"
                    </button>
                }.into_any()
            }}
            <DeleteConfirmButton title="Delete tag" on_confirm=on_delete />
        </div>
    }
}

/// Signed-in user's name
#[component]
fn UserBadge() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="user-badge">
            {move || store.user().get().map(|user| {
                let avatar = user.avatar_url.clone().unwrap_or_default();
                view! {
                    <img class="user-avatar" src=avatar />
                    <span class="user-name">{user.display_name().to_string()}</span>
                }
            })}
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <aside class="sidebar">
            <UserBadge />

            <div class="filter-group">
                <FilterRow label="All" filter=RepoFilter::All />
                <FilterRow label="Untagged" filter=RepoFilter::Untagged />
            </div>

            <h3 class="sidebar-heading">"Tags"</h3>
            <TagAddInput />
            <div class="tag-list">
                <For
                    each=move || store.tags().get()
                    key=|tag| tag.clone()
                    children=move |tag| view! { <TagRow tag=tag /> }
                />
            </div>

            <h3 class="sidebar-heading">"Languages"</h3>
            <div class="language-list">
                <For
                    each=move || store.languages().get()
                    key=|language| language.name.clone()
                    children=move |language| {
                        let label = language.name.clone().unwrap_or_else(|| NO_LANGUAGE.to_string());
                        view! {
                            <FilterRow
                                label=label
                                filter=RepoFilter::Language(language.name)
                                color=language.color
                            />
                        }
                    }
                />
            </div>
        </aside>
    }
}
