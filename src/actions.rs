//! UI Actions
//!
//! Each action locks the tag store, runs one operation against the backend,
//! then publishes the result into the reactive store. Errors stop here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use star_tags_client::{ApiError, RepoFilter};

use crate::context::AppContext;
use crate::store::{store_publish, store_show_readme, AppStateStoreFields};

fn report(action: &str, err: &ApiError) {
    if err.is_redirect() {
        log::info!("{} interrupted: {}", action, err);
    } else {
        log::error!("{} failed: {}", action, err);
    }
}

/// Initial load: user, tags, star list and languages
pub fn load_data(ctx: AppContext) {
    spawn_local(async move {
        let mut tag_store = ctx.tag_store.lock().await;

        match tag_store.client().get_user().await {
            Ok(user) => *ctx.store.user().write() = Some(user),
            Err(e) => {
                report("load user", &e);
                if e.is_redirect() {
                    return;
                }
            }
        }

        if let Err(e) = tag_store.load_data().await {
            report("load data", &e);
            return;
        }
        if let Err(e) = tag_store.filter_repo(RepoFilter::All).await {
            report("filter repos", &e);
        }
        match tag_store.languages().await {
            Ok(languages) => *ctx.store.languages().write() = languages,
            Err(e) => report("load languages", &e),
        }

        log::info!(
            "loaded {} tags, {} repos",
            tag_store.tags.len(),
            tag_store.all_repos.len()
        );
        store_publish(&ctx.store, &tag_store);
    });
}

pub fn filter_repos(ctx: AppContext, filter: RepoFilter) {
    spawn_local(async move {
        let mut tag_store = ctx.tag_store.lock().await;
        if let Err(e) = tag_store.filter_repo(filter).await {
            report("filter repos", &e);
        }
        store_publish(&ctx.store, &tag_store);
    });
}

// ========================
// Tags
// ========================

pub fn add_tag(ctx: AppContext, name: String) {
    spawn_local(async move {
        let mut tag_store = ctx.tag_store.lock().await;
        if let Err(e) = tag_store.add_tag(&name).await {
            report("add tag", &e);
        }
        store_publish(&ctx.store, &tag_store);
    });
}

pub fn rename_tag(ctx: AppContext, old: String, new: String) {
    spawn_local(async move {
        let mut tag_store = ctx.tag_store.lock().await;
        if let Err(e) = tag_store.edit_tag(&old, &new).await {
            report("rename tag", &e);
        }
        // Follow the rename when it was the active filter
        if tag_store.filter == RepoFilter::Tag(old) {
            if let Err(e) = tag_store.filter_repo(RepoFilter::Tag(new)).await {
                report("filter repos", &e);
            }
        }
        store_publish(&ctx.store, &tag_store);
    });
}

pub fn delete_tag(ctx: AppContext, name: String) {
    spawn_local(async move {
        let mut tag_store = ctx.tag_store.lock().await;
        if let Err(e) = tag_store.delete_tag(&name).await {
            report("delete tag", &e);
        }
        store_publish(&ctx.store, &tag_store);
    });
}

// ========================
// Repository Tags
// ========================

pub fn add_repo_tag(ctx: AppContext, repo_name: String, tag: String) {
    spawn_local(async move {
        let mut tag_store = ctx.tag_store.lock().await;
        if let Err(e) = tag_store.repo_add_tag(&repo_name, &tag).await {
            report("tag repo", &e);
        }
        store_publish(&ctx.store, &tag_store);
    });
}

pub fn remove_repo_tag(ctx: AppContext, repo_name: String, tag: String) {
    spawn_local(async move {
        let mut tag_store = ctx.tag_store.lock().await;
        if let Err(e) = tag_store.repo_delete_tag(&repo_name, &tag).await {
            report("untag repo", &e);
        }
        store_publish(&ctx.store, &tag_store);
    });
}

// ========================
// README
// ========================

pub fn open_readme(ctx: AppContext, repo_name: String) {
    spawn_local(async move {
        let client = ctx.tag_store.lock().await.client().clone();
        match client.get_readme(&repo_name).await {
            Ok(html) => store_show_readme(&ctx.store, repo_name, html),
            Err(e) => report("load readme", &e),
        }
    });
}
