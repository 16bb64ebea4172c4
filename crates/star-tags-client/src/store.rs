//! Tag Store
//!
//! UI-facing state container composed over [`StarTagClient`]: the tag list,
//! the full star list and the currently filtered view of it.

use std::sync::Arc;

use crate::api::{ApiResult, StarTagClient};
use crate::domain::{Language, Repo, RepoFilter};
use crate::util::VecExt;

pub struct TagStore {
    client: Arc<StarTagClient>,
    pub tags: Vec<String>,
    pub all_repos: Vec<Repo>,
    pub filtered_repos: Vec<Repo>,
    pub filter: RepoFilter,
}

impl TagStore {
    pub fn new(client: Arc<StarTagClient>) -> Self {
        Self {
            client,
            tags: Vec::new(),
            all_repos: Vec::new(),
            filtered_repos: Vec::new(),
            filter: RepoFilter::All,
        }
    }

    pub fn client(&self) -> &Arc<StarTagClient> {
        &self.client
    }

    // ========================
    // Tags
    // ========================

    pub async fn fetch_tags(&mut self) -> ApiResult<()> {
        self.tags = self.client.get_tags().await?;
        Ok(())
    }

    pub async fn add_tag(&mut self, name: &str) -> ApiResult<()> {
        self.client.add_tag(name).await?;
        self.fetch_tags().await
    }

    pub async fn delete_tag(&mut self, name: &str) -> ApiResult<()> {
        self.client.delete_tag(name).await?;
        self.fetch_tags().await?;
        self.remerge_repos().await
    }

    pub async fn edit_tag(&mut self, old: &str, new: &str) -> ApiResult<()> {
        self.client.edit_tag(old, new).await?;
        self.fetch_tags().await?;
        self.remerge_repos().await
    }

    /// Refresh repository tag chips after a taxonomy change
    async fn remerge_repos(&mut self) -> ApiResult<()> {
        if self.all_repos.is_empty() {
            return Ok(());
        }
        self.all_repos = self.client.get_all_repos().await?;
        self.filtered_repos = self.filter.apply(&self.all_repos);
        Ok(())
    }

    // ========================
    // Repositories
    // ========================

    pub async fn load_all_repos(&mut self) -> ApiResult<()> {
        if self.all_repos.is_empty() {
            self.all_repos = self.client.get_all_repos().await?;
        }
        Ok(())
    }

    pub async fn filter_repo(&mut self, filter: RepoFilter) -> ApiResult<()> {
        self.load_all_repos().await?;
        self.filtered_repos = filter.apply(&self.all_repos);
        self.filter = filter;
        Ok(())
    }

    pub async fn repo_add_tag(&mut self, repo_name: &str, tag: &str) -> ApiResult<()> {
        let already_tagged = self
            .all_repos
            .iter()
            .find(|r| r.name == repo_name)
            .map_or(false, |r| r.has_tag(tag));
        if already_tagged {
            return Ok(());
        }

        for repo in self.repos_named(repo_name) {
            if !repo.has_tag(tag) {
                repo.tags.push(tag.to_string());
            }
        }
        self.client.add_repo_tag(repo_name, tag).await
    }

    pub async fn repo_delete_tag(&mut self, repo_name: &str, tag: &str) -> ApiResult<()> {
        let tag = tag.to_string();
        for repo in self.repos_named(repo_name) {
            repo.tags.remove_item(&tag);
        }
        self.client.delete_repo_tag(repo_name, &tag).await
    }

    /// Every copy of `name` across the full and filtered lists
    fn repos_named<'a>(&'a mut self, name: &'a str) -> impl Iterator<Item = &'a mut Repo> + 'a {
        self.all_repos
            .iter_mut()
            .chain(self.filtered_repos.iter_mut())
            .filter(move |r| r.name == name)
    }

    pub async fn load_data(&mut self) -> ApiResult<()> {
        self.fetch_tags().await?;
        self.load_all_repos().await
    }

    // ========================
    // Pass-through
    // ========================

    pub async fn languages(&self) -> ApiResult<Vec<Language>> {
        self.client.get_languages().await
    }

    pub async fn readme(&self, repo_name: &str) -> ApiResult<String> {
        self.client.get_readme(repo_name).await
    }
}
