//! API Layer
//!
//! HTTP client for the tagging backend. The tag taxonomy and the star list
//! are fetched once per session and mutated in place afterwards.

mod cache;
mod config;
mod error;
mod navigator;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::MappedMutexGuard;

use crate::domain::{languages_of, Language, Repo, TagData, User};
use cache::Cached;

pub use config::{ClientConfig, API_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use navigator::{Navigator, NoopNavigator};

const USER_PATH: &str = "/api/user";
const TAG_REPO_PATH: &str = "/api/getTagRepo";
const STAR_REPO_PATH: &str = "/api/getAllStarRepo";
const README_PATH: &str = "/api/readme";

/// Error code the backend uses to ask for a page redirect
const REDIRECT_CODE: f64 = 302.0;

#[derive(Deserialize)]
struct ReadmeResponse {
    #[serde(default)]
    html: String,
}

/// Client for the starred-repository tagging backend
pub struct StarTagClient {
    config: ClientConfig,
    http: reqwest::Client,
    navigator: Arc<dyn Navigator>,
    tag_data: Cached<TagData>,
    star_repos: Cached<Vec<Repo>>,
}

impl StarTagClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_navigator(config, Arc::new(NoopNavigator))
    }

    pub fn with_navigator(config: ClientConfig, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            navigator,
            tag_data: Cached::new("tag_repo"),
            star_repos: Cached::new("all_star_repo"),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ========================
    // Requests
    // ========================

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        let body: Value = self.http.get(&url).query(query).send().await?.json().await?;
        let body = self.check_response(body)?;
        Ok(serde_json::from_value(body)?)
    }

    /// Apply the backend's in-body error convention.
    ///
    /// An `error` of 302 (number or numeric string) navigates to `location`
    /// and yields [`ApiError::Redirect`]. Any other truthy `error` yields
    /// [`ApiError::Backend`] rather than handing back a body that carries it.
    fn check_response(&self, body: Value) -> ApiResult<Value> {
        let Some(error) = body.get("error").filter(|e| is_set(e)) else {
            return Ok(body);
        };

        let code = error
            .as_f64()
            .or_else(|| error.as_str().and_then(|s| s.trim().parse::<f64>().ok()));
        if code == Some(REDIRECT_CODE) {
            let location = body
                .get("location")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            log::warn!("backend requested redirect to {}", location);
            self.navigator.navigate(&location);
            return Err(ApiError::Redirect { location });
        }

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        Err(ApiError::Backend(message))
    }

    // ========================
    // Cached Resources
    // ========================

    async fn load_tag_data(&self) -> ApiResult<MappedMutexGuard<'_, TagData>> {
        self.tag_data
            .lock_loaded(|| self.get_json::<TagData>(TAG_REPO_PATH, &[]))
            .await
    }

    async fn load_star_repos(&self) -> ApiResult<MappedMutexGuard<'_, Vec<Repo>>> {
        self.star_repos
            .lock_loaded(|| self.get_json::<Vec<Repo>>(STAR_REPO_PATH, &[]))
            .await
    }

    /// There is no write endpoint yet; the taxonomy only lives in memory.
    fn save_tag_data(&self, data: &TagData) {
        log::debug!("saving tag data: {:?}", data);
    }

    /// Forget both cached resources so the next access refetches them
    pub async fn reload(&self) {
        self.tag_data.clear().await;
        self.star_repos.clear().await;
    }

    // ========================
    // User
    // ========================

    pub async fn get_user(&self) -> ApiResult<User> {
        self.get_json(USER_PATH, &[]).await
    }

    // ========================
    // Tag Taxonomy
    // ========================

    pub async fn get_tags(&self) -> ApiResult<Vec<String>> {
        Ok(self.load_tag_data().await?.tags.clone())
    }

    /// Returns false if the tag already exists
    pub async fn add_tag(&self, name: &str) -> ApiResult<bool> {
        let mut data = self.load_tag_data().await?;
        if !data.add_tag(name) {
            return Ok(false);
        }
        self.save_tag_data(&data);
        Ok(true)
    }

    pub async fn delete_tag(&self, name: &str) -> ApiResult<()> {
        let mut data = self.load_tag_data().await?;
        if data.delete_tag(name) {
            self.save_tag_data(&data);
        }
        Ok(())
    }

    /// Rename a tag; renaming onto an existing tag merges the two
    pub async fn edit_tag(&self, old: &str, new: &str) -> ApiResult<()> {
        if old == new {
            return Ok(());
        }
        let mut data = self.load_tag_data().await?;
        if data.rename_tag(old, new) {
            self.save_tag_data(&data);
        }
        Ok(())
    }

    // ========================
    // Repositories
    // ========================

    /// Star list with each repository's tags merged in
    pub async fn get_all_repos(&self) -> ApiResult<Vec<Repo>> {
        let data = self.load_tag_data().await?;
        let mut repos = self.load_star_repos().await?;
        for repo in repos.iter_mut() {
            repo.tags = data.tags_for(&repo.name);
        }
        Ok(repos.clone())
    }

    pub async fn add_repo_tag(&self, repo_name: &str, tag: &str) -> ApiResult<()> {
        let mut data = self.load_tag_data().await?;
        data.tag_repo(tag, repo_name);
        self.save_tag_data(&data);
        Ok(())
    }

    pub async fn delete_repo_tag(&self, repo_name: &str, tag: &str) -> ApiResult<()> {
        let mut data = self.load_tag_data().await?;
        data.untag_repo(tag, repo_name);
        self.save_tag_data(&data);
        Ok(())
    }

    pub async fn get_languages(&self) -> ApiResult<Vec<Language>> {
        let repos = self.load_star_repos().await?;
        Ok(languages_of(&repos))
    }

    /// Rendered README HTML for `owner/repo`
    pub async fn get_readme(&self, repo_name: &str) -> ApiResult<String> {
        let resp: ReadmeResponse = self.get_json(README_PATH, &[("repoName", repo_name)]).await?;
        Ok(resp.html)
    }
}

/// JS-style truthiness for the `error` field
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
