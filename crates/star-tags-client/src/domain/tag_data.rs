//! Tag Taxonomy
//!
//! The ordered tag list plus the tag -> repository mapping served by
//! `/api/getTagRepo`. A tag whose repository list becomes empty is pruned
//! from the mapping but stays in the tag list.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::VecExt;

/// User-defined tags and the repositories carrying them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagData {
    /// Tag names, in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Tag name -> repository names
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_repos: BTreeMap<String, Vec<String>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TagData {
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Repositories carrying `tag`
    pub fn repos_of(&self, tag: &str) -> &[String] {
        self.tag_repos.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    /// Append a new tag. Returns false if it already exists.
    pub fn add_tag(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.tags.push(name.to_string());
        true
    }

    /// Remove a tag and its mapping. Returns false if it did not exist.
    pub fn delete_tag(&mut self, name: &str) -> bool {
        let Some(idx) = self.tags.iter().position(|t| t == name) else {
            return false;
        };
        self.tags.remove(idx);
        self.tag_repos.remove(name);
        true
    }

    /// Rename `old` to `new`, merging into `new` when it already exists.
    ///
    /// Returns false when nothing changed (same name, or `old` unknown).
    pub fn rename_tag(&mut self, old: &str, new: &str) -> bool {
        if old == new {
            return false;
        }
        let Some(idx) = self.tags.iter().position(|t| t == old) else {
            return false;
        };

        let old_repos = self.tag_repos.remove(old).unwrap_or_default();
        if self.contains(new) {
            let merged = self.tag_repos.entry(new.to_string()).or_default();
            for repo in old_repos {
                if !merged.contains(&repo) {
                    merged.push(repo);
                }
            }
            self.tags.remove(idx);
        } else {
            self.tag_repos.insert(new.to_string(), old_repos);
            self.tags[idx] = new.to_string();
        }

        if self.tag_repos.get(new).map_or(true, Vec::is_empty) {
            self.tag_repos.remove(new);
        }
        true
    }

    /// Attach `tag` to `repo` (no-op if already attached)
    pub fn tag_repo(&mut self, tag: &str, repo: &str) {
        let repos = self.tag_repos.entry(tag.to_string()).or_default();
        if !repos.iter().any(|r| r == repo) {
            repos.push(repo.to_string());
        }
    }

    /// Detach `tag` from `repo`, pruning the tag's mapping when it empties
    pub fn untag_repo(&mut self, tag: &str, repo: &str) {
        let Some(repos) = self.tag_repos.get_mut(tag) else {
            return;
        };
        repos.remove_item(&repo.to_string());
        if repos.is_empty() {
            self.tag_repos.remove(tag);
        }
    }

    /// Tags carried by `repo`, in tag-list order
    pub fn tags_for(&self, repo: &str) -> Vec<String> {
        self.tags
            .iter()
            .filter(|tag| self.repos_of(tag).iter().any(|r| r == repo))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TagData {
        let mut data = TagData::default();
        data.add_tag("cli");
        data.add_tag("web");
        data.tag_repo("cli", "clap-rs/clap");
        data.tag_repo("cli", "BurntSushi/ripgrep");
        data.tag_repo("web", "tokio-rs/axum");
        data
    }

    #[test]
    fn test_deserialize_with_nulls() {
        let data: TagData = serde_json::from_str(r#"{"tags": null, "tag_repos": null}"#).unwrap();
        assert!(data.tags.is_empty());
        assert!(data.tag_repos.is_empty());

        let data: TagData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, TagData::default());
    }

    #[test]
    fn test_add_tag_rejects_duplicates() {
        let mut data = sample();
        assert!(!data.add_tag("cli"));
        assert!(data.add_tag("db"));
        assert_eq!(data.tags, vec!["cli", "web", "db"]);
    }

    #[test]
    fn test_delete_tag_drops_mapping() {
        let mut data = sample();
        assert!(data.delete_tag("cli"));
        assert_eq!(data.tags, vec!["web"]);
        assert!(data.repos_of("cli").is_empty());
        assert!(!data.delete_tag("cli"));
    }

    #[test]
    fn test_rename_to_fresh_name_keeps_position() {
        let mut data = sample();
        assert!(data.rename_tag("cli", "terminal"));
        assert_eq!(data.tags, vec!["terminal", "web"]);
        assert_eq!(data.repos_of("terminal").len(), 2);
        assert!(!data.tag_repos.contains_key("cli"));
    }

    #[test]
    fn test_rename_into_existing_merges_without_duplicates() {
        let mut data = sample();
        data.tag_repo("web", "clap-rs/clap");
        assert!(data.rename_tag("cli", "web"));
        assert_eq!(data.tags, vec!["web"]);
        assert_eq!(
            data.repos_of("web"),
            ["tokio-rs/axum", "clap-rs/clap", "BurntSushi/ripgrep"]
        );
        assert!(!data.tag_repos.contains_key("cli"));
    }

    #[test]
    fn test_rename_unused_tag_leaves_no_empty_mapping() {
        let mut data = sample();
        data.add_tag("empty");
        assert!(data.rename_tag("empty", "still-empty"));
        assert!(data.contains("still-empty"));
        assert!(!data.tag_repos.contains_key("still-empty"));
    }

    #[test]
    fn test_rename_noops() {
        let mut data = sample();
        let before = data.clone();
        assert!(!data.rename_tag("cli", "cli"));
        assert!(!data.rename_tag("missing", "other"));
        assert_eq!(data, before);
    }

    #[test]
    fn test_tag_repo_is_idempotent() {
        let mut data = sample();
        data.tag_repo("cli", "clap-rs/clap");
        assert_eq!(data.repos_of("cli").len(), 2);
    }

    #[test]
    fn test_untag_prunes_empty_list() {
        let mut data = sample();
        data.untag_repo("web", "tokio-rs/axum");
        assert!(!data.tag_repos.contains_key("web"));
        assert!(data.contains("web"));
        data.untag_repo("missing", "tokio-rs/axum");
    }

    #[test]
    fn test_tags_for_follows_tag_order() {
        let mut data = sample();
        data.tag_repo("web", "clap-rs/clap");
        data.tag_repo("orphan", "clap-rs/clap");
        assert_eq!(data.tags_for("clap-rs/clap"), vec!["cli", "web"]);
        assert!(data.tags_for("nobody/none").is_empty());
    }
}
