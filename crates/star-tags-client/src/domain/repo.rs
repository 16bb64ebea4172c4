//! Starred Repository Entity

use serde::{Deserialize, Serialize};

/// A starred repository as served by `/api/getAllStarRepo`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Repo {
    /// `owner/repo`, unique across the star list
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "startCnt", alias = "starCnt", default)]
    pub star_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Tag names merged in on the client
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Repo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_from_backend_json() {
        let json = r#"{
            "name": "rust-lang/rust",
            "description": "Empowering everyone",
            "startCnt": 11,
            "language": "Rust",
            "topics": ["compiler", "language"]
        }"#;
        let repo: Repo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "rust-lang/rust");
        assert_eq!(repo.star_count, 11);
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.topics.len(), 2);
        assert!(repo.is_untagged());
    }

    #[test]
    fn test_repo_with_sparse_fields() {
        let json = r#"{"name": "a/b", "language": null, "starCnt": 3}"#;
        let repo: Repo = serde_json::from_str(json).unwrap();
        assert!(repo.language.is_none());
        assert!(repo.description.is_none());
        assert_eq!(repo.star_count, 3);
        assert!(repo.topics.is_empty());
    }

    #[test]
    fn test_has_tag() {
        let mut repo = Repo::new("a/b");
        repo.tags.push("cli".to_string());
        assert!(repo.has_tag("cli"));
        assert!(!repo.has_tag("web"));
    }
}
