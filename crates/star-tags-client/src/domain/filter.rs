//! Repository Filters

use serde::{Deserialize, Serialize};

use super::Repo;

/// What subset of the star list the UI is showing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RepoFilter {
    #[default]
    All,
    Untagged,
    Tag(String),
    /// `None` selects repositories without a language
    Language(Option<String>),
}

impl RepoFilter {
    pub fn matches(&self, repo: &Repo) -> bool {
        match self {
            RepoFilter::All => true,
            RepoFilter::Untagged => repo.is_untagged(),
            RepoFilter::Tag(tag) => repo.has_tag(tag),
            RepoFilter::Language(language) => repo.language == *language,
        }
    }

    pub fn apply(&self, repos: &[Repo]) -> Vec<Repo> {
        repos.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repos() -> Vec<Repo> {
        let mut tagged = Repo::new("clap-rs/clap").with_language("Rust");
        tagged.tags = vec!["cli".to_string()];
        vec![
            tagged,
            Repo::new("vuejs/core").with_language("TypeScript"),
            Repo::new("torvalds/linux").with_language("C"),
            Repo::new("awesome/list"),
        ]
    }

    fn names(repos: &[Repo]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_all() {
        assert_eq!(RepoFilter::All.apply(&repos()).len(), 4);
    }

    #[test]
    fn test_untagged() {
        let filtered = RepoFilter::Untagged.apply(&repos());
        assert_eq!(names(&filtered), vec!["vuejs/core", "torvalds/linux", "awesome/list"]);
    }

    #[test]
    fn test_tag() {
        let filtered = RepoFilter::Tag("cli".into()).apply(&repos());
        assert_eq!(names(&filtered), vec!["clap-rs/clap"]);
        assert!(RepoFilter::Tag("web".into()).apply(&repos()).is_empty());
    }

    #[test]
    fn test_language() {
        let filtered = RepoFilter::Language(Some("C".into())).apply(&repos());
        assert_eq!(names(&filtered), vec!["torvalds/linux"]);

        let filtered = RepoFilter::Language(None).apply(&repos());
        assert_eq!(names(&filtered), vec!["awesome/list"]);
    }
}
