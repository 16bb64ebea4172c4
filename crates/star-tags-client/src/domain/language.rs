//! Language Listing
//!
//! Each language gets a display color derived from its name, so the same
//! language keeps the same color across reloads.

use serde::{Deserialize, Serialize};

use super::Repo;

/// A language present in the star list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// `None` groups repositories without a detected language
    pub name: Option<String>,
    /// Hex color, e.g. "#3FA2C1"
    pub color: String,
}

impl Language {
    pub fn new(name: Option<String>) -> Self {
        let color = color_for(name.as_deref().unwrap_or(""));
        Self { name, color }
    }
}

fn color_for(name: &str) -> String {
    let hash = blake3::hash(name.as_bytes());
    let [r, g, b, ..] = *hash.as_bytes();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Unique languages across `repos`, in first-seen order
pub fn languages_of(repos: &[Repo]) -> Vec<Language> {
    let mut seen: Vec<Option<&str>> = Vec::new();
    for repo in repos {
        let language = repo.language.as_deref();
        if !seen.contains(&language) {
            seen.push(language);
        }
    }
    seen.into_iter()
        .map(|name| Language::new(name.map(str::to_string)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_in_first_seen_order() {
        let repos = vec![
            Repo::new("a/1").with_language("Rust"),
            Repo::new("a/2").with_language("Go"),
            Repo::new("a/3"),
            Repo::new("a/4").with_language("Rust"),
            Repo::new("a/5"),
        ];
        let names: Vec<_> = languages_of(&repos).into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec![Some("Rust".to_string()), Some("Go".to_string()), None]);
    }

    #[test]
    fn test_color_is_stable_hex() {
        let a = Language::new(Some("Rust".into()));
        let b = Language::new(Some("Rust".into()));
        assert_eq!(a.color, b.color);
        assert_eq!(a.color.len(), 7);
        assert!(a.color.starts_with('#'));
        assert!(a.color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_empty_repo_list() {
        assert!(languages_of(&[]).is_empty());
    }
}
