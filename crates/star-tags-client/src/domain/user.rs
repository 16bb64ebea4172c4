//! Signed-in User

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile returned by `/api/user`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    /// Any other profile fields the backend sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Name to show in the UI
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.login.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_keeps_unknown_fields() {
        let json = r#"{"login": "octocat", "public_repos": 8}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.login.as_deref(), Some("octocat"));
        assert_eq!(user.extra.get("public_repos"), Some(&Value::from(8)));
    }

    #[test]
    fn test_display_name_prefers_name() {
        let user = User {
            login: Some("octocat".into()),
            name: Some("The Octocat".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "The Octocat");
        assert_eq!(User::default().display_name(), "");
    }
}
