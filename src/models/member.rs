//! Project member model.

use serde::{Deserialize, Serialize};

/// A member of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A user reference embedded in other resources (owner, creator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Member {
    /// Name to show in listings: the display name, or the login when empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.user_name.as_deref().unwrap_or_default()
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_user_name() {
        let member: Member = serde_json::from_value(serde_json::json!({
            "id": 3,
            "userName": "bvidal"
        }))
        .unwrap();
        assert_eq!(member.display_name(), "bvidal");
    }
}
