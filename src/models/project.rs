//! Project model and its create/update field sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::member::{Member, UserRef};
use super::phase::Phase;

/// An AgileZen project.
///
/// Projects are the top-level containers: a board made of ordered phases,
/// each holding stories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The project ID.
    pub id: u64,

    /// The project name.
    pub name: String,

    /// Short description.
    #[serde(default)]
    pub description: Option<String>,

    /// Longer free-form details.
    #[serde(default)]
    pub details: Option<String>,

    /// When the project was created.
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,

    /// Project owner.
    #[serde(default)]
    pub owner: Option<UserRef>,

    /// Phases, present with the `phases` enrichment.
    #[serde(default)]
    pub phases: Option<Vec<Phase>>,

    /// Members, present with the `members` enrichment.
    #[serde(default)]
    pub members: Option<Vec<Member>>,

    /// Metrics, present with the `metrics` enrichment. Passed through as-is.
    #[serde(default)]
    pub metrics: Option<serde_json::Value>,
}

impl Project {
    /// Name of the project owner, if known.
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.name.as_str())
    }
}

/// Fields for creating a project. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Fields for updating a project: the creation fields plus a new owner.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[serde(flatten)]
    pub fields: ProjectFields,

    /// User name or id of the new owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_with_enrichments() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "Kaizen",
            "createTime": "2013-01-05T10:00:00Z",
            "owner": {"id": 1, "name": "Bertrand"},
            "phases": [{"id": 1, "name": "Backlog"}],
            "members": [{"id": 1, "name": "Bertrand"}]
        }))
        .unwrap();

        assert_eq!(project.owner_name(), Some("Bertrand"));
        assert_eq!(project.phases.map(|p| p.len()), Some(1));
        assert!(project.metrics.is_none());
    }

    #[test]
    fn test_update_only_sends_set_fields() {
        let update = ProjectUpdate {
            fields: ProjectFields {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
            owner: Some("bvidal".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"name": "Renamed", "owner": "bvidal"})
        );
    }
}
