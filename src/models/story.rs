//! Story model and its create/update field sets.

use serde::{Deserialize, Serialize};

use super::member::UserRef;

/// A work item living in one phase of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: u64,

    pub text: String,

    #[serde(default)]
    pub details: Option<String>,

    #[serde(default)]
    pub size: Option<String>,

    #[serde(default)]
    pub color: Option<StoryColor>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub status: Option<StoryStatus>,

    #[serde(default)]
    pub blocked_reason: Option<String>,

    /// The phase the story currently sits in.
    #[serde(default)]
    pub phase: Option<PhaseRef>,

    #[serde(default)]
    pub owner: Option<UserRef>,

    #[serde(default)]
    pub creator: Option<UserRef>,

    /// Tags, present with the `tags` enrichment.
    #[serde(default)]
    pub tags: Option<Vec<serde_json::Value>>,

    /// Tasks, present with the `tasks` enrichment.
    #[serde(default)]
    pub tasks: Option<Vec<serde_json::Value>>,
}

impl Story {
    /// Name of the phase the story is in, if reported.
    pub fn phase_name(&self) -> Option<&str> {
        self.phase.as_ref().map(|p| p.name.as_str())
    }
}

/// Phase reference embedded in a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRef {
    pub id: u64,
    pub name: String,
}

/// Workflow status of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    Planned,
    Started,
    Blocked,
    Finished,
}

impl StoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StoryStatus::Planned => "planned",
            StoryStatus::Started => "started",
            StoryStatus::Blocked => "blocked",
            StoryStatus::Finished => "finished",
        }
    }
}

/// Card color of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryColor {
    Grey,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Teal,
}

/// Fields for creating a story. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Id of the phase to place the story in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<u64>,

    /// User name or id of the owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<StoryColor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
}

impl StoryFields {
    /// Fields for a story with only its text set.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Fields for updating a story: the creation fields plus a status change.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryUpdate {
    #[serde(flatten)]
    pub fields: StoryFields,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StoryStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
}

impl StoryUpdate {
    /// Update that only moves the story to another phase.
    pub fn move_to(phase_id: u64) -> Self {
        Self {
            fields: StoryFields {
                phase: Some(phase_id),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Status part of the update, without the creation fields.
    pub(crate) fn status_fields(&self) -> StoryUpdate {
        StoryUpdate {
            fields: StoryFields::default(),
            status: self.status,
            blocked_reason: self.blocked_reason.clone(),
        }
    }
}
