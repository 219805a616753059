//! Phase model.

use serde::{Deserialize, Serialize};

use super::story::Story;

/// An ordered stage on a project board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Zero-based position on the board.
    #[serde(default)]
    pub index: Option<u32>,

    /// Work-in-progress limit.
    #[serde(default)]
    pub limit: Option<u32>,

    /// Stories, present with the `stories` enrichment.
    #[serde(default)]
    pub stories: Option<Vec<Story>>,
}

/// Fields for creating or updating a phase. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Zero-based index into the list of phases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,

    /// Work-in-progress limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PhaseFields {
    /// Fields for a new phase with a name and a description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }
}
