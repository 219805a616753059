//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output of single
//! resources and [`Tabled`] rows for listings, as an alternative to JSON.

use tabled::Tabled;

use crate::models::{Member, Phase, Project, Story};

/// Trait for human-readable key-value output.
///
/// Implemented by resource types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Project {
    fn pretty_print(&self) -> String {
        let header = format!("Project #{}: {}", self.id, self.name);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        if let Some(ref description) = self.description {
            lines.push(format!("Description:    {}", description));
        }

        if let Some(owner) = self.owner_name() {
            lines.push(format!("Owner:          {}", owner));
        }

        if let Some(ref created) = self.create_time {
            lines.push(format!("Created:        {}", created.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        if let Some(ref phases) = self.phases {
            let names: Vec<&str> = phases.iter().map(|p| p.name.as_str()).collect();
            lines.push(format!("Phases:         {}", names.join(" → ")));
        }

        if let Some(ref members) = self.members {
            let names: Vec<&str> = members.iter().map(Member::display_name).collect();
            lines.push(format!("Members:        {}", names.join(", ")));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Story {
    fn pretty_print(&self) -> String {
        let header = format!("Story #{}", self.id);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider, format!("Text:           {}", self.text)];

        if let Some(phase) = self.phase_name() {
            lines.push(format!("Phase:          {}", phase));
        }

        if let Some(status) = self.status {
            lines.push(format!("Status:         {}", status.as_str()));
        }

        if let Some(ref reason) = self.blocked_reason {
            lines.push(format!("Blocked:        {}", reason));
        }

        if let Some(ref owner) = self.owner {
            lines.push(format!("Owner:          {}", owner.name));
        }

        if let Some(ref size) = self.size {
            lines.push(format!("Size:           {}", size));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Phase {
    fn pretty_print(&self) -> String {
        let header = format!("Phase #{}: {}", self.id, self.name);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        if let Some(ref description) = self.description {
            lines.push(format!("Description:    {}", description));
        }

        if let Some(index) = self.index {
            lines.push(format!("Index:          {}", index));
        }

        if let Some(limit) = self.limit {
            lines.push(format!("WIP limit:      {}", limit));
        }

        lines.join("\n")
    }
}

/// Table row for a project listing.
#[derive(Tabled)]
pub struct ProjectRow {
    pub id: u64,
    pub name: String,
    pub owner: String,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            owner: p.owner_name().unwrap_or_default().to_string(),
        }
    }
}

/// Table row for a phase listing.
#[derive(Tabled)]
pub struct PhaseRow {
    pub id: u64,
    pub name: String,
    pub limit: String,
    pub stories: String,
}

impl From<&Phase> for PhaseRow {
    fn from(p: &Phase) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            limit: p.limit.map(|l| l.to_string()).unwrap_or_default(),
            stories: p
                .stories
                .as_ref()
                .map(|s| s.len().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Table row for a story listing.
#[derive(Tabled)]
pub struct StoryRow {
    pub id: u64,
    pub text: String,
    pub phase: String,
    pub owner: String,
}

impl From<&Story> for StoryRow {
    fn from(s: &Story) -> Self {
        Self {
            id: s.id,
            text: s.text.clone(),
            phase: s.phase_name().unwrap_or_default().to_string(),
            owner: s.owner.as_ref().map(|o| o.name.clone()).unwrap_or_default(),
        }
    }
}
