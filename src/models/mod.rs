//! Typed views over AgileZen resource documents.

mod member;
mod phase;
mod project;
mod story;

pub use member::{Member, UserRef};
pub use phase::{Phase, PhaseFields};
pub use project::{Project, ProjectFields, ProjectUpdate};
pub use story::{PhaseRef, Story, StoryColor, StoryFields, StoryStatus, StoryUpdate};
