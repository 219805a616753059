//! Story requests.

use crate::error::Result;
use crate::models::{StoryFields, StoryUpdate};
use crate::request::Verb;
use crate::traits::ApiRequest;

use super::{require_id, ZenRequest};

/// Request on `/projects/{project}/stories/{id?}` or, when reached from a
/// phase, `/projects/{project}/phases/{phase}/stories/`.
#[derive(Debug, Clone)]
pub struct StoryRequest {
    inner: ZenRequest,
}

impl StoryRequest {
    pub(crate) fn from_parent(inner: ZenRequest) -> Self {
        Self { inner }
    }

    pub fn project_id(&self) -> Option<u64> {
        self.inner.scope().project()
    }

    /// Phase the stories were addressed through, if any.
    pub fn phase_id(&self) -> Option<u64> {
        self.inner.scope().phase()
    }

    pub fn story_id(&self) -> Option<u64> {
        self.inner.scope().story()
    }

    /// Create a story (POST). Unset fields are not sent.
    pub fn add(self, fields: &StoryFields) -> Result<Self> {
        Ok(Self {
            inner: self.inner.write(fields, Verb::Post)?,
        })
    }

    /// Update this story (PUT).
    ///
    /// Applies the same field set as [`add`](Self::add), then the status
    /// and blocked reason, then forces the verb to PUT.
    pub fn update(self, update: &StoryUpdate) -> Result<Self> {
        let added = self.add(&update.fields)?;
        Ok(Self {
            inner: added.inner.write(&update.status_fields(), Verb::Put)?,
        })
    }

    /// Delete this story.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Chaining`](crate::KaizenError::Chaining) when
    /// no story id was given.
    pub fn delete(self) -> Result<Self> {
        require_id(self.story_id(), "deletion", "story")?;
        Ok(Self {
            inner: self.inner.map(|request| request.update_verb(Verb::Delete)),
        })
    }
}

impl ApiRequest for StoryRequest {
    fn inner(&self) -> &ZenRequest {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut ZenRequest {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ZenClient, DEFAULT_API_URL};
    use crate::models::{StoryColor, StoryStatus};
    use crate::resources::RootRequest;
    use serde_json::{json, Value};

    fn stories(story_id: Option<u64>) -> StoryRequest {
        RootRequest::new(ZenClient::new("fake_key", DEFAULT_API_URL).unwrap())
            .projects(Some(12))
            .stories(story_id)
            .unwrap()
    }

    fn body(request: &StoryRequest) -> Value {
        Value::Object(request.state().data().clone())
    }

    #[test]
    fn test_add_only_text() {
        let request = stories(None).add(&StoryFields::text("x")).unwrap();
        assert_eq!(request.state().verb(), Verb::Post);
        assert_eq!(body(&request), json!({"text": "x"}));
    }

    #[test]
    fn test_add_full_story() {
        let fields = StoryFields {
            text: Some("Ship it".to_string()),
            phase: Some(3),
            color: Some(StoryColor::Green),
            size: Some("5".to_string()),
            tags: Some(vec!["release".to_string()]),
            ..Default::default()
        };
        let request = stories(None).add(&fields).unwrap();
        assert_eq!(
            body(&request),
            json!({
                "text": "Ship it",
                "phase": 3,
                "color": "green",
                "size": "5",
                "tags": ["release"]
            })
        );
    }

    #[test]
    fn test_update_is_add_plus_status() {
        let update = StoryUpdate {
            fields: StoryFields::text("Blocked work"),
            status: Some(StoryStatus::Blocked),
            blocked_reason: Some("waiting on API access".to_string()),
        };
        let request = stories(Some(7)).update(&update).unwrap();

        assert_eq!(request.state().verb(), Verb::Put);
        assert_eq!(request.state().url(), "/projects/12/stories/7");
        assert_eq!(
            body(&request),
            json!({
                "text": "Blocked work",
                "status": "blocked",
                "blockedReason": "waiting on API access"
            })
        );
    }

    #[test]
    fn test_move_to_phase() {
        let request = stories(Some(7)).update(&StoryUpdate::move_to(42)).unwrap();
        assert_eq!(body(&request), json!({"phase": 42}));
    }

    #[test]
    fn test_filter_and_enrichments() {
        let request = stories(None)
            .filter("color:green")
            .with_enrichments(["tags", "tasks"]);
        assert_eq!(request.state().params()["where"], "color:green");
        assert_eq!(request.state().params()["with"], "tags,tasks");
    }

    #[test]
    fn test_delete_needs_story_id() {
        assert!(stories(None).delete().is_err());
        assert_eq!(stories(Some(7)).delete().unwrap().state().verb(), Verb::Delete);
    }
}
