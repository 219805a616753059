//! Resource requests.
//!
//! Every request type wraps a [`ZenRequest`], the accumulated [`Request`]
//! bound to the [`ZenClient`] that will send it. Narrowing methods consume
//! the parent request and hand its state to the child type, so a chain like
//! the following builds `/projects/12/phases/?page=1&pageSize=100`:
//!
//! ```
//! use kaizen::{ApiRequest, RootRequest, ZenClient};
//!
//! # fn main() -> kaizen::Result<()> {
//! let client = ZenClient::new("api-key", "https://agilezen.com/api/v1")?;
//! let phases = RootRequest::new(client)
//!     .projects(Some(12))
//!     .phases(None)?
//!     .paginate(1, 100);
//!
//! assert_eq!(phases.state().url(), "/projects/12/phases/");
//! # Ok(())
//! # }
//! ```
//!
//! Sub-resources can only be reached from a request that fixed its parent
//! id. Asking for the phases of a project list fails right away with
//! [`KaizenError::Chaining`](crate::KaizenError::Chaining).
//!
//! The ids fixed along the chain travel with the path in a [`Scope`], so a
//! copied request is checked against the path it actually carries.

mod member;
mod phase;
mod project;
mod root;
mod story;

pub use member::MemberRequest;
pub use phase::PhaseRequest;
pub use project::ProjectRequest;
pub use root::RootRequest;
pub use story::StoryRequest;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::ZenClient;
use crate::error::{KaizenError, Result};
use crate::request::{Request, Verb};

/// The resource a request path ends on, with the ids fixed to reach it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// The API root.
    #[default]
    Root,
    /// `/projects/{project?}`
    Projects { project: Option<u64> },
    /// `/projects/{project}/phases/{phase?}`
    Phases { project: u64, phase: Option<u64> },
    /// `/projects/{project}/stories/{story?}`, or the stories of one phase.
    Stories {
        project: u64,
        phase: Option<u64>,
        story: Option<u64>,
    },
    /// `/projects/{project}/members/{member?}`
    Members { project: u64, member: Option<u64> },
}

impl Scope {
    pub fn project(&self) -> Option<u64> {
        match *self {
            Scope::Root => None,
            Scope::Projects { project } => project,
            Scope::Phases { project, .. }
            | Scope::Stories { project, .. }
            | Scope::Members { project, .. } => Some(project),
        }
    }

    pub fn phase(&self) -> Option<u64> {
        match *self {
            Scope::Phases { phase, .. } | Scope::Stories { phase, .. } => phase,
            _ => None,
        }
    }

    pub fn story(&self) -> Option<u64> {
        match *self {
            Scope::Stories { story, .. } => story,
            _ => None,
        }
    }

    pub fn member(&self) -> Option<u64> {
        match *self {
            Scope::Members { member, .. } => member,
            _ => None,
        }
    }
}

/// Request state bound to the client that sends it.
#[derive(Debug, Clone)]
pub struct ZenRequest {
    request: Request,
    scope: Scope,
    client: ZenClient,
}

impl ZenRequest {
    /// A fresh GET request on the API root.
    pub fn new(client: ZenClient) -> Self {
        Self {
            request: Request::new(),
            scope: Scope::Root,
            client,
        }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn client(&self) -> &ZenClient {
        &self.client
    }

    /// Replace the request state in place through `f`.
    pub fn apply(&mut self, f: impl FnOnce(Request) -> Request) {
        self.request = f(std::mem::take(&mut self.request));
    }

    /// Replace the request state through `f`.
    #[must_use]
    pub fn map(mut self, f: impl FnOnce(Request) -> Request) -> Self {
        self.apply(f);
        self
    }

    /// Replace the request state through a fallible `f`.
    pub fn try_map(mut self, f: impl FnOnce(Request) -> Result<Request>) -> Result<Self> {
        self.request = f(std::mem::take(&mut self.request))?;
        Ok(self)
    }

    /// Append `/{segment}/{id}`, or `/{segment}/` for the whole collection,
    /// and move to `scope`.
    #[must_use]
    pub(crate) fn narrow(mut self, segment: &str, id: Option<u64>, scope: Scope) -> Self {
        let fragment = match id {
            Some(id) => format!("/{segment}/{id}"),
            None => format!("/{segment}/"),
        };
        self.scope = scope;
        self.map(|request| request.update_url(&fragment))
    }

    /// Merge `fields` into the body and force `verb`.
    pub(crate) fn write<T: Serialize + ?Sized>(self, fields: &T, verb: Verb) -> Result<Self> {
        self.try_map(|request| Ok(request.update_fields(fields)?.update_verb(verb)))
    }

    /// Duplicate this request's state into `target`, along with the scope
    /// its path addresses.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::InvalidTarget`] when `target` is bound to
    /// another API root or API key.
    pub fn copy(&self, target: &mut ZenRequest) -> Result<()> {
        if !self.client.same_session(&target.client) {
            return Err(KaizenError::InvalidTarget(format!(
                "request for {} cannot be copied into a request for {}",
                self.client.base_url(),
                target.client.base_url()
            )));
        }
        target.request = self.request.copy(std::mem::take(&mut target.request));
        target.scope = self.scope;
        Ok(())
    }

    /// Send the request and return the decoded JSON document.
    pub async fn send(&self) -> Result<Value> {
        self.client.send(&self.request).await
    }

    /// Send the request and decode the response into `T`.
    pub async fn send_as<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.send().await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Ensure a parent id was fixed before addressing one of its sub-resources.
pub(crate) fn require_id(
    id: Option<u64>,
    resource: &'static str,
    parent: &'static str,
) -> Result<u64> {
    id.ok_or(KaizenError::Chaining { resource, parent })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DEFAULT_API_URL;

    fn client(key: &str) -> ZenClient {
        ZenClient::new(key, DEFAULT_API_URL).unwrap()
    }

    #[test]
    fn test_narrow_with_and_without_id() {
        let stories = Scope::Stories {
            project: 12,
            phase: None,
            story: None,
        };
        let request = ZenRequest::new(client("key"))
            .narrow("projects", Some(12), Scope::Projects { project: Some(12) })
            .narrow("stories", None, stories);
        assert_eq!(request.request().url(), "/projects/12/stories/");
        assert_eq!(request.scope(), stories);
    }

    #[test]
    fn test_copy_same_session() {
        let source = ZenRequest::new(client("key"))
            .narrow("projects", Some(3), Scope::Projects { project: Some(3) })
            .map(|r| r.update_verb(Verb::Delete));
        let mut target = ZenRequest::new(client("key"));

        source.copy(&mut target).unwrap();
        assert_eq!(target.request(), source.request());
        assert_eq!(target.scope(), Scope::Projects { project: Some(3) });
    }

    #[test]
    fn test_scope_ids() {
        let scope = Scope::Stories {
            project: 12,
            phase: Some(4),
            story: None,
        };
        assert_eq!(scope.project(), Some(12));
        assert_eq!(scope.phase(), Some(4));
        assert_eq!(scope.story(), None);
        assert_eq!(scope.member(), None);
        assert_eq!(Scope::Root.project(), None);
        assert_eq!(Scope::Projects { project: None }.project(), None);
    }

    #[test]
    fn test_copy_rejects_other_session() {
        let source = ZenRequest::new(client("key"));
        let mut target = ZenRequest::new(client("other-key"));

        let err = source.copy(&mut target).unwrap_err();
        assert!(matches!(err, KaizenError::InvalidTarget(_)));
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id(Some(4), "phases", "project").unwrap(), 4);
        assert!(matches!(
            require_id(None, "phases", "project"),
            Err(KaizenError::Chaining { resource: "phases", parent: "project" })
        ));
    }
}
