//! Project requests and their sub-resources.

use crate::error::Result;
use crate::models::{ProjectFields, ProjectUpdate};
use crate::request::Verb;
use crate::traits::ApiRequest;

use super::{require_id, MemberRequest, PhaseRequest, Scope, StoryRequest, ZenRequest};

/// Request on `/projects/{id?}`.
///
/// Without an id the request lists projects; phases, stories and members
/// are only reachable once a project id is fixed.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    inner: ZenRequest,
}

impl ProjectRequest {
    pub(crate) fn from_parent(inner: ZenRequest) -> Self {
        Self { inner }
    }

    pub fn project_id(&self) -> Option<u64> {
        self.inner.scope().project()
    }

    /// The project id, if this request addresses exactly one project.
    fn single_project(&self, resource: &'static str) -> Result<u64> {
        let project = match self.inner.scope() {
            Scope::Projects { project } => project,
            _ => None,
        };
        require_id(project, resource, "project")
    }

    /// Address one phase of this project, or all of them.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Chaining`](crate::KaizenError::Chaining) when
    /// no project id was given.
    pub fn phases(self, phase_id: Option<u64>) -> Result<PhaseRequest> {
        let project = self.single_project("phases")?;
        let scope = Scope::Phases {
            project,
            phase: phase_id,
        };
        Ok(PhaseRequest::from_parent(self.inner.narrow("phases", phase_id, scope)))
    }

    /// Address one story of this project, or all of them.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Chaining`](crate::KaizenError::Chaining) when
    /// no project id was given.
    pub fn stories(self, story_id: Option<u64>) -> Result<StoryRequest> {
        let project = self.single_project("stories")?;
        let scope = Scope::Stories {
            project,
            phase: None,
            story: story_id,
        };
        Ok(StoryRequest::from_parent(self.inner.narrow("stories", story_id, scope)))
    }

    /// Address one member of this project, or all of them.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Chaining`](crate::KaizenError::Chaining) when
    /// no project id was given.
    pub fn members(self, member_id: Option<u64>) -> Result<MemberRequest> {
        let project = self.single_project("members")?;
        let scope = Scope::Members {
            project,
            member: member_id,
        };
        Ok(MemberRequest::from_parent(self.inner.narrow("members", member_id, scope)))
    }

    /// Create a project (POST). Unset fields are not sent.
    pub fn add(self, fields: &ProjectFields) -> Result<Self> {
        Ok(Self {
            inner: self.inner.write(fields, Verb::Post)?,
        })
    }

    /// Update this project (PUT). Unset fields are not sent.
    pub fn update(self, update: &ProjectUpdate) -> Result<Self> {
        Ok(Self {
            inner: self.inner.write(update, Verb::Put)?,
        })
    }
}

impl ApiRequest for ProjectRequest {
    fn inner(&self) -> &ZenRequest {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut ZenRequest {
        &mut self.inner
    }
}
