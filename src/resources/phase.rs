//! Phase requests.

use crate::error::{KaizenError, Result};
use crate::models::PhaseFields;
use crate::request::Verb;
use crate::traits::ApiRequest;

use super::{Scope, StoryRequest, ZenRequest};

/// Request on `/projects/{project}/phases/{id?}`.
#[derive(Debug, Clone)]
pub struct PhaseRequest {
    inner: ZenRequest,
}

impl PhaseRequest {
    pub(crate) fn from_parent(inner: ZenRequest) -> Self {
        Self { inner }
    }

    pub fn project_id(&self) -> Option<u64> {
        self.inner.scope().project()
    }

    pub fn phase_id(&self) -> Option<u64> {
        self.inner.scope().phase()
    }

    /// Project and phase ids, if this request addresses exactly one phase.
    fn single_phase(&self, resource: &'static str) -> Result<(u64, u64)> {
        match self.inner.scope() {
            Scope::Phases {
                project,
                phase: Some(phase),
            } => Ok((project, phase)),
            _ => Err(KaizenError::Chaining {
                resource,
                parent: "phase",
            }),
        }
    }

    /// Address the stories sitting in this phase.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Chaining`](crate::KaizenError::Chaining) when
    /// no phase id was given.
    pub fn stories(self) -> Result<StoryRequest> {
        let (project, phase) = self.single_phase("stories")?;
        let scope = Scope::Stories {
            project,
            phase: Some(phase),
            story: None,
        };
        Ok(StoryRequest::from_parent(self.inner.narrow("stories", None, scope)))
    }

    /// Create a phase (POST). Unset fields are not sent.
    pub fn add(self, fields: &PhaseFields) -> Result<Self> {
        Ok(Self {
            inner: self.inner.write(fields, Verb::Post)?,
        })
    }

    /// Update this phase (PUT). Unset fields are not sent.
    pub fn update(self, fields: &PhaseFields) -> Result<Self> {
        Ok(Self {
            inner: self.inner.write(fields, Verb::Put)?,
        })
    }

    /// Delete this phase.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Chaining`](crate::KaizenError::Chaining) when
    /// no phase id was given.
    pub fn delete(self) -> Result<Self> {
        self.single_phase("deletion")?;
        Ok(Self {
            inner: self.inner.map(|request| request.update_verb(Verb::Delete)),
        })
    }
}

impl ApiRequest for PhaseRequest {
    fn inner(&self) -> &ZenRequest {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut ZenRequest {
        &mut self.inner
    }
}
