//! Member requests.

use crate::error::Result;
use crate::request::Verb;
use crate::traits::ApiRequest;

use super::{require_id, ZenRequest};

/// Request on `/projects/{project}/members/{id?}`.
#[derive(Debug, Clone)]
pub struct MemberRequest {
    inner: ZenRequest,
}

impl MemberRequest {
    pub(crate) fn from_parent(inner: ZenRequest) -> Self {
        Self { inner }
    }

    pub fn project_id(&self) -> Option<u64> {
        self.inner.scope().project()
    }

    pub fn member_id(&self) -> Option<u64> {
        self.inner.scope().member()
    }

    /// Remove this member from the project.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Chaining`](crate::KaizenError::Chaining) when
    /// no member id was given.
    pub fn delete(self) -> Result<Self> {
        require_id(self.member_id(), "deletion", "member")?;
        Ok(Self {
            inner: self.inner.map(|request| request.update_verb(Verb::Delete)),
        })
    }
}

impl ApiRequest for MemberRequest {
    fn inner(&self) -> &ZenRequest {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut ZenRequest {
        &mut self.inner
    }
}
