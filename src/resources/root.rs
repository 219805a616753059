//! Entry point of every request chain.

use crate::client::ZenClient;
use crate::traits::ApiRequest;

use super::{ProjectRequest, Scope, ZenRequest};

/// Request on the API root.
///
/// ```
/// use kaizen::{ApiRequest, RootRequest, ZenClient};
///
/// # fn main() -> kaizen::Result<()> {
/// let client = ZenClient::new("api-key", "https://agilezen.com/api/v1")?;
/// let project = RootRequest::new(client).projects(Some(12));
/// assert_eq!(project.state().url(), "/projects/12");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RootRequest {
    inner: ZenRequest,
}

impl RootRequest {
    pub fn new(client: ZenClient) -> Self {
        Self {
            inner: ZenRequest::new(client),
        }
    }

    /// Address one project, or every project the API key can see.
    pub fn projects(self, project_id: Option<u64>) -> ProjectRequest {
        let scope = Scope::Projects { project: project_id };
        ProjectRequest::from_parent(self.inner.narrow("projects", project_id, scope))
    }
}

impl ApiRequest for RootRequest {
    fn inner(&self) -> &ZenRequest {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut ZenRequest {
        &mut self.inner
    }
}
