//! Operations common to every resource request.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::pagination::PaginationParams;
use crate::request::Request;
use crate::resources::ZenRequest;

/// Access to the accumulated request state of a resource request.
///
/// Implementors only expose their [`ZenRequest`]; the provided methods
/// narrow the query and send it.
///
/// # Example
///
/// ```no_run
/// use kaizen::{ApiRequest, RootRequest, ZenClient};
///
/// # async fn example() -> kaizen::Result<()> {
/// let client = ZenClient::from_env()?;
/// let stories = RootRequest::new(client)
///     .projects(Some(12))
///     .stories(None)?
///     .filter("color:green")
///     .with_enrichments(["tags", "tasks"])
///     .paginate(2, 50)
///     .send()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ApiRequest: Sized + Send + Sync {
    /// The session-bound request state.
    fn inner(&self) -> &ZenRequest;

    /// Mutable access to the session-bound request state.
    fn inner_mut(&mut self) -> &mut ZenRequest;

    /// The accumulated verb, path, params and body.
    fn state(&self) -> &Request {
        self.inner().request()
    }

    /// Transform the accumulated state, keeping the resource type.
    #[must_use]
    fn map_state(mut self, f: impl FnOnce(Request) -> Request) -> Self {
        self.inner_mut().apply(f);
        self
    }

    /// Select a page of a collection.
    #[must_use]
    fn paginate(self, page: u32, page_size: u32) -> Self {
        let params = PaginationParams::for_page(page, page_size);
        self.map_state(|request| request.update_params(params.to_query()))
    }

    /// Filter a collection with a raw AgileZen filter expression.
    ///
    /// Sent verbatim as the `where` parameter; the API validates it.
    #[must_use]
    fn filter(self, expression: &str) -> Self {
        self.map_state(|request| request.update_params([("where", expression)]))
    }

    /// Ask for related data to be embedded in the response.
    ///
    /// Names are sent comma-joined in the `with` parameter; unknown names
    /// are rejected by the API, not here.
    #[must_use]
    fn with_enrichments<I, S>(self, enrichments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = enrichments
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.map_state(|request| request.update_params([("with", joined)]))
    }

    /// Duplicate verb, path, params and body into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::InvalidTarget`](crate::KaizenError::InvalidTarget)
    /// when `target` is bound to another API session.
    fn copy_into<T: ApiRequest>(&self, mut target: T) -> Result<T> {
        self.inner().copy(target.inner_mut())?;
        Ok(target)
    }

    /// Send the request and return the decoded JSON document.
    async fn send(&self) -> Result<Value> {
        self.inner().send().await
    }

    /// Send the request and decode the response into `T`.
    async fn send_as<T: DeserializeOwned + Send>(&self) -> Result<T> {
        self.inner().send_as().await
    }
}
