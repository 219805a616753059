//! AgileZen API client.
//!
//! Low-level HTTP transport that attaches the API key and turns an
//! accumulated [`Request`] into a JSON document. Building requests is the
//! job of the resource types in [`crate::resources`].

use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use crate::error::{KaizenError, Result};
use crate::request::Request;

/// Default AgileZen API root.
pub const DEFAULT_API_URL: &str = "https://agilezen.com/api/v1";

/// Header carrying the API key (`X-Zen-ApiKey`).
pub const API_KEY_HEADER: &str = "x-zen-apikey";

const USER_AGENT: &str = concat!("kaizen/", env!("CARGO_PKG_VERSION"));

/// Low-level AgileZen API client.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use kaizen::ZenClient;
///
/// # fn example() -> kaizen::Result<()> {
/// // Create from environment variables
/// let client = ZenClient::from_env()?;
///
/// // Or configure manually
/// let client = ZenClient::new("your-api-key", "https://agilezen.com/api/v1")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ZenClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
}

impl std::fmt::Debug for ZenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZenClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ZenClient {
    /// Create a client from environment variables.
    ///
    /// Uses `KAIZEN_API_KEY` for authentication and optionally `KAIZEN_API_URL`
    /// for the API root (defaults to `https://agilezen.com/api/v1`).
    ///
    /// # Errors
    ///
    /// Returns an error if `KAIZEN_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("KAIZEN_API_KEY").map_err(|_| {
            KaizenError::Config("KAIZEN_API_KEY environment variable not set".to_string())
        })?;

        let base_url =
            env::var("KAIZEN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&api_key, &base_url)
    }

    /// Create a new client with the provided API key and API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the API root is not a valid URL.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so relative paths join below it
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(KaizenError::Http)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
        })
    }

    /// Get the API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether both clients talk to the same API root with the same key.
    pub fn same_session(&self, other: &ZenClient) -> bool {
        self.base_url == other.base_url && self.api_key == other.api_key
    }

    /// Full URL of a resource path relative to the API root.
    ///
    /// Leading slashes are ignored so `/projects/` and `projects/` resolve
    /// to the same resource.
    pub fn resource_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| KaizenError::Config("API key contains invalid characters".to_string()))?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);
        Ok(headers)
    }

    /// Send a request and decode the JSON response.
    ///
    /// The body is always sent as JSON, `{}` when the request carries no
    /// data. An empty response body decodes to `null`.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Transport`] for any non-success status and
    /// [`KaizenError::Http`] when the call itself fails.
    #[tracing::instrument(skip(self, request), fields(verb = %request.verb(), path = request.url()))]
    pub async fn send(&self, request: &Request) -> Result<Value> {
        let url = self.resource_url(request.url())?;
        let started = Instant::now();

        let response = self
            .http
            .request(request.verb().into(), url.clone())
            .headers(self.headers()?)
            .query(request.params())
            .json(request.data())
            .send()
            .await
            .map_err(KaizenError::Http)?;

        let response = Self::check_response(response).await?;
        tracing::debug!(
            "request issued to '{}' [{:.3} s]",
            url,
            started.elapsed().as_secs_f64()
        );

        let body = response.text().await.map_err(KaizenError::Http)?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = Self::extract_error_message(&body, status);
        Err(KaizenError::Transport {
            status: status.as_u16(),
            message,
            body,
        })
    }

    /// Extract error message from a failed response body.
    fn extract_error_message(body: &str, status: reqwest::StatusCode) -> String {
        if let Ok(json) = serde_json::from_str::<Value>(body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        match status.canonical_reason() {
            Some(reason) => reason.to_string(),
            None => format!("HTTP {status}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = ZenClient::new("test-key", DEFAULT_API_URL).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("ZenClient"));
        assert!(debug.contains("base_url"));
        // Key should not be in debug output
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn test_resource_url() {
        let client = ZenClient::new("key", DEFAULT_API_URL).unwrap();
        let full_url = "https://agilezen.com/api/v1/fake_url";
        assert_eq!(client.resource_url("/fake_url").unwrap().as_str(), full_url);
        assert_eq!(client.resource_url("fake_url").unwrap().as_str(), full_url);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = ZenClient::new("key", "https://agilezen.com/api/v1").unwrap();
        let client2 = ZenClient::new("key", "https://agilezen.com/api/v1/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_same_session() {
        let a = ZenClient::new("key", DEFAULT_API_URL).unwrap();
        let b = ZenClient::new("key", "https://agilezen.com/api/v1/").unwrap();
        let c = ZenClient::new("other", DEFAULT_API_URL).unwrap();
        assert!(a.same_session(&b));
        assert!(!a.same_session(&c));
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        let msg = ZenClient::extract_error_message(
            r#"{"message": "Project not found"}"#,
            reqwest::StatusCode::NOT_FOUND,
        );
        assert_eq!(msg, "Project not found");

        let msg = ZenClient::extract_error_message("", reqwest::StatusCode::NOT_FOUND);
        assert_eq!(msg, "Not Found");
    }
}
