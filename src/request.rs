//! Request state accumulated while a chain of calls narrows a resource.
//!
//! A [`Request`] holds the verb, the path relative to the API root, the
//! query parameters and the JSON body. Every mutation consumes the request
//! and hands it back so calls can be chained:
//!
//! ```
//! use kaizen::{Request, Verb};
//!
//! let request = Request::new()
//!     .update_verb(Verb::Post)
//!     .update_url("/projects/12")
//!     .update_params([("with", "metrics")]);
//!
//! assert_eq!(request.verb(), Verb::Post);
//! assert_eq!(request.url(), "/projects/12");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{KaizenError, Result};

/// HTTP verbs accepted by the AgileZen API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Verb {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// All supported verbs.
    pub const ALL: [Verb; 4] = [Verb::Get, Verb::Post, Verb::Put, Verb::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = KaizenError;

    fn from_str(s: &str) -> Result<Self> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| KaizenError::InvalidVerb(s.to_string()))
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Accumulated verb, path, query parameters and body of an API call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    verb: Verb,
    url: String,
    params: BTreeMap<String, String>,
    data: Map<String, Value>,
}

impl Request {
    /// Create an empty GET request on the API root.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// Path relative to the API root.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    #[must_use]
    pub fn update_verb(mut self, verb: Verb) -> Self {
        self.verb = verb;
        self
    }

    /// Set the verb from its name.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::InvalidVerb`] for anything but
    /// `GET`, `POST`, `PUT` or `DELETE`.
    pub fn try_update_verb(self, verb: &str) -> Result<Self> {
        let verb = verb.parse()?;
        Ok(self.update_verb(verb))
    }

    /// Append a fragment verbatim to the accumulated path.
    #[must_use]
    pub fn update_url(mut self, fragment: &str) -> Self {
        self.url.push_str(fragment);
        self
    }

    /// Merge query parameters, overwriting existing keys.
    #[must_use]
    pub fn update_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    /// Merge body fields, overwriting existing keys.
    ///
    /// `null` values stand for "not provided" and are dropped instead of
    /// being sent.
    #[must_use]
    pub fn update_data(mut self, data: Map<String, Value>) -> Self {
        self.data
            .extend(data.into_iter().filter(|(_, value)| !value.is_null()));
        self
    }

    /// Merge the fields of a serializable value into the body.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::Parse`] if `fields` does not serialize to a
    /// JSON object.
    pub fn update_fields<T: Serialize + ?Sized>(self, fields: &T) -> Result<Self> {
        match serde_json::to_value(fields)? {
            Value::Object(map) => Ok(self.update_data(map)),
            other => Err(KaizenError::Parse(<serde_json::Error as serde::ser::Error>::custom(format!(
                "expected an object of fields, got {other}"
            )))),
        }
    }

    /// Duplicate this request's state into `target` and return it.
    #[must_use]
    pub fn copy(&self, mut target: Request) -> Request {
        target.verb = self.verb;
        target.url.clone_from(&self.url);
        target.params.clone_from(&self.params);
        target.data.clone_from(&self.data);
        target
    }
}
