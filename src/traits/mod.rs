//! Trait definitions shared by the resource requests.
//!
//! Each resource request implements [`ApiRequest`] and gets the common
//! narrowing operations (pagination, filtering, enrichments) and sending.

mod request;

pub use request::ApiRequest;
