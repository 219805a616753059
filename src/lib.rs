//! AgileZen API client library.
//!
//! A Rust library for building and sending requests against the AgileZen
//! REST API. Requests are built by chaining narrowing calls from a root
//! request down to the resource you want, then sent once.
//!
//! # Quick Start
//!
//! ```no_run
//! use kaizen::{ApiRequest, RootRequest, StoryFields, ZenClient};
//!
//! #[tokio::main]
//! async fn main() -> kaizen::Result<()> {
//!     // Create client from environment variables
//!     let client = ZenClient::from_env()?;
//!     let root = RootRequest::new(client);
//!
//!     // Get a project with its phases
//!     let project = root
//!         .clone()
//!         .projects(Some(12))
//!         .with_enrichments(["phases"])
//!         .send()
//!         .await?;
//!     println!("Project: {}", project["name"]);
//!
//!     // Add a story to it
//!     let story = root
//!         .projects(Some(12))
//!         .stories(None)?
//!         .add(&StoryFields::text("Write the release notes"))?
//!         .send()
//!         .await?;
//!     println!("Created story {}", story["id"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Request`] accumulates verb, path, query parameters and body.
//! - [`RootRequest`], [`ProjectRequest`], [`PhaseRequest`], [`StoryRequest`]
//!   and [`MemberRequest`] each extend that state with their own path
//!   segment and fields. Sub-resources are only reachable once the parent
//!   id is known.
//! - [`ApiRequest`] gives every resource request pagination, filtering,
//!   enrichments and sending.
//! - [`ZenClient`] sends the accumulated request.
//! - [`ZenApi`] implements the workflow operations used by the CLI.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `KAIZEN_API_KEY` (required) - Your AgileZen API key
//! - `KAIZEN_API_URL` (optional) - API root (defaults to `https://agilezen.com/api/v1`)
//!
//! The CLI additionally reads a YAML [`Config`] file.

mod api;
mod client;
mod config;
mod error;
mod models;
mod output;
mod pagination;
mod request;
mod resources;
mod traits;

pub mod cli;

// Re-export core types
pub use client::{ZenClient, API_KEY_HEADER, DEFAULT_API_URL};
pub use config::{Config, PhaseNames};
pub use error::{KaizenError, Result};
pub use pagination::{Page, PaginationParams, DEFAULT_PAGE_SIZE};
pub use request::{Request, Verb};

// Re-export request types
pub use resources::{
    MemberRequest, PhaseRequest, ProjectRequest, RootRequest, Scope, StoryRequest,
    ZenRequest,
};
pub use traits::ApiRequest;

// Re-export models
pub use models::{
    Member, Phase, PhaseFields, PhaseRef, Project, ProjectFields, ProjectUpdate, Story,
    StoryColor, StoryFields, StoryStatus, StoryUpdate, UserRef,
};

// Re-export higher-level operations
pub use api::{next_phase_id, phase_id_by_name, ZenApi};

// Re-export output formatting
pub use output::{PhaseRow, PrettyPrint, ProjectRow, StoryRow};
