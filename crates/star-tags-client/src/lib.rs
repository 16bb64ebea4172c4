//! Star Tags Client
//!
//! Layered data access for the starred-repository tagging backend:
//! - domain: repositories, the tag taxonomy and filters
//! - api: HTTP client with cached, locked loads
//! - store: UI-facing state container composed over the client

pub mod api;
pub mod domain;
pub mod store;
pub mod util;

pub use api::{ApiError, ApiResult, ClientConfig, Navigator, NoopNavigator, StarTagClient};
pub use domain::{Language, Repo, RepoFilter, TagData, User};
pub use store::TagStore;
pub use util::VecExt;
