//! Domain Layer
//!
//! Entities returned by the backend and the pure rules applied to them.
//! Nothing here touches the network.

mod filter;
mod language;
mod repo;
mod tag_data;
mod user;

pub use filter::RepoFilter;
pub use language::{languages_of, Language};
pub use repo::Repo;
pub use tag_data::TagData;
pub use user::User;
