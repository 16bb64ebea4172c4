//! UI Components
//!
//! Reusable Leptos components for the Star Tags layout.

mod delete_confirm_button;
mod readme_panel;
mod repo_list;
mod sidebar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use readme_panel::ReadmePanel;
pub use repo_list::RepoList;
pub use sidebar::Sidebar;
