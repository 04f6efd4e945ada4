//! UI Components
//!
//! Reusable Leptos components.

mod user_browser;
mod user_list;

pub use user_browser::UserBrowser;
pub use user_list::UserList;
