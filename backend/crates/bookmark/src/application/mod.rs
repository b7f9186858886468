//! Application Layer
//!
//! Use cases for the bookmark domain.

pub mod add_bookmark;
pub mod config;
pub mod list_bookmarks;
pub mod remove_bookmark;
mod update_list;

// Re-exports
pub use add_bookmark::AddBookmarkUseCase;
pub use config::BookmarkConfig;
pub use list_bookmarks::ListBookmarksUseCase;
pub use remove_bookmark::RemoveBookmarkUseCase;
