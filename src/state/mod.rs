//! State Management
//!
//! Session store, toast notifications and task-list query state.

pub mod notify;
pub mod query;
pub mod session;

pub use notify::Notifier;
pub use query::{SortField, TaskListQuery, PAGE_SIZE};
pub use session::{Session, User};
