//! Task management module
//!
//! This module provides the tasks drawn on the clock:
//! - Task, icon and submission types
//! - The store that owns the task list and the current time

pub mod model;
pub mod store;

pub use model::{Icon, IconParseError, NewTask, Task, TaskId, TaskSpecError};
pub use store::TaskStore;
