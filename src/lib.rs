pub mod config;
pub mod dispatch;
pub mod error;
pub mod log;
pub mod part;
pub mod runner;
pub mod task;

pub use error::{Error, Result};
pub use part::Part;
pub use task::{Task, TaskGroup, TaskReport};
