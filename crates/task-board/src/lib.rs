//! Task Board State
//!
//! In-memory model behind the to-do widget:
//! - task: the `Task` entity and its identifier
//! - id: session-wide id allocation
//! - board: the `TaskBoard` state holder and its row view model
//! - error: board errors (all of them mean "nothing changed")

mod entity;
mod error;
mod id;
mod task;
mod board;

pub use entity::Entity;
pub use error::{BoardError, BoardResult};
pub use task::{Task, TaskId};
pub use board::{BoardSnapshot, EditSession, RowMode, TaskBoard, TaskRow};
