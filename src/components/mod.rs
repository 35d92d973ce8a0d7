//! UI Components
//!
//! Leptos components for the board view.

mod new_task_form;
mod task_column;
mod task_row;
mod done_column;
mod icon_button;

pub use new_task_form::NewTaskForm;
pub use task_column::TaskColumn;
pub use task_row::TaskRow;
pub use done_column::DoneColumn;
pub use icon_button::{Icon, IconButton};
