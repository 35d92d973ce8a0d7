//! Task Board
//!
//! Single owner of the widget state. The active list, completed list, add-form
//! draft and edit session only change through the methods below, so the
//! partition and edit-session invariants hold after every call.

mod row;


use serde::{Deserialize, Serialize};

use crate::entity::position_of;
use crate::error::{BoardError, BoardResult};
use crate::id::TaskIdGenerator;
use crate::task::{Task, TaskId};

pub use row::{RowMode, TaskRow};

/// The task currently being edited and its unsaved text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub text: String,
}

/// Serializable copy of the board lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub tasks: Vec<Task>,
    pub completed_tasks: Vec<Task>,
    pub editing_task_id: Option<TaskId>,
}

/// To-do board state
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    /// Not yet completed, most recently added first
    tasks: Vec<Task>,
    /// Completed, most recently completed first
    completed_tasks: Vec<Task>,
    /// Add-form input value
    new_task_text: String,
    /// At most one task in edit mode, always from `tasks`
    edit: Option<EditSession>,
    ids: TaskIdGenerator,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Queries
    // ========================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed_tasks(&self) -> &[Task] {
        &self.completed_tasks
    }

    pub fn new_task_text(&self) -> &str {
        &self.new_task_text
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Unsaved text of the edit session, empty when nothing is being edited
    pub fn edit_text(&self) -> &str {
        self.edit.as_ref().map(|s| s.text.as_str()).unwrap_or_default()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit.as_ref().is_some_and(|s| s.task_id == id)
    }

    /// Look a task up in either list
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks
            .iter()
            .chain(self.completed_tasks.iter())
            .find(|task| task.id == id)
    }

    /// Active tasks tagged with their view mode, in display order
    pub fn active_rows(&self) -> Vec<TaskRow> {
        self.tasks
            .iter()
            .map(|task| TaskRow {
                task: task.clone(),
                mode: if self.is_editing(task.id) {
                    RowMode::Editing
                } else {
                    RowMode::Viewing
                },
            })
            .collect()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tasks: self.tasks.clone(),
            completed_tasks: self.completed_tasks.clone(),
            editing_task_id: self.edit.as_ref().map(|s| s.task_id),
        }
    }

    /// Partition and edit-session invariants
    ///
    /// Active tasks are not completed, completed tasks are, no id appears
    /// twice across both lists, and the edit session points at an active task.
    pub fn is_consistent(&self) -> bool {
        let partitioned = self.tasks.iter().all(|t| !t.completed)
            && self.completed_tasks.iter().all(|t| t.completed);

        let mut seen = std::collections::HashSet::new();
        let unique = self
            .tasks
            .iter()
            .chain(self.completed_tasks.iter())
            .all(|t| seen.insert(t.id));

        let edit_valid = self
            .edit
            .as_ref()
            .map_or(true, |s| position_of(&self.tasks, s.task_id).is_some());

        partitioned && unique && edit_valid
    }

    // ========================
    // Task creation
    // ========================

    pub fn set_new_task_text(&mut self, text: impl Into<String>) {
        self.new_task_text = text.into();
    }

    /// Turn the draft into a new task at the front of the active list
    pub fn add_task(&mut self) -> BoardResult<TaskId> {
        if self.new_task_text.trim().is_empty() {
            return Err(BoardError::EmptyTaskText);
        }
        let id = self.ids.next_id()?;
        let text = std::mem::take(&mut self.new_task_text);
        self.tasks.insert(0, Task::new(id, text));

        log::debug!("added task {} ({} active)", id, self.tasks.len());
        self.check();
        Ok(id)
    }

    /// Set the draft and add it in one step
    pub fn add_task_text(&mut self, text: impl Into<String>) -> BoardResult<TaskId> {
        let previous = std::mem::replace(&mut self.new_task_text, text.into());
        let result = self.add_task();
        if result.is_err() {
            self.new_task_text = previous;
        }
        result
    }

    // ========================
    // Completion
    // ========================

    /// Move a task between the lists, returning its new `completed` flag
    ///
    /// The task lands at the front of the list it moves into.
    pub fn toggle_task(&mut self, id: TaskId) -> BoardResult<bool> {
        if let Some(index) = position_of(&self.tasks, id) {
            let mut task = self.tasks.remove(index);
            task.completed = true;
            self.completed_tasks.insert(0, task);
            if self.is_editing(id) {
                let _ = self.cancel_edit();
            }
            log::debug!("completed task {}", id);
            self.check();
            return Ok(true);
        }

        if let Some(index) = position_of(&self.completed_tasks, id) {
            let mut task = self.completed_tasks.remove(index);
            task.completed = false;
            self.tasks.insert(0, task);
            log::debug!("reopened task {}", id);
            self.check();
            return Ok(false);
        }

        Err(BoardError::TaskNotFound(id))
    }

    // ========================
    // Deletion
    // ========================

    /// Remove a task from whichever list holds it
    pub fn delete_task(&mut self, id: TaskId) -> BoardResult<Task> {
        let removed = if let Some(index) = position_of(&self.tasks, id) {
            self.tasks.remove(index)
        } else if let Some(index) = position_of(&self.completed_tasks, id) {
            self.completed_tasks.remove(index)
        } else {
            return Err(BoardError::TaskNotFound(id));
        };

        if self.is_editing(id) {
            let _ = self.cancel_edit();
        }
        log::debug!("deleted task {}", id);
        self.check();
        Ok(removed)
    }

    // ========================
    // Edit session
    // ========================

    /// Put an active task into edit mode, seeding the buffer with its text
    ///
    /// Replaces any other session; that task's unsaved text is dropped.
    pub fn begin_edit(&mut self, id: TaskId) -> BoardResult<()> {
        let Some(index) = position_of(&self.tasks, id) else {
            return Err(if position_of(&self.completed_tasks, id).is_some() {
                BoardError::TaskCompleted(id)
            } else {
                BoardError::TaskNotFound(id)
            });
        };

        if let Some(previous) = self.edit.as_ref().filter(|s| s.task_id != id) {
            log::debug!("discarding unsaved edit of task {}", previous.task_id);
        }
        self.edit = Some(EditSession {
            task_id: id,
            text: self.tasks[index].text.clone(),
        });
        log::debug!("editing task {}", id);
        self.check();
        Ok(())
    }

    /// Replace the unsaved text of the current session
    pub fn update_edit_text(&mut self, text: impl Into<String>) -> BoardResult<()> {
        let session = self.edit.as_mut().ok_or(BoardError::NoEditSession)?;
        session.text = text.into();
        Ok(())
    }

    /// Write the session buffer into its task and leave edit mode
    ///
    /// The buffer is written as-is; empty text is not rejected here.
    pub fn save_edit(&mut self) -> BoardResult<TaskId> {
        let id = self.edit.as_ref().ok_or(BoardError::NoEditSession)?.task_id;
        // Only fails if the session invariant is broken; the session is kept then
        let index = position_of(&self.tasks, id).ok_or(BoardError::TaskNotFound(id))?;
        if let Some(session) = self.edit.take() {
            self.tasks[index].text = session.text;
        }
        log::debug!("saved task {}", id);
        self.check();
        Ok(id)
    }

    /// Leave edit mode without writing
    pub fn cancel_edit(&mut self) -> BoardResult<TaskId> {
        let session = self.edit.take().ok_or(BoardError::NoEditSession)?;
        log::debug!("cancelled edit of task {}", session.task_id);
        Ok(session.task_id)
    }

    fn check(&self) {
        debug_assert!(self.is_consistent(), "board invariants violated: {:?}", self);
    }
}
