//! Task Id Allocation
//!
//! Ids come from one counter per board, so a deleted or completed task's id is
//! never handed out again during the session.

use crate::error::{BoardError, BoardResult};
use crate::task::TaskId;

/// Monotonic task id counter, starting at 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskIdGenerator {
    next: u32,
}

impl Default for TaskIdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next call to `next_id` will return
    #[cfg(test)]
    pub fn peek(&self) -> TaskId {
        TaskId(self.next)
    }

    /// Allocate the next id
    pub fn next_id(&mut self) -> BoardResult<TaskId> {
        let id = TaskId(self.next);
        self.next = self.next.checked_add(1).ok_or(BoardError::IdsExhausted)?;
        Ok(id)
    }
}
