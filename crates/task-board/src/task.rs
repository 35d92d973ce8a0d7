//! Task Entity
//!
//! One to-do item.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Session-unique task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Task description
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(TaskId(3), "Buy milk");
        assert_eq!(task.id(), TaskId(3));
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_id_serializes_as_number() {
        let task = Task::new(TaskId(7), "Walk dog");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(12).to_string(), "#12");
    }
}
