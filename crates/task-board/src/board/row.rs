//! Row View Model
//!
//! What the DO column renders for each active task.

use crate::task::Task;

/// Whether a row shows its text or an edit field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
}

impl RowMode {
    pub fn is_editing(self) -> bool {
        matches!(self, RowMode::Editing)
    }
}

/// An active task with its view mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub task: Task,
    pub mode: RowMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskBoard;

    #[test]
    fn test_rows_follow_active_order() {
        let mut board = TaskBoard::new();
        let first = board.add_task_text("first").unwrap();
        let second = board.add_task_text("second").unwrap();

        let rows = board.active_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].task.id, second);
        assert_eq!(rows[1].task.id, first);
        assert!(rows.iter().all(|r| r.mode == RowMode::Viewing));
    }

    #[test]
    fn test_only_edited_row_is_editing() {
        let mut board = TaskBoard::new();
        let a = board.add_task_text("a").unwrap();
        let b = board.add_task_text("b").unwrap();
        board.begin_edit(a).unwrap();

        let rows = board.active_rows();
        let mode_of = |id| rows.iter().find(|r| r.task.id == id).unwrap().mode;
        assert!(mode_of(a).is_editing());
        assert!(!mode_of(b).is_editing());
    }

    #[test]
    fn test_completed_tasks_have_no_rows() {
        let mut board = TaskBoard::new();
        let id = board.add_task_text("done soon").unwrap();
        board.toggle_task(id).unwrap();
        assert!(board.active_rows().is_empty());
    }
}
