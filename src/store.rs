//! Board Store
//!
//! The whole board lives in one signal provided via context. Components read
//! through the tracked getters and mutate through the action methods, which
//! turn board errors into silent no-ops.

use leptos::prelude::*;
use task_board::{BoardResult, Task, TaskBoard, TaskId, TaskRow};

/// Handle to the board signal
#[derive(Clone, Copy)]
pub struct BoardStore {
    board: RwSignal<TaskBoard>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self {
            board: RwSignal::new(TaskBoard::new()),
        }
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn active_rows(&self) -> Vec<TaskRow> {
        self.board.with(|b| b.active_rows())
    }

    pub fn completed_tasks(&self) -> Vec<Task> {
        self.board.with(|b| b.completed_tasks().to_vec())
    }

    pub fn new_task_text(&self) -> String {
        self.board.with(|b| b.new_task_text().to_string())
    }

    pub fn edit_text(&self) -> String {
        self.board.with(|b| b.edit_text().to_string())
    }

    /// (active, completed)
    pub fn counts(&self) -> (usize, usize) {
        self.board.with(|b| (b.tasks().len(), b.completed_tasks().len()))
    }

    // ========================
    // Actions
    // ========================

    pub fn set_new_task_text(&self, text: String) {
        self.board.update(|b| b.set_new_task_text(text));
    }

    pub fn add_task(&self) -> Option<TaskId> {
        self.apply("add", |b| b.add_task())
    }

    pub fn toggle_task(&self, id: TaskId) {
        self.apply("toggle", |b| b.toggle_task(id));
    }

    pub fn delete_task(&self, id: TaskId) {
        self.apply("delete", |b| b.delete_task(id));
    }

    pub fn begin_edit(&self, id: TaskId) {
        self.apply("begin edit", |b| b.begin_edit(id));
    }

    pub fn update_edit_text(&self, text: String) {
        self.apply("update edit", |b| b.update_edit_text(text));
    }

    pub fn save_edit(&self) {
        self.apply("save edit", |b| b.save_edit());
    }

    /// Save if `id` is being edited, otherwise start editing it
    pub fn edit_or_save(&self, id: TaskId) {
        if self.board.with_untracked(|b| b.is_editing(id)) {
            self.save_edit();
        } else {
            self.begin_edit(id);
        }
    }

    /// Run one board mutation; subscribers are only notified when it applied
    fn apply<T>(
        &self,
        action: &str,
        op: impl FnOnce(&mut TaskBoard) -> BoardResult<T>,
    ) -> Option<T> {
        let outcome = self.board.try_maybe_update(|board| {
            let result = op(board);
            if result.is_ok() && log::log_enabled!(log::Level::Trace) {
                if let Ok(json) = serde_json::to_string(&board.snapshot()) {
                    log::trace!("{} -> {}", action, json);
                }
            }
            (result.is_ok(), result)
        })?;

        match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("{} ignored: {}", action, err);
                None
            }
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(store: &BoardStore, id: TaskId) -> String {
        store
            .board
            .with_untracked(|b| b.find(id).map(|t| t.text.clone()))
            .expect("task should exist")
    }

    fn add(store: &BoardStore, text: &str) -> TaskId {
        store.set_new_task_text(text.to_string());
        store.add_task().expect("Failed to add task")
    }

    #[test]
    fn test_edit_or_save_switches_and_saves() {
        Owner::new().with(|| {
            let store = BoardStore::new();
            let a = add(&store, "a");
            let b = add(&store, "b");

            // Viewing row: the button starts editing
            store.edit_or_save(a);
            assert_eq!(store.edit_text(), "a");
            store.update_edit_text("a draft".to_string());

            // Another row takes over the single edit slot
            store.edit_or_save(b);
            assert_eq!(store.edit_text(), "b");
            assert_eq!(text_of(&store, a), "a");

            // Editing row: the button saves
            store.update_edit_text("b saved".to_string());
            store.edit_or_save(b);
            assert_eq!(text_of(&store, b), "b saved");
            assert_eq!(store.edit_text(), "");
            assert!(store.active_rows().iter().all(|r| !r.mode.is_editing()));
        });
    }

    #[test]
    fn test_rejected_actions_are_ignored() {
        Owner::new().with(|| {
            let store = BoardStore::new();
            let a = add(&store, "a");
            store.toggle_task(a);
            add(&store, "b");
            let before = store.counts();

            store.set_new_task_text("   ".to_string());
            assert_eq!(store.add_task(), None);
            assert_eq!(store.new_task_text(), "   ");

            store.delete_task(TaskId(99));
            store.toggle_task(TaskId(99));
            store.save_edit();
            store.begin_edit(a);
            assert_eq!(store.counts(), before);
            assert_eq!(before, (1, 1));
            assert_eq!(store.edit_text(), "");
        });
    }
}
