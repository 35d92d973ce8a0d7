//! UI Constants
//!
//! Labels and behavior knobs for the board view.

/// Page heading
pub const TITLE: &str = "TO DO LIST";

/// Column headings (active, completed)
pub const ACTIVE_COLUMN_LABEL: &str = "DO";
pub const COMPLETED_COLUMN_LABEL: &str = "DONE";

/// Add form
pub const NEW_TASK_PLACEHOLDER: &str = "Add a new task...";
pub const ADD_BUTTON_LABEL: &str = "Add Task";

/// Key that saves the edit field
pub const COMMIT_KEY: &str = "Enter";

/// Most verbose level forwarded to the browser console
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Whether a `keydown` key name commits the current edit
pub fn is_commit_key(key: &str) -> bool {
    key == COMMIT_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_enter_commits() {
        assert!(is_commit_key("Enter"));
        assert!(!is_commit_key("enter"));
        assert!(!is_commit_key("Escape"));
        assert!(!is_commit_key(""));
    }
}
