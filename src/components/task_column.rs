//! Task Column Component
//!
//! The DO column listing active tasks.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::config::ACTIVE_COLUMN_LABEL;
use crate::store::use_board_store;

/// Active tasks, most recently added first
#[component]
pub fn TaskColumn() -> impl IntoView {
    let store = use_board_store();

    view! {
        <section class="column column-active">
            <h2 class="column-title">{ACTIVE_COLUMN_LABEL}</h2>
            <For
                each=move || store.active_rows()
                // Text and mode in the key so a saved edit or mode switch re-renders the row
                key=|row| (row.task.id, row.task.text.clone(), row.mode)
                children=move |row| view! { <TaskRow row=row /> }
            />
        </section>
    }
}
