//! New Task Form Component
//!
//! Controlled input plus submit button for adding tasks.

use leptos::prelude::*;

use crate::config::{ADD_BUTTON_LABEL, NEW_TASK_PLACEHOLDER};
use crate::store::use_board_store;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_board_store();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store.add_task();
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                class="new-task-input"
                placeholder=NEW_TASK_PLACEHOLDER
                prop:value=move || store.new_task_text()
                on:input=move |ev| store.set_new_task_text(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">{ADD_BUTTON_LABEL}</button>
        </form>
    }
}
