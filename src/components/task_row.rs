//! Task Row Component
//!
//! One active task: checkbox, text or edit field, edit/save and delete buttons.

use leptos::html;
use leptos::prelude::*;
use task_board::{RowMode, TaskRow as Row};

use crate::components::{Icon, IconButton};
use crate::config::is_commit_key;
use crate::logging;
use crate::store::use_board_store;

/// A single row in the DO column
#[component]
pub fn TaskRow(row: Row) -> impl IntoView {
    let store = use_board_store();

    let id = row.task.id;
    let completed = row.task.completed;
    let text = row.task.text;

    let body = match row.mode {
        RowMode::Editing => {
            let input_ref = NodeRef::<html::Input>::new();
            // Focus the field as soon as it is mounted
            Effect::new(move |_| {
                if let Some(input) = input_ref.get() {
                    logging::debug_on_err("focus edit field", input.focus());
                }
            });

            view! {
                <input
                    type="text"
                    class="edit-input"
                    node_ref=input_ref
                    prop:value=move || store.edit_text()
                    on:input=move |ev| store.update_edit_text(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if is_commit_key(&ev.key()) {
                            ev.prevent_default();
                            store.save_edit();
                        }
                    }
                />
            }
            .into_any()
        }
        RowMode::Viewing => view! { <span class="task-text">{text}</span> }.into_any(),
    };

    let action_icon = if row.mode.is_editing() { Icon::Save } else { Icon::Edit };

    view! {
        <div class="task-row">
            <div class="task-main">
                <input
                    type="checkbox"
                    class="task-check"
                    prop:checked=completed
                    on:change=move |_| store.toggle_task(id)
                />
                {body}
            </div>
            <div class="task-actions">
                <IconButton icon=action_icon on_press=move |_| store.edit_or_save(id) />
                <IconButton icon=Icon::Delete on_press=move |_| store.delete_task(id) />
            </div>
        </div>
    }
}
