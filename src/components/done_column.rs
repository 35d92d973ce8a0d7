//! Done Column Component
//!
//! Completed task texts, struck through. No controls.

use leptos::prelude::*;

use crate::config::COMPLETED_COLUMN_LABEL;
use crate::store::use_board_store;

#[component]
pub fn DoneColumn() -> impl IntoView {
    let store = use_board_store();

    view! {
        <section class="column column-done">
            <h2 class="column-title">{COMPLETED_COLUMN_LABEL}</h2>
            <For
                each=move || store.completed_tasks()
                key=|task| (task.id, task.text.clone())
                children=move |task| view! { <p class="done-text">{task.text}</p> }
            />
        </section>
    }
}
