//! TaskBoard App
//!
//! Page layout: heading, add form, DO and DONE columns, counts footer.

use leptos::prelude::*;

use crate::components::{DoneColumn, NewTaskForm, TaskColumn};
use crate::config::TITLE;
use crate::store::BoardStore;

#[component]
pub fn App() -> impl IntoView {
    let store = BoardStore::new();
    // Provide the board to all children
    provide_context(store);
    log::info!("board mounted");

    view! {
        <div class="app-layout">
            <div class="logo"></div>
            <h1 class="app-title">{TITLE}</h1>

            <main class="board">
                <NewTaskForm />

                <div class="columns">
                    <TaskColumn />
                    <DoneColumn />
                </div>

                <p class="task-count">
                    {move || {
                        let (active, done) = store.counts();
                        format!("{} to do, {} done", active, done)
                    }}
                </p>
            </main>
        </div>
    }
}
