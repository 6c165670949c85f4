//! To-Do App Component
//!
//! Owns one to-do store per mounted instance and lays out the list,
//! its count and the add control.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddToDoButton, ToDoList};
use crate::store::{ToDoState, ToDoStateStoreFields, ToDoStore};

/// To-do list with a single "Add to do" control
#[component]
pub fn ToDoApp() -> impl IntoView {
    let store: ToDoStore = Store::new(ToDoState::seeded());
    // Scoped to this instance's subtree
    provide_context(store);

    web_sys::console::log_1(&format!("[ToDoApp] Mounted with {} items", store.items().read_untracked().len()).into());

    view! {
        <section class="todo-app">
            <ToDoList />
            <p class="todo-count">{move || format!("{} items", store.items().read().len())}</p>
            <AddToDoButton />
        </section>
    }
}
