//! Add To-Do Button Component
//!
//! The only control that mutates the list. Each click appends exactly one
//! item; the keyed list picks the change up and re-renders.

use leptos::prelude::*;

use crate::store::{store_add_item, use_todo_store, ToDoStateStoreFields};

/// Visible label of the add control
pub const ADD_TODO_LABEL: &str = "Add to do";

#[component]
pub fn AddToDoButton() -> impl IntoView {
    let store = use_todo_store();

    let on_add = move |_: web_sys::MouseEvent| {
        let item = store_add_item(&store);
        let len = store.items().read_untracked().len();
        web_sys::console::log_1(&format!("[AddToDo] Added item {}, list now has {} items", item.id, len).into());
    };

    view! {
        <button type="button" class="add-todo-btn" on:click=on_add>
            {ADD_TODO_LABEL}
        </button>
    }
}
