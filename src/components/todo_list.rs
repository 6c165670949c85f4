//! To-Do List Component

use leptos::prelude::*;

use crate::store::{use_todo_store, ToDoStateStoreFields};

/// Renders the store's items as `ul > li`, in insertion order
#[component]
pub fn ToDoList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| {
                    view! {
                        <li class="todo-item" data-id=item.id.to_string()>{item.text}</li>
                    }
                }
            />
        </ul>
    }
}
