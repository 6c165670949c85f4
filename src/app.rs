//! To-Do Frontend App
//!
//! Page shell around a single to-do list.

use leptos::prelude::*;

use crate::components::ToDoApp;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="main-content">
            <h1>"To-Do"</h1>
            <ToDoApp />
        </main>
    }
}
