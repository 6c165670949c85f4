//! UI Components
//!
//! Leptos components making up the to-do app.

mod todo_app;
mod todo_list;
mod add_todo_button;

pub use todo_app::ToDoApp;
pub use todo_list::ToDoList;
pub use add_todo_button::{AddToDoButton, ADD_TODO_LABEL};
