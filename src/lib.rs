//! To-Do list frontend built with Leptos (client-side rendering).

pub mod models;
pub mod store;
pub mod components;
pub mod app;

pub use app::App;
pub use components::ToDoApp;
