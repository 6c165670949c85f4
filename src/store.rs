//! To-Do List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store is
//! created per `ToDoApp` instance and shared with its children via context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ToDoItem;

/// Labels of the items present right after mount.
pub const SEED_LABELS: [&str; 3] = [
    "Buy groceries",
    "Walk the dog",
    "Write the weekly report",
];

/// To-do list state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct ToDoState {
    /// Items in insertion order, rendered top-to-bottom
    pub items: Vec<ToDoItem>,
}

impl ToDoState {
    /// State holding exactly the seed items.
    pub fn seeded() -> Self {
        let items = SEED_LABELS
            .iter()
            .zip(1usize..)
            .map(|(label, id)| ToDoItem::new(id, *label))
            .collect();
        Self { items }
    }

    /// Append one new item at the end and return it.
    pub fn add_item(&mut self) -> ToDoItem {
        append(&mut self.items)
    }
}

impl Default for ToDoState {
    fn default() -> Self {
        Self::seeded()
    }
}

/// The item that would be appended after `items`.
pub fn next_item(items: &[ToDoItem]) -> ToDoItem {
    let id = items.len() + 1;
    ToDoItem::new(id, format!("To do #{}", id))
}

/// Push the next item onto `items` and return a copy of it.
pub fn append(items: &mut Vec<ToDoItem>) -> ToDoItem {
    let item = next_item(items);
    items.push(item.clone());
    item
}

/// Type alias for the store
pub type ToDoStore = Store<ToDoState>;

/// Get the to-do store provided by the enclosing `ToDoApp`
pub fn use_todo_store() -> ToDoStore {
    expect_context::<ToDoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new item to the store, notifying the list
pub fn store_add_item(store: &ToDoStore) -> ToDoItem {
    let field = store.items();
    let mut items = field.write();
    append(&mut items)
}
