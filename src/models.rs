//! Frontend Models
//!
//! Data structures for the to-do list.

/// A single to-do entry.
///
/// `id` is the 1-based insertion ordinal. Items are only ever appended, so it
/// doubles as the item's position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoItem {
    pub id: usize,
    pub text: String,
}

impl ToDoItem {
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}
