//! Todo Models
//!
//! Item and state structures shared by the reducer, the synchronizer and the UI.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, immutable identifier of a todo item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItemId(String);

impl TodoItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoItemId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub done: bool,
}

impl TodoItem {
    /// Create a not-yet-done item
    pub fn new(id: TodoItemId, title: impl Into<String>, details: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            details,
            done: false,
        }
    }
}

/// Payload of the `add` action
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewTodoItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl NewTodoItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// The ordered item list; the unit of persistence and of reducer transitions.
///
/// Serialized as `{ "todoItems": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemsState {
    pub todo_items: Vec<TodoItem>,
}

impl TodoItemsState {
    pub fn new(todo_items: Vec<TodoItem>) -> Self {
        Self { todo_items }
    }

    pub fn len(&self) -> usize {
        self.todo_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todo_items.is_empty()
    }

    /// First id that occurs more than once, if any
    pub fn duplicate_id(&self) -> Option<&TodoItemId> {
        let mut seen = HashSet::with_capacity(self.todo_items.len());
        self.todo_items
            .iter()
            .map(|item| &item.id)
            .find(|id| !seen.insert(*id))
    }

    pub fn done_count(&self) -> usize {
        self.todo_items.iter().filter(|item| item.done).count()
    }
}
