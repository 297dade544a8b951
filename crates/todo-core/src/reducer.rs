//! State Reducer
//!
//! `(state, action) -> state`. The input state is never modified; every call
//! returns a freshly built value.

use crate::action::TodoAction;
use crate::id::IdGenerator;
use crate::model::{TodoItem, TodoItemsState};

pub fn reduce(state: &TodoItemsState, action: TodoAction, ids: &dyn IdGenerator) -> TodoItemsState {
    match action {
        TodoAction::LoadState(data) => data,
        TodoAction::Add { todo_item: new_item } => {
            let mut todo_items = Vec::with_capacity(state.todo_items.len() + 1);
            todo_items.push(TodoItem::new(ids.next_id(), new_item.title, new_item.details));
            todo_items.extend(state.todo_items.iter().cloned());
            TodoItemsState { todo_items }
        }
        TodoAction::Delete { id } => TodoItemsState {
            todo_items: state
                .todo_items
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
        },
        TodoAction::ToggleDone { id } => TodoItemsState {
            todo_items: state
                .todo_items
                .iter()
                .map(|item| {
                    if item.id == id {
                        TodoItem { done: !item.done, ..item.clone() }
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        },
        TodoAction::SortByCompletion => {
            let mut todo_items = state.todo_items.clone();
            // sort_by_key is stable: equal keys keep their relative order
            todo_items.sort_by_key(|item| item.done);
            TodoItemsState { todo_items }
        }
        TodoAction::SetAllItems(todo_items) => TodoItemsState { todo_items },
    }
}
