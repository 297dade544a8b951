//! Todo Actions
//!
//! The closed set of state transitions. Wire shape (used by the dev-tools
//! hook): `{ "type": "<kind>", "data": <payload> }`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{NewTodoItem, TodoItem, TodoItemId, TodoItemsState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum TodoAction {
    /// Replace the whole state (startup load / resync)
    LoadState(TodoItemsState),
    /// Prepend a new, not-done item with a fresh id
    #[serde(rename_all = "camelCase")]
    Add { todo_item: NewTodoItem },
    /// Remove an item; unknown ids are ignored
    Delete { id: TodoItemId },
    /// Flip `done` in place; unknown ids are ignored
    ToggleDone { id: TodoItemId },
    /// Stable sort: not-done items first
    SortByCompletion,
    /// Replace the sequence wholesale (drag reorder commit)
    SetAllItems(Vec<TodoItem>),
}

impl TodoAction {
    pub fn add(todo_item: NewTodoItem) -> Self {
        TodoAction::Add { todo_item }
    }

    pub const KINDS: [&'static str; 6] = [
        "loadState",
        "add",
        "delete",
        "toggleDone",
        "sortByCompletion",
        "setAllItems",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            TodoAction::LoadState(_) => "loadState",
            TodoAction::Add { .. } => "add",
            TodoAction::Delete { .. } => "delete",
            TodoAction::ToggleDone { .. } => "toggleDone",
            TodoAction::SortByCompletion => "sortByCompletion",
            TodoAction::SetAllItems(_) => "setAllItems",
        }
    }

    /// Parse an action from its JSON wire shape.
    ///
    /// An unrecognized `type` is reported separately from a bad payload: it
    /// means the sender and this build disagree on the action set.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(kind) = value.get("type").and_then(|t| t.as_str()) {
            if !Self::KINDS.contains(&kind) {
                return Err(ActionError::UnknownKind(kind.to_string()));
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("unrecognized action kind: {0}")]
    UnknownKind(String),
    #[error("malformed action: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle_done() {
        let action = TodoAction::from_json(r#"{"type":"toggleDone","data":{"id":"abc"}}"#).unwrap();
        assert_eq!(action, TodoAction::ToggleDone { id: "abc".into() });
        assert_eq!(action.kind(), "toggleDone");
    }

    #[test]
    fn test_parse_unit_and_payload_kinds() {
        let sort = TodoAction::from_json(r#"{"type":"sortByCompletion"}"#).unwrap();
        assert_eq!(sort, TodoAction::SortByCompletion);

        let add = TodoAction::from_json(
            r#"{"type":"add","data":{"todoItem":{"title":"Buy milk","details":"2 litres"}}}"#,
        )
        .unwrap();
        assert_eq!(add, TodoAction::add(NewTodoItem::new("Buy milk").with_details("2 litres")));
    }

    #[test]
    fn test_add_payload_is_wrapped() {
        let json = serde_json::to_value(TodoAction::add(NewTodoItem::new("Buy milk"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "add", "data": { "todoItem": { "title": "Buy milk" } } })
        );

        let bare = TodoAction::from_json(r#"{"type":"add","data":{"title":"Buy milk"}}"#).unwrap_err();
        assert!(matches!(bare, ActionError::Malformed(_)));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = TodoAction::from_json(r#"{"type":"archive","data":{"id":"abc"}}"#).unwrap_err();
        assert!(matches!(err, ActionError::UnknownKind(ref kind) if kind == "archive"));
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        let err = TodoAction::from_json(r#"{"type":"delete","data":{"key":"abc"}}"#).unwrap_err();
        assert!(matches!(err, ActionError::Malformed(_)));

        let err = TodoAction::from_json("not json").unwrap_err();
        assert!(matches!(err, ActionError::Malformed(_)));
    }

    #[test]
    fn test_kind_table_matches_serialized_tags() {
        let actions = [
            TodoAction::LoadState(TodoItemsState::default()),
            TodoAction::add(NewTodoItem::new("x")),
            TodoAction::Delete { id: "a".into() },
            TodoAction::ToggleDone { id: "a".into() },
            TodoAction::SortByCompletion,
            TodoAction::SetAllItems(Vec::new()),
        ];
        for (action, kind) in actions.iter().zip(TodoAction::KINDS) {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json["type"], kind);
            assert_eq!(action.kind(), kind);
        }
    }
}
