//! Reorder Intent Translator
//!
//! Turns a finished drag gesture (source index, optional destination index,
//! both in display order) into a `setAllItems` action.

use crate::action::TodoAction;
use crate::model::TodoItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderIntent {
    pub source: usize,
    /// `None` when the gesture ended outside any valid target
    pub destination: Option<usize>,
}

impl ReorderIntent {
    pub fn new(source: usize, destination: Option<usize>) -> Self {
        Self { source, destination }
    }

    /// Action committing this reorder over `displayed`, or `None` for a cancelled gesture.
    pub fn into_action(self, displayed: &[TodoItem]) -> Option<TodoAction> {
        let destination = self.destination?;
        reorder(displayed, self.source, destination).map(TodoAction::SetAllItems)
    }
}

/// Move the item at `source` so it ends up at `destination`.
///
/// Returns `None` when `source` is out of range. A destination past the end
/// means "last position".
pub fn reorder(items: &[TodoItem], source: usize, destination: usize) -> Option<Vec<TodoItem>> {
    if source >= items.len() {
        return None;
    }
    let mut result = items.to_vec();
    let moved = result.remove(source);
    let destination = destination.min(result.len());
    result.insert(destination, moved);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(rows: &[(&str, bool)]) -> Vec<TodoItem> {
        rows.iter()
            .map(|(id, done)| TodoItem { done: *done, ..TodoItem::new((*id).into(), *id, None) })
            .collect()
    }

    fn ids(items: &[TodoItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_move_down() {
        let list = items(&[("a", false), ("b", false), ("c", false), ("d", false)]);
        let moved = reorder(&list, 0, 2).unwrap();
        assert_eq!(ids(&moved), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_up() {
        let list = items(&[("a", false), ("b", false), ("c", false), ("d", false)]);
        let moved = reorder(&list, 3, 1).unwrap();
        assert_eq!(ids(&moved), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_same_position_keeps_order() {
        let list = items(&[("a", false), ("b", false)]);
        assert_eq!(reorder(&list, 1, 1).unwrap(), list);
    }

    #[test]
    fn test_destination_past_end_is_clamped() {
        let list = items(&[("a", false), ("b", false), ("c", false)]);
        let moved = reorder(&list, 0, 10).unwrap();
        assert_eq!(ids(&moved), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_source_out_of_range() {
        let list = items(&[("a", false)]);
        assert_eq!(reorder(&list, 1, 0), None);
        assert_eq!(ReorderIntent::new(5, Some(0)).into_action(&list), None);
    }

    #[test]
    fn test_cancelled_gesture_dispatches_nothing() {
        let list = items(&[("a", false), ("b", false)]);
        assert_eq!(ReorderIntent::new(0, None).into_action(&list), None);
    }

    #[test]
    fn test_drag_can_interleave_done_items() {
        let list = items(&[("a", false), ("b", false), ("c", true)]);
        let action = ReorderIntent::new(2, Some(0)).into_action(&list).unwrap();

        match action {
            TodoAction::SetAllItems(reordered) => {
                assert_eq!(ids(&reordered), vec!["c", "a", "b"]);
                assert!(reordered[0].done);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
}
