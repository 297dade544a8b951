//! Identifier Generation

use std::cell::Cell;

use uuid::Uuid;

use crate::model::TodoItemId;

/// Source of fresh item ids. Uniqueness is the only contract.
pub trait IdGenerator {
    fn next_id(&self) -> TodoItemId;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> TodoItemId {
        TodoItemId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids (`item-1`, `item-2`, ...), for tests and demos
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> TodoItemId {
        let n = self.next.get() + 1;
        self.next.set(n);
        TodoItemId::new(format!("item-{}", n))
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> TodoItemId {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids: HashSet<_> = (0..1000).map(|_| UuidIds.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "item-1");
        assert_eq!(ids.next_id().as_str(), "item-2");
    }
}
