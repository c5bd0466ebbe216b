//! Ordered Collections
//!
//! A small list of uniquely identified items whose only mutation is a
//! stable array-move.

use std::collections::HashSet;
use std::fmt;

use crate::session::DragSession;

/// Anything that can live in an [`OrderedList`]
pub trait Identified {
    /// Stable unique identifier, never changes after creation
    fn id(&self) -> &str;
}

/// Errors from index-based list operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {} (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for SortError {}

/// Why a released drag left the collection untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// Release without an active drag (click, or pointer never passed the threshold)
    NoSession,
    /// Released outside any droppable region
    NoTarget,
    /// Released over the dragged item itself
    SameItem,
    /// Target id is not in the collection
    UnknownTarget,
}

/// Result of resolving a released drag against the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Committed { from: usize, to: usize },
    Unchanged(NoOpReason),
}

impl DropOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, DropOutcome::Committed { .. })
    }
}

/// Remove the element at `from` and reinsert it at `to`.
///
/// Elements between the two indices shift by one slot toward `from`.
/// Callers guarantee both indices are in bounds.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// True when no two items share an id
pub fn has_unique_ids<T: Identified>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item.id()))
}

/// Ordered sequence of items. Position is the index; items carry no position field.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> OrderedList<T> {
    /// Build from a seed list. Ids must be unique; checked in debug builds only.
    pub fn new(items: Vec<T>) -> Self {
        debug_assert!(has_unique_ids(&items), "OrderedList seeded with duplicate ids");
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id()).collect()
    }

    /// Move the item at `from` to `to`. Returns `Ok(false)` when nothing moved.
    pub fn move_index(&mut self, from: usize, to: usize) -> Result<bool, SortError> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(SortError::IndexOutOfBounds { index, len });
            }
        }
        if from == to {
            return Ok(false);
        }
        array_move(&mut self.items, from, to);
        Ok(true)
    }

    /// Resolve a released session to a move without touching the list
    pub fn plan_drop(&self, session: Option<&DragSession>) -> DropOutcome {
        let Some(session) = session else {
            return DropOutcome::Unchanged(NoOpReason::NoSession);
        };
        let Some(over_id) = session.over_id.as_deref() else {
            return DropOutcome::Unchanged(NoOpReason::NoTarget);
        };
        if over_id == session.active_id {
            return DropOutcome::Unchanged(NoOpReason::SameItem);
        }
        match (self.index_of(&session.active_id), self.index_of(over_id)) {
            (Some(from), Some(to)) => DropOutcome::Committed { from, to },
            _ => DropOutcome::Unchanged(NoOpReason::UnknownTarget),
        }
    }

    /// Plan and, if committed, apply the move in one step
    pub fn apply_drop(&mut self, session: Option<&DragSession>) -> DropOutcome {
        let outcome = self.plan_drop(session);
        if let DropOutcome::Committed { from, to } = outcome {
            array_move(&mut self.items, from, to);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Point, SensorKind};

    #[derive(Debug, Clone, PartialEq)]
    struct Card(&'static str);

    impl Identified for Card {
        fn id(&self) -> &str {
            self.0
        }
    }

    fn list(ids: &[&'static str]) -> OrderedList<Card> {
        OrderedList::new(ids.iter().copied().map(Card).collect())
    }

    fn session(active: &str, over: Option<&str>) -> DragSession {
        DragSession {
            active_id: active.to_string(),
            over_id: over.map(str::to_string),
            origin: Point::default(),
            pointer: Point::default(),
            sensor: SensorKind::Pointer,
        }
    }

    #[test]
    fn test_move_is_a_permutation() {
        let ids = ["a", "b", "c", "d", "e", "f"];
        for from in 0..ids.len() {
            for to in 0..ids.len() {
                if from == to {
                    continue;
                }
                let mut l = list(&ids);
                assert_eq!(l.move_index(from, to), Ok(true));

                let mut before: Vec<&str> = ids.to_vec();
                let mut after: Vec<&str> = l.ids();
                assert_eq!(after[to], ids[from]);

                // Items between the two indices shift one slot toward `from`
                if from < to {
                    for i in from..to {
                        assert_eq!(after[i], ids[i + 1]);
                    }
                } else {
                    for i in (to + 1)..=from {
                        assert_eq!(after[i], ids[i - 1]);
                    }
                }

                before.sort();
                after.sort();
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_move_out_of_bounds() {
        let mut l = list(&["a", "b"]);
        assert_eq!(
            l.move_index(0, 2),
            Err(SortError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(l.ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_move_same_index_is_noop() {
        let mut l = list(&["a", "b", "c"]);
        assert_eq!(l.move_index(1, 1), Ok(false));
        assert_eq!(l.ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scenario_two_drops() {
        let mut l = list(&["A", "B", "C", "D", "E"]);

        let outcome = l.apply_drop(Some(&session("C", Some("A"))));
        assert_eq!(outcome, DropOutcome::Committed { from: 2, to: 0 });
        assert_eq!(l.ids(), vec!["C", "A", "B", "D", "E"]);

        let outcome = l.apply_drop(Some(&session("E", Some("A"))));
        assert_eq!(outcome, DropOutcome::Committed { from: 4, to: 1 });
        assert_eq!(l.ids(), vec!["C", "E", "A", "B", "D"]);
    }

    #[test]
    fn test_noop_drops_leave_list_identical() {
        let original = list(&["a", "b", "c"]);
        let cases = [
            (None, NoOpReason::NoSession),
            (Some(session("b", None)), NoOpReason::NoTarget),
            (Some(session("b", Some("b"))), NoOpReason::SameItem),
            (Some(session("b", Some("zzz"))), NoOpReason::UnknownTarget),
            (Some(session("zzz", Some("a"))), NoOpReason::UnknownTarget),
        ];

        for (s, reason) in cases {
            let mut l = original.clone();
            assert_eq!(l.apply_drop(s.as_ref()), DropOutcome::Unchanged(reason));
            assert_eq!(l, original);
        }
    }

    #[test]
    fn test_unique_ids() {
        assert!(has_unique_ids(&[Card("a"), Card("b")]));
        assert!(!has_unique_ids(&[Card("a"), Card("a")]));
        assert!(has_unique_ids::<Card>(&[]));
    }

    #[test]
    #[should_panic(expected = "duplicate ids")]
    #[cfg(debug_assertions)]
    fn test_duplicate_seed_asserts_in_debug() {
        let _ = list(&["a", "a"]);
    }
}
