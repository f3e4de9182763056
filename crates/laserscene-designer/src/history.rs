//! Undo/redo history for element additions and removals.
//!
//! Each entry records which element an operation touched. While an element is
//! off the list (undone add, performed remove) the entry holds the element
//! itself, so redo restores exactly the state it had when it left, including
//! any table edits applied before.

use tracing::debug;

use crate::model::{ElementId, SceneElement};

/// Kind of a recorded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOp {
    Add,
    Remove,
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    op: HistoryOp,
    id: ElementId,
    /// Some while the element is not on the list.
    stashed: Option<SceneElement>,
}

/// Two-stack history over a document's element list.
///
/// The manager does not own the list; [`UndoManager::undo`] and
/// [`UndoManager::redo`] are handed the list to mutate.
#[derive(Debug, Clone, Default)]
pub struct UndoManager {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl UndoManager {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` was appended to the list.
    pub fn push_add(&mut self, id: ElementId) {
        self.push_undo(HistoryEntry {
            op: HistoryOp::Add,
            id,
            stashed: None,
        });
    }

    /// Record that `element` was taken off the list.
    pub fn push_remove(&mut self, element: SceneElement) {
        self.push_undo(HistoryEntry {
            op: HistoryOp::Remove,
            id: element.id,
            stashed: Some(element),
        });
    }

    fn push_undo(&mut self, entry: HistoryEntry) {
        // A new edit discards the redo branch
        self.redo_stack.clear();
        self.undo_stack.push(entry);
    }

    /// Revert the most recent operation. Restored elements go to the end of
    /// the list. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, elements: &mut Vec<SceneElement>) -> Option<(HistoryOp, ElementId)> {
        let mut entry = self.undo_stack.pop()?;
        match entry.op {
            HistoryOp::Add => entry.stashed = take_element(elements, entry.id),
            HistoryOp::Remove => {
                if let Some(element) = entry.stashed.take() {
                    elements.push(element);
                }
            }
        }
        debug!(op = ?entry.op, id = %entry.id, "undo");
        let step = (entry.op, entry.id);
        self.redo_stack.push(entry);
        Some(step)
    }

    /// Re-apply the most recently undone operation. Returns `None` when there
    /// is nothing to redo.
    pub fn redo(&mut self, elements: &mut Vec<SceneElement>) -> Option<(HistoryOp, ElementId)> {
        let mut entry = self.redo_stack.pop()?;
        match entry.op {
            HistoryOp::Add => {
                if let Some(element) = entry.stashed.take() {
                    elements.push(element);
                }
            }
            HistoryOp::Remove => entry.stashed = take_element(elements, entry.id),
        }
        debug!(op = ?entry.op, id = %entry.id, "redo");
        let step = (entry.op, entry.id);
        self.undo_stack.push(entry);
        Some(step)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get number of undo operations available
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get number of redo operations available
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

fn take_element(elements: &mut Vec<SceneElement>, id: ElementId) -> Option<SceneElement> {
    let index = elements.iter().position(|el| el.id == id)?;
    Some(elements.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Polyline, Shape};
    use laserscene_core::{GridPoint, Rgb};

    fn element(id: u64) -> SceneElement {
        SceneElement::new(
            ElementId::new(id),
            Shape::Polyline(Polyline::new(
                vec![GridPoint::new(0, 0), GridPoint::new(1, 1)],
                Rgb::RED,
            )),
        )
    }

    #[test]
    fn test_undo_add_removes_by_identity() {
        // Two geometrically identical elements; only the recorded one goes.
        let mut elements = vec![element(1), element(2)];
        let mut history = UndoManager::new();
        history.push_add(ElementId::new(1));
        history.push_add(ElementId::new(2));

        assert_eq!(
            history.undo(&mut elements),
            Some((HistoryOp::Add, ElementId::new(2)))
        );
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].id, ElementId::new(1));
    }

    #[test]
    fn test_undo_remove_reappends_at_end() {
        let mut elements = vec![element(1), element(2), element(3)];
        let mut history = UndoManager::new();
        let removed = elements.remove(0);
        history.push_remove(removed);

        history.undo(&mut elements);
        let ids: Vec<u64> = elements.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        history.redo(&mut elements);
        let ids: Vec<u64> = elements.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut elements = vec![element(1)];
        let mut history = UndoManager::new();
        history.push_add(ElementId::new(1));
        history.undo(&mut elements);
        assert!(history.can_redo());

        elements.push(element(2));
        history.push_add(ElementId::new(2));
        assert!(!history.can_redo());
        assert_eq!(history.undo_count(), 1);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut elements = vec![element(1)];
        let mut history = UndoManager::new();
        assert_eq!(history.undo(&mut elements), None);
        assert_eq!(history.redo(&mut elements), None);
        assert_eq!(elements.len(), 1);
    }
}
