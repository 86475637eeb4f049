//! Undo/redo history of committed drawing actions.

use crate::actions::DrawingAction;

/// The action log of the active board plus its redo buffer.
///
/// `actions` and `redo` never share an entry: every redo entry was the most
/// recent tail popped off `actions`, and committing drops the whole redo
/// buffer. Neither stack is bounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    actions: Vec<DrawingAction>,
    redo: Vec<DrawingAction>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new action and abandon the redo lineage.
    pub fn commit(&mut self, action: DrawingAction) {
        log::debug!(
            "commit {} (depth {} -> {}, dropping {} redo)",
            action.kind_name(),
            self.actions.len(),
            self.actions.len() + 1,
            self.redo.len()
        );
        self.actions.push(action);
        self.redo.clear();
    }

    /// Undo the last action.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.actions.pop() {
            Some(action) => {
                self.redo.push(action);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone action.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(action) => {
                self.actions.push(action);
                true
            }
            None => false,
        }
    }

    /// Record a clear-all. It goes through `commit`, so it can be undone.
    pub fn clear(&mut self) {
        self.commit(DrawingAction::ClearAll);
    }

    /// Drop both stacks (used when the active board changes).
    pub fn reset(&mut self) {
        self.actions.clear();
        self.redo.clear();
    }

    /// Committed actions, oldest first.
    pub fn actions(&self) -> &[DrawingAction] {
        &self.actions
    }

    /// Undone actions; the last one is the next to be redone.
    pub fn redo_actions(&self) -> &[DrawingAction] {
        &self.redo
    }

    pub fn depth(&self) -> usize {
        self.actions.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Serialize the committed actions to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Rectangle, Stroke, StrokeColor};
    use kurbo::Point;

    fn s1() -> DrawingAction {
        Stroke::new(
            vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
            StrokeColor::black(),
            3.0,
        )
        .into()
    }

    fn r1() -> DrawingAction {
        Rectangle::new(
            Point::new(10.0, 10.0),
            Point::new(20.0, 30.0),
            StrokeColor::black(),
            3.0,
        )
        .into()
    }

    #[test]
    fn test_empty_history_is_a_no_op() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(history.depth(), 0);
    }

    #[test]
    fn test_undo_then_redo_restores_history() {
        let mut history = History::new();
        history.commit(s1());
        history.commit(r1());
        let before = history.actions().to_vec();

        assert!(history.undo());
        assert_eq!(history.actions(), &before[..1]);
        assert_eq!(history.redo_actions(), &before[1..]);

        assert!(history.redo());
        assert_eq!(history.actions(), &before[..]);
        assert!(history.redo_actions().is_empty());
    }

    #[test]
    fn test_multiple_undo_redo_order() {
        let mut history = History::new();
        history.commit(s1());
        history.commit(r1());
        history.commit(DrawingAction::ClearAll);
        let before = history.actions().to_vec();

        while history.undo() {}
        assert_eq!(history.depth(), 0);
        assert_eq!(history.redo_depth(), 3);

        while history.redo() {}
        assert_eq!(history.actions(), &before[..]);
    }

    #[test]
    fn test_commit_after_undo_discards_redo() {
        let mut history = History::new();
        history.commit(s1());
        assert_eq!(history.actions(), &[s1()]);

        assert!(history.undo());
        assert!(history.actions().is_empty());
        assert_eq!(history.redo_actions(), &[s1()]);

        history.commit(r1());
        assert_eq!(history.actions(), &[r1()]);
        assert!(history.redo_actions().is_empty());

        assert!(!history.redo());
        assert_eq!(history.actions(), &[r1()]);
    }

    #[test]
    fn test_clear_is_committed_and_undoable() {
        let mut history = History::new();
        history.commit(s1());
        history.commit(r1());
        history.clear();
        assert_eq!(history.actions(), &[s1(), r1(), DrawingAction::ClearAll]);

        assert!(history.undo());
        assert_eq!(history.actions(), &[s1(), r1()]);
    }

    #[test]
    fn test_reset() {
        let mut history = History::new();
        history.commit(s1());
        history.commit(r1());
        history.undo();
        history.reset();
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_to_json() {
        let mut history = History::new();
        history.commit(s1());
        let json = history.to_json().unwrap();
        assert!(json.contains("Stroke"));
    }
}
