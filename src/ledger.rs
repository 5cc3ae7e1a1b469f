use log::{debug, info};

use crate::action::Action;

/// Ordered log of committed actions plus the undo/redo cursor.
///
/// `cursor` is the number of actions currently visible. Actions at index
/// `>= cursor` have been undone and can be redone until the next commit,
/// which discards them. The invariant `0 <= cursor <= actions.len()` holds
/// after every operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    actions: Vec<Action>,
    cursor: usize,
}

impl Ledger {
    /// Creates a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action, discarding everything that was undone
    pub fn commit(&mut self, action: Action) {
        if self.cursor < self.actions.len() {
            debug!(
                "Discarding {} undone action(s)",
                self.actions.len() - self.cursor
            );
            self.actions.truncate(self.cursor);
        }
        debug!("Committing {:?}", action);
        self.actions.push(action);
        self.cursor = self.actions.len();
    }

    /// Hide the most recent visible action. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        debug!("Undo, cursor at {}/{}", self.cursor, self.actions.len());
        true
    }

    /// Re-show the next undone action. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        debug!("Redo, cursor at {}/{}", self.cursor, self.actions.len());
        true
    }

    /// Drop every action. This is a hard reset, not an undoable step.
    pub fn clear(&mut self) {
        info!("Clearing ledger of {} action(s)", self.actions.len());
        self.actions.clear();
        self.cursor = 0;
    }

    /// Returns true if there are actions that can be undone
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns true if there are actions that can be redone
    pub fn can_redo(&self) -> bool {
        self.cursor < self.actions.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Every stored action, including undone ones
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The actions currently visible, oldest first
    pub fn visible(&self) -> &[Action] {
        &self.actions[..self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{ShapeKind, StrokeStyle};
    use egui::{Color32, pos2};

    fn dot(x: f32) -> Action {
        Action::freehand(StrokeStyle::pen(Color32::WHITE, 5.0), vec![pos2(x, x)])
    }

    fn assert_bounds(ledger: &Ledger) {
        assert!(ledger.cursor() <= ledger.len());
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert_eq!(ledger.cursor(), 0);
        assert!(ledger.is_empty());
        assert!(!ledger.can_undo());
        assert!(!ledger.can_redo());
    }

    #[test]
    fn test_undo_redo_at_boundaries_are_noops() {
        let mut ledger = Ledger::new();
        assert!(!ledger.undo());
        assert!(!ledger.redo());
        ledger.commit(dot(1.0));
        assert!(!ledger.redo());
        assert!(ledger.undo());
        assert!(!ledger.undo());
        assert_eq!(ledger.cursor(), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_undo_then_redo_restores_state() {
        let mut ledger = Ledger::new();
        ledger.commit(dot(1.0));
        ledger.commit(dot(2.0));
        let before = ledger.clone();

        ledger.undo();
        assert_eq!(ledger.visible(), &[dot(1.0)]);
        ledger.redo();
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_commit_after_undo_truncates() {
        let mut ledger = Ledger::new();
        ledger.commit(dot(1.0)); // A
        ledger.commit(dot(2.0)); // B
        ledger.undo();
        ledger.commit(dot(3.0)); // C

        assert_eq!(ledger.actions(), &[dot(1.0), dot(3.0)]);
        assert_eq!(ledger.cursor(), 2);
        assert!(!ledger.redo());
    }

    #[test]
    fn test_clear_is_hard_reset() {
        let mut ledger = Ledger::new();
        ledger.commit(dot(1.0));
        ledger.commit(dot(2.0));
        ledger.undo();
        ledger.clear();
        assert_eq!(ledger.cursor(), 0);
        assert!(ledger.is_empty());
        assert!(!ledger.can_undo());
        assert!(!ledger.can_redo());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut ledger = Ledger::new();
        let line = Action::shape(
            StrokeStyle::pen(Color32::RED, 2.0),
            ShapeKind::Line,
            pos2(0.0, 0.0),
            pos2(20.0, 20.0),
        );

        // Deterministic pseudo-random walk over the four operations
        let mut seed: u32 = 0x2545_f491;
        for step in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            match seed % 7 {
                0 | 1 => ledger.commit(dot(step as f32)),
                2 => ledger.commit(line.clone()),
                3 | 4 => {
                    ledger.undo();
                }
                5 => {
                    ledger.redo();
                }
                _ if step % 50 == 0 => ledger.clear(),
                _ => {}
            }
            assert_bounds(&ledger);
        }
    }
}
