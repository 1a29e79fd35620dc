//! Modal stack for managing overlays
//!
//! Overlays are an enum-based stack; only the top modal receives input.

use super::notice::Notice;
use super::ui::Tab;

/// A delete waiting for the user's yes/no
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub tab: Tab,
    pub id: i64,
    /// Row name shown in the prompt
    pub name: String,
}

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Delete confirmation naming the target row
    ConfirmDelete(PendingDelete),
    /// Information, warning, or error message
    Notice(Notice),
    /// Category filter picker
    CategoryFilter { selected_index: usize },
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Notice(Notice::info("Done", "Saved")));

        let top = stack.pop();
        assert!(matches!(top, Some(Modal::Notice(_))));

        let top = stack.pop();
        assert_eq!(top, Some(Modal::QuitConfirm));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_modal_stack_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::CategoryFilter { selected_index: 0 });

        if let Some(Modal::CategoryFilter { selected_index }) = stack.top_mut() {
            *selected_index = 2;
        }

        assert_eq!(stack.top(), Some(&Modal::CategoryFilter { selected_index: 2 }));
    }
}
