//! Unsaved-Changes Guard
//!
//! Decides whether navigation may leave the current view.

/// Message shown when leaving a view with unsaved changes
pub const UNSAVED_CHANGES_MESSAGE: &str = "You have unsaved changes. Do you really want to leave?";

/// A view that can veto being navigated away from
pub trait CanDeactivate {
    /// `true` when the view can be left without asking
    fn can_deactivate(&self) -> bool;
}

/// Synchronous yes/no prompt
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Returns `true` if navigation away from `component` should proceed.
///
/// The prompt is only consulted when the component reports it cannot deactivate.
pub fn unsaved_changes_guard(component: Option<&dyn CanDeactivate>, prompt: &dyn Confirm) -> bool {
    match component {
        None => true,
        Some(component) if component.can_deactivate() => true,
        Some(_) => prompt.confirm(UNSAVED_CHANGES_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct View {
        dirty: bool,
    }

    impl CanDeactivate for View {
        fn can_deactivate(&self) -> bool {
            !self.dirty
        }
    }

    /// Prompt that records every message and answers with a fixed value
    struct ScriptedPrompt {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Self {
            Self { answer, asked: RefCell::new(Vec::new()) }
        }
    }

    impl Confirm for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    #[test]
    fn test_no_component_allows() {
        let prompt = ScriptedPrompt::answering(false);
        assert!(unsaved_changes_guard(None, &prompt));
        assert!(prompt.asked.borrow().is_empty());
    }

    #[test]
    fn test_clean_view_allows_without_prompt() {
        let prompt = ScriptedPrompt::answering(false);
        assert!(unsaved_changes_guard(Some(&View { dirty: false }), &prompt));
        assert!(prompt.asked.borrow().is_empty());
    }

    #[test]
    fn test_dirty_view_declined_blocks() {
        let prompt = ScriptedPrompt::answering(false);
        assert!(!unsaved_changes_guard(Some(&View { dirty: true }), &prompt));
        assert_eq!(*prompt.asked.borrow(), vec![UNSAVED_CHANGES_MESSAGE.to_string()]);
    }

    #[test]
    fn test_dirty_view_confirmed_allows() {
        let prompt = ScriptedPrompt::answering(true);
        assert!(unsaved_changes_guard(Some(&View { dirty: true }), &prompt));
        assert_eq!(prompt.asked.borrow().len(), 1);
    }

    #[test]
    fn test_closure_prompt() {
        let always_yes = |_: &str| true;
        assert!(unsaved_changes_guard(Some(&View { dirty: true }), &always_yes));
    }
}
