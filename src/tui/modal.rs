// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>; `None` is the hidden state. Input routing acts
// on the returned ModalAction.

use crate::render::share::ShareAction;
use crate::thoughts::ThoughtId;
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    Close,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    /// Copy or share the shown thought
    Share(ShareAction),
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Full quote, author and explanation for one thought
    Detail { id: ThoughtId, scroll: u16 },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn detail(id: ThoughtId) -> Self {
        Modal::Detail { id, scroll: 0 }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Detail { .. } => match key {
                KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
                KeyCode::PageUp => ModalAction::PageUp,
                KeyCode::PageDown => ModalAction::PageDown,
                KeyCode::Home => ModalAction::ScrollTop,
                KeyCode::Char(c) => ShareAction::from_key(c)
                    .map(ModalAction::Share)
                    .unwrap_or(ModalAction::None),
                _ => ModalAction::None,
            },
        }
    }

    /// Thought shown by a detail modal
    pub fn thought(&self) -> Option<ThoughtId> {
        match self {
            Modal::Detail { id, .. } => Some(*id),
            Modal::Help => None,
        }
    }

    /// Scroll the detail body; the renderer clamps the upper bound
    pub fn scroll_by(&mut self, delta: i32) {
        if let Modal::Detail { scroll, .. } = self {
            *scroll = (i32::from(*scroll) + delta).clamp(0, i32::from(u16::MAX)) as u16;
        }
    }

    pub fn scroll_to_top(&mut self) {
        if let Modal::Detail { scroll, .. } = self {
            *scroll = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_closes_on_esc_and_q() {
        let modal = Modal::detail(ThoughtId(2));
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('q')), ModalAction::Close);
        assert_eq!(modal.thought(), Some(ThoughtId(2)));
    }

    #[test]
    fn detail_maps_share_keys() {
        let modal = Modal::detail(ThoughtId(0));
        assert_eq!(
            modal.handle_input(KeyCode::Char('y')),
            ModalAction::Share(ShareAction::CopyQuote)
        );
        assert_eq!(
            modal.handle_input(KeyCode::Char('x')),
            ModalAction::Share(ShareAction::X)
        );
        assert_eq!(modal.handle_input(KeyCode::Char('z')), ModalAction::None);
    }

    #[test]
    fn help_ignores_share_keys() {
        let modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(modal.thought(), None);
    }

    #[test]
    fn scroll_never_goes_negative() {
        let mut modal = Modal::detail(ThoughtId(0));
        modal.scroll_by(-3);
        assert_eq!(modal, Modal::Detail { id: ThoughtId(0), scroll: 0 });
        modal.scroll_by(5);
        modal.scroll_by(-2);
        assert_eq!(modal, Modal::Detail { id: ThoughtId(0), scroll: 3 });
        modal.scroll_to_top();
        assert_eq!(modal, Modal::Detail { id: ThoughtId(0), scroll: 0 });
    }
}
