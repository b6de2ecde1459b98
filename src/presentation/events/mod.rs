//! Key event classification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Key predicates shared by the screens.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key quits from anywhere.
    #[must_use]
    pub fn is_force_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key quits outside text entry.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        Self::is_force_quit_event(key)
            || matches!(
                key,
                KeyEvent {
                    code: KeyCode::Char('q'),
                    modifiers: KeyModifiers::NONE,
                    ..
                }
            )
    }

    /// Checks if key moves focus forward.
    #[must_use]
    pub fn is_focus_next_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Tab) && !key.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Checks if key moves focus backward.
    #[must_use]
    pub fn is_focus_prev_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::BackTab)
            || (matches!(key.code, KeyCode::Tab) && key.modifiers.contains(KeyModifiers::SHIFT))
    }

    /// Checks if key toggles dark mode.
    #[must_use]
    pub fn is_theme_toggle_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('d'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key moves the cursor up.
    #[must_use]
    pub fn is_up_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
    }

    /// Checks if key moves the cursor down.
    #[must_use]
    pub fn is_down_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
    }
}
