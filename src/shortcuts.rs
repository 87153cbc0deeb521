//! Centralized shortcut and action system.
//!
//! Maps key events to the actions the designer understands, so the status bar
//! hints and the input handlers stay in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Move the cursor one level toward the center
    NavigateUp,
    /// Move the cursor one level outward
    NavigateDown,
    /// Move the cursor to the previous tile in the level
    NavigateLeft,
    /// Move the cursor to the next tile in the level
    NavigateRight,
    /// Move the cursor to the next slice
    NextSlice,
    /// Move the cursor to the previous slice
    PreviousSlice,

    // === PAINTING ===
    /// Paint the tile under the cursor
    PaintTile,
    /// Pick a palette entry by position
    SelectColor(usize),
    /// Pick the next palette entry
    CycleColor,
    /// Toggle mirror (6-fold symmetry) mode
    ToggleMirror,

    // === GENERAL ===
    /// Leave the application
    Quit,
}

impl Action {
    /// Short label shown in the status bar hints.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NavigateUp | Self::NavigateDown | Self::NavigateLeft | Self::NavigateRight => {
                "move"
            }
            Self::NextSlice | Self::PreviousSlice => "slice",
            Self::PaintTile => "paint",
            Self::SelectColor(_) => "color",
            Self::CycleColor => "next color",
            Self::ToggleMirror => "mirror",
            Self::Quit => "quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_shortcuts();
        registry
    }

    fn register_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === NAVIGATION ===
        self.register(K::Up, M::NONE, Action::NavigateUp);
        self.register(K::Down, M::NONE, Action::NavigateDown);
        self.register(K::Left, M::NONE, Action::NavigateLeft);
        self.register(K::Right, M::NONE, Action::NavigateRight);
        self.register(K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(K::Tab, M::NONE, Action::NextSlice);
        self.register(K::BackTab, M::SHIFT, Action::PreviousSlice);
        self.register(K::BackTab, M::NONE, Action::PreviousSlice);

        // === PAINTING ===
        self.register(K::Enter, M::NONE, Action::PaintTile);
        self.register(K::Char(' '), M::NONE, Action::PaintTile);
        self.register(K::Char('1'), M::NONE, Action::SelectColor(0));
        self.register(K::Char('2'), M::NONE, Action::SelectColor(1));
        self.register(K::Char('3'), M::NONE, Action::SelectColor(2));
        self.register(K::Char('c'), M::NONE, Action::CycleColor);
        self.register(K::Char('m'), M::NONE, Action::ToggleMirror);

        // === GENERAL ===
        self.register(K::Char('q'), M::NONE, Action::Quit);
        self.register(K::Char('q'), M::CONTROL, Action::Quit);
        self.register(K::Esc, M::NONE, Action::Quit);
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings
            .insert(KeyBinding::new(code, modifiers), action);
    }

    /// Look up the action for a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::NavigateUp));

        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::PaintTile));

        let event = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::ToggleMirror));
    }

    #[test]
    fn test_color_shortcuts() {
        let registry = ShortcutRegistry::new();
        for (c, index) in [('1', 0), ('2', 1), ('3', 2)] {
            let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(registry.lookup(event), Some(Action::SelectColor(index)));
        }
        let event = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), None);
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();
        let lookup = |c| registry.lookup(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        assert_eq!(lookup('h'), Some(Action::NavigateLeft));
        assert_eq!(lookup('j'), Some(Action::NavigateDown));
        assert_eq!(lookup('k'), Some(Action::NavigateUp));
        assert_eq!(lookup('l'), Some(Action::NavigateRight));
    }

    #[test]
    fn test_quit_bindings() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.lookup(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
    }
}
