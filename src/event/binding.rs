//! Key binding registry for group navigation.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to [`NavCommand`]s.
//! `with_defaults()` installs the arrow/Home/End bindings of the roving
//! tabindex pattern, filtered by the group's [`Orientation`].

use std::collections::HashMap;

use super::command::NavCommand;
use super::input::{Key, KeyEvent, Modifiers};
use crate::config::Orientation;

/// Registry of key bindings, mapping (Key, Modifiers) -> NavCommand.
#[derive(Debug, Clone, Default)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), NavCommand>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard navigation bindings.
    ///
    /// - `Right` / `Down` -> Next (per orientation)
    /// - `Left` / `Up` -> Previous (per orientation)
    /// - `Home` -> First, `End` -> Last
    pub fn with_defaults(orientation: Orientation) -> Self {
        let mut registry = Self::new();
        if orientation.horizontal() {
            registry.bind(Key::Right, Modifiers::NONE, NavCommand::Next);
            registry.bind(Key::Left, Modifiers::NONE, NavCommand::Previous);
        }
        if orientation.vertical() {
            registry.bind(Key::Down, Modifiers::NONE, NavCommand::Next);
            registry.bind(Key::Up, Modifiers::NONE, NavCommand::Previous);
        }
        registry.bind(Key::Home, Modifiers::NONE, NavCommand::First);
        registry.bind(Key::End, Modifiers::NONE, NavCommand::Last);
        registry
    }

    /// Register a key binding, replacing any existing one for the same keys.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, command: NavCommand) {
        self.bindings.insert((key, modifiers), command);
    }

    /// Remove a key binding. Returns the removed command, if any.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<NavCommand> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Look up the command for a key event (exact key + modifiers match).
    pub fn resolve(&self, event: &KeyEvent) -> Option<NavCommand> {
        self.bindings.get(&(event.code, event.modifiers)).copied()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> KeyEvent {
        KeyEvent::plain(key)
    }

    #[test]
    fn new_registry_is_empty() {
        let reg = KeyBindingRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn defaults_both_axes() {
        let reg = KeyBindingRegistry::with_defaults(Orientation::Both);
        assert_eq!(reg.len(), 6);
        assert_eq!(reg.resolve(&press(Key::Right)), Some(NavCommand::Next));
        assert_eq!(reg.resolve(&press(Key::Down)), Some(NavCommand::Next));
        assert_eq!(reg.resolve(&press(Key::Left)), Some(NavCommand::Previous));
        assert_eq!(reg.resolve(&press(Key::Up)), Some(NavCommand::Previous));
        assert_eq!(reg.resolve(&press(Key::Home)), Some(NavCommand::First));
        assert_eq!(reg.resolve(&press(Key::End)), Some(NavCommand::Last));
    }

    #[test]
    fn defaults_horizontal_ignores_vertical_arrows() {
        let reg = KeyBindingRegistry::with_defaults(Orientation::Horizontal);
        assert_eq!(reg.len(), 4);
        assert_eq!(reg.resolve(&press(Key::Right)), Some(NavCommand::Next));
        assert!(reg.resolve(&press(Key::Down)).is_none());
        assert!(reg.resolve(&press(Key::Up)).is_none());
    }

    #[test]
    fn defaults_vertical_ignores_horizontal_arrows() {
        let reg = KeyBindingRegistry::with_defaults(Orientation::Vertical);
        assert_eq!(reg.resolve(&press(Key::Up)), Some(NavCommand::Previous));
        assert!(reg.resolve(&press(Key::Left)).is_none());
    }

    #[test]
    fn resolve_requires_exact_modifiers() {
        let reg = KeyBindingRegistry::with_defaults(Orientation::Both);
        let shifted = KeyEvent::new(Key::Right, Modifiers::SHIFT);
        assert!(reg.resolve(&shifted).is_none());
    }

    #[test]
    fn bind_overwrites_and_unbind_removes() {
        let mut reg = KeyBindingRegistry::new();
        reg.bind(Key::Char('j'), Modifiers::NONE, NavCommand::Previous);
        reg.bind(Key::Char('j'), Modifiers::NONE, NavCommand::Next);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.resolve(&press(Key::Char('j'))), Some(NavCommand::Next));

        assert_eq!(reg.unbind(Key::Char('j'), Modifiers::NONE), Some(NavCommand::Next));
        assert!(reg.is_empty());
        assert_eq!(reg.unbind(Key::Char('j'), Modifiers::NONE), None);
    }
}
