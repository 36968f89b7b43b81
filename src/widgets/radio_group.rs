//! RadioGroup: a form-participating single-select component.
//!
//! Wires a [`RovingGroup`] to a [`KeyBindingRegistry`]: arrow keys, Home and
//! End move the selection, Space selects the focused item, and clicks select
//! by index. The submitted form value is the identity of the selected item.

use crate::config::GroupConfig;
use crate::error::Rejected;
use crate::event::binding::KeyBindingRegistry;
use crate::event::input::{Key, KeyEvent};
use crate::group::{RovingGroup, SelectionChange, TabIndex};
use crate::item::GroupItem;

/// A named radio group over [`GroupItem`]s.
///
/// # Examples
///
/// ```
/// use roving_group::event::{Key, KeyEvent};
/// use roving_group::item::GroupItem;
/// use roving_group::widgets::RadioGroup;
///
/// let mut radios = RadioGroup::new("size")
///     .with_items([GroupItem::new("s"), GroupItem::new("m"), GroupItem::new("l")]);
/// radios.handle_key(&KeyEvent::plain(Key::Down));
/// assert_eq!(radios.value(), Some("s"));
/// ```
#[derive(Debug)]
pub struct RadioGroup<Id> {
    name: String,
    group: RovingGroup<GroupItem<Id>>,
    bindings: KeyBindingRegistry,
}

impl<Id: Clone + Eq + std::fmt::Debug> RadioGroup<Id> {
    /// Create an empty radio group with the default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, GroupConfig::default())
    }

    /// Create an empty radio group with the given configuration.
    ///
    /// Default key bindings follow the config's orientation.
    pub fn with_config(name: impl Into<String>, config: GroupConfig) -> Self {
        Self {
            name: name.into(),
            group: RovingGroup::new(config),
            bindings: KeyBindingRegistry::with_defaults(config.orientation),
        }
    }

    /// Set the radio items (builder).
    pub fn with_items(mut self, items: impl IntoIterator<Item = GroupItem<Id>>) -> Self {
        self.group.set_items(items);
        self
    }

    /// Handle a key press.
    ///
    /// Returns `None` when the key means nothing to the group, so the caller
    /// can let it bubble.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Result<SelectionChange, Rejected>> {
        if event.code == Key::Char(' ') && event.modifiers.is_empty() {
            return Some(self.select_focused());
        }
        let command = self.bindings.resolve(event)?;
        Some(self.group.apply(command))
    }

    fn select_focused(&mut self) -> Result<SelectionChange, Rejected> {
        match self.group.focus_target_index() {
            Some(index) => self.group.select_by_index(index),
            None if self.group.is_empty() => Err(Rejected::EmptyGroup),
            None => Err(Rejected::NoEnabledItems),
        }
    }

    /// Handle a click on the item at `index`.
    pub fn click(&mut self, index: usize) -> Result<SelectionChange, Rejected> {
        self.group.select_by_index(index)
    }

    /// Identity of the selected item, used as the submitted value.
    pub fn value(&self) -> Option<Id> {
        self.group.current().map(|item| item.id.clone())
    }

    /// `(name, value)` pair for form submission, if something is selected.
    pub fn form_entry(&self) -> Option<(&str, Id)> {
        self.value().map(|value| (self.name.as_str(), value))
    }

    /// Form reset: clear the selection.
    pub fn reset(&mut self) -> Option<usize> {
        self.group.clear_selection()
    }

    /// The group's form field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Roving tabindex values for rendering.
    pub fn tab_indices(&self) -> Vec<TabIndex> {
        self.group.tab_indices()
    }

    /// Borrow the underlying coordinator.
    pub fn group(&self) -> &RovingGroup<GroupItem<Id>> {
        &self.group
    }

    /// Borrow the underlying coordinator mutably (membership and enabled flags).
    pub fn group_mut(&mut self) -> &mut RovingGroup<GroupItem<Id>> {
        &mut self.group
    }

    /// Borrow the key bindings mutably, e.g. to add vi-style keys.
    pub fn bindings_mut(&mut self) -> &mut KeyBindingRegistry {
        &mut self.bindings
    }
}

// ===========================================================================
// Tests
// ===========================================================================
