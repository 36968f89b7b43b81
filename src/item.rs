//! Item capability: identity, enabled flag, selected flag.
//!
//! [`Item`] is the only thing the coordinator knows about the elements it
//! navigates. [`GroupItem`] is a ready-made owned handle with a builder API,
//! and any `Rc<RefCell<T: Item>>` is itself an `Item`, so callers can keep
//! ownership of their items while the coordinator holds a view over them.

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Item trait
// ---------------------------------------------------------------------------

/// An addressable, selectable element of a group.
///
/// The coordinator is the sole caller of [`set_selected`](Item::set_selected).
/// [`set_enabled`](Item::set_enabled) belongs to the owning component.
pub trait Item {
    /// Stable identity, unique within a group.
    type Id: Clone + Eq + Debug;

    /// The item's identity.
    fn id(&self) -> Self::Id;

    /// Whether the item can be navigated to and selected.
    fn is_enabled(&self) -> bool;

    /// Whether the item is currently selected.
    fn is_selected(&self) -> bool;

    /// Write the selected flag.
    fn set_selected(&mut self, selected: bool);

    /// Write the enabled flag.
    fn set_enabled(&mut self, enabled: bool);
}

impl<T: Item> Item for Rc<RefCell<T>> {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        self.borrow().id()
    }

    fn is_enabled(&self) -> bool {
        self.borrow().is_enabled()
    }

    fn is_selected(&self) -> bool {
        self.borrow().is_selected()
    }

    fn set_selected(&mut self, selected: bool) {
        self.borrow_mut().set_selected(selected);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.borrow_mut().set_enabled(enabled);
    }
}

// ---------------------------------------------------------------------------
// GroupItem
// ---------------------------------------------------------------------------

/// A plain owned item: identity, optional label, enabled and selected flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupItem<Id> {
    /// Identity within the group.
    pub id: Id,
    /// Display label, used by text rendering only.
    pub label: Option<String>,
    /// Whether this item is enabled.
    pub enabled: bool,
    /// Whether this item is selected.
    pub selected: bool,
}

impl<Id> GroupItem<Id> {
    /// Create an enabled, unselected item with the given identity.
    pub fn new(id: Id) -> Self {
        Self {
            id,
            label: None,
            enabled: true,
            selected: false,
        }
    }

    /// Set the display label (builder).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set whether this item is enabled (builder).
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set whether this item is disabled (builder).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.enabled = !disabled;
        self
    }

    /// Set whether this item starts selected (builder).
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<Id: Clone + Eq + Debug> Item for GroupItem<Id> {
    type Id = Id;

    fn id(&self) -> Id {
        self.id.clone()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_defaults() {
        let item = GroupItem::new("one");
        assert_eq!(item.id, "one");
        assert!(item.label.is_none());
        assert!(item.is_enabled());
        assert!(!item.is_selected());
    }

    #[test]
    fn builder_flags() {
        let item = GroupItem::new(1).with_label("One").disabled(true).selected(true);
        assert_eq!(item.label.as_deref(), Some("One"));
        assert!(!item.is_enabled());
        assert!(item.is_selected());

        let item = item.enabled(true);
        assert!(item.is_enabled());
    }

    #[test]
    fn setters_write_flags() {
        let mut item = GroupItem::new('a');
        item.set_selected(true);
        item.set_enabled(false);
        assert!(item.selected);
        assert!(!item.enabled);
    }

    #[test]
    fn shared_handle_sees_external_writes() {
        let owned = Rc::new(RefCell::new(GroupItem::new("x")));
        let mut view = Rc::clone(&owned);

        owned.borrow_mut().enabled = false;
        assert!(!view.is_enabled());

        view.set_selected(true);
        assert!(owned.borrow().selected);
        assert_eq!(view.id(), "x");
    }
}
