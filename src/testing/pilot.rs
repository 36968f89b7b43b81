//! Pilot: programmatic interaction with a headless radio group.
//!
//! The `Pilot` wraps a [`RadioGroup`] and simulates user input (key presses,
//! clicks, external enable/disable), recording every outcome so tests can
//! assert on the full history as well as the final state.

use std::fmt::Debug;

use crate::error::Rejected;
use crate::event::input::{Key, KeyEvent, Modifiers};
use crate::group::SelectionChange;
use crate::item::GroupItem;
use crate::testing::snapshot::group_to_string;
use crate::widgets::RadioGroup;

/// Outcome of one handled interaction.
pub type Outcome = Result<SelectionChange, Rejected>;

/// A headless driver for testing group components.
///
/// # Examples
///
/// ```
/// use roving_group::event::Key;
/// use roving_group::item::GroupItem;
/// use roving_group::testing::Pilot;
///
/// let mut pilot = Pilot::new(["a", "b"].map(GroupItem::new));
/// pilot.press_keys(&[Key::Down, Key::Down]);
/// assert_eq!(pilot.value(), Some("b"));
/// ```
#[derive(Debug)]
pub struct Pilot<Id> {
    radios: RadioGroup<Id>,
    history: Vec<Outcome>,
}

impl<Id: Clone + Eq + Debug> Pilot<Id> {
    /// Create a pilot over a default-configured radio group.
    pub fn new(items: impl IntoIterator<Item = GroupItem<Id>>) -> Self {
        Self::with_radio_group(RadioGroup::new("pilot").with_items(items))
    }

    /// Create a pilot over an existing radio group.
    pub fn with_radio_group(radios: RadioGroup<Id>) -> Self {
        Self {
            radios,
            history: Vec::new(),
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    ///
    /// Returns the outcome, or `None` if the key was not handled. Only
    /// handled keys are recorded.
    pub fn press_key(&mut self, key: Key) -> Option<Outcome> {
        self.press_key_with(key, Modifiers::NONE)
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> Option<Outcome> {
        let outcome = self.radios.handle_key(&KeyEvent::new(key, modifiers))?;
        self.history.push(outcome);
        Some(outcome)
    }

    /// Simulate a sequence of key presses.
    pub fn press_keys(&mut self, keys: &[Key]) {
        for &key in keys {
            self.press_key(key);
        }
    }

    /// Simulate a click on the item at `index`.
    pub fn click(&mut self, index: usize) -> Outcome {
        let outcome = self.radios.click(index);
        self.history.push(outcome);
        outcome
    }

    /// Simulate an external `disabled` attribute change.
    pub fn set_disabled(&mut self, index: usize, disabled: bool) -> Result<(), Rejected> {
        self.radios.group_mut().set_enabled(index, !disabled)
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Every recorded outcome, oldest first.
    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    /// The most recent recorded outcome.
    pub fn last(&self) -> Option<&Outcome> {
        self.history.last()
    }

    /// The radio group's current value.
    pub fn value(&self) -> Option<Id> {
        self.radios.value()
    }

    /// Borrow the radio group.
    pub fn radios(&self) -> &RadioGroup<Id> {
        &self.radios
    }

    /// Borrow the radio group mutably.
    pub fn radios_mut(&mut self) -> &mut RadioGroup<Id> {
        &mut self.radios
    }

    /// Render the group to text.
    pub fn render(&self) -> String {
        group_to_string(self.radios.group())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
