//! Roving selection coordinator.
//!
//! [`RovingGroup`] keeps track of which item in an ordered group is selected,
//! computes where directional navigation lands (skipping disabled items and
//! wrapping around the ends), and decides which single item is the group's
//! tab stop. It never renders anything: callers read the returned
//! [`SelectionChange`] and the items' flags to drive their own output.

use tracing::{debug, trace};

use crate::config::GroupConfig;
use crate::error::Rejected;
use crate::event::command::NavCommand;
use crate::item::Item;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Direction of a navigation scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices.
    Next,
    /// Towards lower indices.
    Previous,
    /// The first enabled item.
    First,
    /// The last enabled item.
    Last,
}

// ---------------------------------------------------------------------------
// SelectionChange / GroupState / TabIndex
// ---------------------------------------------------------------------------

/// Outcome of a successful selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionChange {
    /// Index selected before the call, if any.
    pub previous_index: Option<usize>,
    /// Index selected after the call.
    pub new_index: usize,
}

impl SelectionChange {
    /// Whether the selection stayed on the same item.
    pub fn is_noop(&self) -> bool {
        self.previous_index == Some(self.new_index)
    }
}

/// Coarse state of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupState {
    /// No items.
    Empty,
    /// Items present, nothing selected.
    Unselected,
    /// The item at this index is selected.
    Selected(usize),
}

/// Roving tabindex value for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabIndex {
    /// The group's single tab stop (`tabindex=0`).
    Tabbable,
    /// Reachable by arrow keys only (`tabindex=-1`).
    Skipped,
}

impl TabIndex {
    /// Numeric tabindex attribute value.
    pub fn value(self) -> i32 {
        match self {
            Self::Tabbable => 0,
            Self::Skipped => -1,
        }
    }
}

// ---------------------------------------------------------------------------
// RovingGroup
// ---------------------------------------------------------------------------

/// Single-selection coordinator over an ordered list of items.
///
/// Insertion order is navigation order. The coordinator is the only writer of
/// the items' `selected` flag; the owning component writes `enabled`, either
/// through [`set_enabled`](Self::set_enabled) or through its own shared
/// handles followed by [`refresh`](Self::refresh).
#[derive(Debug)]
pub struct RovingGroup<I> {
    items: Vec<I>,
    /// Index of the selected item, or `None` if nothing is selected.
    current: Option<usize>,
    config: GroupConfig,
}

impl<I: Item> RovingGroup<I> {
    /// Create an empty group with the given configuration.
    pub fn new(config: GroupConfig) -> Self {
        Self {
            items: Vec::new(),
            current: None,
            config,
        }
    }

    /// Set the initial items (builder).
    pub fn with_items(mut self, items: impl IntoIterator<Item = I>) -> Self {
        self.set_items(items);
        self
    }

    // ── Membership ───────────────────────────────────────────────────

    /// Replace the group's items.
    ///
    /// The selection is re-derived from the first item whose `selected` flag
    /// is set. The items themselves are not touched.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = I>) {
        self.items = items.into_iter().collect();
        self.rederive();
    }

    /// Re-derive the selection after items were mutated from outside.
    pub fn refresh(&mut self) {
        self.rederive();
    }

    fn rederive(&mut self) {
        self.current = self.items.iter().position(Item::is_selected);
        debug!(len = self.items.len(), current = ?self.current, "group selection re-derived");
    }

    /// Write the enabled flag of the item at `index`.
    ///
    /// A disabled item that is selected stays selected; it just stops being
    /// the focus target.
    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<(), Rejected> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(Rejected::OutOfRange { index, len })?;
        item.set_enabled(enabled);
        Ok(())
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Select the item at `index`, deselecting the previous one.
    ///
    /// Selecting the already-selected item succeeds without toggling its flag.
    pub fn select_by_index(&mut self, index: usize) -> Result<SelectionChange, Rejected> {
        let len = self.items.len();
        let Some(item) = self.items.get(index) else {
            debug!(index, len, "selection rejected: out of range");
            return Err(Rejected::OutOfRange { index, len });
        };
        if !item.is_enabled() {
            debug!(index, "selection rejected: item disabled");
            return Err(Rejected::ItemDisabled { index });
        }

        let previous_index = self.current;
        for (i, other) in self.items.iter_mut().enumerate() {
            if i != index && other.is_selected() {
                other.set_selected(false);
            }
        }
        if !self.items[index].is_selected() {
            self.items[index].set_selected(true);
        }
        self.current = Some(index);

        let change = SelectionChange {
            previous_index,
            new_index: index,
        };
        trace!(?change, "selection changed");
        Ok(change)
    }

    /// Select the first item with the given identity.
    pub fn select_by_id(&mut self, id: &I::Id) -> Result<SelectionChange, Rejected> {
        match self.position_of(id) {
            Some(index) => self.select_by_index(index),
            None => {
                debug!(?id, "selection rejected: unknown item");
                Err(Rejected::UnknownItem)
            }
        }
    }

    /// Select the next eligible item in `direction`.
    pub fn select_by_direction(
        &mut self,
        direction: Direction,
    ) -> Result<SelectionChange, Rejected> {
        match self.scan(direction) {
            Ok(target) => self.select_by_index(target),
            Err(rejected) => {
                debug!(?direction, current = ?self.current, %rejected, "navigation rejected");
                Err(rejected)
            }
        }
    }

    /// Dispatch an abstract navigation command.
    pub fn apply(&mut self, command: NavCommand) -> Result<SelectionChange, Rejected> {
        match command {
            NavCommand::SelectIndex(index) => self.select_by_index(index),
            NavCommand::Next => self.select_by_direction(Direction::Next),
            NavCommand::Previous => self.select_by_direction(Direction::Previous),
            NavCommand::First => self.select_by_direction(Direction::First),
            NavCommand::Last => self.select_by_direction(Direction::Last),
        }
    }

    /// Deselect every selected item. Returns the index that was current.
    pub fn clear_selection(&mut self) -> Option<usize> {
        let previous = self.current.take();
        for item in self.items.iter_mut().filter(|item| item.is_selected()) {
            item.set_selected(false);
        }
        trace!(?previous, "selection cleared");
        previous
    }

    /// Find the target index for `direction` without changing anything.
    ///
    /// Visits each index at most once, so it terminates on any enabled mask.
    fn scan(&self, direction: Direction) -> Result<usize, Rejected> {
        let len = self.items.len();
        if len == 0 {
            return Err(Rejected::EmptyGroup);
        }
        let enabled = |&i: &usize| self.items[i].is_enabled();

        let forward = match direction {
            Direction::First => {
                return (0..len).find(enabled).ok_or(Rejected::NoEnabledItems);
            }
            Direction::Last => {
                return (0..len).rev().find(enabled).ok_or(Rejected::NoEnabledItems);
            }
            Direction::Next => true,
            Direction::Previous => false,
        };

        let Some(start) = self.current else {
            let found = if forward {
                (0..len).find(enabled)
            } else {
                (0..len).rev().find(enabled)
            };
            return found.ok_or(Rejected::NoEnabledItems);
        };

        if !self.config.wrap {
            let found = if forward {
                (start + 1..len).find(enabled)
            } else {
                (0..start).rev().find(enabled)
            };
            return found.ok_or(Rejected::AtBoundary);
        }

        (1..len)
            .map(|step| {
                if forward {
                    (start + step) % len
                } else {
                    (start + len - step) % len
                }
            })
            .find(enabled)
            .ok_or(Rejected::NoEnabledItems)
    }

    // ── Focus ────────────────────────────────────────────────────────

    /// Index of the item that should hold keyboard focus.
    ///
    /// The selected item if it is enabled, otherwise the first enabled item.
    pub fn focus_target_index(&self) -> Option<usize> {
        self.current
            .filter(|&i| self.items[i].is_enabled())
            .or_else(|| self.items.iter().position(Item::is_enabled))
    }

    /// The item that should hold keyboard focus.
    pub fn focus_target(&self) -> Option<&I> {
        self.focus_target_index().map(|i| &self.items[i])
    }

    /// Roving tabindex for every item, in order.
    ///
    /// At most one entry is [`TabIndex::Tabbable`].
    pub fn tab_indices(&self) -> Vec<TabIndex> {
        let target = self.focus_target_index();
        (0..self.items.len())
            .map(|i| {
                if Some(i) == target {
                    TabIndex::Tabbable
                } else {
                    TabIndex::Skipped
                }
            })
            .collect()
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The selected item, if any.
    pub fn current(&self) -> Option<&I> {
        self.current.and_then(|i| self.items.get(i))
    }

    /// Index of the selected item, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Current coarse state.
    pub fn state(&self) -> GroupState {
        match self.current {
            _ if self.items.is_empty() => GroupState::Empty,
            Some(i) => GroupState::Selected(i),
            None => GroupState::Unselected,
        }
    }

    /// Index of the first item with the given identity.
    pub fn position_of(&self, id: &I::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == *id)
    }

    /// The item at `index`.
    pub fn get(&self, index: usize) -> Option<&I> {
        self.items.get(index)
    }

    /// All items in navigation order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The group's configuration.
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }
}

impl<I: Item> Default for RovingGroup<I> {
    fn default() -> Self {
        Self::new(GroupConfig::default())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
