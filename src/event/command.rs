//! Abstract navigation commands.
//!
//! Components translate raw input (key presses, clicks) into [`NavCommand`]s
//! and hand them to [`RovingGroup::apply`](crate::group::RovingGroup::apply).

/// A navigation or selection request against a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Move to the next enabled item.
    Next,
    /// Move to the previous enabled item.
    Previous,
    /// Move to the first enabled item.
    First,
    /// Move to the last enabled item.
    Last,
    /// Select the item at this index.
    SelectIndex(usize),
}
