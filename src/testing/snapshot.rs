//! Text rendering of a group for snapshot assertions.
//!
//! One line per item: a radio marker, the label, then flags.
//!
//! ```text
//! ( ) Small [tab]
//! ( ) Medium [disabled]
//! (*) Large
//! ```

use std::fmt::Debug;

use crate::group::{RovingGroup, TabIndex};
use crate::item::GroupItem;

/// Render a group to plain text, one line per item.
///
/// The label falls back to the `Debug` form of the item's id. `[tab]` marks
/// the group's single tab stop. Lines are joined with `'\n'` and the output
/// has no trailing newline.
pub fn group_to_string<Id: Clone + Eq + Debug>(group: &RovingGroup<GroupItem<Id>>) -> String {
    let tabs = group.tab_indices();
    group
        .items()
        .iter()
        .zip(tabs)
        .map(|(item, tab)| {
            let mark = if item.selected { "(*)" } else { "( )" };
            let label = item
                .label
                .clone()
                .unwrap_or_else(|| format!("{:?}", item.id));
            let mut line = format!("{mark} {label}");
            if tab == TabIndex::Tabbable {
                line.push_str(" [tab]");
            }
            if !item.enabled {
                line.push_str(" [disabled]");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================
