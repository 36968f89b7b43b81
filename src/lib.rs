//! # roving-group
//!
//! Roving-tabindex keyboard navigation and single-selection coordination for
//! grouped, selectable widgets: button groups, radio groups, menus, tabs, trees.
//!
//! The coordinator knows nothing about rendering. It consumes an ordered list
//! of [`Item`](item::Item) handles, answers navigation commands with typed
//! [`SelectionChange`](group::SelectionChange)s or [`Rejected`](error::Rejected)
//! reasons, and tells the renderer which single item is the tab stop.
//!
//! ## Core Systems
//!
//! - **[`item`]** — The `Item` capability and the owned `GroupItem` handle
//! - **[`group`]** — `RovingGroup` coordinator: selection, directional scan, focus target
//! - **[`error`]** — Typed rejections
//! - **[`config`]** — Wrap policy and orientation
//! - **[`event`]** — Key events (crossterm-decoupled), navigation commands, key bindings
//! - **[`widgets`]** — `RadioGroup`, a form-participating component
//! - **[`testing`]** — Headless `Pilot` and text rendering for tests

// Foundation
pub mod config;
pub mod error;
pub mod item;

// Coordinator
pub mod group;

// Input
pub mod event;

// Components
pub mod testing;
pub mod widgets;

pub use config::{GroupConfig, Orientation};
pub use error::Rejected;
pub use group::{Direction, GroupState, RovingGroup, SelectionChange, TabIndex};
pub use item::{GroupItem, Item};
