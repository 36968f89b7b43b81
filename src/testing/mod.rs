//! Headless testing helpers: Pilot, text rendering.
//!
//! Use the [`Pilot`] to drive a [`RadioGroup`](crate::widgets::RadioGroup)
//! with simulated key presses and clicks. Use [`group_to_string`] to capture
//! a group's state as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::{Outcome, Pilot};
pub use snapshot::group_to_string;
