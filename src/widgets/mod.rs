//! Components built on the roving group coordinator.

pub mod radio_group;

pub use radio_group::RadioGroup;
