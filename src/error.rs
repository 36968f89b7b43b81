//! Typed rejections returned by the coordinator.
//!
//! None of these are fatal. A rejected operation leaves the group exactly as
//! it was, and the owning component decides whether to swallow the key press,
//! keep focus on the container, or log.

/// Why a selection or navigation request was not carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("index {index} out of range for group of {len} items")]
    OutOfRange { index: usize, len: usize },
    #[error("item at index {index} is disabled")]
    ItemDisabled { index: usize },
    #[error("no other enabled item to move to")]
    NoEnabledItems,
    #[error("group has no items")]
    EmptyGroup,
    #[error("no item with that identity in the group")]
    UnknownItem,
    #[error("reached the end of a non-wrapping group")]
    AtBoundary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Rejected::OutOfRange { index: 5, len: 3 }.to_string(),
            "index 5 out of range for group of 3 items"
        );
        assert_eq!(
            Rejected::ItemDisabled { index: 1 }.to_string(),
            "item at index 1 is disabled"
        );
        assert_eq!(Rejected::EmptyGroup.to_string(), "group has no items");
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Rejected::NoEnabledItems);
        assert_eq!(err.to_string(), "no other enabled item to move to");
    }
}
