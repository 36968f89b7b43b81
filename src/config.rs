//! Group configuration: wrap policy and orientation.

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Which arrow keys move through the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Left/Right (button groups, tabs).
    Horizontal,
    /// Up/Down (menus, trees, radio lists).
    Vertical,
    /// All four arrows.
    #[default]
    Both,
}

impl Orientation {
    /// Whether Left/Right navigate.
    pub fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Whether Up/Down navigate.
    pub fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

// ---------------------------------------------------------------------------
// GroupConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`RovingGroup`](crate::group::RovingGroup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupConfig {
    /// Whether directional navigation continues past the ends of the list.
    pub wrap: bool,
    /// Arrow-key orientation used for default key bindings.
    pub orientation: Orientation,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            orientation: Orientation::Both,
        }
    }
}

impl GroupConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrap policy (builder).
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the orientation (builder).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}
