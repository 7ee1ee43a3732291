// src/services/visibility.rs
// Folds window focus, occlusion and minimize state into the single visible/hidden flag the renderer reads.

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    pause_when_unfocused: bool,
    focused: bool,
    occluded: bool,
    minimized: bool,
}

impl VisibilityTracker {
    pub fn new(pause_when_unfocused: bool) -> Self {
        Self {
            pause_when_unfocused,
            focused: true,
            occluded: false,
            minimized: false,
        }
    }

    /// Returns true if the visible state changed.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        let before = self.is_visible();
        self.focused = focused;
        before != self.is_visible()
    }

    /// Window fully covered by other windows or on a hidden workspace.
    pub fn set_occluded(&mut self, occluded: bool) -> bool {
        let before = self.is_visible();
        self.occluded = occluded;
        before != self.is_visible()
    }

    /// A window resized to nothing is treated as minimized.
    pub fn set_minimized(&mut self, minimized: bool) -> bool {
        let before = self.is_visible();
        self.minimized = minimized;
        before != self.is_visible()
    }

    pub fn is_visible(&self) -> bool {
        if self.minimized || self.occluded {
            return false;
        }
        self.focused || !self.pause_when_unfocused
    }
}
