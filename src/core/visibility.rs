/// Whether the picker window should be on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility(bool);

impl Visibility {
    pub fn new(visible: bool) -> Self {
        Self(visible)
    }

    pub fn is_visible(&self) -> bool {
        self.0
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.0 = !self.0;
        self.0
    }

    /// Set the state. Returns true if it changed.
    pub fn set(&mut self, visible: bool) -> bool {
        let changed = self.0 != visible;
        self.0 = visible;
        changed
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self(true)
    }
}
