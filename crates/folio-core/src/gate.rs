/// On/off switch for one animation.
///
/// Ticks must early-return while the gate is closed. Accumulating state
/// (spring velocity, marquee offset) then pauses in place; wall-clock phases
/// simply pick up where the clock is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityGate {
    visible: bool,
    suppressed: bool,
}

#[inline]
pub fn should_run(element_visible: bool, suppressed: bool) -> bool {
    element_visible && !suppressed
}

impl VisibilityGate {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            suppressed: false,
        }
    }

    /// Returns true when the open/closed state flipped.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let before = self.is_open();
        self.visible = visible;
        before != self.is_open()
    }

    /// Returns true when the open/closed state flipped.
    pub fn set_suppressed(&mut self, suppressed: bool) -> bool {
        let before = self.is_open();
        self.suppressed = suppressed;
        before != self.is_open()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        should_run(self.visible, self.suppressed)
    }
}

/// True when the pointer sits below the top edge of a suppressing element
/// (e.g. the marquee band under the hero letters).
#[inline]
pub fn pointer_below(pointer_y: f32, edge_top: Option<f32>) -> bool {
    matches!(edge_top, Some(top) if pointer_y > top)
}
