use crate::config::{ConfigError, CursorConfig};
use crate::constants::CURSOR_OFFSCREEN;
use crate::signals::PointerSignal;
use glam::Vec2;

/// What the two cursor elements should show this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub ring: Vec2,
    pub hovering: bool,
    pub visible: bool,
}

/// Dot pinned to the pointer plus a ring that eases after it.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    cfg: CursorConfig,
    dot: Vec2,
    ring: Vec2,
    hovering: bool,
}

impl CursorFollower {
    pub fn try_new(cfg: CursorConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let parked = Vec2::splat(CURSOR_OFFSCREEN);
        Ok(Self {
            cfg,
            dot: parked,
            ring: parked,
            hovering: false,
        })
    }

    /// Whether the custom cursor should run at all on a viewport this wide.
    #[inline]
    pub fn enabled_for(&self, viewport_width: f64) -> bool {
        viewport_width >= self.cfg.min_viewport_width
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    #[inline]
    pub fn ring(&self) -> Vec2 {
        self.ring
    }

    /// One geometric step: the remaining gap shrinks by `1 - follow`.
    pub fn tick(&mut self, pointer: PointerSignal) -> CursorFrame {
        if let Some(p) = pointer.position() {
            self.dot = p;
        }
        let next = self.ring + (self.dot - self.ring) * self.cfg.follow;
        self.ring = if next.is_finite() { next } else { self.dot };
        CursorFrame {
            dot: self.dot,
            ring: self.ring,
            hovering: self.hovering,
            visible: pointer.active,
        }
    }
}
