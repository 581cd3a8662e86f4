//! Page chrome: the compact navigation pill, scroll parallax layers and the
//! pointer-driven backdrop.

use crate::constants::*;
use crate::signals::PointerSignal;
use glam::Vec2;
use smallvec::SmallVec;

/// Tracks whether the compact pill navigation should replace the full bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavChrome {
    pill_visible: bool,
}

impl NavChrome {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pill_visible(&self) -> bool {
        self.pill_visible
    }

    /// `main_bottom` is the bottom edge of the full bar relative to the
    /// viewport top. Returns the new visibility only when it changed.
    pub fn update(&mut self, main_bottom: f64) -> Option<bool> {
        let show = main_bottom <= 0.0;
        if show == self.pill_visible {
            return None;
        }
        self.pill_visible = show;
        Some(show)
    }
}

/// Scroll progress of a section through the viewport: 0 when its top meets
/// the viewport bottom, 1 when its bottom meets the viewport top.
pub fn section_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f32 {
    let travel = viewport_height + section_height;
    if !(travel > 0.0) {
        return 0.0;
    }
    ((viewport_height - section_top) / travel).clamp(0.0, 1.0) as f32
}

/// Linear mapping of progress onto a percent translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub from_percent: f32,
    pub to_percent: f32,
}

impl ParallaxLayer {
    pub const BACKGROUND: Self = Self {
        from_percent: PARALLAX_BG_FROM,
        to_percent: PARALLAX_BG_TO,
    };
    pub const FOREGROUND: Self = Self {
        from_percent: PARALLAX_FG_FROM,
        to_percent: PARALLAX_FG_TO,
    };

    #[inline]
    pub fn offset_percent(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        self.from_percent + (self.to_percent - self.from_percent) * p
    }
}

/// Backdrop layers that drift with the pointer position inside their
/// container, each by its own depth factor. While the pointer is outside the
/// container (or inactive) every layer sits at rest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerParallax {
    depths: SmallVec<[Vec2; 8]>,
    local: Option<Vec2>,
}

impl PointerParallax {
    pub fn new(depths: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            depths: depths.into_iter().collect(),
            local: None,
        }
    }

    /// Hero backdrop depths in layer order: the two words, `dots` floating
    /// dots, then the grid.
    pub fn stock_depths(dots: usize) -> SmallVec<[Vec2; 8]> {
        let mut depths = SmallVec::new();
        depths.push(Vec2::splat(POINTER_WORD_DEPTH));
        depths.push(Vec2::splat(-POINTER_WORD_DEPTH));
        for i in 0..dots {
            let step = i as f32 * POINTER_DOT_DEPTH_STEP;
            depths.push(Vec2::new(POINTER_DOT_DEPTH_X + step, POINTER_DOT_DEPTH_Y + step));
        }
        depths.push(Vec2::splat(POINTER_GRID_DEPTH));
        depths
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Takes this frame's pointer snapshot against the container's
    /// viewport-space `origin` and `size`. Returns true when the layers moved.
    pub fn update(&mut self, pointer: PointerSignal, origin: Vec2, size: Vec2) -> bool {
        let local = pointer.position().map(|p| p - origin).filter(|l| {
            l.is_finite() && l.x >= 0.0 && l.y >= 0.0 && l.x <= size.x && l.y <= size.y
        });
        if local == self.local {
            return false;
        }
        self.local = local;
        true
    }

    #[inline]
    pub fn hovering(&self) -> bool {
        self.local.is_some()
    }

    /// Drift of `layer` in px; unknown layers never move.
    pub fn offset(&self, layer: usize) -> Vec2 {
        match (self.local, self.depths.get(layer)) {
            (Some(local), Some(depth)) => local * *depth,
            _ => Vec2::ZERO,
        }
    }

    /// Top-left corner of the hover ripple, in container coordinates.
    pub fn ripple_origin(&self) -> Option<Vec2> {
        self.local.map(|l| l - Vec2::splat(POINTER_RIPPLE_RADIUS))
    }
}

/// Parses a `data-depth` value: one factor for both axes (`"0.02"`) or
/// an `x,y` pair (`"0.03, 0.02"`).
pub fn parse_depth(raw: &str) -> Option<Vec2> {
    let mut parts = raw.split(',').map(|p| p.trim().parse::<f32>());
    let x = parts.next()?.ok()?;
    let y = match parts.next() {
        Some(y) => y.ok()?,
        None => x,
    };
    if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Vec2::new(x, y))
}
