//! Scroll-reactive infinite marquee.
//!
//! The band runs left while the page scrolls down and right while it scrolls
//! up. Speed changes are low-pass filtered so a direction flip glides through
//! zero. The content is laid out as two back-to-back copies and the offset
//! stays inside `(-period, 0]`, so wrapping by one period is invisible.

use crate::config::{ConfigError, MarqueeConfig};
use crate::signals::ScrollDirection;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarqueeState {
    pub offset: f64,
    pub current_speed: f64,
    pub target_speed: f64,
    /// Width of one copy of the content; `0.0` until measured.
    pub content_period: f64,
}

impl MarqueeState {
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.content_period > 0.0 && self.content_period.is_finite()
    }
}

#[derive(Clone, Debug)]
pub struct MarqueeDriver {
    cfg: MarqueeConfig,
    state: MarqueeState,
    direction: ScrollDirection,
    last_scroll_y: f64,
}

impl MarqueeDriver {
    pub fn try_new(cfg: MarqueeConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            state: MarqueeState {
                current_speed: -cfg.speed,
                target_speed: -cfg.speed,
                ..MarqueeState::default()
            },
            direction: ScrollDirection::Down,
            last_scroll_y: 0.0,
        })
    }

    /// Starts from an explicit state, e.g. a band that begins mid-scroll.
    pub fn with_state(cfg: MarqueeConfig, state: MarqueeState) -> Result<Self, ConfigError> {
        let mut driver = Self::try_new(cfg)?;
        driver.direction = if state.target_speed > 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };
        driver.state = state;
        Ok(driver)
    }

    #[inline]
    pub fn state(&self) -> MarqueeState {
        self.state
    }

    #[inline]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Records the width of one content copy. Only the first usable width
    /// is kept; zero or non-finite widths leave the driver waiting.
    pub fn measure(&mut self, width: f64) -> bool {
        if self.state.is_ready() || !(width > 0.0 && width.is_finite()) {
            return false;
        }
        self.state.content_period = width;
        log::debug!("[marquee] content period {:.1}px", width);
        true
    }

    /// Feeds the current scroll offset. Movements at or under the threshold
    /// still update the reference point but never flip the direction.
    pub fn observe_scroll(&mut self, scroll_y: f64) {
        if !scroll_y.is_finite() {
            return;
        }
        let diff = scroll_y - self.last_scroll_y;
        if diff.abs() > self.cfg.flip_threshold {
            let direction = if diff > 0.0 {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
            if direction != self.direction {
                self.direction = direction;
                self.state.target_speed = match direction {
                    ScrollDirection::Up => self.cfg.speed,
                    _ => -self.cfg.speed,
                };
            }
        }
        self.last_scroll_y = scroll_y;
    }

    /// Advances one frame and returns the offset to render, or `None` while
    /// the content period is unknown.
    pub fn tick(&mut self) -> Option<f64> {
        if !self.state.is_ready() {
            return None;
        }
        let s = &mut self.state;
        s.current_speed += (s.target_speed - s.current_speed) * self.cfg.lerp;
        s.offset += s.current_speed;

        let period = s.content_period;
        if s.current_speed < 0.0 && s.offset <= -period {
            s.offset += period;
        } else if s.current_speed > 0.0 && s.offset >= 0.0 {
            s.offset -= period;
        }
        // a shrunken period or a poisoned value must not let the offset run away
        if !s.offset.is_finite() || !s.current_speed.is_finite() {
            log::warn!("[marquee] non-finite offset, resetting");
            s.offset = 0.0;
            s.current_speed = s.target_speed;
        } else if s.offset.abs() > period {
            s.offset = -(-s.offset).rem_euclid(period);
        }
        Some(s.offset)
    }
}
