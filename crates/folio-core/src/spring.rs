//! Exponentially damped velocity filter.
//!
//! Not a physical mass-spring: each tick the previous velocity decays by a
//! fixed fraction and the displacement is added as an impulse scaled by `dt`.
//! The decay is per tick, so callers must keep `dt` inside the frame clamp.

use crate::config::SpringConfig;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub rotation_velocity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringTarget {
    pub position: Vec2,
    pub rotation: f32,
}

impl SpringTarget {
    pub const REST: Self = Self {
        position: Vec2::ZERO,
        rotation: 0.0,
    };
}

impl SpringState {
    pub const REST: Self = Self {
        position: Vec2::ZERO,
        velocity: Vec2::ZERO,
        rotation: 0.0,
        rotation_velocity: 0.0,
    };

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.rotation.is_finite()
            && self.rotation_velocity.is_finite()
    }
}

#[inline]
fn axis(position: f32, velocity: f32, target: f32, tension: f32, damping: f32, dt: f32) -> (f32, f32) {
    let force = (target - position) * tension;
    let velocity = velocity * (1.0 - damping) + force * dt;
    (position + velocity, velocity)
}

/// Advances `state` one tick toward `target`. `dt` is in seconds.
///
/// A non-finite result (bad target, bad dt, or already poisoned state) resets
/// the element to rest instead of letting NaN persist.
pub fn step(state: SpringState, target: SpringTarget, cfg: &SpringConfig, dt: f32) -> SpringState {
    let (px, vx) = axis(
        state.position.x,
        state.velocity.x,
        target.position.x,
        cfg.tension,
        cfg.damping,
        dt,
    );
    let (py, vy) = axis(
        state.position.y,
        state.velocity.y,
        target.position.y,
        cfg.tension,
        cfg.damping,
        dt,
    );
    let (rotation, rotation_velocity) = axis(
        state.rotation,
        state.rotation_velocity,
        target.rotation,
        cfg.rotation_tension,
        cfg.rotation_damping,
        dt,
    );
    let next = SpringState {
        position: Vec2::new(px, py),
        velocity: Vec2::new(vx, vy),
        rotation,
        rotation_velocity,
    };
    if next.is_finite() {
        next
    } else {
        log::warn!("[spring] non-finite state, resetting to rest");
        SpringState::REST
    }
}
