//! Pointer-repelled letters.
//!
//! Each letter is pushed away from a nearby pointer and tilts in the
//! direction the pointer is travelling. Tilt amount is scaled by a seed drawn
//! once per letter, so neighbouring letters do not rotate in lockstep.

use crate::config::{ConfigError, LetterConfig};
use crate::render::{ElementHandle, Transform, TransformSink};
use crate::signals::PointerSignal;
use crate::spring::{self, SpringState, SpringTarget};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct LetterMotion {
    cfg: LetterConfig,
    state: SpringState,
    seed: f32,
    prev_pointer: Option<Vec2>,
}

impl LetterMotion {
    pub fn try_new(cfg: LetterConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let seed = rng.gen_range(-cfg.seed_range..cfg.seed_range);
        Ok(Self::with_seed(cfg, seed))
    }

    pub fn with_seed(cfg: LetterConfig, seed: f32) -> Self {
        Self {
            cfg,
            state: SpringState::REST,
            seed,
            prev_pointer: None,
        }
    }

    #[inline]
    pub fn seed(&self) -> f32 {
        self.seed
    }

    #[inline]
    pub fn state(&self) -> SpringState {
        self.state
    }

    /// Displacement and tilt the letter is pulled toward this tick.
    ///
    /// `center` is the letter's resting centre in the same space as the pointer.
    pub fn target(&self, center: Vec2, pointer: Vec2) -> SpringTarget {
        let delta = pointer - center;
        let distance = delta.length();
        if distance >= self.cfg.radius {
            return SpringTarget::REST;
        }
        let effect = ((self.cfg.radius - distance) / self.cfg.radius).powf(self.cfg.falloff_exponent);
        let force = effect * self.cfg.force;
        let safe = if distance > 0.0 { distance } else { crate::constants::MIN_DISTANCE };
        let position = -delta / safe * force;

        let rotation = match self.prev_pointer {
            Some(prev) => {
                let travel = pointer - prev;
                let moved = travel.length();
                if moved > self.cfg.movement_threshold {
                    let angle = travel.y.atan2(travel.x).to_degrees();
                    let factor = moved.min(self.cfg.movement_cap) / self.cfg.movement_cap;
                    angle * self.cfg.rotation_gain * self.seed * factor
                } else {
                    0.0
                }
            }
            None => 0.0,
        };
        SpringTarget { position, rotation }
    }

    /// Advances one tick. An inactive pointer pulls the letter back to rest
    /// through the same spring.
    pub fn tick(&mut self, center: Vec2, pointer: PointerSignal, dt_sec: f32) -> Transform {
        let target = match pointer.position() {
            Some(p) => {
                let t = self.target(center, p);
                self.prev_pointer = Some(p);
                t
            }
            None => {
                self.prev_pointer = None;
                SpringTarget::REST
            }
        };
        self.state = spring::step(self.state, target, &self.cfg.spring, dt_sec);
        Transform {
            x: self.state.position.x,
            y: self.state.position.y,
            rotation: self.state.rotation,
            eased: false,
        }
    }

    /// Snaps to rest; the returned transform asks the sink to ease the jump.
    pub fn release(&mut self) -> Transform {
        self.state = SpringState::REST;
        self.prev_pointer = None;
        Transform {
            eased: true,
            ..Transform::REST
        }
    }
}

/// All letters of one heading, ticked together against one pointer snapshot.
#[derive(Clone, Debug, Default)]
pub struct LetterGroup {
    letters: Vec<LetterMotion>,
    released: bool,
}

impl LetterGroup {
    pub fn try_new(count: usize, cfg: LetterConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        let letters = (0..count)
            .map(|_| LetterMotion::try_new(cfg, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            letters,
            released: false,
        })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[LetterMotion] {
        &self.letters
    }

    /// `centers` yields each letter's resting centre; a letter whose centre
    /// is unknown (element gone) is skipped.
    pub fn tick<S: TransformSink>(
        &mut self,
        centers: impl Fn(ElementHandle) -> Option<Vec2>,
        pointer: PointerSignal,
        dt_sec: f32,
        sink: &mut S,
    ) {
        self.released = false;
        for (i, letter) in self.letters.iter_mut().enumerate() {
            let Some(center) = centers(i) else {
                continue;
            };
            sink.apply_transform(i, letter.tick(center, pointer, dt_sec));
        }
    }

    /// Snaps every letter to rest once; repeated calls emit nothing.
    pub fn release<S: TransformSink>(&mut self, sink: &mut S) {
        if self.released {
            return;
        }
        self.released = true;
        for (i, letter) in self.letters.iter_mut().enumerate() {
            sink.apply_transform(i, letter.release());
        }
    }
}
