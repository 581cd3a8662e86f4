//! Side-effect boundary between the numeric core and whatever draws it.

use glam::Vec2;
use std::ops::Range;

/// Opaque index of an animated element inside its owning group.
pub type ElementHandle = usize;

/// Translation in px plus rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    /// Set on the frame an element snaps back to rest; sinks may ease it.
    pub eased: bool,
}

impl Transform {
    pub const REST: Self = Self {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        eased: false,
    };

    #[inline]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Reconciliation of a set of existing drawable nodes against how many are
/// needed: nodes at `remove` are surplus, `create` more must be appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodePlan {
    pub create: usize,
    pub remove: Range<usize>,
}

pub fn plan_nodes(existing: usize, wanted: usize) -> NodePlan {
    NodePlan {
        create: wanted.saturating_sub(existing),
        remove: wanted.min(existing)..existing,
    }
}

pub trait TransformSink {
    fn apply_transform(&mut self, handle: ElementHandle, transform: Transform);
}

pub trait PathSink {
    fn apply_path(&mut self, index: usize, d: &str);
}

pub trait PositionSink {
    fn apply_position(&mut self, handle: ElementHandle, position: Vec2);
}

/// Sink that remembers everything it was given; handy for tests and for
/// diffing frames before touching a real surface.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub transforms: Vec<(ElementHandle, Transform)>,
    pub paths: Vec<(usize, String)>,
    pub positions: Vec<(ElementHandle, Vec2)>,
}

impl RecordingSink {
    pub fn clear(&mut self) {
        self.transforms.clear();
        self.paths.clear();
        self.positions.clear();
    }

    pub fn last_transform(&self, handle: ElementHandle) -> Option<Transform> {
        self.transforms
            .iter()
            .rev()
            .find(|(h, _)| *h == handle)
            .map(|(_, t)| *t)
    }
}

impl TransformSink for RecordingSink {
    fn apply_transform(&mut self, handle: ElementHandle, transform: Transform) {
        self.transforms.push((handle, transform));
    }
}

impl PathSink for RecordingSink {
    fn apply_path(&mut self, index: usize, d: &str) {
        self.paths.push((index, d.to_owned()));
    }
}

impl PositionSink for RecordingSink {
    fn apply_position(&mut self, handle: ElementHandle, position: Vec2) {
        self.positions.push((handle, position));
    }
}
