//! Numeric core of the portfolio's pointer- and scroll-reactive motion.
//!
//! Nothing here touches a platform API: the front end feeds timestamps and
//! input into these types and receives plain numbers (or calls into a
//! [`render`] sink) back, which keeps every animation testable on the host.

pub mod chrome;
pub mod clock;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod field;
pub mod gate;
pub mod letters;
pub mod marquee;
pub mod render;
pub mod signals;
pub mod spring;
pub mod views;

pub use chrome::{parse_depth, section_progress, NavChrome, ParallaxLayer, PointerParallax};
pub use clock::{FrameClock, Throttle, Tick};
pub use config::*;
pub use cursor::{CursorFollower, CursorFrame};
pub use field::{compute_field, Curve, Field, PathCommand};
pub use gate::VisibilityGate;
pub use letters::{LetterGroup, LetterMotion};
pub use marquee::{MarqueeDriver, MarqueeState};
pub use render::{PathSink, PositionSink, RecordingSink, Transform, TransformSink};
pub use signals::*;
pub use spring::{SpringState, SpringTarget};
