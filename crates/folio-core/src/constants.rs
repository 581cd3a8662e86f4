//! Motion tuning constants.
//!
//! These values describe the intended feel of each animation (stiffness,
//! smoothing factors, radii) and keep magic numbers out of the integrators.

// Frame timing
pub const MAX_FRAME_DT_MS: f64 = 30.0; // clamp applied before any integration
pub const FIELD_THROTTLE_MS: f64 = 33.0; // wavy field is recomputed at ~30fps

// Letter spring (translation)
pub const LETTER_TENSION: f32 = 1.0;
pub const LETTER_DAMPING: f32 = 0.15; // fraction of velocity lost per tick
// Letter spring (rotation, degrees)
pub const LETTER_ROTATION_TENSION: f32 = 0.5;
pub const LETTER_ROTATION_DAMPING: f32 = 0.6;

// Letter displacement target
pub const LETTER_RADIUS: f32 = 700.0; // pointer influence radius in px
pub const LETTER_FORCE: f32 = 200.0; // displacement at zero distance in px
pub const LETTER_FALLOFF_EXPONENT: f32 = 1.5;
pub const LETTER_ROTATION_GAIN: f32 = 0.15;
pub const LETTER_SEED_RANGE: f32 = 5.0; // seeds drawn from [-range, range)
pub const LETTER_MOVEMENT_THRESHOLD: f32 = 1.0; // px of pointer travel before tilting
pub const LETTER_MOVEMENT_CAP: f32 = 30.0; // px of travel for full tilt

// Wavy line field
pub const FIELD_NUM_LINES: usize = 10;
pub const FIELD_MAX_LINES: usize = 64;
pub const FIELD_MAX_STEPS: usize = 512;
pub const FIELD_MAX_SMOOTHING_PASSES: usize = 16;
pub const FIELD_HEIGHT: f32 = 850.0;
pub const FIELD_START_FRACTION: f32 = 0.6; // lines occupy the right 40% of the width
pub const FIELD_SAMPLE_SPACING: f32 = 30.0;
pub const FIELD_MIN_STEPS: usize = 20;
pub const FIELD_AMPLITUDE: f32 = 15.0;
pub const FIELD_AMPLITUDE_VARIATION: f32 = 5.0;
pub const FIELD_AMPLITUDE_LINE_RATE: f32 = 0.3;
pub const FIELD_SPATIAL_FREQUENCY: f32 = 0.008; // radians per px along a line
pub const FIELD_TIME_FREQUENCY: f32 = 0.5; // radians per second
pub const FIELD_LINE_PHASE: f32 = 0.0; // phase step between adjacent lines
pub const FIELD_EXCLUSION_RADIUS: f32 = 40.0;
pub const FIELD_INFLUENCE_RADIUS: f32 = 80.0;
pub const FIELD_PUSH_STRENGTH: f32 = 30.0;
pub const FIELD_SMOOTHING_PASSES: usize = 3;
pub const FIELD_SMOOTHING_SELF_WEIGHT: f32 = 0.7; // remainder is split between neighbours

// Marquee
pub const MARQUEE_SPEED: f64 = 0.8; // px per frame
pub const MARQUEE_LERP: f64 = 0.05;
pub const MARQUEE_FLIP_THRESHOLD: f64 = 2.0; // px of scroll travel before a flip counts

// Cursor
pub const CURSOR_FOLLOW: f32 = 0.15;
pub const CURSOR_OFFSCREEN: f32 = -100.0;
pub const CURSOR_MIN_VIEWPORT_WIDTH: f64 = 768.0;

// Parallax (percent of layer height)
pub const PARALLAX_BG_FROM: f32 = 0.0;
pub const PARALLAX_BG_TO: f32 = -30.0;
pub const PARALLAX_FG_FROM: f32 = 10.0;
pub const PARALLAX_FG_TO: f32 = -10.0;

// Pointer parallax (px of drift per px of pointer travel inside the container)
pub const POINTER_WORD_DEPTH: f32 = 0.02; // the two backdrop words drift in opposite directions
pub const POINTER_DOT_DEPTH_X: f32 = 0.03;
pub const POINTER_DOT_DEPTH_Y: f32 = 0.02;
pub const POINTER_DOT_DEPTH_STEP: f32 = 0.01; // each further dot sits a little closer
pub const POINTER_DOT_COUNT: usize = 4;
pub const POINTER_GRID_DEPTH: f32 = 0.01;
pub const POINTER_RIPPLE_RADIUS: f32 = 60.0;

// Non-finite recovery
pub const MIN_DISTANCE: f32 = 1.0;
