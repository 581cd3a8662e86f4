//! Per-component tunables.
//!
//! Each animation takes one of these structs instead of hard-coding its
//! constants, so alternate looks are just alternate values. `Default` yields
//! the stock site feel from [`crate::constants`].

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must lie in (0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    #[error("exclusion radius {exclusion} must be smaller than influence radius {influence}")]
    RadiusOrder { exclusion: f32, influence: f32 },
    #[error("line count must be at least 1")]
    NoLines,
    #[error("{field} is {value}, at most {max} allowed")]
    TooLarge {
        field: &'static str,
        value: usize,
        max: usize,
    },
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value <= 0.0 || value > 1.0 {
        return Err(ConfigError::OutOfUnitRange { field, value });
    }
    Ok(())
}

fn at_most(field: &'static str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value > max {
        return Err(ConfigError::TooLarge { field, value, max });
    }
    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

/// Constants for the exponentially damped velocity filter in [`crate::spring`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub damping: f32,
    pub rotation_tension: f32,
    pub rotation_damping: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: LETTER_TENSION,
            damping: LETTER_DAMPING,
            rotation_tension: LETTER_ROTATION_TENSION,
            rotation_damping: LETTER_ROTATION_DAMPING,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tension", self.tension as f64)?;
        unit("damping", self.damping as f64)?;
        positive("rotation_tension", self.rotation_tension as f64)?;
        unit("rotation_damping", self.rotation_damping as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterConfig {
    pub spring: SpringConfig,
    pub radius: f32,
    pub force: f32,
    pub falloff_exponent: f32,
    pub rotation_gain: f32,
    pub seed_range: f32,
    pub movement_threshold: f32,
    pub movement_cap: f32,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            radius: LETTER_RADIUS,
            force: LETTER_FORCE,
            falloff_exponent: LETTER_FALLOFF_EXPONENT,
            rotation_gain: LETTER_ROTATION_GAIN,
            seed_range: LETTER_SEED_RANGE,
            movement_threshold: LETTER_MOVEMENT_THRESHOLD,
            movement_cap: LETTER_MOVEMENT_CAP,
        }
    }
}

impl LetterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spring.validate()?;
        positive("radius", self.radius as f64)?;
        finite("force", self.force as f64)?;
        positive("falloff_exponent", self.falloff_exponent as f64)?;
        finite("rotation_gain", self.rotation_gain as f64)?;
        positive("seed_range", self.seed_range as f64)?;
        positive("movement_cap", self.movement_cap as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub num_lines: usize,
    /// Width of the drawing surface; lines are spread over its right part.
    pub width: f32,
    pub height: f32,
    pub start_fraction: f32,
    pub sample_spacing: f32,
    pub min_steps: usize,
    pub amplitude: f32,
    pub amplitude_variation: f32,
    pub amplitude_line_rate: f32,
    pub spatial_frequency: f32,
    pub time_frequency: f32,
    pub phase: f32,
    pub line_phase: f32,
    pub exclusion_radius: f32,
    pub influence_radius: f32,
    pub push_strength: f32,
    pub smoothing_passes: usize,
    pub smoothing_self_weight: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            num_lines: FIELD_NUM_LINES,
            width: 1200.0,
            height: FIELD_HEIGHT,
            start_fraction: FIELD_START_FRACTION,
            sample_spacing: FIELD_SAMPLE_SPACING,
            min_steps: FIELD_MIN_STEPS,
            amplitude: FIELD_AMPLITUDE,
            amplitude_variation: FIELD_AMPLITUDE_VARIATION,
            amplitude_line_rate: FIELD_AMPLITUDE_LINE_RATE,
            spatial_frequency: FIELD_SPATIAL_FREQUENCY,
            time_frequency: FIELD_TIME_FREQUENCY,
            phase: 0.0,
            line_phase: FIELD_LINE_PHASE,
            exclusion_radius: FIELD_EXCLUSION_RADIUS,
            influence_radius: FIELD_INFLUENCE_RADIUS,
            push_strength: FIELD_PUSH_STRENGTH,
            smoothing_passes: FIELD_SMOOTHING_PASSES,
            smoothing_self_weight: FIELD_SMOOTHING_SELF_WEIGHT,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_lines == 0 {
            return Err(ConfigError::NoLines);
        }
        at_most("num_lines", self.num_lines, FIELD_MAX_LINES)?;
        at_most("min_steps", self.min_steps, FIELD_MAX_STEPS)?;
        at_most("smoothing_passes", self.smoothing_passes, FIELD_MAX_SMOOTHING_PASSES)?;
        positive("width", self.width as f64)?;
        positive("height", self.height as f64)?;
        finite("start_fraction", self.start_fraction as f64)?;
        positive("sample_spacing", self.sample_spacing as f64)?;
        finite("amplitude", self.amplitude as f64)?;
        finite("spatial_frequency", self.spatial_frequency as f64)?;
        finite("time_frequency", self.time_frequency as f64)?;
        finite("phase", self.phase as f64)?;
        positive("exclusion_radius", self.exclusion_radius as f64)?;
        positive("influence_radius", self.influence_radius as f64)?;
        if self.exclusion_radius >= self.influence_radius {
            return Err(ConfigError::RadiusOrder {
                exclusion: self.exclusion_radius,
                influence: self.influence_radius,
            });
        }
        finite("push_strength", self.push_strength as f64)?;
        unit("smoothing_self_weight", self.smoothing_self_weight as f64)
    }

    /// Number of sample intervals along one line, always within
    /// `1..=FIELD_MAX_STEPS` even for a config that fails validation.
    pub fn steps(&self) -> usize {
        let ratio = self.height / self.sample_spacing;
        let by_spacing = if ratio.is_finite() && ratio > 0.0 {
            ratio.floor().min(FIELD_MAX_STEPS as f32) as usize
        } else {
            0
        };
        by_spacing.max(self.min_steps).clamp(1, FIELD_MAX_STEPS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeConfig {
    pub speed: f64,
    pub lerp: f64,
    pub flip_threshold: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: MARQUEE_SPEED,
            lerp: MARQUEE_LERP,
            flip_threshold: MARQUEE_FLIP_THRESHOLD,
        }
    }
}

impl MarqueeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("speed", self.speed)?;
        unit("lerp", self.lerp)?;
        finite("flip_threshold", self.flip_threshold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorConfig {
    pub follow: f32,
    pub min_viewport_width: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            follow: CURSOR_FOLLOW,
            min_viewport_width: CURSOR_MIN_VIEWPORT_WIDTH,
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit("follow", self.follow as f64)?;
        finite("min_viewport_width", self.min_viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(SpringConfig::default().validate().is_ok());
        assert!(LetterConfig::default().validate().is_ok());
        assert!(FieldConfig::default().validate().is_ok());
        assert!(MarqueeConfig::default().validate().is_ok());
        assert!(CursorConfig::default().validate().is_ok());
    }

    #[test]
    fn steps_respect_minimum() {
        let cfg = FieldConfig {
            height: 100.0,
            ..FieldConfig::default()
        };
        assert_eq!(cfg.steps(), FIELD_MIN_STEPS);
        assert_eq!(FieldConfig::default().steps(), 28);
    }

    #[test]
    fn steps_stay_bounded() {
        let zero_spacing = FieldConfig {
            sample_spacing: 0.0,
            ..FieldConfig::default()
        };
        assert_eq!(zero_spacing.steps(), FIELD_MAX_STEPS);
        let huge_min = FieldConfig {
            min_steps: usize::MAX,
            ..FieldConfig::default()
        };
        assert_eq!(huge_min.steps(), FIELD_MAX_STEPS);
        let nan_height = FieldConfig {
            height: f32::NAN,
            ..FieldConfig::default()
        };
        assert_eq!(nan_height.steps(), FIELD_MIN_STEPS);
    }
}
