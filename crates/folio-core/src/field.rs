//! Pointer-repelled wavy line field.
//!
//! Every call recomputes the whole field from `(t, pointer, config)`; nothing
//! is carried between frames, so identical inputs give identical output.
//!
//! The pipeline per frame:
//! 1. sinusoidal base position for every sample,
//! 2. per-sample pointer displacement (hard exclusion disc, Gaussian push
//!    with a tangential swirl inside the influence radius),
//! 3. neighbour smoothing of the displacement over the finished grid,
//! 4. Catmull-Rom style cubic segments through the samples.

use crate::config::FieldConfig;
use glam::Vec2;
use smallvec::SmallVec;
use std::fmt::Write as _;

pub type PointSample = Vec2;

/// Direction used when the pointer sits exactly on a sample.
const FALLBACK_DIRECTION: Vec2 = Vec2::X;
const DEGENERATE_DISTANCE: f32 = 1e-6;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    pub points: SmallVec<[PointSample; 32]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
}

impl Curve {
    /// Move-to plus one cubic per segment. Control points follow the
    /// Catmull-Rom tangent of each end, with the end samples duplicated.
    pub fn to_commands(&self) -> Vec<PathCommand> {
        let pts = &self.points;
        let Some(&first) = pts.first() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(pts.len());
        out.push(PathCommand::MoveTo(first));
        let last = pts.len() - 1;
        for i in 0..last {
            let p0 = pts[i.saturating_sub(1)];
            let p1 = pts[i];
            let p2 = pts[i + 1];
            let p3 = pts[(i + 2).min(last)];
            out.push(PathCommand::CubicTo {
                c1: p1 + (p2 - p0) / 6.0,
                c2: p2 - (p3 - p1) / 6.0,
                to: p2,
            });
        }
        out
    }

    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();
        for cmd in self.to_commands() {
            // writing into a String cannot fail
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(d, "M{:.2},{:.2}", p.x, p.y),
                PathCommand::CubicTo { c1, c2, to } => write!(
                    d,
                    " C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                ),
            };
        }
        d
    }
}

/// Ordered curves; order is draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    pub curves: Vec<Curve>,
}

impl Field {
    pub fn to_svg_paths(&self) -> Vec<String> {
        self.curves.iter().map(Curve::to_svg_path).collect()
    }
}

/// Resting x of line `i`: lines spread evenly over the right part of the width.
pub fn base_x(i: usize, cfg: &FieldConfig) -> f32 {
    let start = cfg.width * cfg.start_fraction;
    let span = cfg.width - start;
    if cfg.num_lines <= 1 {
        return start + span * 0.5;
    }
    start + (i as f32 / (cfg.num_lines - 1) as f32) * span
}

pub fn amplitude(i: usize, cfg: &FieldConfig) -> f32 {
    cfg.amplitude + (i as f32 * cfg.amplitude_line_rate).sin() * cfg.amplitude_variation
}

/// Pointer-free sample position.
pub fn base_sample(t: f32, i: usize, y: f32, cfg: &FieldConfig) -> PointSample {
    let angle = t * cfg.time_frequency + cfg.phase + y * cfg.spatial_frequency + i as f32 * cfg.line_phase;
    Vec2::new(base_x(i, cfg) + angle.sin() * amplitude(i, cfg), y)
}

/// Moves one sample away from the pointer.
///
/// Inside the exclusion radius the sample lands exactly on the exclusion
/// circle. Inside the influence radius it gets a Gaussian push (σ = r/3)
/// plus an equal push rotated 90°. Outside both it is returned untouched.
pub fn displace_sample(sample: PointSample, pointer: Vec2, cfg: &FieldConfig) -> PointSample {
    let away = sample - pointer;
    let d = away.length();
    if d >= cfg.influence_radius {
        return sample;
    }
    let dir = if d > DEGENERATE_DISTANCE && away.is_finite() {
        away / d
    } else {
        FALLBACK_DIRECTION
    };
    if d < cfg.exclusion_radius {
        return pointer + dir * cfg.exclusion_radius;
    }
    let sigma = cfg.influence_radius / 3.0;
    let falloff = (-(d * d) / (2.0 * sigma * sigma)).exp();
    let magnitude = cfg.push_strength * falloff;
    sample + dir * magnitude + dir.perp() * magnitude
}

/// Pushes a sample that ended up inside the exclusion disc back onto its
/// rim, along the ray from the pointer.
fn keep_clear(sample: PointSample, pointer: Vec2, radius: f32) -> PointSample {
    let away = sample - pointer;
    let d = away.length();
    if d >= radius {
        return sample;
    }
    let dir = if d > DEGENERATE_DISTANCE && away.is_finite() {
        away / d
    } else {
        FALLBACK_DIRECTION
    };
    pointer + dir * radius
}

/// One Jacobi pass of the neighbour blend over a displacement grid laid out
/// line-major (`grid[line * rows + row]`). Missing neighbours at the edges
/// count as the sample itself.
fn smooth_pass(grid: &[Vec2], lines: usize, rows: usize, self_weight: f32) -> Vec<Vec2> {
    let side = (1.0 - self_weight) * 0.5;
    let at = |line: usize, row: usize| grid[line * rows + row];
    let mut horizontal = vec![Vec2::ZERO; grid.len()];
    for line in 0..lines {
        for row in 0..rows {
            let me = at(line, row);
            let left = if line > 0 { at(line - 1, row) } else { me };
            let right = if line + 1 < lines { at(line + 1, row) } else { me };
            horizontal[line * rows + row] = me * self_weight + (left + right) * side;
        }
    }
    let mut out = vec![Vec2::ZERO; grid.len()];
    for line in 0..lines {
        for row in 0..rows {
            let idx = line * rows + row;
            let me = horizontal[idx];
            let up = if row > 0 { horizontal[idx - 1] } else { me };
            let down = if row + 1 < rows { horizontal[idx + 1] } else { me };
            out[idx] = me * self_weight + (up + down) * side;
        }
    }
    out
}

/// Computes the full field for time `t` (seconds).
///
/// `pointer` is `None` when the pointer is inactive; the displacement and
/// smoothing stages are then skipped and the field is the pure sinusoid.
/// Smoothing can drag samples back toward the pointer, so a last pass puts
/// any sample inside the exclusion disc back on its rim.
///
/// A config that fails [`FieldConfig::validate`] yields an empty field.
pub fn compute_field(t: f32, pointer: Option<Vec2>, cfg: &FieldConfig) -> Field {
    if let Err(e) = cfg.validate() {
        log::trace!("[waves] skipping field: {}", e);
        return Field::default();
    }
    let lines = cfg.num_lines;
    let steps = cfg.steps();
    let rows = steps + 1;
    let dy = cfg.height / steps as f32;

    let mut base = Vec::with_capacity(lines * rows);
    for i in 0..lines {
        for row in 0..rows {
            base.push(base_sample(t, i, row as f32 * dy, cfg));
        }
    }

    let points = match pointer.filter(|p| p.is_finite()) {
        Some(p) => {
            let mut offsets: Vec<Vec2> = base
                .iter()
                .map(|&s| displace_sample(s, p, cfg) - s)
                .collect();
            for _ in 0..cfg.smoothing_passes {
                offsets = smooth_pass(&offsets, lines, rows, cfg.smoothing_self_weight);
            }
            base.iter()
                .zip(offsets)
                .map(|(b, o)| keep_clear(*b + o, p, cfg.exclusion_radius))
                .collect()
        }
        None => base,
    };

    let curves = points
        .chunks(rows)
        .map(|chunk| Curve {
            points: chunk.iter().copied().collect(),
        })
        .collect();
    Field { curves }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_keeps_uniform_displacement() {
        let grid = vec![Vec2::new(3.0, -1.0); 12];
        let out = smooth_pass(&grid, 3, 4, 0.7);
        for v in out {
            assert!((v - Vec2::new(3.0, -1.0)).length() < 1e-5);
        }
    }

    #[test]
    fn smoothing_spreads_a_spike() {
        let mut grid = vec![Vec2::ZERO; 9];
        grid[4] = Vec2::new(10.0, 0.0);
        let out = smooth_pass(&grid, 3, 3, 0.7);
        assert!(out[4].x < 10.0);
        assert!(out[1].x > 0.0 && out[3].x > 0.0);
        assert!(out[0].x > 0.0);
    }
}
