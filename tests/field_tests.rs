// Host-side tests for the pointer-repelled wavy field.

use folio_core::field::{base_sample, base_x, compute_field, displace_sample, PathCommand};
use folio_core::constants::FIELD_MAX_LINES;
use folio_core::render::{plan_nodes, NodePlan};
use folio_core::{ConfigError, FieldConfig};
use glam::Vec2;

fn cfg() -> FieldConfig {
    FieldConfig {
        width: 1000.0,
        ..FieldConfig::default()
    }
}

#[test]
fn field_without_pointer_is_pure() {
    let c = cfg();
    let a = compute_field(3.25, None, &c);
    let b = compute_field(3.25, None, &c);
    assert_eq!(a, b);
    assert_eq!(a.to_svg_paths(), b.to_svg_paths());
}

#[test]
fn field_with_pointer_is_pure() {
    let c = cfg();
    let p = Some(Vec2::new(800.0, 300.0));
    assert_eq!(compute_field(1.0, p, &c), compute_field(1.0, p, &c));
}

#[test]
fn field_shape_follows_config() {
    let c = cfg();
    let field = compute_field(0.0, None, &c);
    assert_eq!(field.curves.len(), c.num_lines);
    for curve in &field.curves {
        assert_eq!(curve.points.len(), c.steps() + 1);
        assert_eq!(curve.points.first().unwrap().y, 0.0);
        assert!((curve.points.last().unwrap().y - c.height).abs() < 1e-3);
    }
}

#[test]
fn lines_span_right_part_of_width() {
    let c = cfg();
    assert!((base_x(0, &c) - 600.0).abs() < 1e-4);
    assert!((base_x(c.num_lines - 1, &c) - 1000.0).abs() < 1e-4);
}

#[test]
fn idle_field_is_sinusoid() {
    let c = cfg();
    let t = 2.0;
    let field = compute_field(t, None, &c);
    let dy = c.height / c.steps() as f32;
    for (i, curve) in field.curves.iter().enumerate() {
        for (row, p) in curve.points.iter().enumerate() {
            let expected = base_sample(t, i, row as f32 * dy, &c);
            assert!((*p - expected).length() < 1e-4);
        }
    }
}

#[test]
fn idle_field_moves_with_time() {
    let c = cfg();
    assert_ne!(compute_field(0.0, None, &c), compute_field(0.5, None, &c));
}

#[test]
fn exclusion_puts_sample_on_circle() {
    let c = cfg();
    let pointer = Vec2::new(700.0, 400.0);
    for offset in [
        Vec2::new(5.0, 0.0),
        Vec2::new(-12.0, 20.0),
        Vec2::new(0.0, -39.0),
        Vec2::new(27.0, 27.0),
    ] {
        let moved = displace_sample(pointer + offset, pointer, &c);
        let d = (moved - pointer).length();
        assert!((d - c.exclusion_radius).abs() < 1e-3, "distance {}", d);
        // stays on the same ray from the pointer
        assert!(offset.normalize().dot((moved - pointer).normalize()) > 0.9999);
    }
}

#[test]
fn sample_under_pointer_uses_fallback_direction() {
    let c = cfg();
    let pointer = Vec2::new(700.0, 400.0);
    let moved = displace_sample(pointer, pointer, &c);
    assert!(moved.is_finite());
    assert!(((moved - pointer).length() - c.exclusion_radius).abs() < 1e-3);
}

#[test]
fn influence_ring_pushes_out_and_swirls() {
    let c = cfg();
    let pointer = Vec2::ZERO;
    let sample = Vec2::new(60.0, 0.0);
    let moved = displace_sample(sample, pointer, &c);
    let sigma = c.influence_radius / 3.0;
    let mag = c.push_strength * (-(60.0f32 * 60.0) / (2.0 * sigma * sigma)).exp();
    assert!((moved.x - (60.0 + mag)).abs() < 1e-4);
    assert!((moved.y - mag).abs() < 1e-4);
}

#[test]
fn samples_outside_influence_untouched() {
    let c = cfg();
    let sample = Vec2::new(100.0, 0.0);
    assert_eq!(displace_sample(sample, Vec2::ZERO, &c), sample);
}

#[test]
fn pointer_far_away_leaves_field_idle() {
    let c = cfg();
    let idle = compute_field(1.5, None, &c);
    let far = compute_field(1.5, Some(Vec2::new(-5000.0, -5000.0)), &c);
    assert_eq!(idle, far);
}

#[test]
fn pointer_disturbance_stays_local() {
    let c = cfg();
    let t = 0.0;
    // pointer right on a sample of the middle line
    let target = base_sample(t, 5, 300.0, &c);
    let idle = compute_field(t, None, &c);
    let field = compute_field(t, Some(target), &c);
    assert!(field.curves.iter().all(|cv| cv.points.iter().all(|p| p.is_finite())));

    let nearest = field
        .curves
        .iter()
        .flat_map(|curve| curve.points.iter())
        .map(|p| (*p - target).length())
        .fold(f32::MAX, f32::min);
    // smoothing blends the clamped samples with their neighbours; the final
    // pass must still leave nothing under the pointer
    assert!(nearest >= c.exclusion_radius - 1e-3, "nearest {}", nearest);

    // smoothing spreads at most one neighbour per pass
    assert_eq!(field.curves[0], idle.curves[0]);
    assert_eq!(field.curves[5].points[0], idle.curves[5].points[0]);
    assert_ne!(field.curves[5], idle.curves[5]);
}

#[test]
fn path_commands_interpolate_samples() {
    let c = cfg();
    let field = compute_field(0.7, None, &c);
    let curve = &field.curves[3];
    let cmds = curve.to_commands();
    assert_eq!(cmds.len(), curve.points.len());
    assert_eq!(cmds[0], PathCommand::MoveTo(curve.points[0]));
    for (cmd, p) in cmds[1..].iter().zip(curve.points[1..].iter()) {
        match cmd {
            PathCommand::CubicTo { to, .. } => assert_eq!(to, p),
            other => panic!("unexpected {:?}", other),
        }
    }
    let d = curve.to_svg_path();
    assert!(d.starts_with('M'));
    assert_eq!(d.matches(" C").count(), curve.points.len() - 1);
}

#[test]
fn invalid_config_yields_empty_field() {
    let zero_spacing = FieldConfig {
        sample_spacing: 0.0,
        ..cfg()
    };
    assert!(zero_spacing.validate().is_err());
    assert!(compute_field(1.0, None, &zero_spacing).curves.is_empty());
    assert!(compute_field(1.0, Some(Vec2::new(700.0, 100.0)), &zero_spacing)
        .curves
        .is_empty());
}

#[test]
fn line_count_is_capped() {
    let many = FieldConfig {
        num_lines: 1_000_000,
        ..cfg()
    };
    assert!(matches!(many.validate(), Err(ConfigError::TooLarge { .. })));
    assert!(compute_field(0.0, None, &many).curves.is_empty());

    let max = FieldConfig {
        num_lines: FIELD_MAX_LINES,
        ..cfg()
    };
    assert_eq!(compute_field(0.0, None, &max).curves.len(), FIELD_MAX_LINES);
}

#[test]
fn surplus_path_nodes_are_planned_for_removal() {
    assert_eq!(plan_nodes(12, 10), NodePlan { create: 0, remove: 10..12 });
    assert_eq!(plan_nodes(4, 10), NodePlan { create: 6, remove: 4..4 });
    assert_eq!(plan_nodes(10, 10), NodePlan { create: 0, remove: 10..10 });
    assert_eq!(plan_nodes(3, 0), NodePlan { create: 0, remove: 0..3 });
}

#[test]
fn bad_radius_order_fails_validation() {
    let c = FieldConfig {
        exclusion_radius: 90.0,
        ..cfg()
    };
    assert!(c.validate().is_err());
}
