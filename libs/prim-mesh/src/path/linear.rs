//! # Linear Sweep
//!
//! Straight extrusion along the Z axis with linear twist, taper and
//! shear modulation. The path spans Z in [-0.5, 0.5] across the full
//! cut range, so the generated shape is centered like the unit profile.

use glam::{DQuat, DVec3};

use config::constants::{MIN_TWIST, TWIST_STEP_SCALE};

use super::{taper_scale, PathNode};
use crate::params::PathParams;

pub(super) fn build(params: &PathParams, base_steps: u32) -> Vec<PathNode> {
    let twist_total = params.twist_end - params.twist_begin;

    let mut steps = base_steps;
    if twist_total.abs() > MIN_TWIST {
        // empirical anti-aliasing boost for twisted extrusions
        steps += (twist_total.abs() * TWIST_STEP_SCALE).round() as u32;
    }

    let length = params.path_cut_end - params.path_cut_begin;
    let mut nodes = Vec::with_capacity(steps as usize + 1);

    for step in 0..=steps {
        let percent = params.path_cut_begin + length * (f64::from(step) / f64::from(steps));
        let twist = params.twist_begin + twist_total * percent;

        nodes.push(PathNode {
            position: DVec3::new(
                params.top_shear_x * percent,
                params.top_shear_y * percent,
                percent - 0.5,
            ),
            rotation: DQuat::from_axis_angle(DVec3::Z, twist),
            x_scale: taper_scale(params.taper_x, percent),
            y_scale: taper_scale(params.taper_y, percent),
            percent_of_path: percent,
        });
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_untwisted_path_has_base_steps() {
        let params = PathParams::default().clamped();
        let nodes = build(&params, 1);
        assert_eq!(nodes.len(), 2);
        assert_relative_eq!(nodes[0].position.z, -0.5);
        assert_relative_eq!(nodes[1].position.z, 0.5);
        assert_eq!(nodes[0].percent_of_path, 0.0);
        assert_eq!(nodes[1].percent_of_path, 1.0);
    }

    #[test]
    fn test_twist_boosts_step_count() {
        let params = PathParams {
            twist_end: std::f64::consts::PI,
            ..Default::default()
        }
        .clamped();
        let nodes = build(&params, 1);
        // 1 base step plus round(pi * 3.66) extra
        let expected_steps = 1 + (std::f64::consts::PI * TWIST_STEP_SCALE).round() as usize;
        assert_eq!(nodes.len(), expected_steps + 1);
    }

    #[test]
    fn test_path_cut_limits_progress() {
        let params = PathParams {
            path_cut_begin: 0.25,
            path_cut_end: 0.75,
            ..Default::default()
        }
        .clamped();
        let nodes = build(&params, 2);
        assert_eq!(nodes.len(), 3);
        assert_relative_eq!(nodes.first().unwrap().percent_of_path, 0.25);
        assert_relative_eq!(nodes.last().unwrap().percent_of_path, 0.75);
        assert_relative_eq!(nodes.first().unwrap().position.z, -0.25);
        assert_relative_eq!(nodes.last().unwrap().position.z, 0.25);
    }

    #[test]
    fn test_shear_offsets_follow_progress() {
        let params = PathParams {
            top_shear_x: 0.2,
            top_shear_y: -0.1,
            ..Default::default()
        }
        .clamped();
        let nodes = build(&params, 1);
        assert_relative_eq!(nodes[0].position.x, 0.0);
        assert_relative_eq!(nodes[1].position.x, 0.2);
        assert_relative_eq!(nodes[1].position.y, -0.1);
    }

    #[test]
    fn test_taper_scales_top_layer() {
        let params = PathParams {
            taper_x: 0.5,
            taper_y: -0.4,
            ..Default::default()
        }
        .clamped();
        let nodes = build(&params, 1);
        assert_relative_eq!(nodes[0].x_scale, 1.0);
        assert_relative_eq!(nodes[1].x_scale, 0.5);
        // negative taper shrinks the bottom instead
        assert_relative_eq!(nodes[0].y_scale, 0.6);
        assert_relative_eq!(nodes[1].y_scale, 1.0);
    }

    #[test]
    fn test_twist_interpolates_between_ends() {
        let params = PathParams {
            twist_begin: 0.0,
            twist_end: 1.0,
            ..Default::default()
        }
        .clamped();
        let nodes = build(&params, 1);
        let last = nodes.last().unwrap();
        let rotated = last.rotation * DVec3::X;
        assert_relative_eq!(rotated.x, 1.0f64.cos(), epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0f64.sin(), epsilon = 1e-12);
    }
}
