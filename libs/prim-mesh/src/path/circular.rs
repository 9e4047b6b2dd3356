//! # Circular Sweep
//!
//! Helical/circular extrusion around the X axis. The profile rides a
//! ring whose center, radius and orientation are modulated by skew,
//! taper, shear and the path radius parameter, so one generator covers
//! tori, tubes and spirals.

use std::f64::consts::TAU;

use glam::{DQuat, DVec3};

use config::constants::{
    ANGLE_STEP_EPSILON, MIN_TWIST, PARAM_EPSILON, SHEAR_ANGLE_FACTOR, TWIST_STEP_DOUBLE,
    TWIST_STEP_QUAD,
};

use super::{taper_scale, PathNode};
use crate::params::PathParams;

pub(super) fn build(params: &PathParams) -> Vec<PathNode> {
    let twist_total = params.twist_end - params.twist_begin;

    let mut steps_per_revolution = params.steps_per_revolution;
    if twist_total.abs() > MIN_TWIST {
        // denser sampling keeps heavily twisted layers from intersecting
        if twist_total.abs() > TWIST_STEP_DOUBLE {
            steps_per_revolution *= 2;
        }
        if twist_total.abs() > TWIST_STEP_QUAD {
            steps_per_revolution *= 2;
        }
    }

    let y_path_scale = params.hole_size_y * 0.5;
    let path_length = params.path_cut_end - params.path_cut_begin;
    let total_skew = params.skew * 2.0 * path_length;
    let skew_start = params.path_cut_begin * 2.0 * params.skew - params.skew;
    let shear_x_factor = params.top_shear_x * (0.25 + 0.5 * (0.5 - params.hole_size_y));
    let shear_y_compensation = 1.0 + params.top_shear_y.abs() * 0.25;

    // subtracting the Y shear from the angle range approximates its
    // effect on the path cut
    let start_angle =
        TAU * params.path_cut_begin * params.revolutions - params.top_shear_y * SHEAR_ANGLE_FACTOR;
    let end_angle =
        TAU * params.path_cut_end * params.revolutions - params.top_shear_y * SHEAR_ANGLE_FACTOR;
    let step_size = TAU / f64::from(steps_per_revolution);

    let mut step = (start_angle / step_size).floor() as i64;
    let mut angle = start_angle;
    let mut nodes = Vec::new();

    loop {
        let percent_of_path = (angle / (TAU * params.revolutions)).clamp(0.0, 1.0);
        let percent_of_angles = (angle - start_angle) / (end_angle - start_angle);

        let x_scale = (1.0 - params.skew.abs())
            * params.hole_size_x
            * taper_scale(params.taper_x, percent_of_path);
        let y_scale = params.hole_size_y * taper_scale(params.taper_y, percent_of_path);

        // shrink or grow the helix radius along the sweep
        let radius_scale = if params.radius > PARAM_EPSILON {
            1.0 - params.radius * percent_of_path
        } else if params.radius < -PARAM_EPSILON {
            1.0 + params.radius * (1.0 - percent_of_path)
        } else {
            1.0
        };

        let twist = params.twist_begin + twist_total * percent_of_path;
        let ring_offset = (0.5 - y_path_scale) * radius_scale;

        let position = DVec3::new(
            0.5 * (skew_start + total_skew * percent_of_angles) + angle.sin() * shear_x_factor,
            shear_y_compensation * angle.cos() * ring_offset,
            (angle + params.top_shear_y).sin() * ring_offset,
        );

        // orient the layer on the ring, then twist it about the profile
        // axis
        let mut rotation = DQuat::from_axis_angle(DVec3::X, angle + params.top_shear_y);
        if twist_total != 0.0 || params.twist_begin != 0.0 {
            rotation = rotation * DQuat::from_axis_angle(DVec3::Z, twist);
        }

        nodes.push(PathNode {
            position,
            rotation,
            x_scale,
            y_scale,
            percent_of_path,
        });

        if angle >= end_angle - ANGLE_STEP_EPSILON {
            break;
        }
        step += 1;
        angle = (step as f64 * step_size).min(end_angle);
    }

    nodes
}
