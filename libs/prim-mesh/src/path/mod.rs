//! # Path Generation
//!
//! Produces the ordered node sequence the cross-section ring is swept
//! along. Two closed-form generators share the node contract: a
//! straight-line sweep and a helical/circular sweep, selected once per
//! shape by the [`PathType`](crate::params::PathType) tag.

mod circular;
mod linear;

use glam::{DQuat, DVec3};

use crate::params::{PathParams, PathType};

/// One sample along the sweep path.
///
/// The extrusion engine scales a ring copy by (`x_scale`, `y_scale`),
/// rotates it by `rotation`, then translates it to `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    /// Offset of the cross-section copy.
    pub position: DVec3,
    /// Orientation of the cross-section copy.
    pub rotation: DQuat,
    /// Cross-section scale along its local X axis.
    pub x_scale: f64,
    /// Cross-section scale along its local Y axis.
    pub y_scale: f64,
    /// Progress along the path, in [0, 1].
    pub percent_of_path: f64,
}

/// A generated path: the node sequence plus whether the swept shape
/// needs its first and last cross-sections capped.
#[derive(Debug, Clone, PartialEq)]
pub struct SweptPath {
    /// Ordered path samples, at least two for any valid cut span.
    pub nodes: Vec<PathNode>,
    /// True when the ends of the sweep are open and must be filled.
    pub need_end_faces: bool,
}

/// Builds the node sequence for the given path parameters.
///
/// Parameters are clamped first, so the builder is total over numeric
/// input. `base_steps` is the segment count of an unmodified linear
/// sweep; circular sweeps take their density from
/// `steps_per_revolution` instead.
pub fn build_path(params: &PathParams, base_steps: u32) -> SweptPath {
    let params = params.clamped();
    let nodes = match params.path_type {
        PathType::Linear => linear::build(&params, base_steps.max(1)),
        PathType::Circular => circular::build(&params),
    };
    SweptPath {
        nodes,
        need_end_faces: need_end_faces(&params),
    }
}

/// A closed, untapered, unskewed, untwisted, non-spiraling circular loop
/// rejoins itself, so its end cross-sections coincide and no caps are
/// needed. Every other path is open at both ends.
fn need_end_faces(params: &PathParams) -> bool {
    match params.path_type {
        PathType::Linear => true,
        PathType::Circular => {
            params.path_cut_begin != 0.0
                || params.path_cut_end != 1.0
                || params.taper_x != 0.0
                || params.taper_y != 0.0
                || params.skew != 0.0
                || params.twist_end - params.twist_begin != 0.0
                || params.radius != 0.0
        }
    }
}

/// Linear taper toward the top for positive values, toward the bottom
/// for negative ones.
fn taper_scale(taper: f64, percent: f64) -> f64 {
    if taper > 0.0 {
        1.0 - percent * taper
    } else {
        1.0 + (1.0 - percent) * taper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::PathType;

    #[test]
    fn test_linear_path_always_needs_caps() {
        let params = PathParams::default();
        assert!(build_path(&params, 1).need_end_faces);
    }

    #[test]
    fn test_closed_torus_needs_no_caps() {
        let params = PathParams {
            path_type: PathType::Circular,
            ..Default::default()
        };
        assert!(!build_path(&params, 1).need_end_faces);
    }

    #[test]
    fn test_modified_torus_needs_caps() {
        let base = PathParams {
            path_type: PathType::Circular,
            ..Default::default()
        };
        for params in [
            PathParams {
                path_cut_end: 0.5,
                ..base
            },
            PathParams {
                taper_x: 0.3,
                ..base
            },
            PathParams {
                skew: 0.2,
                ..base
            },
            PathParams {
                twist_end: 1.0,
                ..base
            },
            PathParams {
                radius: 0.4,
                ..base
            },
        ] {
            assert!(build_path(&params, 1).need_end_faces);
        }
    }

    #[test]
    fn test_constant_twist_keeps_torus_closed() {
        // equal begin and end twist rotates every layer the same way and
        // the loop still rejoins itself
        let params = PathParams {
            path_type: PathType::Circular,
            twist_begin: 0.4,
            twist_end: 0.4,
            ..Default::default()
        };
        assert!(!build_path(&params, 1).need_end_faces);
    }

    #[test]
    fn test_taper_scale_directions() {
        assert_eq!(taper_scale(0.0, 0.3), 1.0);
        assert_eq!(taper_scale(0.5, 0.0), 1.0);
        assert_eq!(taper_scale(0.5, 1.0), 0.5);
        assert_eq!(taper_scale(-0.5, 0.0), 0.5);
        assert_eq!(taper_scale(-0.5, 1.0), 1.0);
    }
}
