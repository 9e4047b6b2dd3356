//! # Shape Parameters
//!
//! Typed parameter records for a procedural primitive, as decoded from a
//! network object-update message. Every numeric field has a documented
//! valid range; [`ShapeProfile::clamped`] and [`PathParams::clamped`]
//! silently pull out-of-range values to the nearest bound, so generation
//! never fails for in-range numeric input. NaN and infinity are outside
//! the contract and are rejected at the [`extrude`](crate::extrude::extrude)
//! boundary before any arithmetic runs.

use config::constants::{
    DEFAULT_STEPS_PER_REVOLUTION, MAX_HOLE_SIZE, MAX_HOLLOW, MAX_SKEW, MIN_CUT_SPAN,
    MIN_HOLE_SIZE, MIN_REVOLUTIONS, MIN_SIDES, TAPER_LIMIT,
};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// The topology of the sweep path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathType {
    /// A straight extrusion along the Z axis.
    Linear,
    /// A helical or circular sweep around the X axis.
    Circular,
}

/// Cross-section description of a procedural primitive.
///
/// Constructed once per shape and never mutated; the extrusion engine
/// copies the derived boundary ring for each path node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeProfile {
    /// Segment count of the outer boundary. Valid range: 3 and up.
    pub sides: u32,
    /// Segment count of the inner boundary when hollow. Valid range: 3 and up.
    pub hollow_sides: u32,
    /// Begin fraction of the kept angular wedge, in [0, 1).
    pub profile_start: f64,
    /// End fraction of the kept angular wedge, in (0, 1].
    pub profile_end: f64,
    /// Inner cavity size as a fraction of the profile, in [0, 0.99].
    pub hollow: f64,
}

impl Default for ShapeProfile {
    fn default() -> Self {
        Self {
            sides: 4,
            hollow_sides: 4,
            profile_start: 0.0,
            profile_end: 1.0,
            hollow: 0.0,
        }
    }
}

impl ShapeProfile {
    /// Returns a copy with every field pulled into its valid range.
    ///
    /// Degenerate side counts are raised to the minimum, fractions are
    /// clamped, and a cut narrower than the minimum span is widened by
    /// pulling the begin fraction down.
    pub fn clamped(&self) -> Self {
        let mut p = *self;
        p.sides = p.sides.max(MIN_SIDES);
        p.hollow_sides = p.hollow_sides.max(MIN_SIDES);
        p.profile_start = p.profile_start.clamp(0.0, 1.0);
        p.profile_end = p.profile_end.clamp(0.0, 1.0);
        if p.profile_end - p.profile_start < MIN_CUT_SPAN {
            p.profile_start = (p.profile_end - MIN_CUT_SPAN).max(0.0);
            p.profile_end = p.profile_start + MIN_CUT_SPAN;
        }
        p.hollow = p.hollow.clamp(0.0, MAX_HOLLOW);
        p
    }

    /// True when an angular wedge has been removed from the profile.
    pub fn has_cut(&self) -> bool {
        self.profile_start > 0.0 || self.profile_end < 1.0
    }

    /// True when the profile carries an inner cavity.
    pub fn has_hollow(&self) -> bool {
        self.hollow > 0.0
    }

    pub(crate) fn ensure_finite(&self) -> Result<(), MeshError> {
        for (parameter, value) in [
            ("profile_start", self.profile_start),
            ("profile_end", self.profile_end),
            ("hollow", self.hollow),
        ] {
            if !value.is_finite() {
                return Err(MeshError::non_finite(parameter, value));
            }
        }
        Ok(())
    }
}

/// Sweep-path description of a procedural primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathParams {
    /// Straight or circular sweep topology.
    pub path_type: PathType,
    /// Twist about the extrusion axis at the path start, in radians.
    pub twist_begin: f64,
    /// Twist about the extrusion axis at the path end, in radians.
    pub twist_end: f64,
    /// Lateral shear of the path top along X.
    pub top_shear_x: f64,
    /// Lateral shear of the path top along Y.
    pub top_shear_y: f64,
    /// Begin fraction of the kept path range, in [0, 1].
    pub path_cut_begin: f64,
    /// End fraction of the kept path range, in [0, 1].
    pub path_cut_end: f64,
    /// Reserved dimple begin fraction, in [0, 1]. Carried on the wire but
    /// not yet wired to any geometry.
    pub dimple_begin: f64,
    /// Reserved dimple end fraction, in [0, 1].
    pub dimple_end: f64,
    /// Lateral blend of the ring center on circular paths, in [-0.95, 0.95].
    pub skew: f64,
    /// Profile width relative to the ring, circular paths, in [0.01, 1].
    pub hole_size_x: f64,
    /// Profile height relative to the ring, circular paths, in [0.01, 1].
    pub hole_size_y: f64,
    /// End-to-end scale reduction along X, in [-0.999, 0.999].
    pub taper_x: f64,
    /// End-to-end scale reduction along Y, in [-0.999, 0.999].
    pub taper_y: f64,
    /// Shrinks (positive) or grows (negative) the helix radius along the
    /// sweep.
    pub radius: f64,
    /// Number of revolutions of a circular sweep, at least 1.
    pub revolutions: f64,
    /// Path samples per revolution of a circular sweep.
    pub steps_per_revolution: u32,
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            path_type: PathType::Linear,
            twist_begin: 0.0,
            twist_end: 0.0,
            top_shear_x: 0.0,
            top_shear_y: 0.0,
            path_cut_begin: 0.0,
            path_cut_end: 1.0,
            dimple_begin: 0.0,
            dimple_end: 1.0,
            skew: 0.0,
            hole_size_x: 1.0,
            hole_size_y: 0.25,
            taper_x: 0.0,
            taper_y: 0.0,
            radius: 0.0,
            revolutions: 1.0,
            steps_per_revolution: DEFAULT_STEPS_PER_REVOLUTION,
        }
    }
}

impl PathParams {
    /// Returns a copy with every field pulled into its valid range.
    pub fn clamped(&self) -> Self {
        let mut p = *self;
        p.path_cut_begin = p.path_cut_begin.clamp(0.0, 1.0);
        p.path_cut_end = p.path_cut_end.clamp(0.0, 1.0);
        if p.path_cut_end - p.path_cut_begin < MIN_CUT_SPAN {
            p.path_cut_begin = (p.path_cut_end - MIN_CUT_SPAN).max(0.0);
            p.path_cut_end = p.path_cut_begin + MIN_CUT_SPAN;
        }
        p.dimple_begin = p.dimple_begin.clamp(0.0, 1.0);
        p.dimple_end = p.dimple_end.clamp(0.0, 1.0);
        p.skew = p.skew.clamp(-MAX_SKEW, MAX_SKEW);
        p.hole_size_x = p.hole_size_x.clamp(MIN_HOLE_SIZE, MAX_HOLE_SIZE);
        p.hole_size_y = p.hole_size_y.clamp(MIN_HOLE_SIZE, MAX_HOLE_SIZE);
        p.taper_x = p.taper_x.clamp(-TAPER_LIMIT, TAPER_LIMIT);
        p.taper_y = p.taper_y.clamp(-TAPER_LIMIT, TAPER_LIMIT);
        p.revolutions = p.revolutions.max(MIN_REVOLUTIONS);
        p.steps_per_revolution = p.steps_per_revolution.max(1);
        p
    }

    pub(crate) fn ensure_finite(&self) -> Result<(), MeshError> {
        for (parameter, value) in [
            ("twist_begin", self.twist_begin),
            ("twist_end", self.twist_end),
            ("top_shear_x", self.top_shear_x),
            ("top_shear_y", self.top_shear_y),
            ("path_cut_begin", self.path_cut_begin),
            ("path_cut_end", self.path_cut_end),
            ("dimple_begin", self.dimple_begin),
            ("dimple_end", self.dimple_end),
            ("skew", self.skew),
            ("hole_size_x", self.hole_size_x),
            ("hole_size_y", self.hole_size_y),
            ("taper_x", self.taper_x),
            ("taper_y", self.taper_y),
            ("radius", self.radius),
            ("revolutions", self.revolutions),
        ] {
            if !value.is_finite() {
                return Err(MeshError::non_finite(parameter, value));
            }
        }
        Ok(())
    }
}
