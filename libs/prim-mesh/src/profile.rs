//! # Cross-Section Ring
//!
//! Builds the 2D boundary ring that the extrusion engine sweeps along
//! the path: the outer polygon, an optional hollow polygon walked in
//! reverse angular order, and an optional profile cut that removes an
//! angular wedge and exposes two flat end faces.
//!
//! Each boundary vertex carries a logical face id and a U texture
//! coordinate. The ring also provides its own end-cap triangulation,
//! the wall segments to stitch between consecutive ring copies, and
//! reference normals for the flat-shaded cut faces.
//!
//! The template ring is built once per shape; transformed copies are
//! produced per path node through [`ProfileRing::scaled`],
//! [`ProfileRing::rotated`] and [`ProfileRing::translated`], which
//! never alias the template.

use std::f64::consts::{FRAC_PI_4, PI, SQRT_2, TAU};

use glam::{DQuat, DVec2, DVec3};

use config::constants::MAX_HOLLOW;

use crate::mesh::FaceId;
use crate::params::ShapeProfile;

/// A wall segment between two adjacent boundary vertices.
///
/// Swept along the path, each segment becomes one quad per layer pair,
/// tagged with the logical face the wall belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Ring index of the segment's first vertex.
    pub a: u32,
    /// Ring index of the segment's second vertex.
    pub b: u32,
    /// Logical face of the swept wall.
    pub face: FaceId,
}

/// The boundary ring of a shape profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRing {
    coords: Vec<DVec3>,
    normals: Vec<DVec3>,
    us: Vec<f64>,
    face_ids: Vec<FaceId>,
    cap_uvs: Vec<DVec2>,
    cap_faces: Vec<[u32; 3]>,
    walls: Vec<WallSegment>,
    num_outer: usize,
    num_hollow: usize,
    has_cut: bool,
    face_normal: DVec3,
    cut_normal_begin: DVec3,
    cut_normal_end: DVec3,
}

impl ProfileRing {
    /// Builds the boundary ring for a profile.
    ///
    /// The profile is clamped first, so degenerate side counts and
    /// out-of-range fractions never fail. The outer boundary walks the
    /// kept angular wedge counter-clockwise in `sides` uniform steps
    /// (`sides + 1` vertices when a cut exists, `sides` for a closed
    /// ring); the hollow boundary, when present, walks the same wedge in
    /// reverse so its swept walls wind consistently with the outer wall.
    pub fn build(profile: &ShapeProfile) -> Self {
        let profile = profile.clamped();
        let sides = profile.sides as usize;
        let hollow_sides = profile.hollow_sides as usize;
        let has_cut = profile.has_cut();
        let hollow = corrected_hollow(&profile);
        let has_hollow = hollow > 0.0;

        let num_outer = if has_cut { sides + 1 } else { sides };
        let num_hollow = if has_hollow {
            if has_cut {
                hollow_sides + 1
            } else {
                hollow_sides
            }
        } else {
            0
        };
        let center = has_cut && !has_hollow;
        let total = num_outer + num_hollow + usize::from(center);

        let mut coords = Vec::with_capacity(total);
        let mut normals = Vec::with_capacity(total);
        let mut us = Vec::with_capacity(total);
        let mut face_ids = Vec::with_capacity(total);

        let wedge = profile.profile_end - profile.profile_start;
        let outer_offset = corner_offset(profile.sides);

        // Outer boundary, counter-clockwise from the start fraction.
        for i in 0..num_outer {
            let fraction = i as f64 / sides as f64;
            let angle = outer_offset + (profile.profile_start + wedge * fraction) * TAU;
            let point = polygon_point(angle, profile.sides);
            coords.push(DVec3::new(point.x, point.y, 0.0));
            normals.push(DVec3::new(angle.cos(), angle.sin(), 0.0));
            us.push(fraction);
            face_ids.push(FaceId::Outer);
        }

        // Hollow boundary, walked back from the end fraction.
        let hollow_offset = corner_offset(profile.hollow_sides);
        for j in 0..num_hollow {
            let fraction = j as f64 / hollow_sides as f64;
            let angle = hollow_offset + (profile.profile_end - wedge * fraction) * TAU;
            let point = polygon_point(angle, profile.hollow_sides) * hollow;
            coords.push(DVec3::new(point.x, point.y, 0.0));
            normals.push(DVec3::new(-angle.cos(), -angle.sin(), 0.0));
            us.push(fraction);
            face_ids.push(FaceId::Hollow);
        }

        // A cut solid profile closes through the center, so the two cut
        // walls sweep from the rim to the axis.
        if center {
            coords.push(DVec3::ZERO);
            normals.push(DVec3::Z);
            us.push(0.0);
            face_ids.push(FaceId::Outer);
        }

        if has_cut {
            face_ids[0] = FaceId::CutBegin;
            let last = face_ids.len() - 1;
            face_ids[last] = FaceId::CutEnd;
        }

        let cap_uvs = coords
            .iter()
            .map(|c| DVec2::new(0.5 + c.x, 0.5 - c.y))
            .collect();

        let begin_angle = outer_offset + profile.profile_start * TAU;
        let end_angle = outer_offset + profile.profile_end * TAU;
        let cut_normal_begin = DVec3::new(begin_angle.sin(), -begin_angle.cos(), 0.0);
        let cut_normal_end = DVec3::new(-end_angle.sin(), end_angle.cos(), 0.0);

        let walls = build_walls(num_outer, num_hollow, has_cut, center);
        let cap_faces = build_cap_faces(num_outer, num_hollow, has_cut, center);

        Self {
            coords,
            normals,
            us,
            face_ids,
            cap_uvs,
            cap_faces,
            walls,
            num_outer,
            num_hollow,
            has_cut,
            face_normal: DVec3::Z,
            cut_normal_begin,
            cut_normal_end,
        }
    }

    /// Returns the number of boundary vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the boundary coordinates in ring order.
    #[inline]
    pub fn coords(&self) -> &[DVec3] {
        &self.coords
    }

    /// Returns the per-vertex normals in ring order.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the per-vertex U texture coordinates.
    #[inline]
    pub fn us(&self) -> &[f64] {
        &self.us
    }

    /// Returns the per-vertex logical face ids.
    #[inline]
    pub fn face_ids(&self) -> &[FaceId] {
        &self.face_ids
    }

    /// Returns the per-vertex end-cap UVs.
    #[inline]
    pub fn cap_uvs(&self) -> &[DVec2] {
        &self.cap_uvs
    }

    /// Returns the end-cap triangulation as ring-local index triples,
    /// wound counter-clockwise seen from +Z.
    #[inline]
    pub fn cap_faces(&self) -> &[[u32; 3]] {
        &self.cap_faces
    }

    /// Returns the wall segments between adjacent boundary vertices.
    #[inline]
    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    /// Returns the number of outer-boundary vertices.
    #[inline]
    pub fn num_outer(&self) -> usize {
        self.num_outer
    }

    /// Returns the number of hollow-boundary vertices.
    #[inline]
    pub fn num_hollow(&self) -> usize {
        self.num_hollow
    }

    /// True when the ring carries a profile cut.
    #[inline]
    pub fn has_cut(&self) -> bool {
        self.has_cut
    }

    /// Returns the coordinate at a ring index.
    #[inline]
    pub fn coord(&self, index: u32) -> DVec3 {
        self.coords[index as usize]
    }

    /// Returns the vertex normal at a ring index.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Returns the end-cap normal.
    #[inline]
    pub fn face_normal(&self) -> DVec3 {
        self.face_normal
    }

    /// Returns the flat-shading normal of the cut face at the start
    /// fraction.
    #[inline]
    pub fn cut_normal_begin(&self) -> DVec3 {
        self.cut_normal_begin
    }

    /// Returns the flat-shading normal of the cut face at the end
    /// fraction.
    #[inline]
    pub fn cut_normal_end(&self) -> DVec3 {
        self.cut_normal_end
    }

    /// Returns a copy scaled anisotropically in the profile plane.
    pub fn scaled(&self, x: f64, y: f64) -> Self {
        let mut ring = self.clone();
        for c in &mut ring.coords {
            c.x *= x;
            c.y *= y;
        }
        ring
    }

    /// Returns a copy rotated by `q`. Coordinates, vertex normals, the
    /// cap normal and both cut normals rotate together.
    pub fn rotated(&self, q: DQuat) -> Self {
        let mut ring = self.clone();
        for c in &mut ring.coords {
            *c = q * *c;
        }
        for n in &mut ring.normals {
            *n = q * *n;
        }
        ring.face_normal = q * ring.face_normal;
        ring.cut_normal_begin = q * ring.cut_normal_begin;
        ring.cut_normal_end = q * ring.cut_normal_end;
        ring
    }

    /// Returns a copy translated by `v`.
    pub fn translated(&self, v: DVec3) -> Self {
        let mut ring = self.clone();
        for c in &mut ring.coords {
            *c += v;
        }
        ring
    }
}

/// Hollow fraction after the empirical per-shape correction factors that
/// match the reference viewer's rendering.
fn corrected_hollow(profile: &ShapeProfile) -> f64 {
    let mut hollow = profile.hollow;
    if profile.sides == 3 {
        hollow *= if profile.hollow_sides == 4 { 0.707 } else { 0.5 };
    } else if profile.sides == 24 && profile.hollow_sides == 4 {
        hollow *= 1.414;
    }
    hollow.min(MAX_HOLLOW)
}

/// Angular position of the polygon's first corner. Boxes are rotated so
/// their walls align with the axes and span the unit square.
fn corner_offset(sides: u32) -> f64 {
    if sides == 4 {
        FRAC_PI_4
    } else {
        0.0
    }
}

/// Radial projection of `angle` onto the regular polygon boundary, so
/// aligned samples land on the exact corners and intermediate samples
/// lie on the flat edges.
fn polygon_point(angle: f64, sides: u32) -> DVec2 {
    let n = f64::from(sides);
    let circumradius = if sides == 4 { SQRT_2 * 0.5 } else { 0.5 };
    let sector = TAU / n;
    let local = (angle - corner_offset(sides)).rem_euclid(sector) - sector * 0.5;
    let r = circumradius * (PI / n).cos() / local.cos();
    DVec2::new(angle.cos(), angle.sin()) * r
}

fn build_walls(num_outer: usize, num_hollow: usize, has_cut: bool, center: bool) -> Vec<WallSegment> {
    let seg = |a: usize, b: usize, face: FaceId| WallSegment {
        a: a as u32,
        b: b as u32,
        face,
    };
    let mut walls = Vec::with_capacity(num_outer + num_hollow + 2);

    if !has_cut {
        for i in 0..num_outer {
            walls.push(seg(i, (i + 1) % num_outer, FaceId::Outer));
        }
        for j in 0..num_hollow {
            walls.push(seg(
                num_outer + j,
                num_outer + (j + 1) % num_hollow,
                FaceId::Hollow,
            ));
        }
        return walls;
    }

    for i in 0..num_outer - 1 {
        walls.push(seg(i, i + 1, FaceId::Outer));
    }
    if center {
        // outer rim -> center -> back to the first outer vertex
        walls.push(seg(num_outer - 1, num_outer, FaceId::CutEnd));
        walls.push(seg(num_outer, 0, FaceId::CutBegin));
    } else {
        // the reversed hollow walk starts at the end fraction, so the
        // bridge from the outer rim lands on the matching hollow vertex
        walls.push(seg(num_outer - 1, num_outer, FaceId::CutEnd));
        for j in 0..num_hollow - 1 {
            walls.push(seg(num_outer + j, num_outer + j + 1, FaceId::Hollow));
        }
        walls.push(seg(num_outer + num_hollow - 1, 0, FaceId::CutBegin));
    }
    walls
}

fn build_cap_faces(
    num_outer: usize,
    num_hollow: usize,
    has_cut: bool,
    center: bool,
) -> Vec<[u32; 3]> {
    if num_hollow > 0 {
        return stitch_rings(num_outer, num_hollow, has_cut);
    }
    if center {
        let c = num_outer as u32;
        return (0..num_outer - 1)
            .map(|i| [c, i as u32, i as u32 + 1])
            .collect();
    }
    (1..num_outer - 1)
        .map(|i| [0, i as u32, i as u32 + 1])
        .collect()
}

/// Triangulates the ring-shaped cap between the outer and hollow
/// boundaries by walking both rings in ascending angular order and
/// advancing whichever boundary lags. Handles unequal side counts; for
/// equal counts it degenerates to one quad per segment pair.
fn stitch_rings(num_outer: usize, num_hollow: usize, has_cut: bool) -> Vec<[u32; 3]> {
    let outer_segments = if has_cut { num_outer - 1 } else { num_outer };
    let hollow_segments = if has_cut { num_hollow - 1 } else { num_hollow };

    let outer_at = |k: usize| (k % num_outer) as u32;
    // hollow vertices are stored in reverse angular order
    let hollow_at = |k: usize| {
        let storage = if has_cut {
            num_hollow - 1 - k
        } else {
            (num_hollow - k % num_hollow) % num_hollow
        };
        (num_outer + storage) as u32
    };

    let mut triangles = Vec::with_capacity(outer_segments + hollow_segments);
    let mut i = 0usize;
    let mut k = 0usize;
    while i < outer_segments || k < hollow_segments {
        let advance_outer = if k >= hollow_segments {
            true
        } else if i >= outer_segments {
            false
        } else {
            (i + 1) * hollow_segments <= (k + 1) * outer_segments
        };
        if advance_outer {
            triangles.push([outer_at(i), outer_at(i + 1), hollow_at(k)]);
            i += 1;
        } else {
            triangles.push([outer_at(i), hollow_at(k + 1), hollow_at(k)]);
            k += 1;
        }
    }
    triangles
}
