//! # Extrusion Engine
//!
//! Sweeps a transformed copy of the cross-section ring along each path
//! node, stitches consecutive copies with side-wall quads, and caps the
//! first and last copies when the path is open. Accumulates the
//! shared-vertex mesh and, in render mode, the flat per-triangle
//! attribute list consumed by face indexing.


use glam::{DVec2, DVec3};
use log::debug;

use config::constants::{DEFAULT_LINEAR_STEPS, EPSILON, SMOOTH_SIDE_THRESHOLD, UV_WRAP_THRESHOLD};

use crate::error::MeshError;
use crate::mesh::{Face, FaceId, FlatTriangle, Mesh};
use crate::params::{PathParams, ShapeProfile};
use crate::path::{build_path, SweptPath};
use crate::profile::{ProfileRing, WallSegment};

/// Options controlling extrusion output.
#[derive(Debug, Clone)]
pub struct ExtrudeOptions {
    /// Produce the flat triangle list with per-corner attributes.
    pub render: bool,
    /// Apply sphere texture wrapping to side-wall U coordinates.
    pub sphere: bool,
    /// Base number of path segments for linear sweeps.
    pub base_steps: u32,
}

impl Default for ExtrudeOptions {
    fn default() -> Self {
        Self {
            render: false,
            sphere: false,
            base_steps: DEFAULT_LINEAR_STEPS,
        }
    }
}

/// Generates the mesh for one procedural primitive.
///
/// Out-of-range numeric parameters are clamped, never rejected; the only
/// error is a NaN or infinite field, which is outside the numeric
/// contract. The call is pure and deterministic: identical inputs
/// produce identical coordinate, face and flat-triangle sequences.
///
/// # Example
///
/// ```rust
/// use prim_mesh::{extrude, ExtrudeOptions, PathParams, ShapeProfile};
///
/// let mesh = extrude(
///     &ShapeProfile::default(),
///     &PathParams::default(),
///     &ExtrudeOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(mesh.coord_count(), 8);
/// ```
pub fn extrude(
    profile: &ShapeProfile,
    path: &PathParams,
    options: &ExtrudeOptions,
) -> Result<Mesh, MeshError> {
    profile.ensure_finite()?;
    path.ensure_finite()?;

    let profile = profile.clamped();
    let path = path.clamped();

    let template = ProfileRing::build(&profile);
    let swept = build_path(&path, options.base_steps);

    let ring_len = template.len();
    let mut engine = Extruder {
        profile: &profile,
        options,
        template: &template,
        mesh: Mesh::with_capacity(ring_len * swept.nodes.len(), ring_len * swept.nodes.len() * 2),
    };
    engine.run(&swept);

    debug!(
        "extruded prim: {} nodes x {} ring verts -> {} coords, {} faces, {} flat triangles",
        swept.nodes.len(),
        ring_len,
        engine.mesh.coord_count(),
        engine.mesh.face_count(),
        engine.mesh.flat_triangles().len()
    );

    Ok(engine.mesh)
}

/// One transformed ring copy placed along the path.
struct Layer {
    ring: ProfileRing,
    base: u32,
    percent: f64,
}

struct Extruder<'a> {
    profile: &'a ShapeProfile,
    options: &'a ExtrudeOptions,
    template: &'a ProfileRing,
    mesh: Mesh,
}

impl Extruder<'_> {
    fn run(&mut self, swept: &SweptPath) {
        let last = swept.nodes.len() - 1;
        let mut previous: Option<Layer> = None;

        for (index, node) in swept.nodes.iter().enumerate() {
            let ring = self
                .template
                .scaled(node.x_scale, node.y_scale)
                .rotated(node.rotation)
                .translated(node.position);

            let base = self.mesh.coord_count() as u32;
            for c in ring.coords() {
                self.mesh.add_coord(*c);
            }

            let layer = Layer {
                ring,
                base,
                percent: node.percent_of_path,
            };

            // interior layers contribute side walls only; their ring
            // triangulation would be buried inside the shape
            if index == 0 && swept.need_end_faces {
                self.add_cap(&layer, true);
            }
            if let Some(prev) = &previous {
                self.add_walls(prev, &layer);
            }
            if index == last && swept.need_end_faces {
                self.add_cap(&layer, false);
            }

            previous = Some(layer);
        }
    }

    /// Emits the triangulated cross-section interior at an end layer.
    /// The bottom cap reverses the template winding and looks against
    /// the sweep direction.
    fn add_cap(&mut self, layer: &Layer, bottom: bool) {
        let normal = if bottom {
            -layer.ring.face_normal()
        } else {
            layer.ring.face_normal()
        };

        for tri in layer.ring.cap_faces() {
            let [a, b, c] = if bottom {
                [tri[0], tri[2], tri[1]]
            } else {
                *tri
            };
            let indices = [layer.base + a, layer.base + b, layer.base + c];
            self.add_plain_triangle(indices);

            if self.options.render {
                let uvs = layer.ring.cap_uvs();
                self.mesh.add_flat_triangle(FlatTriangle {
                    positions: [
                        layer.ring.coord(a),
                        layer.ring.coord(b),
                        layer.ring.coord(c),
                    ],
                    normals: [normal; 3],
                    uvs: [uvs[a as usize], uvs[b as usize], uvs[c as usize]],
                    coord_indices: indices,
                    face: FaceId::Cap,
                });
            }
        }
    }

    /// Stitches the wall quads between two consecutive layers, splitting
    /// each quad along the fixed diagonal prev_a -> cur_b.
    fn add_walls(&mut self, prev: &Layer, cur: &Layer) {
        let template = self.template;
        let v1 = 1.0 - prev.percent;
        let v2 = 1.0 - cur.percent;

        for segment in template.walls() {
            let (a, b) = (segment.a, segment.b);
            let pa = prev.base + a;
            let pb = prev.base + b;
            let ca = cur.base + a;
            let cb = cur.base + b;

            self.add_plain_triangle([pa, pb, cb]);
            self.add_plain_triangle([pa, cb, ca]);

            if !self.options.render {
                continue;
            }

            let (u1, u2) = self.wall_uv(segment);
            let positions1 = [prev.ring.coord(a), prev.ring.coord(b), cur.ring.coord(b)];
            let positions2 = [prev.ring.coord(a), cur.ring.coord(b), cur.ring.coord(a)];
            let (normals1, normals2) = self.wall_normals(segment, prev, cur, positions1, positions2);

            self.mesh.add_flat_triangle(FlatTriangle {
                positions: positions1,
                normals: normals1,
                uvs: [
                    DVec2::new(u1, v1),
                    DVec2::new(u2, v1),
                    DVec2::new(u2, v2),
                ],
                coord_indices: [pa, pb, cb],
                face: segment.face,
            });
            self.mesh.add_flat_triangle(FlatTriangle {
                positions: positions2,
                normals: normals2,
                uvs: [
                    DVec2::new(u1, v1),
                    DVec2::new(u2, v2),
                    DVec2::new(u1, v2),
                ],
                coord_indices: [pa, cb, ca],
                face: segment.face,
            });
        }
    }

    /// Texture U range of a wall segment: ring-fraction based, rescaled
    /// so each flat wall of a prism owns a full repeat, remapped for
    /// sphere wrapping, and pinned to exactly {0, 1} on the cut faces.
    fn wall_uv(&self, segment: &WallSegment) -> (f64, f64) {
        if segment.face == FaceId::CutBegin || segment.face == FaceId::CutEnd {
            return (0.0, 1.0);
        }

        let mut u1 = self.template.us()[segment.a as usize];
        let mut u2 = self.template.us()[segment.b as usize];
        if u2 <= u1 {
            // closed-ring wrap segment
            u2 = 1.0;
        }

        let hollow_wall = segment.face == FaceId::Hollow;
        let side_count = if hollow_wall {
            self.profile.hollow_sides
        } else {
            self.profile.sides
        };
        if side_count < SMOOTH_SIDE_THRESHOLD {
            let n = f64::from(side_count);
            let s1 = u1 * n;
            let s2 = u2 * n;
            let base = s1.floor();
            u1 = s1 - base;
            u2 = s2 - base;
            if u2 < UV_WRAP_THRESHOLD {
                u2 = 1.0;
            }
        }

        if self.options.sphere {
            u1 = u1 * 2.0 - 1.0;
            u2 = u2 * 2.0 - 1.0;
            if hollow_wall {
                u1 -= self.profile.hollow;
                u2 -= self.profile.hollow;
            }
        }

        (u1, u2)
    }

    /// Render normals for the two triangles of a wall quad. Cut walls
    /// flat-shade with the ring's cut normals, prism walls flat-shade
    /// with the triangle normal, and higher side counts interpolate the
    /// ring's radial vertex normals.
    fn wall_normals(
        &self,
        segment: &WallSegment,
        prev: &Layer,
        cur: &Layer,
        positions1: [DVec3; 3],
        positions2: [DVec3; 3],
    ) -> ([DVec3; 3], [DVec3; 3]) {
        match segment.face {
            FaceId::CutBegin => {
                let np = prev.ring.cut_normal_begin();
                let nc = cur.ring.cut_normal_begin();
                ([np, np, nc], [np, nc, nc])
            }
            FaceId::CutEnd => {
                let np = prev.ring.cut_normal_end();
                let nc = cur.ring.cut_normal_end();
                ([np, np, nc], [np, nc, nc])
            }
            face => {
                let side_count = if face == FaceId::Hollow {
                    self.profile.hollow_sides
                } else {
                    self.profile.sides
                };
                if side_count < SMOOTH_SIDE_THRESHOLD {
                    let n1 = flat_normal(positions1[0], positions1[1], positions1[2]);
                    let n2 = flat_normal(positions2[0], positions2[1], positions2[2]);
                    ([n1; 3], [n2; 3])
                } else {
                    let (a, b) = (segment.a, segment.b);
                    (
                        [prev.ring.normal(a), prev.ring.normal(b), cur.ring.normal(b)],
                        [prev.ring.normal(a), cur.ring.normal(b), cur.ring.normal(a)],
                    )
                }
            }
        }
    }

    /// Adds a shared-vertex triangle with its flat normal.
    fn add_plain_triangle(&mut self, v: [u32; 3]) {
        let normal = flat_normal(
            self.mesh.coord(v[0]),
            self.mesh.coord(v[1]),
            self.mesh.coord(v[2]),
        );
        let n = self.mesh.add_normal(normal);
        self.mesh.add_face(Face { v, n: [n; 3] });
    }
}

/// Flat normal of a triangle from the cross product of its edges.
/// Degenerate triangles (coincident path layers can produce them) fall
/// back to +Z rather than a NaN direction.
fn flat_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    let cross = (b - a).cross(c - a);
    if cross.length_squared() < EPSILON {
        DVec3::Z
    } else {
        cross.normalize()
    }
}
