//! # Mesh Data Structures
//!
//! Geometry accumulated by the extrusion engine: shared-vertex triangle
//! data for geometry-only consumers, and a flat per-triangle attribute
//! list for renderers that need hard edges.

use glam::{DVec2, DVec3};

/// Logical, independently texturable surface of a generated shape.
///
/// Face numbers are stable across shapes. Both end caps share number 0,
/// so a material applied to face 0 covers the top and the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FaceId {
    /// Bottom and top end caps.
    Cap,
    /// The outer side wall.
    Outer,
    /// The inner wall exposed by a hollow core.
    Hollow,
    /// The flat face exposed at the start of a profile cut.
    CutBegin,
    /// The flat face exposed at the end of a profile cut.
    CutEnd,
}

impl FaceId {
    /// Stable numeric id used by texturing consumers.
    pub fn number(self) -> u32 {
        match self {
            FaceId::Cap => 0,
            FaceId::Outer => 1,
            FaceId::Hollow => 2,
            FaceId::CutBegin => 3,
            FaceId::CutEnd => 4,
        }
    }
}

/// A triangle referencing the shared coordinate and normal arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Indices into [`Mesh::coords`].
    pub v: [u32; 3],
    /// Indices into [`Mesh::normals`].
    pub n: [u32; 3],
}

/// One triangle carrying a complete, unshared copy of its corner
/// attributes.
///
/// A coordinate on a hard edge needs a different normal (and UV) for
/// each adjoining face, so render output duplicates attributes per
/// corner instead of sharing them through an index. The duplication is
/// deliberate; deduplication happens later, per logical face only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatTriangle {
    /// Corner positions.
    pub positions: [DVec3; 3],
    /// Corner normals.
    pub normals: [DVec3; 3],
    /// Corner texture coordinates.
    pub uvs: [DVec2; 3],
    /// Indices of the corners in [`Mesh::coords`]. Face indexing keys its
    /// per-face vertex deduplication on these.
    pub coord_indices: [u32; 3],
    /// The logical face this triangle belongs to.
    pub face: FaceId,
}

/// Accumulated mesh for one generated shape.
///
/// Coordinates, normals and faces grow in lockstep during extrusion;
/// all triangle indices are offsets into the owned arrays. The flat
/// triangle list is populated only when the engine runs in render mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    coords: Vec<DVec3>,
    normals: Vec<DVec3>,
    faces: Vec<Face>,
    flat_triangles: Vec<FlatTriangle>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            coords: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
            flat_triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(coord_count: usize, face_count: usize) -> Self {
        Self {
            coords: Vec::with_capacity(coord_count),
            normals: Vec::with_capacity(face_count),
            faces: Vec::with_capacity(face_count),
            flat_triangles: Vec::new(),
        }
    }

    /// Returns the number of coordinates.
    #[inline]
    pub fn coord_count(&self) -> usize {
        self.coords.len()
    }

    /// Returns the number of shared-vertex triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no coordinates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Adds a coordinate and returns its index.
    pub fn add_coord(&mut self, position: DVec3) -> u32 {
        let index = self.coords.len() as u32;
        self.coords.push(position);
        index
    }

    /// Adds a normal and returns its index.
    pub fn add_normal(&mut self, normal: DVec3) -> u32 {
        let index = self.normals.len() as u32;
        self.normals.push(normal);
        index
    }

    /// Adds a shared-vertex triangle.
    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Adds a flat render triangle.
    pub fn add_flat_triangle(&mut self, triangle: FlatTriangle) {
        self.flat_triangles.push(triangle);
    }

    /// Returns a reference to the coordinates.
    #[inline]
    pub fn coords(&self) -> &[DVec3] {
        &self.coords
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the shared-vertex triangles.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns a reference to the flat render triangles.
    #[inline]
    pub fn flat_triangles(&self) -> &[FlatTriangle] {
        &self.flat_triangles
    }

    /// Returns the coordinate at the given index.
    #[inline]
    pub fn coord(&self, index: u32) -> DVec3 {
        self.coords[index as usize]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.coords.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.coords[0];
        let mut max = self.coords[0];

        for c in &self.coords[1..] {
            min = min.min(*c);
            max = max.max(*c);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks that all triangle indices are in range and that no
    /// triangle references the same coordinate twice.
    pub fn validate(&self) -> bool {
        let coord_count = self.coords.len() as u32;
        let normal_count = self.normals.len() as u32;

        for face in &self.faces {
            if face.v.iter().any(|&v| v >= coord_count) {
                return false;
            }
            if face.n.iter().any(|&n| n >= normal_count) {
                return false;
            }
            if face.v[0] == face.v[1] || face.v[1] == face.v[2] || face.v[0] == face.v[2] {
                return false;
            }
        }

        true
    }

    /// Exports coordinates as a flattened f32 array for GPU upload.
    pub fn coords_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.coords.len() * 3);
        for c in &self.coords {
            result.push(c.x as f32);
            result.push(c.y as f32);
            result.push(c.z as f32);
        }
        result
    }

    /// Exports triangle vertex indices as a flattened u32 array.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            result.extend_from_slice(&face.v);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.coord_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_coord() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_coord(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.coord_count(), 1);
        assert_eq!(mesh.coord(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_face() {
        let mut mesh = Mesh::new();
        mesh.add_coord(DVec3::ZERO);
        mesh.add_coord(DVec3::X);
        mesh.add_coord(DVec3::Y);
        let n = mesh.add_normal(DVec3::Z);
        mesh.add_face(Face {
            v: [0, 1, 2],
            n: [n; 3],
        });
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.validate());
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_coord(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_coord(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_coord(DVec3::ZERO);
        mesh.add_normal(DVec3::Z);
        mesh.add_face(Face {
            v: [0, 1, 2],
            n: [0; 3],
        });
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_coords_f32() {
        let mut mesh = Mesh::new();
        mesh.add_coord(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.coords_f32(), vec![1.0f32, 2.0, 3.0]);
    }

    #[test]
    fn test_face_numbers_are_stable() {
        assert_eq!(FaceId::Cap.number(), 0);
        assert_eq!(FaceId::Outer.number(), 1);
        assert_eq!(FaceId::Hollow.number(), 2);
        assert_eq!(FaceId::CutBegin.number(), 3);
        assert_eq!(FaceId::CutEnd.number(), 4);
    }
}
