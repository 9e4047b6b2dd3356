//! # Face Indexing
//!
//! Deduplicates the flat triangle list per logical face into compact
//! vertex and index buffers, the hand-off form for rendering backends
//! and per-face texturing.
//!
//! Deduplication is scoped to one logical face: a coordinate that
//! appears in several faces (at a seam, say) keeps an independent vertex
//! in each, because its normal and UV differ per face. Within a face the
//! first occurrence of a source coordinate wins, so the output is stable
//! for a given triangle order.

use std::collections::{BTreeMap, HashMap};

use glam::{DVec2, DVec3};
use log::debug;

use crate::mesh::{FaceId, FlatTriangle};

/// One deduplicated vertex of an indexed face buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceVertex {
    /// Vertex position.
    pub position: DVec3,
    /// Vertex normal.
    pub normal: DVec3,
    /// Vertex texture coordinate.
    pub uv: DVec2,
}

/// Render-ready geometry for one logical face: a vertex array and a
/// triangle index array referencing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedFaceBuffer {
    /// Deduplicated vertices.
    pub vertices: Vec<FaceVertex>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl IndexedFaceBuffer {
    /// Returns the number of triangles in the buffer.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Groups flat triangles by logical face and deduplicates their corners
/// into per-face vertex and index buffers.
///
/// The map iterates in face-number order, and local vertex indices are
/// assigned first-seen-wins, so identical input produces identical
/// output.
pub fn index_faces(triangles: &[FlatTriangle]) -> BTreeMap<FaceId, IndexedFaceBuffer> {
    let mut buffers: BTreeMap<FaceId, IndexedFaceBuffer> = BTreeMap::new();
    let mut lookups: BTreeMap<FaceId, HashMap<u32, u32>> = BTreeMap::new();

    for triangle in triangles {
        let buffer = buffers.entry(triangle.face).or_default();
        let lookup = lookups.entry(triangle.face).or_default();

        for corner in 0..3 {
            let key = triangle.coord_indices[corner];
            let local = *lookup.entry(key).or_insert_with(|| {
                let index = buffer.vertices.len() as u32;
                buffer.vertices.push(FaceVertex {
                    position: triangle.positions[corner],
                    normal: triangle.normals[corner],
                    uv: triangle.uvs[corner],
                });
                index
            });
            buffer.indices.push(local);
        }
    }

    debug!(
        "indexed {} flat triangles into {} face buffers",
        triangles.len(),
        buffers.len()
    );

    buffers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(face: FaceId, coord_indices: [u32; 3], z: f64) -> FlatTriangle {
        FlatTriangle {
            positions: [
                DVec3::new(0.0, 0.0, z),
                DVec3::new(1.0, 0.0, z),
                DVec3::new(0.0, 1.0, z),
            ],
            normals: [DVec3::Z; 3],
            uvs: [DVec2::ZERO, DVec2::X, DVec2::Y],
            coord_indices,
            face,
        }
    }

    #[test]
    fn test_shared_corners_are_reused() {
        let triangles = [
            triangle(FaceId::Outer, [0, 1, 2], 0.0),
            triangle(FaceId::Outer, [1, 2, 3], 0.0),
        ];
        let buffers = index_faces(&triangles);
        let buffer = &buffers[&FaceId::Outer];
        // four distinct source coordinates across six corners
        assert_eq!(buffer.vertices.len(), 4);
        assert_eq!(buffer.indices, vec![0, 1, 2, 1, 2, 3]);
        assert_eq!(buffer.triangle_count(), 2);
    }

    #[test]
    fn test_faces_never_share_vertices() {
        let triangles = [
            triangle(FaceId::Outer, [0, 1, 2], 0.0),
            triangle(FaceId::Cap, [0, 1, 2], 0.0),
        ];
        let buffers = index_faces(&triangles);
        assert_eq!(buffers.len(), 2);
        assert_eq!(buffers[&FaceId::Outer].vertices.len(), 3);
        assert_eq!(buffers[&FaceId::Cap].vertices.len(), 3);
    }

    #[test]
    fn test_first_seen_attributes_win() {
        let mut second = triangle(FaceId::Outer, [0, 1, 2], 0.0);
        second.uvs = [DVec2::splat(0.9); 3];
        let triangles = [triangle(FaceId::Outer, [0, 1, 2], 0.0), second];
        let buffers = index_faces(&triangles);
        let buffer = &buffers[&FaceId::Outer];
        assert_eq!(buffer.vertices.len(), 3);
        // the second triangle's differing UVs do not overwrite
        assert_eq!(buffer.vertices[0].uv, DVec2::ZERO);
    }

    #[test]
    fn test_output_is_deterministic() {
        let triangles = [
            triangle(FaceId::Cap, [4, 5, 6], 1.0),
            triangle(FaceId::Outer, [0, 1, 2], 0.0),
            triangle(FaceId::Outer, [2, 1, 7], 0.0),
        ];
        let first = index_faces(&triangles);
        let second = index_faces(&triangles);
        assert_eq!(first, second);
        // face-number iteration order
        let keys: Vec<_> = first.keys().copied().collect();
        assert_eq!(keys, vec![FaceId::Cap, FaceId::Outer]);
    }

    #[test]
    fn test_empty_input() {
        assert!(index_faces(&[]).is_empty());
    }
}
