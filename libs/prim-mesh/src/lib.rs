//! # Prim Mesh
//!
//! Reconstructs a renderable triangle mesh from the compact parametric
//! description of a procedural primitive: side counts, cut ranges, a
//! hollow fraction, twist, taper, shear, skew, path radius and
//! revolutions, rather than raw geometry.
//!
//! ## Architecture
//!
//! ```text
//! ShapeProfile + PathParams
//!     -> profile ring + path nodes
//!     -> extrude (Mesh, flat triangles)
//!     -> index_faces (per-face vertex/index buffers)
//! ```
//!
//! The pipeline is synchronous pure computation over owned buffers:
//! independent `extrude` calls can run on separate threads with no
//! shared state.
//!
//! ## Usage
//!
//! ```rust
//! use prim_mesh::{extrude, index_faces, ExtrudeOptions, PathParams, ShapeProfile};
//!
//! let profile = ShapeProfile::default();
//! let path = PathParams::default();
//! let options = ExtrudeOptions {
//!     render: true,
//!     ..Default::default()
//! };
//!
//! let mesh = extrude(&profile, &path, &options).unwrap();
//! let buffers = index_faces(mesh.flat_triangles());
//! assert!(!buffers.is_empty());
//! ```

pub mod error;
pub mod extrude;
pub mod faces;
pub mod mesh;
pub mod params;
pub mod path;
pub mod profile;

pub use error::MeshError;
pub use extrude::{extrude, ExtrudeOptions};
pub use faces::{index_faces, FaceVertex, IndexedFaceBuffer};
pub use mesh::{Face, FaceId, FlatTriangle, Mesh};
pub use params::{PathParams, PathType, ShapeProfile};
pub use path::{build_path, PathNode, SweptPath};
pub use profile::{ProfileRing, WallSegment};
