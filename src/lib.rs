//! # Polymesh
//!
//! Topology engine for polygon meshes given as a vertex count and a corner
//! index array.
//!
//! The input follows the "coordIndex" convention: the vertex indices of each
//! face are listed in order and every face is terminated by `-1`. From that,
//! polymesh builds queryable adjacency structures and classifies the mesh.
//!
//! ## Features
//!
//! - **Edge graph**: deduplicated undirected edges with stable, insertion-ordered ids
//! - **Face table**: corner → face and corner → next corner lookups
//! - **Half-edges**: src/dst, next/prev, twin, and edge → half-edge incidence
//! - **Classification**: boundary, regular and singular edges and vertices
//! - **Type-safe indices**: 16-, 32- or 64-bit ids per mesh
//!
//! Construction fails fast on malformed input; every query afterwards is total
//! and returns `None`, `0` or `false` for out-of-range arguments.
//!
//! ## Quick Start
//!
//! ```
//! use polymesh::prelude::*;
//!
//! // a closed tetrahedron
//! let coord_index = [0, 2, 1, -1, 0, 1, 3, -1, 1, 2, 3, -1, 2, 0, 3, -1];
//! let mesh: PolygonMesh = PolygonMesh::new(4, &coord_index).unwrap();
//!
//! assert_eq!(mesh.num_edges(), 6);
//! assert!(!mesh.has_boundary());
//! assert!(mesh.is_regular());
//!
//! for e in mesh.edge_ids() {
//!     assert!(mesh.is_regular_edge(e));
//! }
//! ```
//!
//! ## Mesh Traversal
//!
//! Half-edges are identified by the corner they leave from:
//!
//! ```
//! use polymesh::prelude::*;
//!
//! let mesh: PolygonMesh = PolygonMesh::new(4, &[0, 1, 2, -1, 1, 3, 2, -1]).unwrap();
//!
//! let c = CornerId::new(1); // half-edge 1 -> 2 of face 0
//! assert_eq!(mesh.src(c), Some(VertexId::new(1)));
//! assert_eq!(mesh.dst(c), Some(VertexId::new(2)));
//!
//! let twin = mesh.twin(c).unwrap();
//! assert_eq!(mesh.face(twin), Some(FaceId::new(1)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and the query traits:
///
/// ```
/// use polymesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        CornerId, EdgeId, EdgeKind, EdgeTopology, Edges, FaceId, Faces, HalfEdgeTopology,
        HalfEdges, MeshIndex, Partition, PolygonMesh, TopologyOptions, VertexId, VertexRange,
    };
}
