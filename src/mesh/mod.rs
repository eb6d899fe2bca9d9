//! Core mesh topology structures.
//!
//! Every structure here is built once from a vertex count and a corner index
//! array (vertex indices per face, each face terminated by `-1`) and is
//! read-only afterwards.
//!
//! # Layers
//!
//! - [`Partition`] - union-find over abstract elements
//! - [`Edges`] - undirected edge graph with insertion-ordered ids
//! - [`Faces`] - corner/face table
//! - [`HalfEdges`] - half-edge relations (next, prev, twin) and edge incidence
//! - [`PolygonMesh`] - boundary/regular/singular classification
//!
//! Each layer owns the one below it. Read access is shared through the
//! [`EdgeTopology`] and [`HalfEdgeTopology`] traits, so a [`PolygonMesh`]
//! answers every graph and half-edge query directly.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`EdgeId`] - Identifies an undirected edge
//! - [`FaceId`] - Identifies a face
//! - [`CornerId`] - Identifies a corner, and the half-edge leaving it
//!
//! These indices are generic over the underlying integer type ([`MeshIndex`] trait).
//!
//! # Construction
//!
//! ```
//! use polymesh::prelude::*;
//!
//! let mesh: PolygonMesh = PolygonMesh::new(3, &[0, 1, 2, -1]).unwrap();
//! assert_eq!(mesh.num_edges(), 3);
//! assert!(mesh.has_boundary());
//! ```

mod builder;
mod edges;
mod faces;
mod halfedge;
mod index;
mod partition;
mod polygon;

pub use builder::{TopologyOptions, VertexRange};
pub use edges::{EdgeTopology, Edges};
pub use faces::Faces;
pub use halfedge::{HalfEdgeTopology, HalfEdges};
pub use index::{CornerId, EdgeId, FaceId, MeshIndex, VertexId};
pub use partition::Partition;
pub use polygon::{EdgeKind, PolygonMesh};
