//! Manifold classification of edges and vertices.
//!
//! [`PolygonMesh`] wraps a [`HalfEdges`] structure and classifies:
//!
//! - **edges** by their number of incident half-edges (faces): one is a
//!   boundary edge, two is a regular edge, three or more is a singular edge;
//! - **vertices** as boundary (endpoint of a boundary edge) or internal, and as
//!   regular or singular.
//!
//! # Singular vertices
//!
//! The corners around a vertex are grouped with a [`Partition`] over all corner
//! indices. Across every regular edge, the two pairs of corners that face each
//! other and reference the same vertex are joined:
//!
//! ```text
//!   consistent winding          inconsistent winding
//!
//!    a' <---- b                  b ----> a'
//!   X ---- e ---- X             X ---- e ---- X
//!    a ----> b'                  a ----> b'
//! ```
//!
//! Once all joins are applied, each part holds corners of a single vertex.
//! A vertex whose corners fall into more than one part is referenced by fans
//! of faces that are not connected through regular edges, and is singular.
//! Separators end up as singleton parts and are ignored.

use super::builder::TopologyOptions;
use super::edges::{EdgeTopology, Edges};
use super::halfedge::{HalfEdgeTopology, HalfEdges};
use super::index::{EdgeId, FaceId, MeshIndex, VertexId};
use super::partition::Partition;
use crate::error::Result;

/// Classification of an edge by its number of incident faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Exactly one incident face.
    Boundary,
    /// Exactly two incident faces.
    Regular,
    /// Three or more incident faces.
    Singular,
}

impl EdgeKind {
    fn from_incidence(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(EdgeKind::Boundary),
            2 => Some(EdgeKind::Regular),
            _ => Some(EdgeKind::Singular),
        }
    }
}

/// A polygon mesh with edge and vertex classification.
///
/// Built once and immutable afterwards; shared references can be read from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct PolygonMesh<I: MeshIndex = u32> {
    half_edges: HalfEdges<I>,
    boundary_vertex: Vec<bool>,
    /// Number of corner parts per vertex: 0 isolated, 1 regular, >1 singular.
    vertex_parts: Vec<usize>,
    num_boundary_edges: usize,
    num_singular_edges: usize,
    num_singular_vertices: usize,
}

impl<I: MeshIndex> PolygonMesh<I> {
    /// Build a polygon mesh with default [`TopologyOptions`].
    ///
    /// # Example
    /// ```
    /// use polymesh::prelude::*;
    ///
    /// // two triangles sharing the edge (1, 2)
    /// let mesh: PolygonMesh = PolygonMesh::new(4, &[0, 1, 2, -1, 1, 3, 2, -1]).unwrap();
    /// let shared = mesh.edge(VertexId::new(1), VertexId::new(2)).unwrap();
    /// assert!(mesh.is_regular_edge(shared));
    /// assert!(mesh.has_boundary());
    /// assert!(mesh.is_regular());
    /// ```
    pub fn new(num_vertices: usize, coord_index: &[i32]) -> Result<Self> {
        Self::with_options(num_vertices, coord_index, &TopologyOptions::default())
    }

    /// Build a polygon mesh from `num_vertices` and a corner index array.
    ///
    /// # Errors
    /// The same construction errors as [`HalfEdges::with_options`].
    pub fn with_options(
        num_vertices: usize,
        coord_index: &[i32],
        options: &TopologyOptions,
    ) -> Result<Self> {
        Ok(Self::from_half_edges(HalfEdges::with_options(
            num_vertices,
            coord_index,
            options,
        )?))
    }

    /// Classify an already built half-edge structure.
    pub fn from_half_edges(half_edges: HalfEdges<I>) -> Self {
        let num_vertices = half_edges.num_vertices();

        let mut boundary_vertex = vec![false; num_vertices];
        let mut num_boundary_edges = 0;
        let mut num_singular_edges = 0;
        for e in half_edges.edge_ids() {
            match EdgeKind::from_incidence(half_edges.num_edge_half_edges(e)) {
                Some(EdgeKind::Boundary) => {
                    num_boundary_edges += 1;
                    if let Some((v0, v1)) = half_edges.edge_vertices(e) {
                        boundary_vertex[v0.index()] = true;
                        boundary_vertex[v1.index()] = true;
                    }
                }
                Some(EdgeKind::Singular) => num_singular_edges += 1,
                _ => {}
            }
        }

        let vertex_parts = count_vertex_parts(&half_edges);
        let num_singular_vertices = vertex_parts.iter().filter(|&&n| n > 1).count();

        log::debug!(
            "classified mesh: {} boundary edges, {} singular edges, {} singular vertices",
            num_boundary_edges,
            num_singular_edges,
            num_singular_vertices
        );

        Self {
            half_edges,
            boundary_vertex,
            vertex_parts,
            num_boundary_edges,
            num_singular_edges,
            num_singular_vertices,
        }
    }

    // ==================== Edges ====================

    /// Classification of edge `e`; `None` if out of range.
    pub fn edge_kind(&self, e: EdgeId<I>) -> Option<EdgeKind> {
        EdgeKind::from_incidence(self.num_edge_faces(e))
    }

    /// Number of faces incident to edge `e` (one per incident half-edge).
    #[inline]
    pub fn num_edge_faces(&self, e: EdgeId<I>) -> usize {
        self.num_edge_half_edges(e)
    }

    /// The `j`-th face incident to edge `e`.
    pub fn edge_face(&self, e: EdgeId<I>, j: usize) -> Option<FaceId<I>> {
        self.face(self.edge_half_edge(e, j)?)
    }

    /// Whether face `f` is incident to edge `e`.
    pub fn is_edge_face(&self, e: EdgeId<I>, f: FaceId<I>) -> bool {
        self.edge_half_edges(e)
            .iter()
            .any(|&c| self.face(c) == Some(f))
    }

    /// Whether `e` has exactly one incident face.
    #[inline]
    pub fn is_boundary_edge(&self, e: EdgeId<I>) -> bool {
        self.edge_kind(e) == Some(EdgeKind::Boundary)
    }

    /// Whether `e` has exactly two incident faces.
    #[inline]
    pub fn is_regular_edge(&self, e: EdgeId<I>) -> bool {
        self.edge_kind(e) == Some(EdgeKind::Regular)
    }

    /// Whether `e` has three or more incident faces.
    #[inline]
    pub fn is_singular_edge(&self, e: EdgeId<I>) -> bool {
        self.edge_kind(e) == Some(EdgeKind::Singular)
    }

    /// Whether `e` is regular and its two faces traverse it in opposite directions.
    pub fn is_consistently_oriented_edge(&self, e: EdgeId<I>) -> bool {
        match self.edge_half_edges(e) {
            [a, b] => self.src(*a) == self.dst(*b),
            _ => false,
        }
    }

    // ==================== Vertices ====================

    /// Whether `v` is an endpoint of a boundary edge.
    #[inline]
    pub fn is_boundary_vertex(&self, v: VertexId<I>) -> bool {
        self.boundary_vertex.get(v.index()).copied().unwrap_or(false)
    }

    /// Whether `v` is in range and not a boundary vertex.
    #[inline]
    pub fn is_internal_vertex(&self, v: VertexId<I>) -> bool {
        self.boundary_vertex.get(v.index()).is_some_and(|&b| !b)
    }

    /// Number of disconnected corner fans around `v`; `0` if isolated or out of range.
    #[inline]
    pub fn num_vertex_parts(&self, v: VertexId<I>) -> usize {
        self.vertex_parts.get(v.index()).copied().unwrap_or(0)
    }

    /// Whether the corners around `v` split into more than one part.
    #[inline]
    pub fn is_singular_vertex(&self, v: VertexId<I>) -> bool {
        self.num_vertex_parts(v) > 1
    }

    /// Whether `v` is in range and not singular. Isolated vertices are regular.
    #[inline]
    pub fn is_regular_vertex(&self, v: VertexId<I>) -> bool {
        v.index() < self.num_vertices() && !self.is_singular_vertex(v)
    }

    /// Whether `v` is in range and referenced by no corner.
    #[inline]
    pub fn is_isolated_vertex(&self, v: VertexId<I>) -> bool {
        v.index() < self.num_vertices() && self.num_vertex_parts(v) == 0
    }

    // ==================== Mesh ====================

    /// Whether the mesh has no singular edges and no singular vertices.
    #[inline]
    pub fn is_regular(&self) -> bool {
        self.num_singular_edges == 0 && self.num_singular_vertices == 0
    }

    /// Whether the mesh has at least one boundary edge.
    #[inline]
    pub fn has_boundary(&self) -> bool {
        self.num_boundary_edges > 0
    }

    /// Whether every regular edge is traversed in opposite directions by its faces.
    ///
    /// Orientation is reported, never enforced: inconsistently wound faces are
    /// still twinned and joined.
    pub fn is_oriented(&self) -> bool {
        self.edge_ids()
            .filter(|&e| self.is_regular_edge(e))
            .all(|e| self.is_consistently_oriented_edge(e))
    }
}

/// Count, per vertex, the parts its corners fall into after joining corners
/// across every regular edge.
fn count_vertex_parts<I: MeshIndex>(half_edges: &HalfEdges<I>) -> Vec<usize> {
    let mut partition = Partition::new(half_edges.num_corners());

    for e in half_edges.edge_ids() {
        let &[a, b] = half_edges.edge_half_edges(e) else {
            continue;
        };
        let (Some(next_a), Some(next_b)) = (half_edges.next(a), half_edges.next(b)) else {
            continue;
        };
        if half_edges.src(a) == half_edges.dst(b) {
            partition.join(a.index(), next_b.index());
            partition.join(b.index(), next_a.index());
        } else {
            partition.join(a.index(), b.index());
            partition.join(next_a.index(), next_b.index());
        }
    }

    let mut vertex_parts = vec![0; half_edges.num_vertices()];
    for c in half_edges.half_edge_ids() {
        if partition.find(c.index()) != Some(c.index()) {
            continue;
        }
        if let Some(v) = half_edges.src(c) {
            vertex_parts[v.index()] += 1;
        }
    }
    vertex_parts
}

impl<I: MeshIndex> EdgeTopology for PolygonMesh<I> {
    type Index = I;

    #[inline]
    fn edge_graph(&self) -> &Edges<I> {
        self.half_edges.edge_graph()
    }
}

impl<I: MeshIndex> HalfEdgeTopology for PolygonMesh<I> {
    #[inline]
    fn half_edges(&self) -> &HalfEdges<I> {
        &self.half_edges
    }
}
