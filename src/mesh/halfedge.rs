//! Half-edge relations over a polygon mesh.
//!
//! Half-edges are in one-to-one correspondence with vertex corners: the
//! half-edge of corner `c` runs from the vertex of `c` to the vertex of the
//! next corner of the same face. Separators have no half-edge.
//!
//! # Structure
//!
//! [`HalfEdges`] owns the [`Edges`] graph and the [`Faces`] table it was built
//! from, plus per-corner arrays (owning face, underlying edge, twin) and a
//! compressed edge → half-edge incidence: `edge_offsets` has one entry per
//! edge plus one, and the half-edges of edge `e` are
//! `edge_corners[edge_offsets[e]..edge_offsets[e + 1]]`.
//!
//! # Twins
//!
//! An edge with exactly two incident half-edges pairs them as twins whatever
//! their relative orientation, so inconsistently wound neighbours are still
//! twins. An edge with a single half-edge is a boundary edge and its half-edge
//! has no twin. Edges with three or more half-edges are singular; none of
//! their half-edges get a twin.

use super::builder::{validate_coord_index, TopologyOptions};
use super::edges::{EdgeTopology, Edges};
use super::faces::Faces;
use super::index::{CornerId, EdgeId, FaceId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// Half-edge structure built from a corner index array.
#[derive(Debug, Clone)]
pub struct HalfEdges<I: MeshIndex = u32> {
    edges: Edges<I>,
    faces: Faces<I>,

    /// Owning face per corner; invalid for separators.
    face: Vec<FaceId<I>>,

    /// Underlying edge per corner; invalid for separators.
    corner_edge: Vec<EdgeId<I>>,

    /// Twin per corner; invalid for separators, boundary and singular half-edges.
    twin: Vec<CornerId<I>>,

    edge_offsets: Vec<usize>,
    edge_corners: Vec<CornerId<I>>,
}

impl<I: MeshIndex> HalfEdges<I> {
    /// Build half-edges with default [`TopologyOptions`].
    ///
    /// # Example
    /// ```
    /// use polymesh::prelude::*;
    ///
    /// let he: HalfEdges = HalfEdges::new(4, &[0, 1, 2, -1, 2, 1, 3, -1]).unwrap();
    /// assert_eq!(he.num_edges(), 5);
    /// assert_eq!(he.twin(CornerId::new(1)), Some(CornerId::new(4)));
    /// ```
    pub fn new(num_vertices: usize, coord_index: &[i32]) -> Result<Self> {
        Self::with_options(num_vertices, coord_index, &TopologyOptions::default())
    }

    /// Build half-edges from `num_vertices` and a corner index array.
    ///
    /// # Errors
    /// Fails if the input does not pass [validation](TopologyOptions): a vertex
    /// out of range, a separator other than `-1`, a missing final separator, an
    /// empty or degenerate face, or an index type too small for the mesh.
    pub fn with_options(
        num_vertices: usize,
        coord_index: &[i32],
        options: &TopologyOptions,
    ) -> Result<Self> {
        let num_vertices = validate_coord_index::<I>(num_vertices, coord_index, options)?;
        let faces = Faces::new(num_vertices, coord_index)?;
        let mut edges = Edges::new(num_vertices);

        let num_corners = faces.num_corners();
        let mut face = vec![FaceId::invalid(); num_corners];
        let mut corner_edge = vec![EdgeId::invalid(); num_corners];
        // edge count is not known up front; grows as edges are created
        let mut edge_half_edges: Vec<usize> = Vec::new();

        for f in (0..faces.num_faces()).map(FaceId::new) {
            let Some(corners) = faces.face_corners(f) else {
                continue;
            };
            for c in corners {
                let (src, dst) = half_edge_vertices(&faces, CornerId::new(c))
                    .ok_or(MeshError::DegenerateFace { face: f.index(), corner: c })?;
                let e = edges
                    .insert_edge(src, dst)
                    .ok_or(MeshError::DegenerateFace { face: f.index(), corner: c })?;
                if e.index() == edge_half_edges.len() {
                    edge_half_edges.push(1);
                } else {
                    edge_half_edges[e.index()] += 1;
                }
                face[c] = f;
                corner_edge[c] = e;
            }
        }

        let num_edges = edges.num_edges();
        let mut edge_offsets = Vec::with_capacity(num_edges + 1);
        edge_offsets.push(0);
        for count in &edge_half_edges {
            let last = edge_offsets[edge_offsets.len() - 1];
            edge_offsets.push(last + count);
        }

        let mut cursor = edge_offsets[..num_edges].to_vec();
        let mut edge_corners = vec![CornerId::invalid(); edge_offsets[num_edges]];
        for (c, e) in corner_edge.iter().enumerate() {
            if let Some(e) = e.valid() {
                let slot = &mut cursor[e.index()];
                edge_corners[*slot] = CornerId::new(c);
                *slot += 1;
            }
        }

        let mut twin = vec![CornerId::invalid(); num_corners];
        for e in 0..num_edges {
            match &edge_corners[edge_offsets[e]..edge_offsets[e + 1]] {
                [a, b] => {
                    twin[a.index()] = *b;
                    twin[b.index()] = *a;
                }
                [_] => {}
                incident => log::trace!(
                    "edge {} has {} incident half-edges; leaving them unpaired",
                    e,
                    incident.len()
                ),
            }
        }

        log::debug!(
            "built half-edges: {} vertices, {} edges, {} faces, {} corners",
            num_vertices,
            num_edges,
            faces.num_faces(),
            num_corners
        );

        Ok(Self {
            edges,
            faces,
            face,
            corner_edge,
            twin,
            edge_offsets,
            edge_corners,
        })
    }
}

/// Source and destination vertices of the half-edge at corner `c`.
fn half_edge_vertices<I: MeshIndex>(
    faces: &Faces<I>,
    c: CornerId<I>,
) -> Option<(VertexId<I>, VertexId<I>)> {
    let src = faces.corner_vertex(c)?;
    let dst = faces.corner_vertex(faces.next_corner(c)?)?;
    Some((src, dst))
}

impl<I: MeshIndex> EdgeTopology for HalfEdges<I> {
    type Index = I;

    #[inline]
    fn edge_graph(&self) -> &Edges<I> {
        &self.edges
    }
}

/// Read-only half-edge queries.
///
/// Every query is total: out-of-range corners, separators and out-of-range
/// edges yield `None` (or `0` for counts).
pub trait HalfEdgeTopology: EdgeTopology {
    /// The half-edge structure backing this type.
    fn half_edges(&self) -> &HalfEdges<Self::Index>;

    /// The face table the half-edges were built from.
    fn face_table(&self) -> &Faces<Self::Index> {
        &self.half_edges().faces
    }

    /// Number of corners, separators included.
    fn num_corners(&self) -> usize {
        self.half_edges().face.len()
    }

    /// Number of faces.
    fn num_faces(&self) -> usize {
        self.half_edges().faces.num_faces()
    }

    /// Face containing the half-edge of corner `c`.
    fn face(&self, c: CornerId<Self::Index>) -> Option<FaceId<Self::Index>> {
        self.half_edges().face.get(c.index()).and_then(|f| f.valid())
    }

    /// Vertex the half-edge of corner `c` starts at.
    fn src(&self, c: CornerId<Self::Index>) -> Option<VertexId<Self::Index>> {
        self.half_edges().faces.corner_vertex(c)
    }

    /// Vertex the half-edge of corner `c` ends at.
    fn dst(&self, c: CornerId<Self::Index>) -> Option<VertexId<Self::Index>> {
        self.src(self.next(c)?)
    }

    /// Next half-edge around the face of `c`.
    fn next(&self, c: CornerId<Self::Index>) -> Option<CornerId<Self::Index>> {
        self.half_edges().faces.next_corner(c)
    }

    /// Previous half-edge around the face of `c`.
    fn prev(&self, c: CornerId<Self::Index>) -> Option<CornerId<Self::Index>> {
        let he = self.half_edges();
        let corners = he.faces.face_corners(self.face(c)?)?;
        let i = c.index();
        Some(CornerId::new(if i == corners.start { corners.end - 1 } else { i - 1 }))
    }

    /// Twin of the half-edge of corner `c`.
    ///
    /// `None` for boundary half-edges and half-edges of singular edges.
    fn twin(&self, c: CornerId<Self::Index>) -> Option<CornerId<Self::Index>> {
        self.half_edges().twin.get(c.index()).and_then(|t| t.valid())
    }

    /// Undirected edge underlying the half-edge of corner `c`.
    fn corner_edge(&self, c: CornerId<Self::Index>) -> Option<EdgeId<Self::Index>> {
        self.half_edges().corner_edge.get(c.index()).and_then(|e| e.valid())
    }

    /// Half-edges incident to edge `e`; empty if `e` is out of range.
    ///
    /// Order is unspecified but fixed for the lifetime of the structure.
    fn edge_half_edges(&self, e: EdgeId<Self::Index>) -> &[CornerId<Self::Index>] {
        let he = self.half_edges();
        let e = e.index();
        if e >= he.edge_offsets.len().saturating_sub(1) {
            return &[];
        }
        &he.edge_corners[he.edge_offsets[e]..he.edge_offsets[e + 1]]
    }

    /// Number of half-edges incident to edge `e`; `0` if out of range.
    fn num_edge_half_edges(&self, e: EdgeId<Self::Index>) -> usize {
        self.edge_half_edges(e).len()
    }

    /// The `j`-th half-edge incident to edge `e`.
    fn edge_half_edge(&self, e: EdgeId<Self::Index>, j: usize) -> Option<CornerId<Self::Index>> {
        self.edge_half_edges(e).get(j).copied()
    }

    /// Iterate over every half-edge (every non-separator corner).
    fn half_edge_ids(&self) -> impl Iterator<Item = CornerId<Self::Index>> + '_ {
        let face = &self.half_edges().face;
        (0..face.len())
            .filter(move |&c| face[c].is_valid())
            .map(CornerId::new)
    }
}

impl<I: MeshIndex> HalfEdgeTopology for HalfEdges<I> {
    #[inline]
    fn half_edges(&self) -> &HalfEdges<I> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(i: usize) -> CornerId {
        CornerId::new(i)
    }

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    fn tetrahedron() -> HalfEdges {
        HalfEdges::new(4, &[0, 2, 1, -1, 0, 1, 3, -1, 1, 2, 3, -1, 2, 0, 3, -1]).unwrap()
    }

    #[test]
    fn test_single_triangle() {
        let he: HalfEdges = HalfEdges::new(3, &[0, 1, 2, -1]).unwrap();
        assert_eq!(he.num_vertices(), 3);
        assert_eq!(he.num_edges(), 3);
        assert_eq!(he.num_faces(), 1);
        assert_eq!(he.num_corners(), 4);

        assert_eq!(he.src(c(2)), Some(v(2)));
        assert_eq!(he.dst(c(2)), Some(v(0)));
        assert_eq!(he.face(c(1)), Some(FaceId::new(0)));
        for corner in he.half_edge_ids() {
            assert_eq!(he.twin(corner), None);
        }
        for e in he.edge_ids() {
            assert_eq!(he.num_edge_half_edges(e), 1);
        }
    }

    #[test]
    fn test_separators_and_out_of_range() {
        let he: HalfEdges = HalfEdges::new(3, &[0, 1, 2, -1]).unwrap();
        assert_eq!(he.face(c(3)), None);
        assert_eq!(he.src(c(3)), None);
        assert_eq!(he.dst(c(3)), None);
        assert_eq!(he.next(c(3)), None);
        assert_eq!(he.prev(c(3)), None);
        assert_eq!(he.twin(c(3)), None);
        assert_eq!(he.corner_edge(c(3)), None);
        assert_eq!(he.src(c(4)), None);
        assert_eq!(he.next(CornerId::invalid()), None);
        assert_eq!(he.num_edge_half_edges(EdgeId::new(3)), 0);
        assert_eq!(he.edge_half_edge(EdgeId::new(0), 1), None);
    }

    #[test]
    fn test_next_prev_cycle() {
        let he: HalfEdges = HalfEdges::new(6, &[0, 1, 2, -1, 1, 3, 4, 5, 2, -1]).unwrap();
        assert_eq!(he.next(c(8)), Some(c(4)));
        assert_eq!(he.prev(c(4)), Some(c(8)));
        for corner in he.half_edge_ids() {
            let next = he.next(corner).unwrap();
            let prev = he.prev(corner).unwrap();
            assert_eq!(he.prev(next), Some(corner));
            assert_eq!(he.next(prev), Some(corner));
            assert_eq!(he.face(next), he.face(corner));
            assert_eq!(he.dst(corner), he.src(next));
        }
    }

    #[test]
    fn test_closed_surface_twins() {
        let he = tetrahedron();
        assert_eq!(he.num_edges(), 6);
        assert_eq!(he.half_edge_ids().count(), 12);
        for corner in he.half_edge_ids() {
            let twin = he.twin(corner).unwrap();
            assert_ne!(twin, corner);
            assert_eq!(he.twin(twin), Some(corner));
            assert_eq!(he.corner_edge(twin), he.corner_edge(corner));
            // consistently oriented: twin runs the other way
            assert_eq!(he.src(twin), he.dst(corner));
            assert_eq!(he.dst(twin), he.src(corner));
        }
    }

    #[test]
    fn test_inconsistent_winding_still_twins() {
        // both faces traverse the shared edge 1 -> 2
        let he: HalfEdges = HalfEdges::new(4, &[0, 1, 2, -1, 3, 1, 2, -1]).unwrap();
        assert_eq!(he.twin(c(1)), Some(c(5)));
        assert_eq!(he.twin(c(5)), Some(c(1)));
        assert_eq!(he.src(c(1)), he.src(c(5)));
    }

    #[test]
    fn test_edge_incidence() {
        let he: HalfEdges = HalfEdges::new(4, &[0, 1, 2, -1, 1, 3, 2, -1]).unwrap();
        let shared = he.edge(v(1), v(2)).unwrap();
        let incident = he.edge_half_edges(shared);
        assert_eq!(incident.len(), 2);
        assert!(incident.contains(&c(1)));
        assert!(incident.contains(&c(6)));
        for (j, &corner) in incident.iter().enumerate() {
            assert_eq!(he.edge_half_edge(shared, j), Some(corner));
            assert_eq!(he.corner_edge(corner), Some(shared));
        }

        // every half-edge listed exactly once
        let total: usize = he.edge_ids().map(|e| he.num_edge_half_edges(e)).sum();
        assert_eq!(total, he.half_edge_ids().count());
    }

    #[test]
    fn test_singular_edge_unpaired() {
        let he: HalfEdges = HalfEdges::new(5, &[0, 1, 2, -1, 1, 0, 3, -1, 0, 1, 4, -1]).unwrap();
        let e = he.edge(v(0), v(1)).unwrap();
        assert_eq!(he.num_edge_half_edges(e), 3);
        for &corner in he.edge_half_edges(e) {
            assert_eq!(he.twin(corner), None);
        }
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            HalfEdges::<u32>::new(3, &[0, 1, 3, -1]).unwrap_err(),
            MeshError::InvalidIndex { corner: 2, value: 3 }
        );
        assert!(HalfEdges::<u32>::new(3, &[0, 1, 2]).is_err());
        assert!(HalfEdges::<u32>::new(3, &[0, 0, 1, -1]).is_err());
    }

    #[test]
    fn test_extended_vertex_range() {
        let options = TopologyOptions::default().extend();
        let he: HalfEdges = HalfEdges::with_options(2, &[0, 1, 4, -1], &options).unwrap();
        assert_eq!(he.num_vertices(), 5);
        assert!(he.edge(v(1), v(4)).is_some());
    }

    #[test]
    fn test_empty_input() {
        let he: HalfEdges = HalfEdges::new(3, &[]).unwrap();
        assert_eq!(he.num_vertices(), 3);
        assert_eq!(he.num_edges(), 0);
        assert_eq!(he.num_faces(), 0);
        assert_eq!(he.half_edge_ids().count(), 0);
        assert_eq!(he.edge_half_edges(EdgeId::new(0)), &[] as &[CornerId]);
    }
}
