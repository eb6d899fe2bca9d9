//! Undirected edge graph over mesh vertices.
//!
//! [`Edges`] stores a simple graph on the vertices `0..num_vertices`. Each
//! edge is kept canonically as `(v0, v1)` with `v0 < v1` and receives a dense
//! id at first insertion. Ids follow insertion order and are never reused or
//! renumbered, so layers built on top of the graph see the same ids on every
//! query.
//!
//! # Representation
//!
//! An arena of edge nodes `(v0, v1, next)` plus one list head per vertex.
//! `first[v0]` points at the most recently inserted edge whose smaller endpoint
//! is `v0`; `next` links the remaining edges of that list. Lookup is a scan of
//! the list, O(degree).

use super::index::{EdgeId, MeshIndex, VertexId};

#[derive(Debug, Clone, Copy)]
struct EdgeNode<I: MeshIndex> {
    v0: VertexId<I>,
    v1: VertexId<I>,
    next: EdgeId<I>,
}

/// An undirected simple graph with insertion-ordered edge ids.
///
/// Read access goes through [`EdgeTopology`]; only the mesh layers inside this
/// crate insert edges.
#[derive(Debug, Clone)]
pub struct Edges<I: MeshIndex = u32> {
    first: Vec<EdgeId<I>>,
    nodes: Vec<EdgeNode<I>>,
}

impl<I: MeshIndex> Edges<I> {
    /// Create a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            first: vec![EdgeId::invalid(); num_vertices],
            nodes: Vec::new(),
        }
    }

    /// Insert the edge `{a, b}` and return its id.
    ///
    /// Returns the existing id if the edge is already present. Returns `None`
    /// for a self-loop or when either vertex is out of range.
    pub(crate) fn insert_edge(&mut self, a: VertexId<I>, b: VertexId<I>) -> Option<EdgeId<I>> {
        let (v0, v1) = self.canonical(a, b)?;
        if let Some(e) = self.edge(v0, v1) {
            return Some(e);
        }

        let e = EdgeId::new(self.nodes.len());
        self.nodes.push(EdgeNode {
            v0,
            v1,
            next: self.first[v0.index()],
        });
        self.first[v0.index()] = e;
        Some(e)
    }

    fn canonical(&self, a: VertexId<I>, b: VertexId<I>) -> Option<(VertexId<I>, VertexId<I>)> {
        let n = self.first.len();
        if a == b || a.index() >= n || b.index() >= n {
            return None;
        }
        Some(if a < b { (a, b) } else { (b, a) })
    }

    fn node(&self, e: EdgeId<I>) -> Option<&EdgeNode<I>> {
        self.nodes.get(e.index())
    }
}

/// Read-only access to an undirected edge graph.
///
/// Implemented by [`Edges`] and by every mesh layer that owns one, so the
/// graph queries are available uniformly without exposing insertion.
pub trait EdgeTopology {
    /// Index type of the underlying mesh.
    type Index: MeshIndex;

    /// The edge graph backing this structure.
    fn edge_graph(&self) -> &Edges<Self::Index>;

    /// Number of vertices; valid vertex ids are `0..num_vertices()`.
    fn num_vertices(&self) -> usize {
        self.edge_graph().first.len()
    }

    /// Number of edges; valid edge ids are `0..num_edges()`.
    fn num_edges(&self) -> usize {
        self.edge_graph().nodes.len()
    }

    /// Id of the edge joining `a` and `b`, in either order.
    ///
    /// `None` for a self-loop, a vertex out of range, or an edge never inserted.
    fn edge(&self, a: VertexId<Self::Index>, b: VertexId<Self::Index>) -> Option<EdgeId<Self::Index>> {
        let graph = self.edge_graph();
        let (v0, v1) = graph.canonical(a, b)?;
        let mut e = graph.first[v0.index()];
        while let Some(node) = graph.node(e) {
            if node.v1 == v1 {
                return Some(e);
            }
            e = node.next;
        }
        None
    }

    /// Smaller endpoint of edge `e`.
    fn vertex0(&self, e: EdgeId<Self::Index>) -> Option<VertexId<Self::Index>> {
        self.edge_graph().node(e).map(|n| n.v0)
    }

    /// Larger endpoint of edge `e`.
    fn vertex1(&self, e: EdgeId<Self::Index>) -> Option<VertexId<Self::Index>> {
        self.edge_graph().node(e).map(|n| n.v1)
    }

    /// Both endpoints of edge `e`, smaller first.
    fn edge_vertices(
        &self,
        e: EdgeId<Self::Index>,
    ) -> Option<(VertexId<Self::Index>, VertexId<Self::Index>)> {
        self.edge_graph().node(e).map(|n| (n.v0, n.v1))
    }

    /// Iterate over all edge ids in insertion order.
    fn edge_ids(&self) -> impl Iterator<Item = EdgeId<Self::Index>> + '_ {
        (0..self.num_edges()).map(EdgeId::new)
    }

    /// Iterate over the edges whose smaller endpoint is `v`.
    ///
    /// Order is most recently inserted first. Empty if `v` is out of range.
    fn vertex_edges(&self, v: VertexId<Self::Index>) -> impl Iterator<Item = EdgeId<Self::Index>> + '_ {
        let graph = self.edge_graph();
        let head = graph.first.get(v.index()).copied().unwrap_or_default();
        std::iter::successors(head.valid(), move |&e| graph.node(e).and_then(|n| n.next.valid()))
    }
}

impl<I: MeshIndex> EdgeTopology for Edges<I> {
    type Index = I;

    #[inline]
    fn edge_graph(&self) -> &Edges<I> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::HashSet;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_empty_graph() {
        let edges: Edges = Edges::new(3);
        assert_eq!(edges.num_vertices(), 3);
        assert_eq!(edges.num_edges(), 0);
        assert_eq!(edges.edge(v(0), v(1)), None);
        assert_eq!(edges.vertex0(EdgeId::new(0)), None);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut edges: Edges = Edges::new(4);
        let e0 = edges.insert_edge(v(2), v(1)).unwrap();
        let e1 = edges.insert_edge(v(1), v(3)).unwrap();
        assert_eq!(e0.index(), 0);
        assert_eq!(e1.index(), 1);

        // idempotent, order-independent
        assert_eq!(edges.insert_edge(v(1), v(2)), Some(e0));
        assert_eq!(edges.num_edges(), 2);
        assert_eq!(edges.edge(v(1), v(2)), Some(e0));
        assert_eq!(edges.edge(v(2), v(1)), Some(e0));

        // canonical endpoints
        assert_eq!(edges.vertex0(e0), Some(v(1)));
        assert_eq!(edges.vertex1(e0), Some(v(2)));
        assert_eq!(edges.edge_vertices(e1), Some((v(1), v(3))));
    }

    #[test]
    fn test_rejects_invalid_edges() {
        let mut edges: Edges = Edges::new(3);
        assert_eq!(edges.insert_edge(v(1), v(1)), None);
        assert_eq!(edges.insert_edge(v(0), v(3)), None);
        assert_eq!(edges.insert_edge(VertexId::invalid(), v(0)), None);
        assert_eq!(edges.num_edges(), 0);
        assert_eq!(edges.edge(v(1), v(1)), None);
    }

    #[test]
    fn test_vertex_edges() {
        let mut edges: Edges = Edges::new(4);
        let a = edges.insert_edge(v(0), v(1)).unwrap();
        let b = edges.insert_edge(v(0), v(2)).unwrap();
        edges.insert_edge(v(1), v(2));
        let c = edges.insert_edge(v(3), v(0)).unwrap();

        let listed: Vec<EdgeId> = edges.vertex_edges(v(0)).collect();
        assert_eq!(listed, vec![c, b, a]);
        assert_eq!(edges.vertex_edges(v(3)).count(), 0);
        assert_eq!(edges.vertex_edges(v(9)).count(), 0);
        assert_eq!(edges.edge_ids().count(), 4);
    }

    #[quickcheck]
    fn prop_ids_match_distinct_pairs(pairs: Vec<(u8, u8)>) -> bool {
        let n = 16;
        let mut edges: Edges = Edges::new(n);
        let mut seen = HashSet::new();
        for (a, b) in pairs {
            let (a, b) = (a as usize % n, b as usize % n);
            let before = edges.num_edges();
            let id = edges.insert_edge(v(a), v(b));
            if a == b {
                if id.is_some() {
                    return false;
                }
                continue;
            }
            seen.insert((a.min(b), a.max(b)));
            if edges.num_edges() < before
                || edges.insert_edge(v(b), v(a)) != id
                || edges.edge(v(a), v(b)) != edges.edge(v(b), v(a))
            {
                return false;
            }
        }
        edges.num_edges() == seen.len()
    }
}
