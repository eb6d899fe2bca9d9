//! Topology summary of a polygon mesh.
//!
//! [`TopologyReport`] counts vertices and edges per class and records the
//! global mesh properties. It is what a viewer or a mesh-quality tool prints
//! after loading a mesh:
//!
//! ```
//! use polymesh::prelude::*;
//! use polymesh::algo::report::{ReportOptions, TopologyReport};
//!
//! let mesh: PolygonMesh = PolygonMesh::new(3, &[0, 1, 2, -1]).unwrap();
//! let report = TopologyReport::compute(&mesh, &ReportOptions::default());
//! assert_eq!(report.boundary_edges, 3);
//! println!("{}", report);
//! ```

use std::fmt;

use rayon::prelude::*;

use crate::mesh::{EdgeId, EdgeKind, EdgeTopology, HalfEdgeTopology, MeshIndex, PolygonMesh, VertexId};

/// Options for computing a [`TopologyReport`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to classify vertices and edges in parallel (default: true).
    pub parallel: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl ReportOptions {
    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Element counts and global properties of a polygon mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyReport {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of edges.
    pub edges: usize,
    /// Number of faces.
    pub faces: usize,
    /// Number of corners, separators included.
    pub corners: usize,

    /// Vertices on a boundary edge.
    pub boundary_vertices: usize,
    /// Vertices not on any boundary edge.
    pub internal_vertices: usize,
    /// Vertices whose corners form at most one fan.
    pub regular_vertices: usize,
    /// Vertices whose corners form several disconnected fans.
    pub singular_vertices: usize,
    /// Vertices referenced by no face.
    pub isolated_vertices: usize,

    /// Edges with one incident face.
    pub boundary_edges: usize,
    /// Edges with two incident faces.
    pub regular_edges: usize,
    /// Edges with three or more incident faces.
    pub singular_edges: usize,

    /// No singular edges and no singular vertices.
    pub is_regular: bool,
    /// At least one boundary edge.
    pub has_boundary: bool,
    /// Every regular edge is traversed in opposite directions by its faces.
    pub is_oriented: bool,
}

#[derive(Default, Clone, Copy)]
struct VertexCounts {
    boundary: usize,
    singular: usize,
    isolated: usize,
}

impl VertexCounts {
    fn merge(self, other: Self) -> Self {
        Self {
            boundary: self.boundary + other.boundary,
            singular: self.singular + other.singular,
            isolated: self.isolated + other.isolated,
        }
    }
}

#[derive(Default, Clone, Copy)]
struct EdgeCounts {
    boundary: usize,
    regular: usize,
    singular: usize,
}

impl EdgeCounts {
    fn merge(self, other: Self) -> Self {
        Self {
            boundary: self.boundary + other.boundary,
            regular: self.regular + other.regular,
            singular: self.singular + other.singular,
        }
    }
}

fn classify_vertex<I: MeshIndex>(mesh: &PolygonMesh<I>, v: VertexId<I>) -> VertexCounts {
    VertexCounts {
        boundary: mesh.is_boundary_vertex(v) as usize,
        singular: mesh.is_singular_vertex(v) as usize,
        isolated: mesh.is_isolated_vertex(v) as usize,
    }
}

fn classify_edge<I: MeshIndex>(mesh: &PolygonMesh<I>, e: EdgeId<I>) -> EdgeCounts {
    let mut counts = EdgeCounts::default();
    match mesh.edge_kind(e) {
        Some(EdgeKind::Boundary) => counts.boundary = 1,
        Some(EdgeKind::Regular) => counts.regular = 1,
        Some(EdgeKind::Singular) => counts.singular = 1,
        None => {}
    }
    counts
}

impl TopologyReport {
    /// Classify every vertex and edge of `mesh`.
    pub fn compute<I: MeshIndex>(mesh: &PolygonMesh<I>, options: &ReportOptions) -> Self {
        let num_vertices = mesh.num_vertices();
        let num_edges = mesh.num_edges();

        let (vertices, edges) = if options.parallel {
            let vertices = (0..num_vertices)
                .into_par_iter()
                .map(|i| classify_vertex(mesh, VertexId::new(i)))
                .reduce(VertexCounts::default, VertexCounts::merge);
            let edges = (0..num_edges)
                .into_par_iter()
                .map(|i| classify_edge(mesh, EdgeId::new(i)))
                .reduce(EdgeCounts::default, EdgeCounts::merge);
            (vertices, edges)
        } else {
            let vertices = (0..num_vertices)
                .map(|i| classify_vertex(mesh, VertexId::new(i)))
                .fold(VertexCounts::default(), VertexCounts::merge);
            let edges = (0..num_edges)
                .map(|i| classify_edge(mesh, EdgeId::new(i)))
                .fold(EdgeCounts::default(), EdgeCounts::merge);
            (vertices, edges)
        };

        let report = Self {
            vertices: num_vertices,
            edges: num_edges,
            faces: mesh.num_faces(),
            corners: mesh.num_corners(),
            boundary_vertices: vertices.boundary,
            internal_vertices: num_vertices - vertices.boundary,
            regular_vertices: num_vertices - vertices.singular,
            singular_vertices: vertices.singular,
            isolated_vertices: vertices.isolated,
            boundary_edges: edges.boundary,
            regular_edges: edges.regular,
            singular_edges: edges.singular,
            is_regular: mesh.is_regular(),
            has_boundary: mesh.has_boundary(),
            is_oriented: mesh.is_oriented(),
        };
        log::debug!("topology report: {:?}", report);
        report
    }
}

impl fmt::Display for TopologyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nV          = {}", self.vertices)?;
        writeln!(f, "nE          = {}", self.edges)?;
        writeln!(f, "nF          = {}", self.faces)?;
        writeln!(f, "nC          = {}", self.corners)?;
        writeln!(f, "nV_boundary = {}", self.boundary_vertices)?;
        writeln!(f, "nV_internal = {}", self.internal_vertices)?;
        writeln!(f, "nV_regular  = {}", self.regular_vertices)?;
        writeln!(f, "nV_singular = {}", self.singular_vertices)?;
        writeln!(f, "nV_isolated = {}", self.isolated_vertices)?;
        writeln!(f, "nE_boundary = {}", self.boundary_edges)?;
        writeln!(f, "nE_regular  = {}", self.regular_edges)?;
        writeln!(f, "nE_singular = {}", self.singular_edges)?;
        writeln!(f, "isRegular   = {}", self.is_regular)?;
        writeln!(f, "hasBoundary = {}", self.has_boundary)?;
        write!(f, "isOriented  = {}", self.is_oriented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> PolygonMesh {
        // three triangles hinged on the edge (0, 1)
        PolygonMesh::new(5, &[0, 1, 2, -1, 1, 0, 3, -1, 0, 1, 4, -1]).unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mesh = book();
        let parallel = TopologyReport::compute(&mesh, &ReportOptions::default());
        let sequential = TopologyReport::compute(&mesh, &ReportOptions::default().sequential());
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_book_report() {
        let report = TopologyReport::compute(&book(), &ReportOptions::default().with_parallel(false));
        assert_eq!(report.vertices, 5);
        assert_eq!(report.edges, 7);
        assert_eq!(report.faces, 3);
        assert_eq!(report.corners, 12);
        assert_eq!(report.boundary_edges, 6);
        assert_eq!(report.regular_edges, 0);
        assert_eq!(report.singular_edges, 1);
        assert_eq!(report.boundary_vertices, 5);
        assert_eq!(report.internal_vertices, 0);
        assert!(!report.is_regular);
        assert!(report.has_boundary);
        // no regular edges to disagree on
        assert!(report.is_oriented);
    }

    #[test]
    fn test_display() {
        let mesh: PolygonMesh = PolygonMesh::new(3, &[0, 1, 2, -1]).unwrap();
        let text = TopologyReport::compute(&mesh, &ReportOptions::default()).to_string();
        assert!(text.starts_with("nV          = 3\n"));
        assert!(text.contains("nE_boundary = 3\n"));
        assert!(text.ends_with("isOriented  = true"));
        assert_eq!(text.lines().count(), 15);
    }
}
