//! Algorithms over built mesh topology.
//!
//! - **Report**: per-class vertex and edge counts, regularity, boundary and
//!   orientation of a [`PolygonMesh`](crate::mesh::PolygonMesh)

pub mod report;

pub use report::{ReportOptions, TopologyReport};
