//! Construction options and input validation.
//!
//! Every structure in this crate is built once from `(num_vertices,
//! coord_index)` and never changes afterwards. This module holds the knobs
//! that affect construction and the single validation pass that runs before
//! any derived index is built, so construction either fully succeeds or
//! returns an error and leaves nothing behind.

use super::index::MeshIndex;
use crate::error::{MeshError, Result};

/// How vertex corners beyond the declared vertex count are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexRange {
    /// Reject any corner `>= num_vertices` with [`MeshError::InvalidIndex`].
    #[default]
    Strict,
    /// Grow the vertex count to cover the largest referenced vertex.
    Extend,
}

/// Options for building half-edges and polygon meshes.
#[derive(Debug, Clone, Default)]
pub struct TopologyOptions {
    /// Treatment of vertex corners beyond the declared vertex count.
    pub vertex_range: VertexRange,
}

impl TopologyOptions {
    /// Set the vertex range policy.
    pub fn with_vertex_range(mut self, vertex_range: VertexRange) -> Self {
        self.vertex_range = vertex_range;
        self
    }

    /// Options that reject out-of-range vertex corners (the default).
    pub fn strict(self) -> Self {
        self.with_vertex_range(VertexRange::Strict)
    }

    /// Options that widen the vertex count instead of failing.
    pub fn extend(self) -> Self {
        self.with_vertex_range(VertexRange::Extend)
    }
}

/// Validate a corner index array and return the effective vertex count.
///
/// Checks, in a single pass:
/// - every value is `-1` or a vertex index (`>= num_vertices` only under
///   [`VertexRange::Extend`]);
/// - the array ends with a separator and no face is empty;
/// - no two cyclically consecutive corners of a face share a vertex;
/// - vertex and corner counts fit the index type `I`.
pub(crate) fn validate_coord_index<I: MeshIndex>(
    num_vertices: usize,
    coord_index: &[i32],
    options: &TopologyOptions,
) -> Result<usize> {
    if coord_index.last().is_some_and(|&c| c >= 0) {
        return Err(MeshError::MissingSeparator {
            len: coord_index.len(),
        });
    }

    let mut effective = num_vertices;
    let mut face = 0;
    let mut face_start = 0;
    for (c, &value) in coord_index.iter().enumerate() {
        if value >= 0 {
            let v = value as usize;
            if v >= effective {
                match options.vertex_range {
                    VertexRange::Strict => {
                        return Err(MeshError::InvalidIndex { corner: c, value })
                    }
                    VertexRange::Extend => effective = v + 1,
                }
            }
            continue;
        }
        if value != -1 {
            return Err(MeshError::InvalidIndex { corner: c, value });
        }
        if c == face_start {
            return Err(MeshError::EmptyFace { face, corner: c });
        }

        let corners = &coord_index[face_start..c];
        for (j, &v) in corners.iter().enumerate() {
            let next = corners[(j + 1) % corners.len()];
            if v == next {
                return Err(MeshError::DegenerateFace {
                    face,
                    corner: face_start + j,
                });
            }
        }

        face += 1;
        face_start = c + 1;
    }

    if effective > num_vertices {
        log::warn!(
            "corner index references {} vertices, {} declared; extending vertex range",
            effective,
            num_vertices
        );
    }
    if I::try_from_usize(effective).is_none() {
        return Err(MeshError::TooManyElements {
            kind: "vertices",
            count: effective,
        });
    }
    if I::try_from_usize(coord_index.len()).is_none() {
        return Err(MeshError::TooManyElements {
            kind: "corners",
            count: coord_index.len(),
        });
    }

    Ok(effective)
}
