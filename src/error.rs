//! Error types for polymesh.
//!
//! Only construction can fail. Every query on a built structure is total and
//! reports bad arguments through `None`, `0` or `false` instead.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while building mesh topology from a corner index array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A corner holds a value that is neither a separator nor a vertex in range.
    #[error("corner {corner} holds invalid index {value}")]
    InvalidIndex {
        /// The corner (position in the index array).
        corner: usize,
        /// The offending value.
        value: i32,
    },

    /// The index array is not terminated by a face separator.
    #[error("index array of length {len} does not end with a face separator")]
    MissingSeparator {
        /// Length of the index array.
        len: usize,
    },

    /// A face separator is not preceded by any vertex corner.
    #[error("face {face} is empty (separator at corner {corner})")]
    EmptyFace {
        /// The face index.
        face: usize,
        /// The corner holding the separator.
        corner: usize,
    },

    /// Two cyclically consecutive corners of a face reference the same vertex.
    #[error("face {face} is degenerate (corner {corner} repeats the vertex of the next corner)")]
    DegenerateFace {
        /// The face index.
        face: usize,
        /// The first of the two corners.
        corner: usize,
    },

    /// The mesh has more elements than the chosen index type can address.
    #[error("{count} {kind} do not fit the mesh index type")]
    TooManyElements {
        /// Which elements overflowed ("vertices", "corners").
        kind: &'static str,
        /// How many were requested.
        count: usize,
    },
}
