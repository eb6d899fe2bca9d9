//! Index types for mesh elements.
//!
//! This module provides type-safe index wrappers for vertices, edges, faces and
//! corners. The indices are generic over the underlying integer type so a mesh
//! can trade address range for memory (u16 for small meshes, u32 for typical
//! meshes, u64 for massive meshes).
//!
//! Half-edges are in one-to-one correspondence with vertex corners, so a
//! [`CornerId`] doubles as a half-edge id.

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for types that can be used as mesh indices.
///
/// This trait is implemented for `u16`, `u32`, and `u64`.
pub trait MeshIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Send + Sync + 'static
{
    /// The maximum valid index value.
    const MAX: Self;

    /// A sentinel value representing an invalid/null index.
    const INVALID: Self;

    /// Convert from usize to this index type.
    ///
    /// # Panics
    /// Panics in debug builds if the value is too large for this index type.
    fn from_usize(v: usize) -> Self;

    /// Convert to usize.
    fn to_usize(self) -> usize;

    /// Convert from usize, or `None` if the value does not fit.
    fn try_from_usize(v: usize) -> Option<Self> {
        if v <= Self::MAX.to_usize() {
            Some(Self::from_usize(v))
        } else {
            None
        }
    }

    /// Check if this is a valid (non-sentinel) index.
    fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl MeshIndex for u16 {
    const MAX: Self = u16::MAX - 1;
    const INVALID: Self = u16::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} too large for u16", v);
        v as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u32 {
    const MAX: Self = u32::MAX - 1;
    const INVALID: Self = u32::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} too large for u32", v);
        v as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u64 {
    const MAX: Self = u64::MAX - 1;
    const INVALID: Self = u64::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        v as u64
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId<I: MeshIndex = u32>(I);

/// A type-safe edge index (an undirected edge of the mesh graph).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EdgeId<I: MeshIndex = u32>(I);

/// A type-safe face index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId<I: MeshIndex = u32>(I);

/// A type-safe corner index: a position in the corner index array.
///
/// Vertex corners also identify the half-edge leaving that corner.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct CornerId<I: MeshIndex = u32>(I);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl<I: MeshIndex> $name<I> {
            /// Create a new index from a raw value.
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(I::from_usize(index))
            }

            /// Create an invalid/null index.
            #[inline]
            pub fn invalid() -> Self {
                Self(I::INVALID)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }

            /// Get the raw value of the underlying type.
            #[inline]
            pub fn raw(self) -> I {
                self.0
            }

            /// Check if this is a valid (non-null) index.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0.is_valid()
            }

            /// `Some(self)` if valid, `None` for the null index.
            #[inline]
            pub fn valid(self) -> Option<Self> {
                if self.is_valid() {
                    Some(self)
                } else {
                    None
                }
            }
        }

        impl<I: MeshIndex> Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.index())
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl<I: MeshIndex> Default for $name<I> {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl<I: MeshIndex> From<usize> for $name<I> {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(EdgeId, "E");
impl_index_type!(FaceId, "F");
impl_index_type!(CornerId, "C");
