//! Face table decoded from a corner index array.
//!
//! The input lists the vertex indices of each face in order, followed by one
//! negative separator (the "coordIndex" convention). Every entry is a
//! *corner*; separators count as corners too, which keeps corner arithmetic
//! uniform: the corners of face `f` are the range between the separator of
//! face `f - 1` and the separator of face `f`.
//!
//! Separators are stored normalized to `-(f + 1)`, so the face that owns a
//! corner can be decoded from the separator that terminates it.

use std::ops::Range;

use super::index::{CornerId, FaceId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// Corner/face lookup table.
#[derive(Debug, Clone)]
pub struct Faces<I: MeshIndex = u32> {
    num_vertices: usize,
    corners: Vec<i32>,
    /// `offsets[f]` is the first corner of face `f`; `offsets[num_faces]` is
    /// the number of corners.
    offsets: Vec<usize>,
    _index: std::marker::PhantomData<I>,
}

impl<I: MeshIndex> Faces<I> {
    /// Build the face table for `coord_index`.
    ///
    /// Any negative value is a separator. The vertex count is widened when a
    /// corner references a vertex at or beyond `num_vertices`.
    ///
    /// # Errors
    /// - [`MeshError::MissingSeparator`] if the array is non-empty and does not
    ///   end with a separator.
    /// - [`MeshError::EmptyFace`] if a separator is not preceded by a vertex corner.
    /// - [`MeshError::TooManyElements`] if the corners or vertices overflow `I`.
    pub fn new(num_vertices: usize, coord_index: &[i32]) -> Result<Self> {
        if coord_index.last().is_some_and(|&c| c >= 0) {
            return Err(MeshError::MissingSeparator {
                len: coord_index.len(),
            });
        }
        if I::try_from_usize(coord_index.len()).is_none() {
            return Err(MeshError::TooManyElements {
                kind: "corners",
                count: coord_index.len(),
            });
        }

        let mut corners = Vec::with_capacity(coord_index.len());
        let mut offsets = vec![0];
        let mut num_vertices = num_vertices;
        for (c, &value) in coord_index.iter().enumerate() {
            if value >= 0 {
                num_vertices = num_vertices.max(value as usize + 1);
                corners.push(value);
                continue;
            }
            let face = offsets.len() - 1;
            if offsets[face] == c {
                return Err(MeshError::EmptyFace { face, corner: c });
            }
            corners.push(-(face as i32) - 1);
            offsets.push(c + 1);
        }

        if I::try_from_usize(num_vertices).is_none() {
            return Err(MeshError::TooManyElements {
                kind: "vertices",
                count: num_vertices,
            });
        }

        Ok(Self {
            num_vertices,
            corners,
            offsets,
            _index: std::marker::PhantomData,
        })
    }

    /// Number of vertices: the declared count, widened to cover every corner.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of faces (number of separators).
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of corners, separators included.
    #[inline]
    pub fn num_corners(&self) -> usize {
        self.corners.len()
    }

    /// Number of vertex corners of face `f`.
    pub fn face_size(&self, f: FaceId<I>) -> Option<usize> {
        self.face_corners(f).map(|r| r.len())
    }

    /// First corner of face `f`.
    pub fn face_first_corner(&self, f: FaceId<I>) -> Option<CornerId<I>> {
        self.face_corners(f).map(|r| CornerId::new(r.start))
    }

    /// Range of corner indices holding the vertices of face `f` (separator excluded).
    pub fn face_corners(&self, f: FaceId<I>) -> Option<Range<usize>> {
        let f = f.index();
        if f >= self.num_faces() {
            return None;
        }
        Some(self.offsets[f]..self.offsets[f + 1] - 1)
    }

    /// Vertex at position `j` within face `f`.
    pub fn face_vertex(&self, f: FaceId<I>, j: usize) -> Option<VertexId<I>> {
        let corners = self.face_corners(f)?;
        if j >= corners.len() {
            return None;
        }
        self.corner_vertex(CornerId::new(corners.start + j))
    }

    /// Whether corner `c` is a face separator. `false` when out of range.
    #[inline]
    pub fn is_separator(&self, c: CornerId<I>) -> bool {
        self.corners.get(c.index()).is_some_and(|&v| v < 0)
    }

    /// Vertex referenced by corner `c`; `None` for separators or out of range.
    #[inline]
    pub fn corner_vertex(&self, c: CornerId<I>) -> Option<VertexId<I>> {
        match self.corners.get(c.index()) {
            Some(&v) if v >= 0 => Some(VertexId::new(v as usize)),
            _ => None,
        }
    }

    /// Face owning the vertex corner `c`.
    ///
    /// Scans forward to the face separator and decodes the face id from it.
    pub fn corner_face(&self, c: CornerId<I>) -> Option<FaceId<I>> {
        self.corner_vertex(c)?;
        self.corners[c.index()..]
            .iter()
            .find(|&&v| v < 0)
            .map(|&sep| FaceId::new((-(sep + 1)) as usize))
    }

    /// Next corner of the same face, wrapping from the last to the first.
    pub fn next_corner(&self, c: CornerId<I>) -> Option<CornerId<I>> {
        self.corner_vertex(c)?;
        let i = c.index();
        match self.corners[i + 1] {
            sep if sep < 0 => {
                let face = (-(sep + 1)) as usize;
                Some(CornerId::new(self.offsets[face]))
            }
            _ => Some(CornerId::new(i + 1)),
        }
    }

    /// Previous corner of the same face, wrapping from the first to the last.
    pub fn prev_corner(&self, c: CornerId<I>) -> Option<CornerId<I>> {
        let face = self.corner_face(c)?;
        let corners = self.face_corners(face)?;
        let i = c.index();
        Some(CornerId::new(if i == corners.start { corners.end - 1 } else { i - 1 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(i: usize) -> CornerId {
        CornerId::new(i)
    }

    fn f(i: usize) -> FaceId {
        FaceId::new(i)
    }

    #[test]
    fn test_empty() {
        let faces: Faces = Faces::new(0, &[]).unwrap();
        assert_eq!(faces.num_faces(), 0);
        assert_eq!(faces.num_corners(), 0);
        assert_eq!(faces.face_size(f(0)), None);
        assert_eq!(faces.next_corner(c(0)), None);
    }

    #[test]
    fn test_triangle_and_quad() {
        let faces: Faces = Faces::new(5, &[0, 1, 2, -1, 1, 3, 4, 2, -1]).unwrap();
        assert_eq!(faces.num_faces(), 2);
        assert_eq!(faces.num_corners(), 9);
        assert_eq!(faces.face_size(f(0)), Some(3));
        assert_eq!(faces.face_size(f(1)), Some(4));
        assert_eq!(faces.face_first_corner(f(1)), Some(c(4)));
        assert_eq!(faces.face_vertex(f(1), 3), Some(VertexId::new(2)));
        assert_eq!(faces.face_vertex(f(1), 4), None);
        assert_eq!(faces.face_vertex(f(2), 0), None);
    }

    #[test]
    fn test_corner_lookups() {
        let faces: Faces = Faces::new(5, &[0, 1, 2, -1, 1, 3, 4, 2, -1]).unwrap();
        assert_eq!(faces.corner_face(c(2)), Some(f(0)));
        assert_eq!(faces.corner_face(c(4)), Some(f(1)));
        assert_eq!(faces.corner_face(c(3)), None);
        assert_eq!(faces.corner_face(c(9)), None);

        assert_eq!(faces.next_corner(c(0)), Some(c(1)));
        assert_eq!(faces.next_corner(c(2)), Some(c(0)));
        assert_eq!(faces.next_corner(c(7)), Some(c(4)));
        assert_eq!(faces.next_corner(c(8)), None);

        assert_eq!(faces.prev_corner(c(4)), Some(c(7)));
        assert_eq!(faces.prev_corner(c(5)), Some(c(4)));
        assert_eq!(faces.prev_corner(c(3)), None);

        assert!(faces.is_separator(c(3)));
        assert!(!faces.is_separator(c(2)));
        assert!(!faces.is_separator(c(42)));
    }

    #[test]
    fn test_generalized_separators() {
        // any negative value terminates a face
        let faces: Faces = Faces::new(4, &[0, 1, 2, -7, 2, 1, 3, -1]).unwrap();
        assert_eq!(faces.num_faces(), 2);
        assert_eq!(faces.corner_face(c(5)), Some(f(1)));
        assert_eq!(faces.next_corner(c(2)), Some(c(0)));
    }

    #[test]
    fn test_widens_vertex_count() {
        let faces: Faces = Faces::new(2, &[0, 1, 5, -1]).unwrap();
        assert_eq!(faces.num_vertices(), 6);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            Faces::<u32>::new(3, &[0, 1, 2]).unwrap_err(),
            MeshError::MissingSeparator { len: 3 }
        );
        assert_eq!(
            Faces::<u32>::new(3, &[0, 1, 2, -1, -1]).unwrap_err(),
            MeshError::EmptyFace { face: 1, corner: 4 }
        );
        assert_eq!(
            Faces::<u32>::new(3, &[-1]).unwrap_err(),
            MeshError::EmptyFace { face: 0, corner: 0 }
        );
    }
}
