//! Union-find over abstract elements.
//!
//! [`Partition`] splits the elements `{0, 1, ..., n-1}` into disjoint parts and
//! supports near-constant time `find`/`join` using path compression and
//! union-by-size. It knows nothing about meshes; [`PolygonMesh`] uses one
//! transiently over corner indices.
//!
//! Part ids are the current representatives. They stabilize only at query
//! time: after a `join`, the old ids of the two merged parts are no longer
//! valid lookups, so callers should not cache ids across joins.
//!
//! [`PolygonMesh`]: super::PolygonMesh

/// A partition of `n` elements into disjoint parts.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    num_parts: usize,
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl Partition {
    /// Create a partition of `n` elements where every element is a singleton.
    pub fn new(num_elements: usize) -> Self {
        let mut partition = Self::default();
        partition.reset(num_elements);
        partition
    }

    /// Discard the current state and create `n` singleton parts.
    ///
    /// `n` may differ from the count used previously.
    pub fn reset(&mut self, num_elements: usize) {
        self.parent.clear();
        self.size.clear();
        self.parent.extend(0..num_elements);
        self.size.resize(num_elements, 1);
        self.num_parts = num_elements;
    }

    /// Number of elements, as passed to [`new`](Self::new) or [`reset`](Self::reset).
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.parent.len()
    }

    /// Current number of parts. Starts at the element count and never increases.
    #[inline]
    pub fn num_parts(&self) -> usize {
        self.num_parts
    }

    /// Representative of the part containing `i`, or `None` if `i` is out of range.
    ///
    /// Compresses the path from `i` to the root.
    pub fn find(&mut self, i: usize) -> Option<usize> {
        if i >= self.num_elements() {
            return None;
        }

        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut j = i;
        while j != root {
            let next = self.parent[j];
            self.parent[j] = root;
            j = next;
        }

        Some(root)
    }

    /// Join the parts containing `i` and `j` and return the id of the result.
    ///
    /// If both elements already share a part, its id is returned unchanged.
    /// The larger part absorbs the smaller; on a tie the part of `i` wins.
    /// Returns `None` if either element is out of range.
    pub fn join(&mut self, i: usize, j: usize) -> Option<usize> {
        let ri = self.find(i)?;
        let rj = self.find(j)?;
        if ri == rj {
            return Some(ri);
        }

        self.num_parts -= 1;
        let (root, child) = if self.size[ri] >= self.size[rj] {
            (ri, rj)
        } else {
            (rj, ri)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.size[child] = 0;
        Some(root)
    }

    /// Size recorded for element `i` in O(1).
    ///
    /// Non-zero only when `i` currently represents a part; `0` if out of range.
    #[inline]
    pub fn size(&self, i: usize) -> usize {
        self.size.get(i).copied().unwrap_or(0)
    }

    /// Number of elements in the part containing `i`; `0` if out of range.
    pub fn part_size(&mut self, i: usize) -> usize {
        self.find(i).map_or(0, |root| self.size[root])
    }
}
