//! Struct-of-arrays view of a line collection.
//!
//! One flat coordinate buffer plus a parallel owner buffer (row position of
//! each vertex), built in a single linear pass. Segment and turn passes work on
//! adjacent entries and use `owner` to reject pairs that straddle two rows.

use super::types::{LineCollection, Point};

/// Flattened vertices of a collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatCoords {
    pub coords: Vec<Point>,
    /// Row position (not id) owning each vertex; same length as `coords`.
    pub owner: Vec<usize>,
}

impl FlatCoords {
    pub fn from_collection<K>(lines: &LineCollection<K>) -> Self {
        let n = lines.vertex_count();
        let mut coords = Vec::with_capacity(n);
        let mut owner = Vec::with_capacity(n);
        for (row, line) in lines.lines().enumerate() {
            coords.extend_from_slice(line.points());
            owner.extend(std::iter::repeat(row).take(line.len()));
        }
        Self { coords, owner }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Whether flattened vertices `i` and `i + 1` belong to the same row.
    #[inline]
    pub fn same_owner(&self, i: usize) -> bool {
        self.owner[i] == self.owner[i + 1]
    }

    /// True if at least one adjacent vertex pair stays inside a row.
    pub fn has_segment(&self) -> bool {
        self.owner.windows(2).any(|w| w[0] == w[1])
    }

    /// Non-degenerate segments `(owner, dx, dy)` in flattened order.
    ///
    /// Pairs across a row boundary and zero-length pairs are skipped.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        (0..self.len().saturating_sub(1)).filter_map(move |i| {
            if !self.same_owner(i) {
                return None;
            }
            let d = self.coords[i + 1] - self.coords[i];
            if d.x == 0.0 && d.y == 0.0 {
                None
            } else {
                Some((self.owner[i], d))
            }
        })
    }
}
