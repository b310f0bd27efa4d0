//! Total absolute bearing change per line (planar).
//!
//! Conventions
//! - Bearing: degrees clockwise from grid North, in [0, 360). Computed as
//!   `atan2(dx, dy)`; the swapped argument order is what makes it clockwise from +y.
//! - Turn: smallest unsigned difference of two consecutive bearings, in [0, 180].
//!
//! Degenerate geometry (single-point rows, zero-length segments, one-segment rows)
//! contributes 0 and never errors.

use super::flat::FlatCoords;
use super::types::{Line, LineCollection, Point};

#[inline]
fn bearing_of(d: Point) -> f64 {
    (d.x.atan2(d.y).to_degrees() + 360.0).rem_euclid(360.0)
}

/// Bearing of the segment `from → to`, or `None` for a zero-length segment.
#[inline]
pub fn bearing_deg(from: Point, to: Point) -> Option<f64> {
    let d = to - from;
    if d.x == 0.0 && d.y == 0.0 {
        None
    } else {
        Some(bearing_of(d))
    }
}

/// Unsigned shortest turn from bearing `b1` to `b2` (degrees), wrap-around safe.
#[inline]
pub fn turn_deg(b1: f64, b2: f64) -> f64 {
    ((b2 - b1 + 180.0).rem_euclid(360.0) - 180.0).abs()
}

/// Per-row totals aligned to a `LineCollection`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BearingChange<K> {
    rows: Vec<(K, f64)>,
}

impl<K: Clone> BearingChange<K> {
    fn aligned(lines: &LineCollection<K>, totals: Vec<f64>) -> Self {
        debug_assert_eq!(lines.len(), totals.len());
        Self {
            rows: lines.ids().cloned().zip(totals).collect(),
        }
    }
}

impl<K> BearingChange<K> {
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.rows.iter().map(|(k, v)| (k, *v))
    }

    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.rows.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|(_, v)| *v)
    }

    /// Value at row position.
    #[inline]
    pub fn value_at(&self, row: usize) -> Option<f64> {
        self.rows.get(row).map(|(_, v)| *v)
    }

    /// Value of the first row with id `id`.
    pub fn get(&self, id: &K) -> Option<f64>
    where
        K: PartialEq,
    {
        self.rows.iter().find(|(k, _)| k == id).map(|(_, v)| *v)
    }

    /// Sum over all rows.
    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<(K, f64)> {
        self.rows
    }
}

/// Sum of absolute bearing changes (degrees) along each line of `lines`.
///
/// Output has one row per input row, in input order, with the input's ids.
/// Rows without at least two non-degenerate segments map to 0.0.
pub fn total_bearing_change<K: Clone>(lines: &LineCollection<K>) -> BearingChange<K> {
    let mut totals = vec![0.0; lines.len()];
    let flat = FlatCoords::from_collection(lines);
    if flat.len() < 2 {
        tracing::debug!(rows = lines.len(), vertices = flat.len(), "bearing change: too few vertices");
        return BearingChange::aligned(lines, totals);
    }
    if !flat.has_segment() {
        tracing::debug!(rows = lines.len(), "bearing change: no in-line vertex pair");
        return BearingChange::aligned(lines, totals);
    }

    let mut prev: Option<(usize, f64)> = None;
    let mut segments = 0usize;
    let mut turns = 0usize;
    for (owner, d) in flat.segments() {
        let b = bearing_of(d);
        if let Some((prev_owner, prev_b)) = prev {
            if prev_owner == owner {
                totals[owner] += turn_deg(prev_b, b);
                turns += 1;
            }
        }
        prev = Some((owner, b));
        segments += 1;
    }
    tracing::trace!(
        rows = lines.len(),
        vertices = flat.len(),
        segments,
        turns,
        "bearing change"
    );
    BearingChange::aligned(lines, totals)
}

/// Total absolute bearing change of a single line.
pub fn line_bearing_change(line: &Line) -> f64 {
    let mut bearings = line
        .points()
        .windows(2)
        .filter_map(|w| bearing_deg(w[0], w[1]));
    let Some(mut prev) = bearings.next() else {
        return 0.0;
    };
    let mut sum = 0.0;
    for b in bearings {
        sum += turn_deg(prev, b);
        prev = b;
    }
    sum
}
