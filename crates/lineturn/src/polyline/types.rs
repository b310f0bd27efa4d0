//! Basic polyline types.
//!
//! - `Point`: planar coordinate `(x, y)`.
//! - `Line`: directed, ordered point sequence (order matters for bearings).
//! - `LineCollection`: ordered `(id, Line)` rows; ids are caller-owned and kept as given.

use nalgebra::Vector2;

/// Planar coordinate `(x, y)`.
pub type Point = Vector2<f64>;

/// Directed line string.
///
/// Well-formed lines have at least two distinct points. This is not enforced:
/// degenerate lines are valid input to the aggregator and contribute zero turn.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub points: Vec<Point>,
}

impl Line {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from `(x, y)` tuples.
    pub fn from_xy(xy: &[(f64, f64)]) -> Self {
        xy.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Euclidean length (sum of segment lengths).
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for Line {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Line {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Ordered collection of lines keyed by caller identifiers.
///
/// Rows keep insertion order. Ids may repeat or be non-sequential; results are
/// aligned by row, never re-keyed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCollection<K> {
    rows: Vec<(K, Line)>,
}

impl<K> Default for LineCollection<K> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<K> LineCollection<K> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            rows: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn push(&mut self, id: K, line: Line) {
        self.rows.push((id, line));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Line)> {
        self.rows.iter().map(|(k, l)| (k, l))
    }

    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.rows.iter().map(|(k, _)| k)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.rows.iter().map(|(_, l)| l)
    }

    /// Total number of vertices over all rows.
    pub fn vertex_count(&self) -> usize {
        self.rows.iter().map(|(_, l)| l.len()).sum()
    }
}

impl LineCollection<usize> {
    /// Rows keyed by position `0..n`.
    pub fn from_lines(lines: impl IntoIterator<Item = Line>) -> Self {
        lines.into_iter().enumerate().collect()
    }
}

impl<K> FromIterator<(K, Line)> for LineCollection<K> {
    fn from_iter<I: IntoIterator<Item = (K, Line)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
