//! Sinusoidally perturbed ("wiggly") lines between two endpoints.
//!
//! Model
//! - Sample `samples` parameters `t` uniformly on the closed interval [0, 1].
//! - Base point is the straight interpolation `p0 + t (p1 - p0)`.
//! - Offset `amplitude * sin(2π t cycles)` along the left normal of `p1 - p0`.
//!
//! The endpoints carry offsets `sin(0) = 0` and `sin(2π cycles)`, so for integer
//! `cycles` the line starts at `p0` and ends within rounding of `p1`.

use std::f64::consts::TAU;

use super::types::{Line, Point};
use crate::error::{LineError, Result};

/// Wiggly-line sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WiggleCfg {
    /// Number of output points (not segments). 0 gives an empty line, 1 a single point at `p0`.
    pub samples: usize,
    /// Peak perpendicular offset, in coordinate units. Sign flips the side.
    pub amplitude: f64,
    /// Full sine periods over the span.
    pub cycles: f64,
}

impl Default for WiggleCfg {
    fn default() -> Self {
        Self {
            samples: 100,
            amplitude: 5.0,
            cycles: 3.0,
        }
    }
}

impl WiggleCfg {
    #[inline]
    pub fn with_samples(self, samples: usize) -> Self {
        Self { samples, ..self }
    }
    #[inline]
    pub fn with_amplitude(self, amplitude: f64) -> Self {
        Self { amplitude, ..self }
    }
}

/// Uniform parameters on [0, 1], both ends included.
fn unit_samples(n: usize) -> impl Iterator<Item = f64> {
    let denom = n.saturating_sub(1).max(1) as f64;
    (0..n).map(move |i| i as f64 / denom)
}

/// Sample a wiggly line from `p0` to `p1`.
///
/// Errors with `LineError::InvalidInput` if the endpoints coincide (zero length).
pub fn wiggly_line(p0: Point, p1: Point, cfg: WiggleCfg) -> Result<Line> {
    let d = p1 - p0;
    let len = d.x.hypot(d.y);
    if len == 0.0 {
        tracing::debug!(x = p0.x, y = p0.y, "wiggly_line: coincident endpoints");
        return Err(LineError::InvalidInput("points must be different"));
    }
    let u = d / len;
    let normal = Point::new(-u.y, u.x);
    tracing::debug!(
        length = len,
        samples = cfg.samples,
        amplitude = cfg.amplitude,
        cycles = cfg.cycles,
        "wiggly_line"
    );
    Ok(unit_samples(cfg.samples)
        .map(|t| {
            let wiggle = cfg.amplitude * (TAU * t * cfg.cycles).sin();
            p0 + d * t + normal * wiggle
        })
        .collect())
}

/// `wiggly_line` with 100 samples, amplitude 5 and 3 cycles.
#[inline]
pub fn wiggly_line_default(p0: Point, p1: Point) -> Result<Line> {
    wiggly_line(p0, p1, WiggleCfg::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn unit_samples_cover_closed_interval() {
        let ts: Vec<f64> = unit_samples(5).collect();
        assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(unit_samples(1).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(unit_samples(0).count(), 0);
    }

    #[test]
    fn quarter_period_peaks_on_left_side() {
        // Horizontal line to +x: left normal is +y. With 1 cycle and 5 samples,
        // t = 0.25 hits the sine peak.
        let cfg = WiggleCfg {
            samples: 5,
            amplitude: 2.0,
            cycles: 1.0,
        };
        let l = wiggly_line(vector![0.0, 0.0], vector![4.0, 0.0], cfg).unwrap();
        let p = l.points()[1];
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
        let q = l.points()[3];
        assert!((q.y + 2.0).abs() < 1e-12);
    }

    #[test]
    fn builders_override_single_fields() {
        let cfg = WiggleCfg::default().with_samples(7).with_amplitude(0.5);
        assert_eq!(cfg.samples, 7);
        assert_eq!(cfg.amplitude, 0.5);
        assert_eq!(cfg.cycles, 3.0);
    }
}
