//! Planar line-string utilities.
//!
//! Two independent, stateless operations over 2D coordinate sequences:
//! - `wiggly_line`: sample a sinusoidally perturbed line between two points.
//! - `total_bearing_change`: per-line sum of absolute heading changes.
//!
//! Coordinates are assumed to live in a projected (planar) CRS; no reprojection
//! happens here.
//!
//! API Policy
//! - Prefer the re-exports below or `prelude` over deep module paths.
//! - Breaking changes are fine when they improve clarity.

pub mod error;
pub mod polyline;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{LineError, Result};
pub use nalgebra::Vector2 as Vec2;
pub use polyline::{
    bearing_deg, line_bearing_change, total_bearing_change, turn_deg, wiggly_line,
    wiggly_line_default, BearingChange, FlatCoords, Line, LineCollection, Point, WiggleCfg,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::LineError;
    pub use crate::polyline::{
        total_bearing_change, wiggly_line, BearingChange, Line, LineCollection, Point, WiggleCfg,
    };
    pub use nalgebra::{vector, Vector2 as Vec2};
}
