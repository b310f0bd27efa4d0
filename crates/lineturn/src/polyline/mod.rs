//! Directed 2D polylines: synthetic generation and turning analysis.
//!
//! Purpose
//! - `wiggle`: deterministic sinusoidal line between two endpoints, useful as
//!   synthetic input for turning statistics.
//! - `bearing`: total absolute bearing change per line of a collection.
//!
//! Model
//! - Points are `nalgebra::Vector2<f64>` in a planar CRS.
//! - A collection is flattened once into a struct-of-arrays buffer (`FlatCoords`)
//!   and all segment/turn work runs over that buffer in linear passes.
//!
//! Code cross-refs: `Line`, `LineCollection`, `FlatCoords`, `BearingChange`, `WiggleCfg`

mod bearing;
mod flat;
mod types;
mod wiggle;

pub use bearing::{bearing_deg, line_bearing_change, total_bearing_change, turn_deg, BearingChange};
pub use flat::FlatCoords;
pub use types::{Line, LineCollection, Point};
pub use wiggle::{wiggly_line, wiggly_line_default, WiggleCfg};
