//! Integer 2D geometry kernel.
//!
//! Purpose
//! - Pure, side-effect-free computations over integer polygons: shoelace area,
//!   vertex-count predicates, extremum selection, axis-aligned frames and
//!   vertex-multiset comparison.
//! - Exact arithmetic: areas are carried as `i128` twice-areas and only halved
//!   into `f64` at the edge, so comparisons never suffer rounding.
//!
//! Code cross-refs: `Polygon`, `Rect`, `VertexFilter`, `Direction`

mod kernel;
mod select;
mod types;

pub use kernel::{are_permutations, area_of};
pub use select::{
    area_mean, area_sum, count_matching, count_permutations, count_smaller_area, extremum_by,
    extremum_by_area, extremum_by_vertices, Direction, VertexFilter,
};
pub use types::{Point, Polygon, Rect, MIN_VERTICES};
