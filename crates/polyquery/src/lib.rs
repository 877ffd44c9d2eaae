//! Polygon collection queries over integer 2D polygons.
//!
//! Layout
//! - `geom`: points, polygons, rectangles and the pure kernel (area, frames,
//!   vertex predicates, extremum selection, permutation checks).
//! - `store`: immutable polygon collection plus the text loader/literal parser.
//! - `query`: command parsing, execution and the line-oriented session loop.
//! - `rand`: reproducible random integer polygons for fixtures and benches.
//!
//! API Policy
//! - This crate backs the `polyquery` binary. There is no stable public API.

pub mod geom;
pub mod query;
pub mod rand;
pub mod store;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Point, Polygon, Rect};
pub use query::{Command, QueryError, Response, Session, SessionCfg};
pub use store::PolygonStore;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        are_permutations, area_mean, area_of, area_sum, count_matching, count_permutations,
        count_smaller_area, extremum_by_area, extremum_by_vertices, Direction, Point, Polygon,
        Rect, VertexFilter,
    };
    pub use crate::query::{Command, QueryError, Response, Session, SessionCfg};
    pub use crate::rand::{draw_collection, draw_polygon, RadialCfg, ReplayToken, VertexCount};
    pub use crate::store::{load_polygons, parse_polygon, Loaded, PolygonStore};
}

/// Signed area of the parallelogram spanned by integer vectors `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point, b: Point) -> i128 {
    a.x as i128 * b.y as i128 - a.y as i128 * b.x as i128
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn area_axis_aligned() {
        assert_eq!(parallelogram_area(Point::new(1, 0), Point::new(0, 3)), 3);
        assert_eq!(parallelogram_area(Point::new(0, 3), Point::new(1, 0)), -3);
    }

    #[test]
    fn area_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut coord = || rng.gen_range(-1_000_000i32..1_000_000);
            let a = Point::new(coord(), coord());
            let b = Point::new(coord(), coord());
            assert_eq!(parallelogram_area(a, b), -parallelogram_area(b, a));
            assert_eq!(parallelogram_area(a, a), 0);
        }
    }
}
