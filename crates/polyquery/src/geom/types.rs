//! Basic integer 2D types.
//!
//! - `Point`: integer lattice vector (nalgebra `Vector2<i32>`).
//! - `Polygon`: ordered vertex loop with at least three points.
//! - `Rect`: axis-aligned frame `(min, max)`, inclusive on both axes.
//!
//! Code cross-refs: `kernel::{area_of, are_permutations}`, `select::*`

use std::fmt;

use nalgebra::Vector2;

use crate::parallelogram_area;

/// Integer point; equality is structural.
///
/// Coordinates are `i32`, so each shoelace term fits in 65 bits and the `i128`
/// accumulators below cannot overflow for any in-memory polygon.
pub type Point = Vector2<i32>;

/// Smallest vertex count accepted by `Polygon::new`.
pub const MIN_VERTICES: usize = 3;

/// Ordered vertex loop.
///
/// Invariants:
/// - At least `MIN_VERTICES` points (enforced by `new`).
/// - Immutable after construction; every derived quantity is recomputed on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Returns `None` for fewer than three points.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.len() < MIN_VERTICES {
            return None;
        }
        Some(Self { points })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_coords(coords: &[(i32, i32)]) -> Option<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Directed edges `(p_i, p_{(i+1) mod n})` in vertex order, closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace sum `Σ x_i y_{i+1} − y_i x_{i+1}`; positive for CCW loops.
    pub fn twice_signed_area(&self) -> i128 {
        self.edges().map(|(a, b)| parallelogram_area(a, b)).sum()
    }

    /// `|twice_signed_area|`, the exact key used for area comparisons.
    #[inline]
    pub fn twice_area(&self) -> i128 {
        self.twice_signed_area().abs()
    }
}

/// Literal form `N x1 y1 ... xN yN`, as read by `store::parse_polygon`.
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points.len())?;
        for p in &self.points {
            write!(f, " {} {}", p.x, p.y)?;
        }
        Ok(())
    }
}

/// Axis-aligned rectangle `min ≤ p ≤ max` (componentwise, closed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Frame of a point set. Min/max are taken per axis, so `min` and `max`
    /// need not be input points. `None` for an empty set.
    pub fn bounding<I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Rect::new(first, first), Rect::grow))
    }

    /// Frame of a single polygon.
    #[inline]
    pub fn of_polygon(poly: &Polygon) -> Rect {
        // `Polygon::new` guarantees a first vertex.
        let (first, rest) = (poly.points[0], &poly.points[1..]);
        rest.iter().fold(Rect::new(first, first), |r, p| r.grow(*p))
    }

    /// Smallest rect containing `self` and `p`.
    #[inline]
    fn grow(self, p: Point) -> Rect {
        Rect::new(
            Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        )
    }

    /// Union frame: per-polygon frames, their corners gathered, then re-bounded.
    /// `None` for an empty collection.
    pub fn union_of<'a, I>(polys: I) -> Option<Rect>
    where
        I: IntoIterator<Item = &'a Polygon>,
    {
        let frames: Vec<Rect> = polys.into_iter().map(Rect::of_polygon).collect();
        let corners = frames
            .iter()
            .map(|r| r.min)
            .chain(frames.iter().map(|r| r.max));
        Rect::bounding(corners)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// True iff every vertex lies in the closed rectangle.
    pub fn contains_polygon(&self, poly: &Polygon) -> bool {
        poly.points().iter().all(|&p| self.contains(p))
    }
}
