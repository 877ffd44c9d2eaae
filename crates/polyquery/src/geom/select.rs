//! Aggregation and selection over polygon slices.
//!
//! - `VertexFilter`: vertex-count predicates (even, odd, exactly n, any).
//! - `Direction` + a key extractor replace per-criterion comparator types:
//!   one `extremum_by` serves both area and vertex-count queries.
//!
//! Ties: the first polygon reaching the extremum in slice order is returned.

use super::kernel::{are_permutations, half};
use super::types::{Polygon, MIN_VERTICES};

/// Vertex-count predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexFilter {
    Even,
    Odd,
    Exactly(usize),
    Any,
}

impl VertexFilter {
    /// `Exactly(n)` for `n >= 3`; smaller counts can never match a polygon.
    pub fn exactly(n: usize) -> Option<Self> {
        (n >= MIN_VERTICES).then_some(Self::Exactly(n))
    }

    #[inline]
    pub fn matches(&self, poly: &Polygon) -> bool {
        let n = poly.vertex_count();
        match *self {
            VertexFilter::Even => n % 2 == 0,
            VertexFilter::Odd => n % 2 == 1,
            VertexFilter::Exactly(k) => n == k,
            VertexFilter::Any => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Min,
    Max,
}

/// Sum of areas of the polygons matching `filter`; `0.0` when none match.
pub fn area_sum(polys: &[Polygon], filter: VertexFilter) -> f64 {
    let twice: i128 = polys
        .iter()
        .filter(|p| filter.matches(p))
        .map(Polygon::twice_area)
        .sum();
    half(twice)
}

/// Mean area; `None` for an empty collection.
pub fn area_mean(polys: &[Polygon]) -> Option<f64> {
    if polys.is_empty() {
        return None;
    }
    Some(area_sum(polys, VertexFilter::Any) / polys.len() as f64)
}

pub fn count_matching(polys: &[Polygon], filter: VertexFilter) -> usize {
    polys.iter().filter(|p| filter.matches(p)).count()
}

/// Polygons whose area is strictly below the reference area.
pub fn count_smaller_area(polys: &[Polygon], reference: &Polygon) -> usize {
    let bound = reference.twice_area();
    polys.iter().filter(|p| p.twice_area() < bound).count()
}

/// Polygons with the same vertex multiset as `reference`.
pub fn count_permutations(polys: &[Polygon], reference: &Polygon) -> usize {
    polys
        .iter()
        .filter(|p| are_permutations(p, reference))
        .count()
}

/// First polygon minimizing/maximizing `key`; `None` for an empty slice.
pub fn extremum_by<K, F>(polys: &[Polygon], dir: Direction, key: F) -> Option<&Polygon>
where
    K: Ord,
    F: Fn(&Polygon) -> K,
{
    let mut it = polys.iter();
    let first = it.next()?;
    let mut best = (first, key(first));
    for p in it {
        let k = key(p);
        let better = match dir {
            Direction::Min => k < best.1,
            Direction::Max => k > best.1,
        };
        if better {
            best = (p, k);
        }
    }
    Some(best.0)
}

pub fn extremum_by_area(polys: &[Polygon], dir: Direction) -> Option<&Polygon> {
    extremum_by(polys, dir, Polygon::twice_area)
}

/// Extremal vertex count.
pub fn extremum_by_vertices(polys: &[Polygon], dir: Direction) -> Option<usize> {
    extremum_by(polys, dir, Polygon::vertex_count).map(Polygon::vertex_count)
}
