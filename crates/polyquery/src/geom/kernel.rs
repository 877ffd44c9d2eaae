use super::types::{Point, Polygon};

/// Unsigned polygon area via the shoelace formula.
///
/// Exact for integer inputs up to `i128` accumulation; orientation-independent
/// and invariant under cyclic rotation of the vertex sequence.
#[inline]
pub fn area_of(poly: &Polygon) -> f64 {
    half(poly.twice_area())
}

#[inline]
pub(crate) fn half(twice: i128) -> f64 {
    twice as f64 / 2.0
}

/// Vertex multisets equal (order and start vertex ignored).
pub fn are_permutations(a: &Polygon, b: &Polygon) -> bool {
    if a.vertex_count() != b.vertex_count() {
        return false;
    }
    sorted_vertices(a) == sorted_vertices(b)
}

fn sorted_vertices(poly: &Polygon) -> Vec<Point> {
    let mut pts = poly.points().to_vec();
    pts.sort_unstable_by_key(|p| (p.x, p.y));
    pts
}
