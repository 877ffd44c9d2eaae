//! JSON summary of a loaded polygon collection.

use std::collections::BTreeMap;

use polyquery::geom::{area_mean, area_sum, VertexFilter};
use polyquery::PolygonStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Frame {
    pub min: [i32; 2],
    pub max: [i32; 2],
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub polygons: usize,
    pub skipped_lines: Vec<usize>,
    pub total_area: f64,
    pub mean_area: Option<f64>,
    /// vertex count -> number of polygons
    pub vertex_histogram: BTreeMap<usize, usize>,
    pub frame: Option<Frame>,
    pub code_rev: String,
}

pub fn summarize(store: &PolygonStore, skipped: &[usize], code_rev: String) -> Summary {
    let polys = store.polygons();
    let mut vertex_histogram = BTreeMap::new();
    for p in polys {
        *vertex_histogram.entry(p.vertex_count()).or_insert(0) += 1;
    }
    Summary {
        polygons: polys.len(),
        skipped_lines: skipped.to_vec(),
        total_area: area_sum(polys, VertexFilter::Any),
        mean_area: area_mean(polys),
        vertex_histogram,
        frame: store.frame().map(|r| Frame {
            min: [r.min.x, r.min.y],
            max: [r.max.x, r.max.y],
        }),
        code_rev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyquery::Polygon;

    #[test]
    fn summary_serializes_counts_and_frame() {
        let store = PolygonStore::new(vec![
            Polygon::from_coords(&[(0, 0), (0, 2), (2, 0)]).unwrap(),
            Polygon::from_coords(&[(0, 0), (0, 2), (2, 2), (2, 0)]).unwrap(),
            Polygon::from_coords(&[(5, 5), (5, 6), (6, 6), (6, 5)]).unwrap(),
        ]);
        let s = summarize(&store, &[4], "abc".to_string());
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["polygons"], 3);
        assert_eq!(v["skipped_lines"][0], 4);
        assert_eq!(v["total_area"], 7.0);
        assert_eq!(v["vertex_histogram"]["4"], 2);
        assert_eq!(v["frame"]["max"][0], 6);
    }

    #[test]
    fn empty_summary_has_no_frame_or_mean() {
        let s = summarize(&PolygonStore::default(), &[], "x".to_string());
        assert!(s.frame.is_none());
        assert!(s.mean_area.is_none());
        assert_eq!(s.total_area, 0.0);
    }
}
