//! Immutable polygon collection and its text formats.
//!
//! The store is filled once (from a file or a generator) and only lent out as
//! `&[Polygon]` afterwards; sessions borrow it immutably for their lifetime.

mod text;

pub use text::{
    load_polygons, parse_polygon, parse_polygon_exact, write_polygons, LiteralError, Loaded,
};
pub(crate) use text::read_line_bytes;

use std::io::{self, BufRead};

use crate::geom::{Polygon, Rect};

/// Ordered, read-only polygon collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolygonStore {
    polygons: Vec<Polygon>,
}

impl PolygonStore {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Load from a line-oriented reader; returns the store and the skipped line numbers.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<(Self, Vec<usize>)> {
        let Loaded { polygons, skipped } = load_polygons(reader)?;
        Ok((Self::new(polygons), skipped))
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Union frame of every stored polygon; `None` when empty.
    pub fn frame(&self) -> Option<Rect> {
        Rect::union_of(&self.polygons)
    }
}

impl<'a> IntoIterator for &'a PolygonStore {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
