//! Full-path assembly: the ordered point sequence for a whole curve.

use std::ops::Deref;

use crate::{
    curve::{self, HilbertCurve},
    error::Result,
    point::GridPoint,
};

/// The complete traversal of a Hilbert curve, one point per index.
///
/// A path is generated in one pass and never mutated afterwards; renderers
/// consume it read-only. Dereferences to a point slice for indexing and
/// iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvePath {
    /// Order of the generating curve.
    order: u32,
    /// Grid side length (`2^order`).
    side: u32,
    /// Points in traversal order, `4^order` of them.
    points: Vec<GridPoint>,
}

impl CurvePath {
    /// Generate the full path for a curve of the given order.
    ///
    /// Visits indices `0..4^order` in increasing order, so consecutive
    /// entries are grid-adjacent.
    pub fn generate(order: u32) -> Result<Self> {
        let hilbert = HilbertCurve::new(order)?;
        let points = (0..hilbert.length())
            .map(|index| curve::curve_point(order, index))
            .collect();
        Ok(Self {
            order,
            side: hilbert.side(),
            points,
        })
    }

    /// Order of the curve that produced this path.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Side length of the grid the path fills.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Iterate over consecutive point pairs, one per drawn segment.
    pub fn segments(&self) -> impl Iterator<Item = (GridPoint, GridPoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl Deref for CurvePath {
    type Target = [GridPoint];
    fn deref(&self) -> &Self::Target {
        &self.points
    }
}
