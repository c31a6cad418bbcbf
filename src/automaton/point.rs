//! Cell coordinates.

use std::ops::Add;

/// A cell position on the grid.
///
/// Points are unbounded; they are wrapped onto the torus when used to index
/// the grid, so a point may sit outside `[0, width) x [0, height)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Point at `(x, y)`.
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}
