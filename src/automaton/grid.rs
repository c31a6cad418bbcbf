//! Toroidal indexing and cell access helpers.

use super::point::Point;
use crate::state::Automaton;

/// Offsets of the 8 Moore neighbors (every unit offset except the center).
pub const NEIGHBOR_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

/// Calculate the linear index for a point, wrapping both axes.
///
/// Defined for every `x` and `y`, including negative values; the result is
/// always in `[0, width * height)`. `width` and `height` must be positive.
#[inline]
pub fn index_of(p: Point, width: usize, height: usize) -> usize {
    let x = p.x.rem_euclid(width as i64) as usize;
    let y = p.y.rem_euclid(height as i64) as usize;
    y * width + x
}

/// Reduce a point onto the torus, both coordinates in `[0, dimension)`.
///
/// Adding a small offset to a wrapped point cannot overflow.
#[inline]
pub fn wrap_point(p: Point, width: usize, height: usize) -> Point {
    Point::new(p.x.rem_euclid(width as i64), p.y.rem_euclid(height as i64))
}

/// Get the state of the cell at the wrapped position of `p`.
#[inline]
pub fn get_cell(automaton: &Automaton, p: Point) -> bool {
    automaton.cells()[automaton.index(p)]
}

/// Set the state of the cell at the wrapped position of `p`.
#[inline]
pub fn set_cell(automaton: &mut Automaton, p: Point, alive: bool) {
    let idx = automaton.index(p);
    automaton.cells_mut()[idx] = alive;
}

/// Count alive neighbors using the wrapped Moore neighborhood (8 neighbors).
pub fn count_neighbors(automaton: &Automaton, p: Point) -> u8 {
    let center = automaton.wrap(p);
    let mut count = 0;

    for &offset in &NEIGHBOR_OFFSETS {
        if get_cell(automaton, center + offset) {
            count += 1;
        }
    }

    count
}
