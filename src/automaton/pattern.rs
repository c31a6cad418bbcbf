//! Seeding known patterns onto the grid.

use std::fmt;

use log::debug;

use super::grid::set_cell;
use super::point::Point;
use crate::state::Automaton;

/// The 5-cell glider in its initial orientation, relative to its anchor.
/// Travels by (1, 1) every 4 generations under B3/S23.
pub const GLIDER: [Point; 5] = [
    Point::new(0, 0),
    Point::new(1, 1),
    Point::new(2, 1),
    Point::new(0, 2),
    Point::new(1, 2),
];

/// A pattern that can be seeded at an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Glider,
}

impl Pattern {
    /// Live cells of the pattern relative to its anchor.
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Pattern::Glider => &GLIDER,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Glider => write!(f, "glider"),
        }
    }
}

/// Set alive every cell at `anchor + offset`, wrapping around the grid.
///
/// Cells not covered by `offsets` are left as they are. Anchor and offsets
/// are wrapped before they are added, so any coordinates are accepted.
pub fn place_pattern(automaton: &mut Automaton, anchor: Point, offsets: &[Point]) {
    let anchor = automaton.wrap(anchor);
    for &offset in offsets {
        let p = anchor + automaton.wrap(offset);
        set_cell(automaton, p, true);
    }
}

/// Seed a glider with its top-left corner at `anchor`.
pub fn place_glider(automaton: &mut Automaton, anchor: Point) {
    debug!("placing glider at ({}, {})", anchor.x, anchor.y);
    place_pattern(automaton, anchor, Pattern::Glider.offsets());
}
