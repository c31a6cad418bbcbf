//! Core automaton structure and helper methods.

use log::debug;

use crate::automaton::{self, Point, RuleTable};
use crate::error::AutomatonError;

/// One generation of a toroidal 2D cellular automaton.
///
/// Dimensions and rule table are fixed at construction. Advancing produces a
/// new `Automaton` and leaves this one untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    width: usize,
    height: usize,
    rules: RuleTable,
    cells: Vec<bool>, // row-major, true = alive
    generation: u64,
}

impl Automaton {
    /// Create an automaton with every cell dead.
    ///
    /// Fails if `width` or `height` is not positive, or if the grid would not
    /// fit in memory addressing.
    pub fn new(width: i32, height: i32, rules: RuleTable) -> Result<Self, AutomatonError> {
        if width <= 0 || height <= 0 {
            return Err(AutomatonError::InvalidDimensions { width, height });
        }

        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(AutomatonError::InvalidDimensions { width, height })?;

        debug!("creating {}x{} automaton with rule {}", width, height, rules);
        Ok(Automaton {
            width: width as usize,
            height: height as usize,
            rules,
            cells: vec![false; size],
            generation: 0,
        })
    }

    /// The successor of `previous`, holding a freshly computed cell buffer.
    pub(crate) fn from_cells(previous: &Automaton, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), previous.cells.len());
        Automaton {
            width: previous.width,
            height: previous.height,
            rules: previous.rules,
            cells,
            generation: previous.generation + 1,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Birth/survival table used by every advance.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major cell buffer, `width * height` entries.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Linear index of a point after wrapping it onto the torus.
    #[inline]
    pub fn index(&self, p: Point) -> usize {
        automaton::index_of(p, self.width, self.height)
    }

    /// Point reduced onto the torus.
    #[inline]
    pub fn wrap(&self, p: Point) -> Point {
        automaton::wrap_point(p, self.width, self.height)
    }

    /// Whether the cell at the wrapped position of `p` is alive.
    #[inline]
    pub fn get(&self, p: Point) -> bool {
        automaton::get_cell(self, p)
    }

    /// Set the cell at the wrapped position of `p` alive or dead.
    #[inline]
    pub fn set(&mut self, p: Point, alive: bool) {
        automaton::set_cell(self, p, alive)
    }

    /// Live cells among the 8 wrapped neighbors of `p`.
    pub fn count_neighbors(&self, p: Point) -> u8 {
        automaton::count_neighbors(self, p)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Compute the next generation.
    pub fn advance(&self) -> Automaton {
        automaton::advance(self)
    }

    /// Seed a glider with its top-left corner at `anchor`.
    pub fn place_glider(&mut self, anchor: Point) {
        automaton::place_glider(self, anchor)
    }

    /// Text rendering, one `X`/`.` line per row.
    pub fn render(&self) -> String {
        automaton::render(self)
    }
}
