//! Generation advance for totalistic birth/survival rules.

use log::trace;

use super::grid::count_neighbors;
use super::point::Point;
use crate::state::Automaton;

/// Compute the next generation of `automaton`.
///
/// Every cell is evaluated against the borrowed generation-N snapshot and
/// written into a separate generation-N+1 buffer, so evaluation order cannot
/// leak into the result:
/// - A live cell stays alive if `survives[n]` for its `n` live neighbors
/// - A dead cell becomes alive if `born[n]`
pub fn advance(automaton: &Automaton) -> Automaton {
    let width = automaton.width();
    let height = automaton.height();
    let rules = automaton.rules();

    let mut next_cells = vec![false; automaton.cells().len()];

    for y in 0..height {
        for x in 0..width {
            let p = Point::new(x as i64, y as i64);
            let neighbors = count_neighbors(automaton, p);
            let idx = automaton.index(p);

            next_cells[idx] = rules.next_state(automaton.cells()[idx], neighbors);
        }
    }

    let next = Automaton::from_cells(automaton, next_cells);
    trace!(
        "advanced to generation {} (population {})",
        next.generation(),
        next.population()
    );
    next
}

/// Advance `automaton` by `generations` steps, dropping each intermediate
/// generation as soon as its successor exists.
pub fn advance_by(automaton: Automaton, generations: u64) -> Automaton {
    let mut current = automaton;
    for _ in 0..generations {
        current = advance(&current);
    }
    current
}
