//! Toroidal Life - 2D Cellular Automata Library
//!
//! A birth/survival cellular automaton on a wrapping grid. Each generation is
//! an independent [`Automaton`] value; advancing borrows the current
//! generation and returns the next one.
//!
//! ```
//! use toroidal_life::{Automaton, Point, LIFE};
//!
//! let mut automaton = Automaton::new(8, 8, LIFE).unwrap();
//! automaton.place_glider(Point::new(0, 0));
//! let next = automaton.advance();
//! assert_eq!(next.population(), 5);
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod state;

pub use automaton::{Pattern, Point, RuleTable, LIFE};
pub use config::SimulationConfig;
pub use error::AutomatonError;
pub use state::Automaton;

#[cfg(test)]
mod scenarios;
