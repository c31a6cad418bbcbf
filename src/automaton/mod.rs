//! Core automaton logic and grid operations.
//!
//! This module contains the actual logic for reading and writing cells on
//! the torus, stepping the automaton, seeding patterns and rendering text.
//! The methods on [`Automaton`](crate::Automaton) call these functions.

pub mod grid;
pub mod pattern;
pub mod point;
pub mod render;
pub mod rules;
pub mod stepping;

pub use grid::{count_neighbors, get_cell, index_of, set_cell, wrap_point, NEIGHBOR_OFFSETS};
pub use pattern::{place_glider, place_pattern, Pattern, GLIDER};
pub use point::Point;
pub use render::render;
pub use rules::{RuleTable, LIFE};
pub use stepping::{advance, advance_by};
