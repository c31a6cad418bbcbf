//! Simulation parameters and the driver that runs them.

use log::info;

use crate::automaton::{advance_by, place_pattern, Pattern, Point, RuleTable, LIFE};
use crate::error::AutomatonError;
use crate::state::Automaton;

/// Everything needed to reproduce a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub width: i32,
    pub height: i32,
    pub rules: RuleTable,
    pub pattern: Pattern,
    pub anchor: Point,
    pub iterations: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            rules: LIFE,
            pattern: Pattern::Glider,
            anchor: (0, 18).into(),
            iterations: 10_000,
        }
    }
}

impl SimulationConfig {
    /// Construct the automaton and seed the initial pattern.
    pub fn build(&self) -> Result<Automaton, AutomatonError> {
        let mut automaton = Automaton::new(self.width, self.height, self.rules)?;
        place_pattern(&mut automaton, self.anchor, self.pattern.offsets());
        Ok(automaton)
    }

    /// Build the seeded automaton and advance it `iterations` generations.
    pub fn run(&self) -> Result<Automaton, AutomatonError> {
        let automaton = self.build()?;
        info!(
            "running {}x{} {} with {} at ({}, {}) for {} generations",
            self.width,
            self.height,
            self.rules,
            self.pattern,
            self.anchor.x,
            self.anchor.y,
            self.iterations
        );

        let automaton = advance_by(automaton, self.iterations);
        info!(
            "finished at generation {} with population {}",
            automaton.generation(),
            automaton.population()
        );
        Ok(automaton)
    }
}
