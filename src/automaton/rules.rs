//! Birth/survival rule tables indexed by live-neighbor count.

use std::fmt;

use crate::error::AutomatonError;

/// Number of entries in each rule table: one per neighbor count 0..=8.
pub const RULE_TABLE_LEN: usize = 9;

/// A 2-state totalistic rule on the 8-cell Moore neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    born: [bool; RULE_TABLE_LEN],
    survives: [bool; RULE_TABLE_LEN],
}

/// Conway's Game of Life, B3/S23.
pub const LIFE: RuleTable = RuleTable::new(
    [false, false, false, true, false, false, false, false, false],
    [false, false, true, true, false, false, false, false, false],
);

impl Default for RuleTable {
    fn default() -> Self {
        LIFE
    }
}

impl RuleTable {
    /// Rule table from birth and survival arrays indexed by neighbor count.
    pub const fn new(born: [bool; RULE_TABLE_LEN], survives: [bool; RULE_TABLE_LEN]) -> Self {
        RuleTable { born, survives }
    }

    /// Build a rule table from runtime slices.
    ///
    /// Fails if either slice does not have exactly 9 entries; slices are
    /// never truncated or padded.
    pub fn from_slices(born: &[bool], survives: &[bool]) -> Result<Self, AutomatonError> {
        let born: [bool; RULE_TABLE_LEN] =
            born.try_into().map_err(|_| AutomatonError::RuleTableLength {
                table: "born",
                len: born.len(),
            })?;
        let survives: [bool; RULE_TABLE_LEN] =
            survives.try_into().map_err(|_| AutomatonError::RuleTableLength {
                table: "survives",
                len: survives.len(),
            })?;
        Ok(RuleTable::new(born, survives))
    }

    /// `born[n]`: a dead cell with `n` live neighbors comes alive.
    pub fn born(&self) -> &[bool; RULE_TABLE_LEN] {
        &self.born
    }

    /// `survives[n]`: a live cell with `n` live neighbors stays alive.
    pub fn survives(&self) -> &[bool; RULE_TABLE_LEN] {
        &self.survives
    }

    /// Next state of a cell given its current state and live-neighbor count.
    ///
    /// `neighbors` is at most 8 on the Moore neighborhood.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let table = if alive { &self.survives } else { &self.born };
        table[usize::from(neighbors)]
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in 0..RULE_TABLE_LEN {
            if self.born[n] {
                write!(f, "{}", n)?;
            }
        }
        write!(f, "/S")?;
        for n in 0..RULE_TABLE_LEN {
            if self.survives[n] {
                write!(f, "{}", n)?;
            }
        }
        Ok(())
    }
}
