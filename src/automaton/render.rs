//! Text rendering of a generation.

use std::fmt;

use super::point::Point;
use crate::state::Automaton;

pub const ALIVE_CHAR: char = 'X';
pub const DEAD_CHAR: char = '.';

/// Render the grid as `height` lines of `width` characters.
///
/// # Layout
/// Rows are written top to bottom (y outer, x inner), `X` for a live cell and
/// `.` for a dead one. Every row, the last included, ends with `\n`.
pub fn render(automaton: &Automaton) -> String {
    automaton.to_string()
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let alive = self.get(Point::new(x as i64, y as i64));
                write!(f, "{}", if alive { ALIVE_CHAR } else { DEAD_CHAR })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{place_glider, LIFE};

    #[test]
    fn test_render_empty() {
        let automaton = Automaton::new(3, 2, LIFE).unwrap();
        assert_eq!(render(&automaton), "...\n...\n");
    }

    #[test]
    fn test_render_glider() {
        let mut automaton = Automaton::new(5, 4, LIFE).unwrap();
        place_glider(&mut automaton, Point::new(1, 0));

        let expected = "\
.X...
..XX.
.XX..
.....
";
        assert_eq!(render(&automaton), expected);
    }

    #[test]
    fn test_render_matches_cells() {
        let mut automaton = Automaton::new(7, 5, LIFE).unwrap();
        automaton.set(Point::new(0, 0), true);
        automaton.set(Point::new(6, 4), true);
        automaton.set(Point::new(3, 2), true);

        let text = render(&automaton);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(text.ends_with('\n'));

        for (y, line) in lines.iter().enumerate() {
            assert_eq!(line.chars().count(), 7);
            for (x, ch) in line.chars().enumerate() {
                assert!(ch == ALIVE_CHAR || ch == DEAD_CHAR);
                let alive = automaton.get(Point::new(x as i64, y as i64));
                assert_eq!(ch == ALIVE_CHAR, alive, "mismatch at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_display_equals_render() {
        let mut automaton = Automaton::new(4, 4, LIFE).unwrap();
        automaton.set(Point::new(2, 1), true);
        assert_eq!(format!("{}", automaton), render(&automaton));
    }
}
