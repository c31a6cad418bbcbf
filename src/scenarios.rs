//! End-to-end simulation scenarios.

use crate::automaton::{advance, advance_by, place_glider, Point, RuleTable, LIFE};
use crate::{Automaton, AutomatonError, SimulationConfig};

fn expected_grid(width: usize, height: usize, live: &[(usize, usize)]) -> String {
    let mut rows = vec![vec!['.'; width]; height];
    for &(x, y) in live {
        rows[y][x] = 'X';
    }
    let mut out = String::new();
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[test]
fn test_default_run_end_to_end() {
    let automaton = SimulationConfig::default().run().unwrap();
    assert_eq!(automaton.generation(), 10_000);

    // 2500 glider periods move it by (2500, 2500), which is (20, 0) on a
    // 40x20 torus: the anchor ends up at (20, 18).
    let expected = expected_grid(40, 20, &[(20, 18), (21, 19), (22, 19), (20, 0), (21, 0)]);
    let text = automaton.render();
    assert_eq!(text, expected);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|line| line.len() == 40));
    assert!(text.chars().all(|c| c == 'X' || c == '.' || c == '\n'));
}

#[test]
fn test_run_is_reproducible() {
    let config = SimulationConfig {
        iterations: 997,
        ..SimulationConfig::default()
    };
    let first = config.run().unwrap();
    let second = config.run().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
}

#[test]
fn test_manual_loop_matches_config_run() {
    let born = [false, false, false, true, false, false, false, false, false];
    let survives = [false, false, true, true, false, false, false, false, false];
    let rules = RuleTable::from_slices(&born, &survives).unwrap();

    let mut automaton = Automaton::new(40, 20, rules).unwrap();
    place_glider(&mut automaton, Point::new(0, 18));
    for _ in 0..100 {
        automaton = advance(&automaton);
    }

    let config = SimulationConfig {
        iterations: 100,
        ..SimulationConfig::default()
    };
    assert_eq!(automaton, config.run().unwrap());
}

#[test]
fn test_glider_shape_preserved_each_period() {
    let mut automaton = Automaton::new(40, 20, LIFE).unwrap();
    place_glider(&mut automaton, Point::new(0, 18));

    for period in 1..=30i64 {
        automaton = advance_by(automaton, 4);

        let mut expected = Automaton::new(40, 20, LIFE).unwrap();
        place_glider(&mut expected, Point::new(period, 18 + period));
        assert_eq!(automaton.cells(), expected.cells(), "period {}", period);
    }
}

#[test]
fn test_previous_generation_survives_advance() {
    let start = SimulationConfig::default().build().unwrap();
    let snapshot = start.clone();

    let mut current = start.advance();
    for _ in 0..10 {
        current = current.advance();
    }

    assert_eq!(start, snapshot);
    assert_eq!(current.generation(), 11);
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        Automaton::new(40, 0, LIFE).unwrap_err().to_string(),
        "grid dimensions must be positive, got 40x0"
    );
    assert_eq!(
        RuleTable::from_slices(&[true; 3], &[false; 9])
            .unwrap_err()
            .to_string(),
        "born table must have 9 entries, got 3"
    );
    assert!(matches!(
        RuleTable::from_slices(&[false; 9], &[false; 12]),
        Err(AutomatonError::RuleTableLength {
            table: "survives",
            len: 12
        })
    ));
}
