use std::io::{self, Write};

use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use toroidal_life::SimulationConfig;

fn main() -> Result<()> {
    // Logs go to stderr; stdout only carries the rendered grid.
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let automaton = SimulationConfig::default().run()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(automaton.render().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
