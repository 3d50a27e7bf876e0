//! Conway's Game of Life in the terminal
//!
//! This library loads a grid from a text file and evolves it generation by
//! generation, rendering each one as a block of text.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Cell, GameOfLifeRules, Grid};
pub use simulation::{CancellationToken, RunOutcome, Simulation};

use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Main entry point: load a grid file and run it until cancelled
pub fn run_simulation<P: AsRef<Path>, W: Write>(
    settings: &Settings,
    grid_file: P,
    out: &mut W,
    token: &CancellationToken,
) -> Result<RunOutcome> {
    let grid = game_of_life::load_grid_from_file(grid_file)?;
    let renderer = utils::GridRenderer::new(&settings.display);
    Simulation::new(grid, settings.simulation.clone()).run(&renderer, out, token)
}
