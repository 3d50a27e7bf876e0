//! The render, evolve and wait loop

use super::CancellationToken;
use crate::config::SimulationConfig;
use crate::game_of_life::{GameOfLifeRules, Grid};
use crate::utils::GridRenderer;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The cancellation token fired
    Interrupted { generations: usize },
    /// The configured generation limit was reached
    Completed { generations: usize },
}

impl RunOutcome {
    pub fn generations(&self) -> usize {
        match *self {
            RunOutcome::Interrupted { generations } | RunOutcome::Completed { generations } => {
                generations
            }
        }
    }
}

/// A running Game of Life
pub struct Simulation {
    grid: Grid,
    generation: usize,
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(grid: Grid, config: SimulationConfig) -> Self {
        Self {
            grid,
            generation: 0,
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations computed so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Replace the current grid with its next generation
    pub fn step(&mut self) {
        self.grid = GameOfLifeRules::evolve(&self.grid);
        self.generation += 1;
        log::trace!(
            "Generation {}: {} alive",
            self.generation,
            self.grid.living_count()
        );
    }

    /// Delays too long for a `Duration` wait until cancelled
    fn delay(&self) -> Duration {
        let seconds = self.config.delay_seconds;
        Duration::try_from_secs_f64(seconds).unwrap_or(if seconds > 0.0 {
            Duration::MAX
        } else {
            Duration::ZERO
        })
    }

    /// Render, evolve and wait until cancelled or the generation limit is hit
    ///
    /// The token is checked before every frame, so once it fires no further
    /// output is written.
    pub fn run<W: Write>(
        &mut self,
        renderer: &GridRenderer,
        out: &mut W,
        token: &CancellationToken,
    ) -> Result<RunOutcome> {
        let delay = self.delay();
        let mut shown = 0;

        let outcome = loop {
            if token.is_cancelled() {
                break RunOutcome::Interrupted { generations: shown };
            }
            if self.config.max_generations.is_some_and(|max| shown >= max) {
                break RunOutcome::Completed { generations: shown };
            }

            writeln!(out, "{}", renderer.render(&self.grid))
                .and_then(|_| out.flush())
                .context("Failed to write frame")?;
            shown += 1;

            self.step();
            token.wait_timeout(delay);
        };

        log::info!(
            "Simulation stopped after {} generations: {:?}",
            outcome.generations(),
            outcome
        );
        Ok(outcome)
    }
}
