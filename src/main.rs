//! Command line front end for the terminal Game of Life

use anyhow::{Context, Result};
use clap::Parser;
use game_of_life::{
    config::{CliOverrides, DisplayConfig, Settings},
    run_simulation,
    simulation::{CancellationToken, RunOutcome},
    utils::ColorOutput,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// File holding the initial world, one row per line of '0' and '1'
    #[arg(short = 'f', long, required_unless_present = "print_config")]
    input_file: Option<PathBuf>,

    /// Height of the terminal the application runs in
    #[arg(short = 't', long, visible_alias = "term")]
    terminal_height: Option<usize>,

    /// Seconds between the display of two generations
    #[arg(short = 's', long = "time", value_name = "SECONDS")]
    time: Option<f64>,

    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many generations
    #[arg(short, long)]
    generations: Option<usize>,

    /// Print cells without terminal colors
    #[arg(long)]
    no_color: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            terminal_height: self.terminal_height,
            delay_seconds: self.time,
            max_generations: self.generations,
            no_color: self.no_color,
        }
    }

    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Settings::default(),
        };

        settings.merge_with_cli(&self.overrides());
        settings
            .validate()
            .context("Configuration validation failed")?;

        Ok(settings)
    }
}

const FAREWELL: &str = "Thank you for playing.";

/// Farewell line, colored only when the grid is colored
fn farewell(display: &DisplayConfig) -> String {
    if display.color {
        ColorOutput::success(FAREWELL)
    } else {
        FAREWELL.to_string()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    log::debug!("Effective settings: {:?}", settings);

    if cli.print_config {
        print!("{}", settings.to_yaml_string()?);
        return Ok(());
    }

    let input_file = cli.input_file.context("An input file is required")?;

    let token = CancellationToken::new();
    let handler_token = token.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("Failed to install interrupt handler")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run_simulation(&settings, &input_file, &mut out, &token)?;
    match outcome {
        RunOutcome::Interrupted { .. } => println!("{}", farewell(&settings.display)),
        RunOutcome::Completed { .. } => {
            log::info!("Reached the limit of {} generations", outcome.generations())
        }
    }

    Ok(())
}
