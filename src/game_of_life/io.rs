//! File I/O operations for Game of Life grids

use super::{Cell, Grid};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    let grid = parse_grid_from_string(&content);
    log::info!(
        "Loaded {} rows ({} cells, {} alive) from {}",
        grid.row_count(),
        grid.cell_count(),
        grid.living_count(),
        path.as_ref().display()
    );
    if !grid.is_rectangular() {
        log::warn!(
            "Grid in {} has rows of differing lengths",
            path.as_ref().display()
        );
    }

    Ok(grid)
}

/// Parse a grid from a string representation
///
/// Characters other than '0' and '1' are skipped, so a line without any of
/// them becomes an empty row rather than an error. Lines may end in `\n`,
/// `\r\n` or a bare `\r`.
pub fn parse_grid_from_string(content: &str) -> Grid {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let rows = normalized
        .lines()
        .map(|line| line.chars().filter_map(Cell::from_char).collect())
        .collect();
    Grid::new(rows)
}
