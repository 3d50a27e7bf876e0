//! Grid representation and utilities for Game of Life

use super::Cell;
use std::fmt;

/// Represents a Game of Life grid
///
/// Rows are stored top-to-bottom and may differ in length. Every lookup is
/// bounds-checked against the length of the row it lands in, so a grid read
/// from a ragged file is still a valid grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid from its rows
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Create an all-dead grid with the same shape as `other`
    pub fn dead_like(other: &Grid) -> Self {
        let rows = other
            .rows
            .iter()
            .map(|row| vec![Cell::Dead; row.len()])
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `x`, or `None` if the row does not exist
    pub fn row_len(&self, x: usize) -> Option<usize> {
        self.rows.get(x).map(Vec::len)
    }

    /// Get cell value at coordinates
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(x).and_then(|row| row.get(y)).copied()
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.rows.get_mut(x).and_then(|row| row.get_mut(y))
    }

    /// Total number of cells across all rows
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// True when every row has the same length
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|row| row.len() == first.len()),
            None => true,
        }
    }

    /// True when both grids have the same row count and per-row lengths
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| a.len() == b.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
