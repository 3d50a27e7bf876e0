//! Game of Life rules implementation

use super::{Cell, Grid};
use itertools::iproduct;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next state of the cell at `(x, y)`
    ///
    /// `(x, y)` must address an existing cell of `grid`.
    pub fn next_state(grid: &Grid, x: usize, y: usize) -> Cell {
        debug_assert!(
            grid.get(x, y).is_some(),
            "coordinates ({x}, {y}) are outside the grid"
        );
        let current = grid.get(x, y).unwrap_or(Cell::Dead);
        Self::apply_rule(current, Self::count_neighbors(grid, x, y))
    }

    /// Count living neighbors for a cell
    ///
    /// Neighbors outside the grid are skipped. A neighbor's column is checked
    /// against the length of its own row, so ragged grids never read past the
    /// end of a shorter row.
    pub fn count_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter_map(|(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                grid.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Next state of a cell given its current state and neighbor count
    pub fn apply_rule(current: Cell, neighbor_count: u8) -> Cell {
        match (current, neighbor_count) {
            (Cell::Alive, 2) | (Cell::Alive, 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Apply Game of Life rules to evolve the grid one generation forward
    ///
    /// Every cell is computed from `current`, never from the partially built
    /// next generation.
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = Grid::dead_like(current);

        for (x, row) in current.rows().iter().enumerate() {
            for y in 0..row.len() {
                if let Some(cell) = next.cell_mut(x, y) {
                    *cell = Self::next_state(current, x, y);
                }
            }
        }

        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|row| row.chars().filter_map(Cell::from_char).collect())
                .collect(),
        )
    }

    #[test]
    fn test_rule_logic() {
        assert_eq!(GameOfLifeRules::apply_rule(Cell::Alive, 2), Cell::Alive);
        assert_eq!(GameOfLifeRules::apply_rule(Cell::Alive, 3), Cell::Alive);
        assert_eq!(GameOfLifeRules::apply_rule(Cell::Dead, 3), Cell::Alive);
        assert_eq!(GameOfLifeRules::apply_rule(Cell::Alive, 1), Cell::Dead);
        assert_eq!(GameOfLifeRules::apply_rule(Cell::Alive, 4), Cell::Dead);
        assert_eq!(GameOfLifeRules::apply_rule(Cell::Dead, 2), Cell::Dead);
        assert_eq!(GameOfLifeRules::apply_rule(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn test_still_life_block() {
        let block = grid(&["0000", "0110", "0110", "0000"]);

        // Each live cell has exactly 3 live neighbors
        for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(GameOfLifeRules::count_neighbors(&block, x, y), 3);
        }
        // Dead corners touch one live cell, dead edges touch two
        for (x, y) in [(0, 0), (0, 3), (3, 0), (3, 3)] {
            assert_eq!(GameOfLifeRules::count_neighbors(&block, x, y), 1);
        }
        for (x, y) in [(0, 1), (0, 2), (1, 0), (2, 0), (1, 3), (2, 3), (3, 1), (3, 2)] {
            assert_eq!(GameOfLifeRules::count_neighbors(&block, x, y), 2);
        }

        assert_eq!(GameOfLifeRules::evolve(&block), block);
    }

    #[test]
    fn test_underpopulation() {
        let lonely = grid(&["000", "010", "000"]);
        assert_eq!(GameOfLifeRules::count_neighbors(&lonely, 1, 1), 0);

        let evolved = GameOfLifeRules::evolve(&lonely);
        assert_eq!(evolved.get(1, 1), Some(Cell::Dead));
        assert_eq!(evolved.living_count(), 0);
    }

    #[test]
    fn test_overpopulation() {
        let plus = grid(&["00000", "00100", "01110", "00100", "00000"]);
        assert_eq!(GameOfLifeRules::count_neighbors(&plus, 2, 2), 4);

        let evolved = GameOfLifeRules::evolve(&plus);
        assert_eq!(evolved.get(2, 2), Some(Cell::Dead));
    }

    #[test]
    fn test_birth() {
        let corners = grid(&["0000", "0110", "0100", "0000"]);
        assert_eq!(GameOfLifeRules::count_neighbors(&corners, 2, 2), 3);

        let evolved = GameOfLifeRules::evolve(&corners);
        assert_eq!(evolved.get(2, 2), Some(Cell::Alive));
        assert_eq!(evolved, grid(&["0000", "0110", "0110", "0000"]));
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = grid(&["00000", "00000", "01110", "00000", "00000"]);
        let vertical = grid(&["00000", "00100", "00100", "00100", "00000"]);

        let evolved = GameOfLifeRules::evolve(&horizontal);
        assert_eq!(evolved, vertical);

        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(evolved_twice, horizontal);
        assert_eq!(GameOfLifeRules::evolve_generations(horizontal.clone(), 2), horizontal);
    }

    #[test]
    fn test_irregular_row_bounds() {
        let ragged = grid(&["11", "11111"]);

        // Row 0 has no columns 2..=4, so those neighbors are skipped
        assert_eq!(GameOfLifeRules::count_neighbors(&ragged, 1, 3), 2);
        assert_eq!(GameOfLifeRules::count_neighbors(&ragged, 1, 4), 1);
        assert_eq!(GameOfLifeRules::count_neighbors(&ragged, 1, 2), 3);
        assert_eq!(GameOfLifeRules::count_neighbors(&ragged, 1, 1), 4);

        assert_eq!(GameOfLifeRules::next_state(&ragged, 1, 3), Cell::Alive);
        assert_eq!(GameOfLifeRules::next_state(&ragged, 1, 4), Cell::Dead);
        assert_eq!(GameOfLifeRules::next_state(&ragged, 1, 1), Cell::Dead);

        let evolved = GameOfLifeRules::evolve(&ragged);
        assert!(evolved.same_shape(&ragged));
        assert_eq!(evolved, grid(&["10", "10110"]));
    }

    #[test]
    fn test_shape_preservation() {
        let shapes = [
            grid(&["1", "", "101", "11111", ""]),
            grid(&["", "", ""]),
            grid(&["0110", "1001", "0110"]),
        ];

        for shape in &shapes {
            let evolved = GameOfLifeRules::evolve(shape);
            assert_eq!(evolved.row_count(), shape.row_count());
            for x in 0..shape.row_count() {
                assert_eq!(evolved.row_len(x), shape.row_len(x));
            }
        }
    }

    #[test]
    fn test_determinism() {
        let glider = grid(&["00100", "10100", "01100", "00000", "00000"]);
        let first = GameOfLifeRules::evolve(&glider);
        let second = GameOfLifeRules::evolve(&glider);
        assert_eq!(first, second);
        // Input is left untouched
        assert_eq!(glider, grid(&["00100", "10100", "01100", "00000", "00000"]));
    }

    #[test]
    fn test_empty_grid() {
        let empty = Grid::default();
        assert_eq!(GameOfLifeRules::evolve(&empty), Grid::default());
        assert!(GameOfLifeRules::evolve(&empty).is_empty());
    }

    #[test]
    fn test_glider_moves() {
        let glider = grid(&["01000", "00100", "11100", "00000", "00000", "00000"]);
        let moved = GameOfLifeRules::evolve_generations(glider, 4);
        assert_eq!(
            moved,
            grid(&["00000", "00100", "00010", "01110", "00000", "00000"])
        );
    }
}
