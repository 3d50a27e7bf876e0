//! Cell state for Game of Life grids

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Parse a cell from the grid file format ('0' dead, '1' alive)
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Cell::Dead),
            '1' => Some(Cell::Alive),
            _ => None,
        }
    }

    /// Character used for this cell in the grid file format
    pub fn to_char(self) -> char {
        match self {
            Cell::Dead => '0',
            Cell::Alive => '1',
        }
    }
}
