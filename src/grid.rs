//! Observed state of the opponent board.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::ship::ShipId;

/// Errors returned by grid accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..BOARD_SIZE).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// What we know about one square of the opponent board.
///
/// Knowledge only moves forward: `Unknown` to `Miss` or `Hit`, and `Hit`
/// to `Sunk(_)` once back-fill resolves which ship the hit belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Unknown,
    Miss,
    /// Confirmed hit on a ship whose identity is not yet resolved.
    Hit,
    /// Part of a ship confirmed sunk.
    Sunk(ShipId),
}

impl Cell {
    pub fn is_unknown(self) -> bool {
        self == Cell::Unknown
    }

    /// True for any square we have already shot at.
    pub fn is_targeted(self) -> bool {
        self != Cell::Unknown
    }
}

/// 10x10 grid of [`Cell`]s tracking our shots at the opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Unknown; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// True iff both indices are on the board.
    pub fn is_valid_coordinate(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GridError::IndexOutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GridError::IndexOutOfBounds { row, col });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Signed-offset lookup for neighbor math; off-board is `None`.
    pub fn at(&self, row: i32, col: i32) -> Option<Cell> {
        if Self::is_valid_coordinate(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    /// Iterate all squares in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).map(move |col| ((row, col), self.cells[row][col]))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match self.cells[row][col] {
                    Cell::Unknown => '.',
                    Cell::Miss => 'o',
                    Cell::Hit => 'X',
                    Cell::Sunk(ship) => ship.initial(),
                };
                write!(f, "{} ", ch)?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_unknown() {
        let grid = Grid::new();
        assert!(grid.iter().all(|(_, cell)| cell.is_unknown()));
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new();
        grid.set(3, 7, Cell::Hit).unwrap();
        assert_eq!(grid.get(3, 7), Ok(Cell::Hit));
        assert_eq!(grid.get(3, 8), Ok(Cell::Unknown));
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut grid = Grid::new();
        assert_eq!(
            grid.get(10, 0),
            Err(GridError::IndexOutOfBounds { row: 10, col: 0 })
        );
        assert!(grid.set(0, 10, Cell::Miss).is_err());
    }

    #[test]
    fn signed_lookup_treats_off_board_as_absent() {
        let grid = Grid::new();
        assert_eq!(grid.at(-1, 0), None);
        assert_eq!(grid.at(0, 10), None);
        assert_eq!(grid.at(0, 0), Some(Cell::Unknown));
    }
}
