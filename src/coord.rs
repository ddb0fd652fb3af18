//! Textual coordinate encoding used at the engine boundary.
//!
//! Rows are the letters A-J, columns the numbers 1-10. Everything inside
//! the crate works with 0-based `(row, col)` pairs; text only appears
//! where the engine calls in or out.

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;

/// A 0-based board coordinate, always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Result<Self, String> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(format!("Coordinate ({}, {}) out of bounds", row, col));
        }
        Ok(Coord { row, col })
    }

    pub const fn pair(self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row as u8) as char;
        write!(f, "{}{}", row, self.col + 1)
    }
}

impl FromStr for Coord {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.len() < 2 {
            return Err("Too short - need row letter and column number (e.g., F5)".to_string());
        }
        let mut chars = input.chars();
        let row_ch = chars.next().ok_or("No row letter")?.to_ascii_uppercase();
        if !row_ch.is_ascii_alphabetic() {
            return Err(format!("Invalid row '{}' - must be a letter A-J", row_ch));
        }
        let row = (row_ch as u8).wrapping_sub(b'A') as usize;
        if row >= BOARD_SIZE {
            return Err(format!("Row '{}' out of bounds - must be A-J", row_ch));
        }
        let col_str: String = chars.collect();
        let col: usize = col_str
            .parse()
            .map_err(|_| format!("Invalid column '{}' - must be a number 1-10", col_str))?;
        if col == 0 || col > BOARD_SIZE {
            return Err(format!("Column {} out of bounds - must be 1-10", col));
        }
        Ok(Coord { row, col: col - 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_engine_format() {
        assert_eq!(Coord { row: 0, col: 0 }.to_string(), "A1");
        assert_eq!(Coord { row: 5, col: 4 }.to_string(), "F5");
        assert_eq!(Coord { row: 9, col: 9 }.to_string(), "J10");
    }

    #[test]
    fn parses_engine_format() {
        assert_eq!("A1".parse::<Coord>().unwrap(), Coord { row: 0, col: 0 });
        assert_eq!("f5".parse::<Coord>().unwrap(), Coord { row: 5, col: 4 });
        assert_eq!("J10".parse::<Coord>().unwrap(), Coord { row: 9, col: 9 });
    }

    #[test]
    fn round_trips_every_square() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord { row, col };
                assert_eq!(coord.to_string().parse::<Coord>().unwrap(), coord);
            }
        }
    }

    #[test]
    fn rejects_invalid_text() {
        assert!("".parse::<Coord>().is_err());
        assert!("A".parse::<Coord>().is_err());
        assert!("K1".parse::<Coord>().is_err());
        assert!("A0".parse::<Coord>().is_err());
        assert!("A11".parse::<Coord>().is_err());
        assert!("1A".parse::<Coord>().is_err());
    }

    #[test]
    fn new_checks_bounds() {
        assert!(Coord::new(9, 9).is_ok());
        assert!(Coord::new(10, 0).is_err());
        assert!(Coord::new(0, 10).is_err());
    }
}
