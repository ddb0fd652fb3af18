//! Ship identities and placement descriptors.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// Identity of one of the five ships in the standard fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipId {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
    Patrolship,
}

impl ShipId {
    /// All ships, in the order used for fleet-indexed arrays.
    pub const ALL: [ShipId; 5] = [
        ShipId::Carrier,
        ShipId::Battleship,
        ShipId::Destroyer,
        ShipId::Submarine,
        ShipId::Patrolship,
    ];

    /// Number of squares the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipId::Carrier => 5,
            ShipId::Battleship => 4,
            ShipId::Destroyer => 3,
            ShipId::Submarine => 3,
            ShipId::Patrolship => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipId::Carrier => "carrier",
            ShipId::Battleship => "battleship",
            ShipId::Destroyer => "destroyer",
            ShipId::Submarine => "submarine",
            ShipId::Patrolship => "patrolship",
        }
    }

    /// Single-letter marker used when rendering boards.
    pub const fn initial(self) -> char {
        match self {
            ShipId::Carrier => 'C',
            ShipId::Battleship => 'B',
            ShipId::Destroyer => 'D',
            ShipId::Submarine => 'S',
            ShipId::Patrolship => 'P',
        }
    }

    /// Index into fleet-sized arrays, matching the order of [`ShipId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Occupies increasing columns from the anchor square.
    Horizontal,
    /// Occupies increasing rows from the anchor square.
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// A ship anchored at (`row`, `col`) and extending per its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub ship: ShipId,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(ship: ShipId, row: usize, col: usize, orientation: Orientation) -> Self {
        Placement {
            ship,
            row,
            col,
            orientation,
        }
    }

    /// Squares the ship occupies, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            row,
            col,
            orientation,
            ship,
        } = *self;
        (0..ship.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// True when the whole ship fits on the board.
    pub fn in_bounds(&self) -> bool {
        let len = self.ship.length();
        match self.orientation {
            Orientation::Horizontal => self.row < BOARD_SIZE && self.col + len <= BOARD_SIZE,
            Orientation::Vertical => self.row + len <= BOARD_SIZE && self.col < BOARD_SIZE,
        }
    }

    /// Parse an engine placement string such as `"G1 horizontal"`.
    ///
    /// The string carries no ship identity, so the caller supplies it.
    pub fn parse(ship: ShipId, text: &str) -> Result<Self, String> {
        let mut parts = text.split_whitespace();
        let coord: Coord = parts
            .next()
            .ok_or_else(|| "Empty placement".to_string())?
            .parse()?;
        let orientation = match parts.next() {
            Some("horizontal") => Orientation::Horizontal,
            Some("vertical") => Orientation::Vertical,
            Some(other) => {
                return Err(format!(
                    "Invalid orientation '{}' - must be horizontal or vertical",
                    other
                ))
            }
            None => return Err("Missing orientation".to_string()),
        };
        if parts.next().is_some() {
            return Err(format!("Trailing input in placement '{}'", text));
        }
        Ok(Placement::new(ship, coord.row, coord.col, orientation))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            Coord {
                row: self.row,
                col: self.col
            },
            self.orientation
        )
    }
}
