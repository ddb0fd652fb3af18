use crate::ship::{Orientation, Placement, ShipId};

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Scan-window lower bound used when no enemy ships are known afloat.
/// Matches the shortest ship in the standard fleet.
pub const MIN_SHIP_LEN: usize = 2;

/// Static fleet layout returned by the placement queries, indexed by
/// [`ShipId::index`]. Legality is re-verified by tests.
pub const PLACEMENTS: [Placement; NUM_SHIPS] = [
    Placement::new(ShipId::Carrier, 6, 0, Orientation::Horizontal), // G1..G5
    Placement::new(ShipId::Battleship, 5, 7, Orientation::Vertical), // F8..I8
    Placement::new(ShipId::Destroyer, 2, 4, Orientation::Vertical), // C5..E5
    Placement::new(ShipId::Submarine, 1, 6, Orientation::Horizontal), // B7..B9
    Placement::new(ShipId::Patrolship, 8, 2, Orientation::Horizontal), // I3..I4
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placements_are_in_bounds_and_disjoint() {
        let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
        for placement in PLACEMENTS {
            assert!(placement.in_bounds(), "{} off board", placement.ship);
            for (r, c) in placement.cells() {
                assert!(!seen[r][c], "{} overlaps at ({}, {})", placement.ship, r, c);
                seen[r][c] = true;
            }
        }
    }

    #[test]
    fn placements_match_ship_indices() {
        for (i, placement) in PLACEMENTS.iter().enumerate() {
            assert_eq!(placement.ship.index(), i);
        }
    }
}
