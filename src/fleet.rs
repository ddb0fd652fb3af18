//! Referee-side fleet: real ship positions and guess adjudication.
//!
//! The rule-enforcing tournament engine is an external system; this
//! fleet is the minimal referee backing the local simulator and the
//! integration tests.

use rand::Rng;

use crate::common::{BoardError, GuessResult};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::grid::GridError;
use crate::player::Player;
use crate::ship::{Orientation, Placement, ShipId};

#[derive(Debug, Clone, Copy)]
struct FleetShip {
    placement: Placement,
    hits: usize,
}

/// The defending side of a game: placed ships plus guess history.
#[derive(Debug, Clone)]
pub struct Fleet {
    ships: [Option<FleetShip>; NUM_SHIPS],
    occupied: [[Option<ShipId>; BOARD_SIZE]; BOARD_SIZE],
    guessed: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl Fleet {
    pub fn new() -> Self {
        Fleet {
            ships: [None; NUM_SHIPS],
            occupied: [[None; BOARD_SIZE]; BOARD_SIZE],
            guessed: [[false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Place one ship, rejecting out-of-bounds and overlapping layouts.
    pub fn place(&mut self, placement: Placement) -> Result<(), BoardError> {
        let idx = placement.ship.index();
        if self.ships[idx].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if !placement.in_bounds() {
            return Err(BoardError::ShipOutOfBounds);
        }
        if placement.cells().any(|(r, c)| self.occupied[r][c].is_some()) {
            return Err(BoardError::ShipOverlaps);
        }
        for (r, c) in placement.cells() {
            self.occupied[r][c] = Some(placement.ship);
        }
        self.ships[idx] = Some(FleetShip { placement, hits: 0 });
        Ok(())
    }

    /// Build a defending fleet from a player's placement queries, going
    /// through the textual form the engine would see.
    pub fn from_player(player: &dyn Player) -> Result<Self, BoardError> {
        let mut fleet = Fleet::new();
        for ship in ShipId::ALL {
            let text = player.placement_text(ship);
            let placement =
                Placement::parse(ship, &text).map_err(BoardError::InvalidPlacement)?;
            fleet.place(placement)?;
        }
        Ok(fleet)
    }

    /// Random non-overlapping fleet, used to vary simulator matchups.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut fleet = Fleet::new();
        for ship in ShipId::ALL {
            fleet.place_random(rng, ship)?;
        }
        Ok(fleet)
    }

    fn place_random<R: Rng>(&mut self, rng: &mut R, ship: ShipId) -> Result<(), BoardError> {
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - ship.length()),
                Orientation::Vertical => (BOARD_SIZE - ship.length(), BOARD_SIZE - 1),
            };
            let placement = Placement::new(
                ship,
                rng.random_range(0..=max_r),
                rng.random_range(0..=max_c),
                orientation,
            );
            if !placement.cells().any(|(r, c)| self.occupied[r][c].is_some()) {
                return self.place(placement);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Adjudicate a guess at (row, col). A repeated guess is an error;
    /// the engine treats it as grounds for disqualification.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::Grid(GridError::IndexOutOfBounds { row, col }));
        }
        if self.guessed[row][col] {
            return Err(BoardError::AlreadyGuessed);
        }
        self.guessed[row][col] = true;
        match self.occupied[row][col] {
            Some(ship) => {
                let Some(slot) = self.ships[ship.index()].as_mut() else {
                    return Err(BoardError::UnknownShipHit);
                };
                slot.hits += 1;
                if slot.hits == ship.length() {
                    Ok(GuessResult::Sink(ship))
                } else {
                    Ok(GuessResult::Hit)
                }
            }
            None => Ok(GuessResult::Miss),
        }
    }

    /// True once every placed ship is fully hit.
    pub fn all_sunk(&self) -> bool {
        self.ships
            .iter()
            .all(|slot| slot.is_some_and(|s| s.hits == s.placement.ship.length()))
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_overlap_and_out_of_bounds() {
        let mut fleet = Fleet::new();
        fleet
            .place(Placement::new(ShipId::Carrier, 0, 0, Orientation::Horizontal))
            .unwrap();
        assert_eq!(
            fleet.place(Placement::new(ShipId::Submarine, 0, 2, Orientation::Vertical)),
            Err(BoardError::ShipOverlaps)
        );
        assert_eq!(
            fleet.place(Placement::new(ShipId::Battleship, 8, 0, Orientation::Vertical)),
            Err(BoardError::ShipOutOfBounds)
        );
        assert_eq!(
            fleet.place(Placement::new(ShipId::Carrier, 5, 0, Orientation::Horizontal)),
            Err(BoardError::ShipAlreadyPlaced)
        );
    }

    #[test]
    fn adjudicates_miss_hit_and_sink() {
        let mut fleet = Fleet::new();
        fleet
            .place(Placement::new(ShipId::Patrolship, 8, 2, Orientation::Horizontal))
            .unwrap();
        assert_eq!(fleet.guess(0, 0), Ok(GuessResult::Miss));
        assert_eq!(fleet.guess(8, 2), Ok(GuessResult::Hit));
        assert_eq!(fleet.guess(8, 3), Ok(GuessResult::Sink(ShipId::Patrolship)));
        assert_eq!(fleet.guess(8, 3), Err(BoardError::AlreadyGuessed));
    }

    #[test]
    fn out_of_range_guess_is_an_error() {
        let mut fleet = Fleet::new();
        assert!(matches!(fleet.guess(10, 0), Err(BoardError::Grid(_))));
    }

    #[test]
    fn random_fleet_covers_seventeen_squares() {
        let mut rng = SmallRng::seed_from_u64(11);
        let fleet = Fleet::random(&mut rng).unwrap();
        let occupied: usize = fleet
            .occupied
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count();
        assert_eq!(occupied, 17);
        assert!(!fleet.all_sunk());
    }
}
