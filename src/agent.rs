//! The tournament player: static placements plus heuristic targeting.

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::AgentError;
use crate::config::{MIN_SHIP_LEN, NUM_SHIPS, PLACEMENTS};
use crate::coord::Coord;
use crate::grid::{Cell, Grid};
use crate::player::Player;
use crate::scoring;
use crate::ship::{Placement, ShipId};

/// Heuristic Battleship player.
///
/// Owns the observed opponent grid for the current game and the RNG used
/// to break scoring ties. No state survives `new_game`.
pub struct Agent {
    grid: Grid,
    afloat: [bool; NUM_SHIPS],
    shots_taken: u32,
    /// Set by `next_target`, consumed by the matching `target_result`.
    last_target: Option<Coord>,
    rng: SmallRng,
}

impl Agent {
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(SmallRng::from_rng(&mut seed_rng))
    }

    /// Deterministic construction for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Agent {
            grid: Grid::new(),
            afloat: [true; NUM_SHIPS],
            shots_taken: 0,
            last_target: None,
            rng,
        }
    }

    /// View of the observed opponent board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shots_taken(&self) -> u32 {
        self.shots_taken
    }

    /// Length of the shortest enemy ship still afloat; falls back to the
    /// fleet minimum if everything is somehow sunk.
    fn smallest_afloat_len(&self) -> usize {
        ShipId::ALL
            .into_iter()
            .filter(|ship| self.afloat[ship.index()])
            .map(ShipId::length)
            .min()
            .unwrap_or(MIN_SHIP_LEN)
    }

    // Textual placement queries, one per ship, as the engine names them.

    pub fn carrier_placement(&self) -> String {
        PLACEMENTS[ShipId::Carrier.index()].to_string()
    }

    pub fn battleship_placement(&self) -> String {
        PLACEMENTS[ShipId::Battleship.index()].to_string()
    }

    pub fn destroyer_placement(&self) -> String {
        PLACEMENTS[ShipId::Destroyer.index()].to_string()
    }

    pub fn submarine_placement(&self) -> String {
        PLACEMENTS[ShipId::Submarine.index()].to_string()
    }

    pub fn patrolship_placement(&self) -> String {
        PLACEMENTS[ShipId::Patrolship.index()].to_string()
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for Agent {
    fn new_game(&mut self, opponent_name: &str) {
        debug!("new game against {}", opponent_name);
        self.grid = Grid::new();
        self.afloat = [true; NUM_SHIPS];
        self.shots_taken = 0;
        self.last_target = None;
    }

    fn placement(&self, ship: ShipId) -> Placement {
        PLACEMENTS[ship.index()]
    }

    fn next_target(&mut self) -> String {
        let scores = scoring::score_board(&self.grid, self.smallest_afloat_len());
        let (row, col) = scoring::pick_best(&scores, &mut self.rng);
        let coord = Coord { row, col };
        self.last_target = Some(coord);
        self.shots_taken += 1;
        debug!("shot {} targets {}", self.shots_taken, coord);
        coord.to_string()
    }

    fn target_result(
        &mut self,
        coordinates: &str,
        was_hit: bool,
        ship_sunk: Option<ShipId>,
    ) -> Result<(), AgentError> {
        let target = self.last_target.take().ok_or(AgentError::NoPendingTarget)?;
        debug_assert_eq!(
            coordinates.parse::<Coord>().ok(),
            Some(target),
            "result does not match the pending target"
        );

        let cell = match ship_sunk {
            Some(ship) => Cell::Sunk(ship),
            None if was_hit => Cell::Hit,
            None => Cell::Miss,
        };
        self.grid.set(target.row, target.col, cell)?;

        if let Some(ship) = ship_sunk {
            if !self.afloat[ship.index()] {
                return Err(AgentError::ShipNotAfloat(ship));
            }
            self.afloat[ship.index()] = false;
            scoring::backfill_sunk(&mut self.grid, target.pair(), ship);
            debug!("sank {} at {}", ship, target);
        }
        Ok(())
    }
}
