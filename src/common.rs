//! Common types: guess results, game results, and error enums.

use core::fmt;

use crate::grid::GridError;
use crate::ship::ShipId;

/// Result of a guess adjudicated against a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum GuessResult {
    /// Guess hit a ship that is still afloat afterwards.
    Hit,
    /// Guess missed all ships.
    Miss,
    /// Guess sank a ship, carrying its identity.
    Sink(ShipId),
}

/// Final game result reported to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Victory,
    Defeat,
    Disqualified,
}

/// Errors returned by fleet (referee-side) operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (index out of range).
    Grid(GridError),
    /// Placement string did not parse.
    InvalidPlacement(String),
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement runs off the board.
    ShipOutOfBounds,
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// Unable to find a legal random placement.
    UnableToPlaceShip,
    /// Occupied square without a matching placed ship.
    UnknownShipHit,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::InvalidPlacement(reason) => write!(f, "Invalid placement: {}", reason),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::UnknownShipHit => write!(f, "Hit square does not belong to a placed ship"),
        }
    }
}

/// Errors surfaced by the agent when the turn protocol is violated.
#[derive(Debug, PartialEq, Eq)]
pub enum AgentError {
    /// Underlying grid error (index out of range).
    Grid(GridError),
    /// `target_result` arrived with no pending target to match it.
    NoPendingTarget,
    /// A sink was reported for a ship already recorded as sunk.
    ShipNotAfloat(ShipId),
}

impl From<GridError> for AgentError {
    fn from(err: GridError) -> Self {
        AgentError::Grid(err)
    }
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Grid(e) => write!(f, "Grid error: {}", e),
            AgentError::NoPendingTarget => {
                write!(f, "Result reported without a preceding next_target call")
            }
            AgentError::ShipNotAfloat(ship) => {
                write!(f, "Sink reported for {} which is not afloat", ship)
            }
        }
    }
}
