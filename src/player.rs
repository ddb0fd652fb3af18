//! The engine-facing callback surface, as a trait.

use crate::common::{AgentError, GameResult};
use crate::ship::{Placement, ShipId};

/// Interface the game engine drives a player through.
///
/// Calls arrive strictly in sequence: `new_game`, the placement queries,
/// then alternating `next_target` / `target_result` pairs until
/// `game_over`. The ordering is the engine's contract; implementations
/// may assume it but need not enforce it.
pub trait Player {
    /// Reset per-game state. A player instance is reused across games.
    fn new_game(&mut self, opponent_name: &str);

    /// Typed placement for `ship`. The engine consumes the textual form.
    fn placement(&self, ship: ShipId) -> Placement;

    /// Placement string in the engine wire format, e.g. `"G1 horizontal"`.
    fn placement_text(&self, ship: ShipId) -> String {
        self.placement(ship).to_string()
    }

    /// Return the next target as a coordinate string, e.g. `"F5"`. Must
    /// never repeat a coordinate within a game.
    fn next_target(&mut self) -> String;

    /// Outcome of the most recent `next_target`. Exactly one call per
    /// target.
    fn target_result(
        &mut self,
        coordinates: &str,
        was_hit: bool,
        ship_sunk: Option<ShipId>,
    ) -> Result<(), AgentError>;

    /// The opponent targeted `coordinates` on our board. Informational.
    fn enemy_targeting(&mut self, _coordinates: &str) {}

    /// The game ended. `reason` is set on disqualification.
    fn game_over(&mut self, _result: GameResult, _reason: Option<&str>) {}
}
