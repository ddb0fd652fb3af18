//! Square-scoring heuristic, target selection, and sink back-fill.
//!
//! Scoring is a simple additive local scheme, not a probability model:
//! squares next to unresolved hits are rewarded, squares close to any
//! previous guess are mildly penalized, and already-targeted squares are
//! pushed far below everything else.

use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::grid::{Cell, Grid};
use crate::ship::ShipId;

/// Per-turn score for every square, row-major. Recomputed from scratch
/// each turn and discarded after selection.
pub type ScoreGrid = [[i32; BOARD_SIZE]; BOARD_SIZE];

/// Score of any square that has already been shot at. Large enough that
/// such a square can never win selection while an untargeted one exists.
const ALREADY_TARGETED: i32 = -1000;
/// Bonus for each unresolved hit one step away.
const ADJACENT_HIT_BONUS: i32 = 100;
/// Extra bonus when the hit one step away continues two steps away,
/// favoring the completion of a confirmed line.
const LINE_HIT_BONUS: i32 = 200;
/// Penalty, once per direction, when any previous guess lies within the
/// smallest afloat ship's length.
const CLOSE_GUESS_PENALTY: i32 = 10;

/// Orthogonal step offsets as (row, col) deltas: up, right, down, left.
/// Back-fill resolves orientation ties by this order, so it is fixed.
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Score every square of the board. `smallest_ship_len` sizes the
/// proximity-penalty window: a ship of that length cannot sit entirely
/// between a candidate square and a nearby resolved square, so close
/// guesses make the candidate less attractive.
pub fn score_board(grid: &Grid, smallest_ship_len: usize) -> ScoreGrid {
    let mut scores = [[0i32; BOARD_SIZE]; BOARD_SIZE];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            scores[row][col] = score_cell(grid, row, col, smallest_ship_len);
        }
    }
    scores
}

fn score_cell(grid: &Grid, row: usize, col: usize, smallest_ship_len: usize) -> i32 {
    let (row, col) = (row as i32, col as i32);
    if grid.at(row, col) != Some(Cell::Unknown) {
        return ALREADY_TARGETED;
    }

    let mut score = 0;
    for (dr, dc) in DIRECTIONS {
        if grid.at(row + dr, col + dc) == Some(Cell::Hit) {
            score += ADJACENT_HIT_BONUS;
            if grid.at(row + dr * 2, col + dc * 2) == Some(Cell::Hit) {
                score += LINE_HIT_BONUS;
            }
        }
    }

    for (dr, dc) in DIRECTIONS {
        let has_close_guess = (1..smallest_ship_len as i32).any(|step| {
            matches!(grid.at(row + dr * step, col + dc * step), Some(c) if c.is_targeted())
        });
        if has_close_guess {
            score -= CLOSE_GUESS_PENALTY;
        }
    }

    score
}

/// Select the best-scoring square, choosing uniformly at random among
/// ties. Randomizing the tie-break spreads early-game search evenly and
/// keeps the targeting pattern unpredictable.
pub fn pick_best<R: Rng + ?Sized>(scores: &ScoreGrid, rng: &mut R) -> (usize, usize) {
    let mut best = i32::MIN;
    let mut ties: Vec<(usize, usize)> = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let score = scores[row][col];
            if score > best {
                best = score;
                ties.clear();
                ties.push((row, col));
            } else if score == best {
                ties.push((row, col));
            }
        }
    }
    ties[rng.random_range(0..ties.len())]
}

/// Relabel the hits of a just-sunk ship with its identity.
///
/// From the sinking shot, each direction is tried in the fixed order: if
/// every square 1..len-1 steps away is an on-board unresolved `Hit`, that
/// is the ship's orientation and those squares become `Sunk(ship)`. The
/// sinking square itself is the caller's to mark. When hits of adjacent
/// ships make no single direction match, the squares stay `Hit`; they are
/// already non-targetable, so only later adjacency bonuses lose a little
/// precision.
pub fn backfill_sunk(grid: &mut Grid, last: (usize, usize), ship: ShipId) {
    let (row, col) = (last.0 as i32, last.1 as i32);
    let span = ship.length() as i32 - 1;
    for (dr, dc) in DIRECTIONS {
        let all_hits =
            (1..=span).all(|step| grid.at(row + dr * step, col + dc * step) == Some(Cell::Hit));
        if all_hits {
            for step in 1..=span {
                let r = (row + dr * step) as usize;
                let c = (col + dc * step) as usize;
                // in bounds: the probe above saw a cell there
                let _ = grid.set(r, c, Cell::Sunk(ship));
            }
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_SHIP_LEN;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn targeted_squares_score_exactly_minus_1000() {
        let mut grid = Grid::new();
        grid.set(4, 4, Cell::Miss).unwrap();
        grid.set(4, 5, Cell::Hit).unwrap();
        let scores = score_board(&grid, MIN_SHIP_LEN);
        assert_eq!(scores[4][4], -1000);
        assert_eq!(scores[4][5], -1000);
    }

    #[test]
    fn one_nearby_miss_scores_minus_10() {
        let mut grid = Grid::new();
        grid.set(0, 1, Cell::Miss).unwrap();
        let scores = score_board(&grid, MIN_SHIP_LEN);
        assert_eq!(scores[0][0], -10);
    }

    #[test]
    fn two_nearby_misses_score_minus_20() {
        let mut grid = Grid::new();
        grid.set(0, 1, Cell::Miss).unwrap();
        grid.set(1, 0, Cell::Miss).unwrap();
        let scores = score_board(&grid, MIN_SHIP_LEN);
        assert_eq!(scores[0][0], -20);
    }

    #[test]
    fn proximity_penalty_window_grows_with_smallest_ship() {
        let mut grid = Grid::new();
        grid.set(0, 2, Cell::Miss).unwrap();
        // window of 1: the miss two steps away is out of reach
        assert_eq!(score_board(&grid, 2)[0][0], 0);
        // window of 2: now it is in reach, once for that direction
        assert_eq!(score_board(&grid, 3)[0][0], -10);
    }

    #[test]
    fn last_unknown_square_is_forced() {
        let mut grid = Grid::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (row, col) != (5, 0) {
                    grid.set(row, col, Cell::Miss).unwrap();
                }
            }
        }
        let scores = score_board(&grid, MIN_SHIP_LEN);
        assert_eq!(pick_best(&scores, &mut rng()), (5, 0));
    }

    #[test]
    fn picks_the_corner_flanked_by_hits() {
        let mut grid = Grid::new();
        grid.set(0, 1, Cell::Hit).unwrap();
        grid.set(1, 0, Cell::Hit).unwrap();
        grid.set(1, 1, Cell::Miss).unwrap();
        let scores = score_board(&grid, MIN_SHIP_LEN);
        // two adjacency bonuses minus two proximity penalties
        assert_eq!(scores[0][0], 180);
        assert_eq!(pick_best(&scores, &mut rng()), (0, 0));
    }

    #[test]
    fn rewards_extending_a_confirmed_line() {
        let mut grid = Grid::new();
        grid.set(0, 1, Cell::Hit).unwrap();
        grid.set(0, 2, Cell::Hit).unwrap();
        let scores = score_board(&grid, MIN_SHIP_LEN);
        // +100 adjacent, +200 line, -10 proximity
        assert_eq!(scores[0][0], 290);
    }

    #[test]
    fn resolved_sunk_cells_grant_no_adjacency_bonus() {
        let mut grid = Grid::new();
        grid.set(0, 1, Cell::Sunk(ShipId::Patrolship)).unwrap();
        let scores = score_board(&grid, MIN_SHIP_LEN);
        assert_eq!(scores[0][0], -10);
    }

    #[test]
    fn scoring_is_idempotent() {
        let mut grid = Grid::new();
        grid.set(3, 3, Cell::Hit).unwrap();
        grid.set(6, 6, Cell::Miss).unwrap();
        let first = score_board(&grid, MIN_SHIP_LEN);
        let second = score_board(&grid, MIN_SHIP_LEN);
        assert_eq!(first, second);
    }

    #[test]
    fn tie_break_spreads_across_tied_squares() {
        let grid = Grid::new();
        let scores = score_board(&grid, MIN_SHIP_LEN);
        let picks: std::collections::HashSet<_> = (0..32)
            .map(|seed| {
                let mut rng = SmallRng::seed_from_u64(seed);
                pick_best(&scores, &mut rng)
            })
            .collect();
        assert!(picks.len() > 1);
    }

    #[test]
    fn backfill_relabels_a_rightward_submarine() {
        let mut grid = Grid::new();
        grid.set(2, 2, Cell::Sunk(ShipId::Submarine)).unwrap();
        grid.set(2, 3, Cell::Hit).unwrap();
        grid.set(2, 4, Cell::Hit).unwrap();
        backfill_sunk(&mut grid, (2, 2), ShipId::Submarine);
        assert_eq!(grid.get(2, 2), Ok(Cell::Sunk(ShipId::Submarine)));
        assert_eq!(grid.get(2, 3), Ok(Cell::Sunk(ShipId::Submarine)));
        assert_eq!(grid.get(2, 4), Ok(Cell::Sunk(ShipId::Submarine)));
    }

    #[test]
    fn backfill_takes_the_first_matching_direction() {
        // Hits run both up and right from the sinking shot; up wins.
        let mut grid = Grid::new();
        grid.set(2, 2, Cell::Sunk(ShipId::Submarine)).unwrap();
        grid.set(1, 2, Cell::Hit).unwrap();
        grid.set(0, 2, Cell::Hit).unwrap();
        grid.set(2, 3, Cell::Hit).unwrap();
        grid.set(2, 4, Cell::Hit).unwrap();
        backfill_sunk(&mut grid, (2, 2), ShipId::Submarine);
        assert_eq!(grid.get(1, 2), Ok(Cell::Sunk(ShipId::Submarine)));
        assert_eq!(grid.get(0, 2), Ok(Cell::Sunk(ShipId::Submarine)));
        assert_eq!(grid.get(2, 3), Ok(Cell::Hit));
        assert_eq!(grid.get(2, 4), Ok(Cell::Hit));
    }

    #[test]
    fn backfill_leaves_unresolvable_hits_alone() {
        let mut grid = Grid::new();
        grid.set(2, 2, Cell::Sunk(ShipId::Submarine)).unwrap();
        grid.set(2, 3, Cell::Hit).unwrap();
        // (2, 4) unknown: no direction fully matches a length-3 ship
        backfill_sunk(&mut grid, (2, 2), ShipId::Submarine);
        assert_eq!(grid.get(2, 3), Ok(Cell::Hit));
    }
}
