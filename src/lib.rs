mod agent;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod grid;
mod logging;
mod player;
mod scoring;
mod ship;

pub use agent::*;
pub use common::*;
pub use config::{BOARD_SIZE, MIN_SHIP_LEN, NUM_SHIPS, PLACEMENTS};
pub use coord::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use player::*;
pub use scoring::*;
pub use ship::*;
