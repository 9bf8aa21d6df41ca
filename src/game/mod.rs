//! Core HexOust game logic: hex coordinates, the board, the placement and
//! capture rules, and a turn-keeping game session.

mod board;
mod coord;
mod player;
pub mod rules;
mod state;

pub use board::{cell_count_for_radius, Board, Cell, Stone};
pub use coord::{Coord, DIRECTIONS};
pub use player::Player;
pub use rules::MoveOutcome;
pub use state::{GameState, MoveError};
