use tracing::{debug, info, warn};

use super::rules::{self, MoveOutcome};
use super::{Board, Coord, Player, Stone};
use crate::error::BoardError;

/// Why the session refused an action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("{0} is not on the board")]
    OffBoard(Coord),

    #[error("{0} is already occupied")]
    Occupied(Coord),

    #[error("{player} may not place at {coord}")]
    IllegalPlacement { coord: Coord, player: Player },

    #[error("{0} cannot be captured")]
    NotCapturable(Coord),

    #[error("placement at {0} was rejected by the rules engine")]
    Rejected(Coord),
}

/// A game in progress: the board, whose turn it is, and the winner once
/// one side has lost all its stones.
///
/// A placement that captures keeps the turn with the same player, as does a
/// direct capture. Only a plain placement passes the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    starting_player: Player,
    current_player: Player,
    winner: Option<Player>,
}

impl GameState {
    /// Start a game on an empty board of the given radius.
    pub fn new(radius: i32, starting_player: Player) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(radius)?,
            starting_player,
            current_player: starting_player,
            winner: None,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether the current player may place on `coord`.
    pub fn is_legal(&self, coord: Coord) -> bool {
        !self.is_terminal() && rules::is_move_legal(&self.board, coord, self.current_player)
    }

    /// Opponent stones the current player could capture.
    pub fn capturable_cells(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        rules::capturable_cells(&self.board, self.current_player)
    }

    /// Empty cells the current player may place on.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board
            .cells()
            .iter()
            .map(|cell| cell.coord())
            .filter(|&coord| rules::is_move_legal(&self.board, coord, self.current_player))
            .collect()
    }

    /// Place a stone for the current player.
    pub fn place(&mut self, coord: Coord) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let player = self.current_player;
        match self.board.stone_at(coord) {
            None => return Err(MoveError::OffBoard(coord)),
            Some(stone) if !stone.is_empty() => return Err(MoveError::Occupied(coord)),
            Some(_) => {}
        }
        if !rules::is_move_legal(&self.board, coord, player) {
            return Err(MoveError::IllegalPlacement { coord, player });
        }

        let outcome = rules::execute_move(&mut self.board, coord, player);
        self.settle(coord, outcome)
    }

    /// Advance the turn or check for a winner after `execute_move`.
    fn settle(&mut self, coord: Coord, outcome: MoveOutcome) -> Result<MoveOutcome, MoveError> {
        match outcome {
            MoveOutcome::Placed => self.current_player = self.current_player.other(),
            MoveOutcome::PlacedWithCapture => self.check_winner(),
            MoveOutcome::Rejected => {
                warn!(
                    coord = %coord,
                    player = %self.current_player,
                    "placement rejected after passing the legality check"
                );
                return Err(MoveError::Rejected(coord));
            }
        }
        Ok(outcome)
    }

    /// Remove a single opponent stone that is currently capturable. The turn
    /// does not change.
    pub fn capture(&mut self, coord: Coord) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let opponent = self.current_player.other();
        match self.board.stone_at(coord) {
            None => return Err(MoveError::OffBoard(coord)),
            Some(stone) if stone != opponent.to_stone() => {
                return Err(MoveError::NotCapturable(coord))
            }
            Some(_) => {}
        }
        if !rules::capturable_cells(&self.board, self.current_player).contains(&coord) {
            return Err(MoveError::NotCapturable(coord));
        }

        self.board.set_stone(coord, Stone::Empty);
        debug!(%coord, player = %self.current_player, "direct capture");
        self.check_winner();
        Ok(())
    }

    /// Clear the board and hand the first move back to the starting player.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = self.starting_player;
        self.winner = None;
    }

    /// Only called after a capture: a plain placement can never empty the
    /// opponent, and before both sides have played the count is meaningless.
    fn check_winner(&mut self) {
        let opponent = self.current_player.other();
        if self.board.count_stones(opponent) == 0 {
            info!(winner = %self.current_player, "game over");
            self.winner = Some(self.current_player);
        }
    }
}
