//! Placement legality and capture resolution.
//!
//! A player may place a stone on any empty cell that does not touch one of
//! their own stones. Touching their own stones is allowed only when the
//! resulting group is strictly larger than an adjacent opponent group, in
//! which case every such smaller opponent group is captured. Each player's
//! first stone may go anywhere.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::{Board, Cell, Coord, Player, Stone};

/// Result of [`execute_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed: the target was occupied or off the board.
    Rejected,
    /// The stone was placed and nothing was captured.
    Placed,
    /// The stone was placed and at least one opponent group was removed.
    PlacedWithCapture,
}

impl MoveOutcome {
    pub fn is_placed(self) -> bool {
        self != MoveOutcome::Rejected
    }

    pub fn captured(self) -> bool {
        self == MoveOutcome::PlacedWithCapture
    }
}

/// Read-only view of a board, optionally with one extra stone laid on top.
/// Lets the legality check look at the position after a placement without
/// touching the board itself.
struct View<'a> {
    board: &'a Board,
    placed: Option<(Coord, Stone)>,
}

impl<'a> View<'a> {
    fn of(board: &'a Board) -> Self {
        View {
            board,
            placed: None,
        }
    }

    fn with_placement(board: &'a Board, coord: Coord, stone: Stone) -> Self {
        View {
            board,
            placed: Some((coord, stone)),
        }
    }

    fn stone_at(&self, coord: Coord) -> Option<Stone> {
        match self.placed {
            Some((placed, stone)) if placed == coord => Some(stone),
            _ => self.board.stone_at(coord),
        }
    }

    fn group(&self, start: Coord, player: Player) -> Vec<Coord> {
        let stone = player.to_stone();
        if self.stone_at(start) != Some(stone) {
            return Vec::new();
        }

        let mut visited = FxHashSet::default();
        let mut frontier = VecDeque::new();
        let mut group = Vec::new();
        visited.insert(start);
        frontier.push_back(start);

        while let Some(current) = frontier.pop_front() {
            group.push(current);
            for next in current.adjacent() {
                if self.stone_at(next) == Some(stone) && visited.insert(next) {
                    frontier.push_back(next);
                }
            }
        }
        group
    }

    fn opponent_groups(&self, group: &[Coord], player: Player) -> Vec<Vec<Coord>> {
        let opponent = player.other();
        let opponent_stone = opponent.to_stone();
        let mut included = FxHashSet::default();
        let mut groups = Vec::new();

        for &cell in group {
            for next in cell.adjacent() {
                if self.stone_at(next) != Some(opponent_stone) || included.contains(&next) {
                    continue;
                }
                let found = self.group(next, opponent);
                included.extend(found.iter().copied());
                groups.push(found);
            }
        }
        groups
    }
}

/// On-board cells adjacent to `coord`. Edge cells have fewer than six.
pub fn neighbors_of(board: &Board, coord: Coord) -> Vec<&Cell> {
    coord.adjacent().filter_map(|c| board.cell(c)).collect()
}

/// The maximal group of `player` stones connected to `start`, in
/// breadth-first order. Empty if `start` does not hold a `player` stone.
pub fn connected_group(board: &Board, start: Coord, player: Player) -> Vec<Coord> {
    View::of(board).group(start, player)
}

/// Every distinct opponent group touching `group`. The returned groups are
/// disjoint even when `group` touches one of them from several cells.
pub fn opponent_groups_adjacent_to(
    board: &Board,
    group: &[Coord],
    player: Player,
) -> Vec<Vec<Coord>> {
    View::of(board).opponent_groups(group, player)
}

/// Whether `player` may place a stone on `target`. Never modifies the board.
pub fn is_move_legal(board: &Board, target: Coord, player: Player) -> bool {
    match board.stone_at(target) {
        None => {
            debug!(coord = %target, "legality check on a cell off the board");
            return false;
        }
        Some(stone) if !stone.is_empty() => return false,
        Some(_) => {}
    }

    if board.count_stones(player) == 0 {
        return true;
    }

    let view = View::with_placement(board, target, player.to_stone());
    let own = view.group(target, player);
    if own.is_empty() {
        warn!(coord = %target, %player, "simulated placement produced no group");
    } else {
        let captures = view
            .opponent_groups(&own, player)
            .iter()
            .any(|group| group.len() < own.len());
        if captures {
            return true;
        }
    }

    !neighbors_of(board, target)
        .iter()
        .any(|cell| cell.stone() == player.to_stone())
}

/// Place `player`'s stone on `target` and remove every adjacent opponent
/// group strictly smaller than the group the new stone joins.
///
/// Only occupancy is checked here. A placement that touches the player's own
/// stones without capturing is executed as-is; call [`is_move_legal`] first.
pub fn execute_move(board: &mut Board, target: Coord, player: Player) -> MoveOutcome {
    match board.stone_at(target) {
        None => {
            warn!(coord = %target, "move off the board rejected");
            return MoveOutcome::Rejected;
        }
        Some(stone) if !stone.is_empty() => {
            warn!(coord = %target, ?stone, "move onto occupied cell rejected");
            return MoveOutcome::Rejected;
        }
        Some(_) => {}
    }

    board.set_stone(target, player.to_stone());
    let own = connected_group(board, target, player);
    if own.is_empty() {
        warn!(coord = %target, %player, "placed stone has no group, reverting");
        board.set_stone(target, Stone::Empty);
        return MoveOutcome::Rejected;
    }

    let mut captured = 0;
    for group in opponent_groups_adjacent_to(board, &own, player) {
        if group.len() < own.len() {
            for &coord in &group {
                board.set_stone(coord, Stone::Empty);
            }
            captured += group.len();
        }
    }

    debug!(coord = %target, %player, group = own.len(), captured, "stone placed");
    if captured > 0 {
        MoveOutcome::PlacedWithCapture
    } else {
        MoveOutcome::Placed
    }
}

/// Opponent stones `player` could capture right now: the members of every
/// opponent group adjacent to, and strictly smaller than, one of `player`'s
/// groups. Each stone appears once.
pub fn capturable_cells(board: &Board, player: Player) -> Vec<Coord> {
    let stone = player.to_stone();
    let mut processed = FxHashSet::default();
    let mut added = FxHashSet::default();
    let mut capturable = Vec::new();

    for cell in board.cells() {
        if cell.stone() != stone || processed.contains(&cell.coord()) {
            continue;
        }
        let group = connected_group(board, cell.coord(), player);
        processed.extend(group.iter().copied());

        for opponent in opponent_groups_adjacent_to(board, &group, player) {
            if opponent.len() < group.len() {
                capturable.extend(opponent.into_iter().filter(|&c| added.insert(c)));
            }
        }
    }
    capturable
}
