use rustc_hash::FxHashMap;

use super::{Coord, Player};
use crate::error::BoardError;

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Red,
    Blue,
}

impl Stone {
    /// The player owning this stone, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Stone::Empty => None,
            Stone::Red => Some(Player::Red),
            Stone::Blue => Some(Player::Blue),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

/// One hex of the board. The coordinate is fixed for the cell's lifetime;
/// only the stone changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    stone: Stone,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        Cell {
            coord,
            stone: Stone::Empty,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }

    pub fn is_empty(&self) -> bool {
        self.stone.is_empty()
    }
}

/// Number of cells on a hexagonal board of the given radius.
pub fn cell_count_for_radius(radius: i32) -> usize {
    let r = radius.max(0) as usize;
    3 * r * (r + 1) + 1
}

/// A hexagon-shaped board of cells. Membership is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    radius: i32,
    cells: Vec<Cell>,
    index: FxHashMap<Coord, usize>,
}

impl Board {
    /// Create an empty board covering every cell within `radius` steps of
    /// the centre.
    pub fn new(radius: i32) -> Result<Self, BoardError> {
        if radius < 0 {
            return Err(BoardError::NegativeRadius(radius));
        }

        let mut cells = Vec::with_capacity(cell_count_for_radius(radius));
        for q in -radius..=radius {
            let r_min = (-radius).max(-q - radius);
            let r_max = radius.min(-q + radius);
            for r in r_min..=r_max {
                cells.push(Cell::new(Coord::axial(q, r)));
            }
        }

        let index = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.coord, i))
            .collect();

        Ok(Board {
            radius,
            cells,
            index,
        })
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Total number of cells, occupied or not.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells, in a fixed order (by `q`, then `r`).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Look a cell up by its full cube triple. Returns `None` for triples
    /// that do not sum to zero or lie outside the board.
    pub fn cell_at(&self, q: i32, r: i32, s: i32) -> Option<&Cell> {
        self.cell(Coord::new(q, r, s).ok()?)
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index.get(&coord).map(|&i| &self.cells[i])
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index.contains_key(&coord)
    }

    /// Stone at `coord`, or `None` if the coordinate is off the board.
    pub fn stone_at(&self, coord: Coord) -> Option<Stone> {
        self.cell(coord).map(Cell::stone)
    }

    /// Count the stones `player` currently has on the board.
    pub fn count_stones(&self, player: Player) -> usize {
        let stone = player.to_stone();
        self.cells.iter().filter(|cell| cell.stone == stone).count()
    }

    /// Remove every stone. Cells themselves are kept.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.stone = Stone::Empty;
        }
    }

    /// Overwrite the stone at `coord`, returning the previous one. Returns
    /// `None` and leaves the board untouched if `coord` is off the board.
    pub(crate) fn set_stone(&mut self, coord: Coord, stone: Stone) -> Option<Stone> {
        let i = *self.index.get(&coord)?;
        Some(std::mem::replace(&mut self.cells[i].stone, stone))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a board with the given stones already placed.
    pub(crate) fn board_with(radius: i32, stones: &[((i32, i32), Player)]) -> Board {
        let mut board = Board::new(radius).unwrap();
        for &((q, r), player) in stones {
            board
                .set_stone(Coord::axial(q, r), player.to_stone())
                .expect("stone placed on the board");
        }
        board
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        assert_eq!(Board::new(-1), Err(BoardError::NegativeRadius(-1)));
    }

    #[test]
    fn test_cell_counts() {
        for radius in 0..=8 {
            let board = Board::new(radius).unwrap();
            assert_eq!(board.cell_count(), cell_count_for_radius(radius));
            assert_eq!(board.cells().len(), 3 * (radius * (radius + 1)) as usize + 1);
        }
    }

    #[test]
    fn test_radius_zero_has_only_centre() {
        let board = Board::new(0).unwrap();
        assert_eq!(board.cell_count(), 1);
        assert_eq!(board.cells()[0].coord(), Coord::ORIGIN);
    }

    #[test]
    fn test_cells_are_unique_and_within_radius() {
        let board = Board::new(4).unwrap();
        let mut seen = std::collections::HashSet::new();
        for cell in board.cells() {
            let c = cell.coord();
            assert_eq!(c.q() + c.r() + c.s(), 0);
            assert!(c.ring() <= 4);
            assert!(seen.insert(c), "duplicate cell {c}");
            assert!(cell.is_empty());
        }
    }

    #[test]
    fn test_cell_at() {
        let board = Board::new(2).unwrap();
        let cell = board.cell_at(1, -2, 1).unwrap();
        assert_eq!(cell.coord(), Coord::axial(1, -2));

        assert!(board.cell_at(1, 1, 1).is_none());
        assert!(board.cell_at(3, -3, 0).is_none());
        assert!(board.cell_at(2, 1, -3).is_none());
    }

    #[test]
    fn test_cell_at_extreme_components() {
        let board = Board::new(2).unwrap();
        assert!(board.cell_at(i32::MAX, 1, 0).is_none());
        assert!(board.cell_at(i32::MAX, i32::MAX, i32::MAX).is_none());
        assert!(board.cell_at(i32::MIN, i32::MIN, 0).is_none());
        // sums to zero but far off the board
        assert!(board.cell_at(i32::MIN, i32::MAX, 1).is_none());
    }

    #[test]
    fn test_count_stones() {
        let board = board_with(
            2,
            &[
                ((0, 0), Player::Red),
                ((1, 0), Player::Red),
                ((-1, 1), Player::Blue),
            ],
        );
        assert_eq!(board.count_stones(Player::Red), 2);
        assert_eq!(board.count_stones(Player::Blue), 1);
    }

    #[test]
    fn test_set_stone_off_board() {
        let mut board = Board::new(1).unwrap();
        let before = board.clone();
        assert_eq!(board.set_stone(Coord::axial(2, 0), Stone::Red), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_keeps_cells() {
        let mut board = board_with(
            3,
            &[
                ((0, 0), Player::Red),
                ((1, -1), Player::Blue),
                ((2, -2), Player::Red),
            ],
        );
        let coords: Vec<Coord> = board.cells().iter().map(Cell::coord).collect();

        board.reset();

        assert_eq!(board.count_stones(Player::Red), 0);
        assert_eq!(board.count_stones(Player::Blue), 0);
        let after: Vec<Coord> = board.cells().iter().map(Cell::coord).collect();
        assert_eq!(coords, after);
        assert_eq!(board, Board::new(3).unwrap());
    }
}
