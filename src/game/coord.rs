use std::fmt;
use std::ops::Add;

use crate::error::BoardError;

/// The six unit steps between adjacent hexes, in cube coordinates.
pub const DIRECTIONS: [Coord; 6] = [
    Coord::axial(1, 0),
    Coord::axial(1, -1),
    Coord::axial(0, -1),
    Coord::axial(-1, 0),
    Coord::axial(-1, 1),
    Coord::axial(0, 1),
];

/// A hex position in cube coordinates. `q + r + s == 0` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    q: i32,
    r: i32,
    s: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord::axial(0, 0);

    /// Build a coordinate from a full cube triple, rejecting triples that do
    /// not sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, BoardError> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(BoardError::InvalidCoordinate { q, r, s });
        }
        Ok(Coord { q, r, s })
    }

    /// Build a coordinate from its axial pair; `s` is derived.
    ///
    /// `-q - r` must fit in an `i32`. Board coordinates always do; use
    /// [`Coord::try_axial`] for untrusted input.
    pub const fn axial(q: i32, r: i32) -> Self {
        Coord { q, r, s: -q - r }
    }

    /// Like [`Coord::axial`], but `None` when `s` would overflow.
    pub fn try_axial(q: i32, r: i32) -> Option<Self> {
        let s = i32::try_from(-(i64::from(q) + i64::from(r))).ok()?;
        Some(Coord { q, r, s })
    }

    pub fn q(self) -> i32 {
        self.q
    }

    pub fn r(self) -> i32 {
        self.r
    }

    pub fn s(self) -> i32 {
        self.s
    }

    /// Number of steps from the board centre.
    pub fn ring(self) -> u32 {
        self.q
            .unsigned_abs()
            .max(self.r.unsigned_abs())
            .max(self.s.unsigned_abs())
    }

    /// The six adjacent coordinates, in `DIRECTIONS` order. Some may lie off
    /// the board; steps that would leave the `i32` range are skipped.
    pub fn adjacent(self) -> impl Iterator<Item = Coord> {
        DIRECTIONS
            .into_iter()
            .filter_map(move |dir| self.checked_add(dir))
    }

    pub fn checked_add(self, rhs: Coord) -> Option<Coord> {
        Some(Coord {
            q: self.q.checked_add(rhs.q)?,
            r: self.r.checked_add(rhs.r)?,
            s: self.s.checked_add(rhs.s)?,
        })
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord {
            q: self.q + rhs.q,
            r: self.r + rhs.r,
            s: self.s + rhs.s,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_nonzero_sum() {
        assert_eq!(
            Coord::new(1, 1, 1),
            Err(BoardError::InvalidCoordinate { q: 1, r: 1, s: 1 })
        );
        assert_eq!(Coord::new(1, -1, 0), Ok(Coord::axial(1, -1)));
    }

    #[test]
    fn test_directions_are_unit_steps() {
        for dir in DIRECTIONS {
            assert_eq!(dir.q() + dir.r() + dir.s(), 0);
            assert_eq!(dir.ring(), 1);
        }
    }

    #[test]
    fn test_adjacent_covers_ring_one() {
        let around: Vec<Coord> = Coord::ORIGIN.adjacent().collect();
        assert_eq!(around.len(), 6);
        assert!(around.iter().all(|c| c.ring() == 1));
        assert!(around.iter().all(|&c| is_adjacent(Coord::ORIGIN, c)));
    }

    fn is_adjacent(a: Coord, b: Coord) -> bool {
        DIRECTIONS.contains(&Coord::axial(b.q - a.q, b.r - a.r))
    }

    #[test]
    fn test_adjacent_neighbours_step_back() {
        let a = Coord::axial(2, -1);
        for b in a.adjacent() {
            assert!(is_adjacent(a, b));
            assert!(b.adjacent().any(|back| back == a));
        }
        assert!(!is_adjacent(a, a));
        assert!(!is_adjacent(a, Coord::ORIGIN));
    }

    #[test]
    fn test_new_handles_extreme_components() {
        assert_eq!(
            Coord::new(i32::MAX, i32::MAX, 0),
            Err(BoardError::InvalidCoordinate {
                q: i32::MAX,
                r: i32::MAX,
                s: 0
            })
        );
        assert!(Coord::new(i32::MIN, i32::MIN, i32::MIN).is_err());

        let edge = Coord::new(i32::MIN, i32::MAX, 1).unwrap();
        assert_eq!(edge.ring(), 1u32 << 31);
    }

    #[test]
    fn test_try_axial_rejects_overflow() {
        assert_eq!(Coord::try_axial(i32::MIN, 0), None);
        assert_eq!(Coord::try_axial(0, i32::MIN), None);
        assert_eq!(Coord::try_axial(1, -2), Some(Coord::axial(1, -2)));
        assert_eq!(
            Coord::try_axial(i32::MIN, i32::MAX).map(Coord::s),
            Some(1)
        );
    }

    #[test]
    fn test_adjacent_at_range_limit() {
        let corner = Coord::new(i32::MAX, i32::MIN + 1, 0).unwrap();
        // steps that raise q leave the i32 range
        let around: Vec<Coord> = corner.adjacent().collect();
        assert!(around.len() < 6);
        assert!(around.iter().all(|c| is_adjacent(corner, *c)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::axial(1, -2).to_string(), "(1, -2, 1)");
    }
}
