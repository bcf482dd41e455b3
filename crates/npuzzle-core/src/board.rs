//! The [`Board`] value type: a full tile configuration plus blank
//! bookkeeping, successor generation, solvability parity, and scrambling.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::BoardError;
use crate::moves::Move;

/// An immutable sliding-puzzle configuration.
///
/// Tiles are stored row-major as a flat sequence of `side * side` distinct
/// values; the blank is `0`. The side length is derived from the tile count
/// at construction, so one board type serves the 8-puzzle, the 15-puzzle,
/// and any other square size up to 16×16 (tile values are `u8`).
///
/// Boards are values: every transformation ([`apply`](Board::apply),
/// [`successors`](Board::successors)) yields a fresh `Board` and never
/// mutates the receiver. Equality and hashing consider only the tile
/// sequence.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<u8>,
    side: usize,
    blank: usize,
}

impl Board {
    /// Build a board from a flat row-major tile sequence.
    ///
    /// The sequence must have a perfect-square length and contain every
    /// value in `0..len` exactly once.
    pub fn new(tiles: Vec<u8>) -> Result<Self, BoardError> {
        let len = tiles.len();
        let side = len.isqrt();
        if side == 0 || side * side != len {
            return Err(BoardError::NotSquare(len));
        }
        let mut seen = vec![false; len];
        let mut blank = 0;
        for (i, &t) in tiles.iter().enumerate() {
            let v = t as usize;
            if v >= len {
                return Err(BoardError::TileOutOfRange { value: t, len });
            }
            if seen[v] {
                return Err(BoardError::DuplicateTile(t));
            }
            seen[v] = true;
            if v == 0 {
                blank = i;
            }
        }
        Ok(Self { tiles, side, blank })
    }

    /// The canonical goal for a given side length: `1, 2, …, side²-1`
    /// followed by the blank in the bottom-right corner.
    ///
    /// # Panics
    ///
    /// Panics if `side` is not in `1..=16`.
    pub fn solved(side: usize) -> Self {
        assert!((1..=16).contains(&side), "side must be in 1..=16");
        let len = side * side;
        let mut tiles: Vec<u8> = (1..len as u8).collect();
        tiles.push(0);
        Self {
            tiles,
            side,
            blank: len - 1,
        }
    }

    /// A uniformly shuffled board guaranteed solvable to
    /// [`Board::solved(side)`](Board::solved).
    ///
    /// Re-samples until the permutation parity admits a solution.
    pub fn scrambled<R: Rng>(side: usize, rng: &mut R) -> Self {
        let goal = Self::solved(side);
        let mut board = goal.clone();
        loop {
            board.tiles.shuffle(rng);
            if let Some(blank) = board.tiles.iter().position(|&t| t == 0) {
                board.blank = blank;
            }
            if board.is_solvable_to(&goal) {
                return board;
            }
        }
    }

    /// The flat row-major tile sequence.
    #[inline]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Side length of the square grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total tile count (`side * side`), blank included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board holds no tiles. Never true for a constructed board.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Linear index of the blank.
    #[inline]
    pub fn blank(&self) -> usize {
        self.blank
    }

    /// Slide the blank one cell in the given direction, swapping it with
    /// the tile there. Returns `None` when the move would leave the grid.
    pub fn apply(&self, mv: Move) -> Option<Self> {
        let (dr, dc) = mv.delta();
        let side = self.side as i32;
        let row = (self.blank / self.side) as i32 + dr;
        let col = (self.blank % self.side) as i32 + dc;
        if row < 0 || row >= side || col < 0 || col >= side {
            return None;
        }
        let dest = row as usize * self.side + col as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, dest);
        Some(Self {
            tiles,
            side: self.side,
            blank: dest,
        })
    }

    /// All boards one blank slide away, paired with the move that produces
    /// them.
    ///
    /// Emission order is fixed — UP, DOWN, LEFT, RIGHT, skipping directions
    /// that leave the grid — so equal-priority children reach the search
    /// frontier in a stable order.
    pub fn successors(&self) -> Vec<(Move, Self)> {
        let mut out = Vec::with_capacity(4);
        for mv in Move::ALL {
            if let Some(next) = self.apply(mv) {
                out.push((mv, next));
            }
        }
        out
    }

    /// Whether this board can reach `goal` through blank slides.
    ///
    /// Classic parity invariant: each slide is one transposition (blank
    /// included) and moves the blank one cell, so the parity of the
    /// permutation taking this board to the goal must equal the parity of
    /// the blank's taxicab offset from its goal cell. Boards of different
    /// sizes are never mutually reachable.
    pub fn is_solvable_to(&self, goal: &Self) -> bool {
        if self.len() != goal.len() {
            return false;
        }
        let mut goal_pos = vec![0usize; self.len()];
        for (i, &t) in goal.tiles.iter().enumerate() {
            goal_pos[t as usize] = i;
        }
        // Each cell's value mapped to its goal cell, blank included; the
        // inversion count of this sequence has the permutation's parity.
        let perm: Vec<usize> = self.tiles.iter().map(|&t| goal_pos[t as usize]).collect();
        let inversions = count_inversions(&perm);

        let blank_dist = (self.blank / self.side).abs_diff(goal.blank / goal.side)
            + (self.blank % self.side).abs_diff(goal.blank % goal.side);
        (inversions + blank_dist) % 2 == 0
    }
}

fn count_inversions(order: &[usize]) -> usize {
    order
        .iter()
        .enumerate()
        .map(|(i, &a)| order[i + 1..].iter().filter(|&&b| b < a).count())
        .sum()
}

// --- trait impls for Board ---

impl PartialEq for Board {
    /// Element-wise tile equality. `side` and `blank` are derived from the
    /// tiles, so they never disagree between equal sequences.
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.side) {
            for (i, &t) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if t == 0 {
                    write!(f, " .")?;
                } else {
                    write!(f, "{t:2}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tiles.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tiles = Vec::<u8>::deserialize(deserializer)?;
        Board::new(tiles).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let b = Board::new(vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[1,2,3,4,5,6,7,0,8]");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        assert_eq!(back.blank(), 7);
    }

    #[test]
    fn deserialize_rejects_malformed_tiles() {
        assert!(serde_json::from_str::<Board>("[0,1,2]").is_err());
        assert!(serde_json::from_str::<Board>("[0,1,1,2]").is_err());
    }

    #[test]
    fn move_round_trip() {
        let mv = Move::Left;
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }
}
