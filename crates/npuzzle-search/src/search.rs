//! The shared best-first driver behind A* and Greedy Best-First, plus the
//! [`Algorithm`] selector and instance validation.

use std::collections::{BinaryHeap, HashSet};
use std::fmt;
use std::str::FromStr;

use log::debug;
use npuzzle_core::{Board, Move};

use crate::heuristic::manhattan;
use crate::node::{NO_PARENT, Node, OpenEntry};

/// Search strategy tag. Both variants run the same best-first loop and
/// differ only in the frontier priority formula.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// `priority = depth + manhattan` — returns a shortest move sequence.
    AStar,
    /// `priority = manhattan` — converges faster on average, but the
    /// returned sequence may be longer than necessary.
    GreedyBestFirst,
}

impl Algorithm {
    /// Frontier priority of a state at `depth` with heuristic value `h`.
    #[inline]
    pub fn priority(self, depth: u32, h: u32) -> u32 {
        match self {
            Algorithm::AStar => depth + h,
            Algorithm::GreedyBestFirst => h,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Algorithm::AStar => "A*",
            Algorithm::GreedyBestFirst => "Greedy Best First",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parse the UI selector strings `"A*"` and `"Greedy Best First"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A*" => Ok(Algorithm::AStar),
            "Greedy Best First" => Ok(Algorithm::GreedyBestFirst),
            other => Err(ParseAlgorithmError(other.to_string())),
        }
    }
}

/// Error returned when an algorithm selector string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d}, expected \u{201c}A*\u{201d} or \u{201c}Greedy Best First\u{201d}",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Errors for a malformed initial/goal pair.
///
/// Individually malformed boards are already rejected by
/// [`Board::new`](npuzzle_core::Board::new); since construction guarantees
/// the tile set is exactly `0..len`, two boards of equal length always share
/// a tile multiset, and only the lengths can disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Initial and goal boards have different tile counts.
    SizeMismatch { initial: usize, goal: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { initial, goal } => write!(
                f,
                "invalid puzzle instance: initial board has {initial} tiles but goal has {goal}"
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// Find a blank-slide sequence from `initial` to `goal`.
///
/// Returns:
///
/// - `Ok(Some(moves))` — applying `moves` to `initial` in order yields
///   `goal` exactly. An empty sequence means the boards were already equal.
/// - `Ok(None)` — the reachable space was exhausted without finding `goal`
///   (opposite permutation parity). Expected outcome, not an error.
/// - `Err(_)` — the pair is malformed (mismatched sizes), rejected before
///   any search.
///
/// The driver never re-expands a board: once popped for expansion a board
/// enters the visited set and later frontier entries for it are skipped,
/// even if they carry a lower cost. With a consistent heuristic this still
/// yields optimal paths under [`Algorithm::AStar`].
///
/// The search runs synchronously to completion with no step limit; callers
/// needing bounded latency must impose their own cutoff.
pub fn solve(
    initial: &Board,
    goal: &Board,
    algorithm: Algorithm,
) -> Result<Option<Vec<Move>>, SolveError> {
    if initial.len() != goal.len() {
        return Err(SolveError::SizeMismatch {
            initial: initial.len(),
            goal: goal.len(),
        });
    }

    // Fresh per invocation: the engine keeps no state between calls.
    let mut arena: Vec<Node> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut visited: HashSet<Board> = HashSet::new();

    arena.push(Node {
        board: initial.clone(),
        parent: NO_PARENT,
        mv: None,
        depth: 0,
        priority: algorithm.priority(0, manhattan(initial, goal)),
    });
    open.push(OpenEntry {
        id: 0,
        priority: arena[0].priority,
    });

    let mut expanded: usize = 0;

    while let Some(OpenEntry { id, .. }) = open.pop() {
        if arena[id].board == *goal {
            let path = reconstruct_path(&arena, id);
            debug!(
                "{algorithm}: {}-move solution, {expanded} expansions, {} states",
                path.len(),
                arena.len()
            );
            return Ok(Some(path));
        }

        if !visited.insert(arena[id].board.clone()) {
            // Reached again through a different frontier entry.
            continue;
        }
        expanded += 1;

        let depth = arena[id].depth + 1;
        for (mv, child) in arena[id].board.successors() {
            if visited.contains(&child) {
                continue;
            }
            let priority = algorithm.priority(depth, manhattan(&child, goal));
            let child_id = arena.len();
            arena.push(Node {
                board: child,
                parent: id,
                mv: Some(mv),
                depth,
                priority,
            });
            open.push(OpenEntry {
                id: child_id,
                priority,
            });
        }
    }

    debug!("{algorithm}: frontier exhausted after {expanded} expansions");
    Ok(None)
}

/// Walk parent handles from a goal-matching node back to the root,
/// collecting move labels, then reverse into root-to-goal order. The root
/// contributes no label.
fn reconstruct_path(arena: &[Node], mut id: usize) -> Vec<Move> {
    let mut path = Vec::new();
    loop {
        let node = &arena[id];
        let Some(mv) = node.mv else { break };
        path.push(mv);
        id = node.parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::solve_bfs;

    fn board(tiles: &[u8]) -> Board {
        Board::new(tiles.to_vec()).unwrap()
    }

    /// Replay a move sequence from `start`; panics on an illegal move.
    fn replay(start: &Board, moves: &[Move]) -> Board {
        let mut b = start.clone();
        for &mv in moves {
            b = b.apply(mv).unwrap();
        }
        b
    }

    const BOTH: [Algorithm; 2] = [Algorithm::AStar, Algorithm::GreedyBestFirst];

    #[test]
    fn priority_formulas() {
        assert_eq!(Algorithm::AStar.priority(3, 5), 8);
        assert_eq!(Algorithm::GreedyBestFirst.priority(3, 5), 5);
    }

    #[test]
    fn selector_strings_round_trip() {
        for alg in BOTH {
            assert_eq!(alg.to_string().parse::<Algorithm>(), Ok(alg));
        }
        assert!("a-star".parse::<Algorithm>().is_err());
    }

    #[test]
    fn already_solved_returns_empty_sequence() {
        let g = Board::solved(3);
        for alg in BOTH {
            assert_eq!(solve(&g, &g, alg), Ok(Some(Vec::new())));
        }
    }

    #[test]
    fn blank_one_step_left_of_goal_slot() {
        let initial = board(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let goal = Board::solved(3);
        for alg in BOTH {
            assert_eq!(solve(&initial, &goal, alg), Ok(Some(vec![Move::Right])));
        }
    }

    #[test]
    fn mismatched_sizes_are_rejected_before_search() {
        let small = Board::solved(2);
        let big = Board::solved(3);
        assert_eq!(
            solve(&small, &big, Algorithm::AStar),
            Err(SolveError::SizeMismatch {
                initial: 4,
                goal: 9
            })
        );
    }

    #[test]
    fn opposite_parity_exhausts_to_none() {
        // Two tiles transposed: the other parity class of the 2x2 space.
        let initial = board(&[2, 1, 3, 0]);
        let goal = Board::solved(2);
        for alg in BOTH {
            assert_eq!(solve(&initial, &goal, alg), Ok(None));
        }
    }

    #[test]
    fn returned_sequences_reach_the_goal() {
        let goal = Board::solved(3);
        let scrambles: [&[u8]; 3] = [
            &[1, 2, 3, 4, 5, 6, 0, 7, 8],
            &[1, 2, 3, 0, 5, 6, 4, 7, 8],
            &[2, 8, 3, 1, 5, 6, 4, 7, 0],
        ];
        for tiles in scrambles {
            let initial = board(tiles);
            for alg in BOTH {
                let moves = solve(&initial, &goal, alg).unwrap().unwrap();
                assert_eq!(replay(&initial, &moves), goal, "{alg} on {tiles:?}");
            }
        }
    }

    #[test]
    fn astar_matches_bfs_optimum() {
        let goal = Board::solved(3);
        let scrambles: [&[u8]; 4] = [
            &[1, 2, 3, 4, 5, 6, 7, 0, 8],
            &[1, 2, 3, 4, 5, 6, 0, 7, 8],
            &[1, 2, 3, 5, 0, 6, 4, 7, 8],
            &[2, 8, 3, 1, 5, 6, 4, 7, 0],
        ];
        for tiles in scrambles {
            let initial = board(tiles);
            let astar = solve(&initial, &goal, Algorithm::AStar).unwrap().unwrap();
            let optimal = solve_bfs(&initial, &goal).unwrap();
            assert_eq!(astar.len(), optimal.len(), "on {tiles:?}");
        }
    }

    #[test]
    fn greedy_never_beats_optimal() {
        let goal = Board::solved(3);
        let initial = board(&[2, 8, 3, 1, 5, 6, 4, 7, 0]);
        let greedy = solve(&initial, &goal, Algorithm::GreedyBestFirst)
            .unwrap()
            .unwrap();
        let optimal = solve_bfs(&initial, &goal).unwrap();
        assert!(greedy.len() >= optimal.len());
        assert_eq!(replay(&initial, &greedy), goal);
    }

    #[test]
    fn solves_toward_non_canonical_goal() {
        let goal = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let initial = board(&[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        let moves = solve(&initial, &goal, Algorithm::AStar).unwrap().unwrap();
        assert_eq!(moves, vec![Move::Left]);
    }

    #[test]
    fn solves_a_15_puzzle_instance() {
        // Bottom row rotated: a short 15-puzzle case.
        let initial = board(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15]);
        let goal = Board::solved(4);
        let moves = solve(&initial, &goal, Algorithm::AStar).unwrap().unwrap();
        assert_eq!(moves, vec![Move::Right]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for alg in [Algorithm::AStar, Algorithm::GreedyBestFirst] {
            let json = serde_json::to_string(&alg).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, alg);
        }
    }
}
