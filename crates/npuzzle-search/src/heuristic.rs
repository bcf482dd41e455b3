use npuzzle_core::Board;

/// Sum of taxicab distances from each non-blank tile to its goal cell.
///
/// Admissible and consistent for blank slides: one slide moves exactly one
/// tile by one cell, so the estimate never overestimates the remaining
/// move count. The blank is excluded from the sum.
///
/// Both boards must have the same tile count.
pub fn manhattan(board: &Board, goal: &Board) -> u32 {
    debug_assert_eq!(board.len(), goal.len());
    let side = board.side();
    let mut goal_pos = vec![0usize; goal.len()];
    for (i, &t) in goal.tiles().iter().enumerate() {
        goal_pos[t as usize] = i;
    }
    let mut total = 0u32;
    for (i, &t) in board.tiles().iter().enumerate() {
        if t == 0 {
            continue;
        }
        let gi = goal_pos[t as usize];
        total += ((i / side).abs_diff(gi / side) + (i % side).abs_diff(gi % side)) as u32;
    }
    total
}

/// Number of non-blank tiles not on their goal cell (Hamming distance).
///
/// Admissible but weaker than [`manhattan`]; kept for comparison and
/// testing rather than used by the shipped drivers.
pub fn misplaced(board: &Board, goal: &Board) -> u32 {
    debug_assert_eq!(board.len(), goal.len());
    board
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|&(&b, &g)| b != 0 && b != g)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: &[u8]) -> Board {
        Board::new(tiles.to_vec()).unwrap()
    }

    #[test]
    fn zero_at_goal() {
        let g = Board::solved(3);
        assert_eq!(manhattan(&g, &g), 0);
        assert_eq!(misplaced(&g, &g), 0);
    }

    #[test]
    fn single_tile_off_by_one() {
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let g = Board::solved(3);
        assert_eq!(manhattan(&b, &g), 1);
        assert_eq!(misplaced(&b, &g), 1);
    }

    #[test]
    fn blank_is_excluded() {
        // Blank displaced two cells but every tile off by one: the blank's
        // own offset must not contribute.
        let b = board(&[0, 1, 2, 3]);
        let g = Board::solved(2);
        assert_eq!(manhattan(&b, &g), 4);
        assert_eq!(misplaced(&b, &g), 3);
    }

    #[test]
    fn respects_arbitrary_goals() {
        // Goal is not the canonical layout; distances are goal-relative.
        let b = board(&[1, 2, 3, 0]);
        let g = board(&[2, 1, 3, 0]);
        assert_eq!(manhattan(&b, &g), 2);
        assert_eq!(misplaced(&b, &g), 2);
    }

    #[test]
    fn misplaced_never_exceeds_manhattan() {
        let g = Board::solved(3);
        let b = board(&[8, 6, 7, 2, 5, 4, 3, 0, 1]);
        assert!(misplaced(&b, &g) <= manhattan(&b, &g));
    }
}
