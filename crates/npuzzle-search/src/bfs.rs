use std::collections::{HashMap, HashSet, VecDeque};

use npuzzle_core::{Board, Move};

/// Plain breadth-first search over blank slides.
///
/// Optimal for unit-cost moves but uninformed, so practical only on small
/// boards; useful as an oracle when checking the informed drivers. Same
/// output contract as [`solve`](crate::solve): `None` means the reachable
/// space was exhausted, `Some(vec![])` means the boards were already equal.
pub fn solve_bfs(initial: &Board, goal: &Board) -> Option<Vec<Move>> {
    if initial.len() != goal.len() {
        return None;
    }
    if initial == goal {
        return Some(Vec::new());
    }

    let mut seen: HashSet<Board> = HashSet::new();
    let mut prev: HashMap<Board, (Board, Move)> = HashMap::new();
    let mut queue: VecDeque<Board> = VecDeque::new();
    seen.insert(initial.clone());
    queue.push_back(initial.clone());

    while let Some(current) = queue.pop_front() {
        for (mv, child) in current.successors() {
            if !seen.insert(child.clone()) {
                continue;
            }
            prev.insert(child.clone(), (current.clone(), mv));
            if child == *goal {
                return Some(walk_back(&prev, &child));
            }
            queue.push_back(child);
        }
    }
    None
}

fn walk_back(prev: &HashMap<Board, (Board, Move)>, end: &Board) -> Vec<Move> {
    let mut path = Vec::new();
    let mut cur = end;
    while let Some((parent, mv)) = prev.get(cur) {
        path.push(*mv);
        cur = parent;
    }
    path.reverse();
    path
}
