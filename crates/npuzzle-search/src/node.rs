use npuzzle_core::{Board, Move};

/// Sentinel parent handle marking the root of the search tree.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// One search state in the arena: a board plus path metadata.
///
/// Nodes name their parent by arena index rather than holding a reference,
/// so the frontier and visited set only ever store handles and the tree has
/// no ownership cycles. The whole arena is dropped when the search returns.
pub(crate) struct Node {
    pub(crate) board: Board,
    /// Arena index of the parent, or [`NO_PARENT`] for the root.
    pub(crate) parent: usize,
    /// Move that produced this board from the parent; `None` for the root.
    pub(crate) mv: Option<Move>,
    /// Moves from the root (unit-cost path length).
    pub(crate) depth: u32,
    /// Frontier ordering key, set by the driver's priority formula.
    pub(crate) priority: u32,
}

/// Reference into the node arena, ordered by `priority` for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) id: usize,
    pub(crate) priority: u32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first.
        other.priority.cmp(&self.priority)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
