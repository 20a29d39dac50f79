//! Min-heap entry for Dijkstra's priority queue.

use std::cmp::Ordering;

/// A tentative distance to a node, ordered so that [`std::collections::BinaryHeap`]
/// pops the smallest distance first.
///
/// Equal distances are broken by node index so pop order is deterministic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapItem {
    pub(crate) node: usize,
    pub(crate) distance: f64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed for min-heap
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}
