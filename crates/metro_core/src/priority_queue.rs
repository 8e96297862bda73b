use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

/// Frontier of the shortest path search backed by a binary heap.
/// The heap is a min heap, so the entry with the lowest tentative distance
/// is always at the top.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<FrontierEntry>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct FrontierEntry {
    pub distance: Weight,
    pub station: NodeIndex,
}

impl FrontierEntry {
    pub fn new(distance: Weight, station: NodeIndex) -> Self {
        FrontierEntry { distance, station }
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse the ordering so that the smallest element is at the top of the heap.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}
