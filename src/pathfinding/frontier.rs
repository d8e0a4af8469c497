//! Min-priority frontier (open set) for the planners.
//!
//! A thin wrapper over a binary heap ordered by f-cost. Cheaper routes to a
//! cell push a fresh entry instead of mutating the old one (lazy deletion);
//! the planners detect stale pops by comparing the popped g-cost against
//! their per-cell best-g map and skip them silently.

use super::types::SearchNode;
use crate::core::VoxelCoord;
use std::collections::BinaryHeap;

/// Priority-ordered set of discovered-but-not-finalized cells.
#[derive(Debug, Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<SearchNode>,
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Insert a cell with the given costs. Duplicate entries for the same
    /// cell are allowed; only the cheapest is authoritative.
    #[inline]
    pub fn push(&mut self, coord: VoxelCoord, g_cost: f32, f_cost: f32) {
        self.heap.push(SearchNode {
            coord,
            g_cost,
            f_cost,
        });
    }

    /// Remove and return the entry with the lowest f-cost. Ties break in
    /// unspecified order.
    #[inline]
    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
