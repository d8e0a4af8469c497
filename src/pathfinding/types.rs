//! Search types shared by the grid and any-angle planners.

use crate::core::{VoxelCoord, WorldPoint};
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

/// Canonical cost of a move that changes all three axes
pub const SQRT_3: f32 = 1.732_050_8;

/// The 26-connected neighbor offsets (all of {-1,0,1}^3 except zero)
pub(super) const NEIGHBORS_26: [VoxelCoord; 26] = [
    VoxelCoord::new(-1, -1, -1),
    VoxelCoord::new(-1, -1, 0),
    VoxelCoord::new(-1, -1, 1),
    VoxelCoord::new(-1, 0, -1),
    VoxelCoord::new(-1, 0, 0),
    VoxelCoord::new(-1, 0, 1),
    VoxelCoord::new(-1, 1, -1),
    VoxelCoord::new(-1, 1, 0),
    VoxelCoord::new(-1, 1, 1),
    VoxelCoord::new(0, -1, -1),
    VoxelCoord::new(0, -1, 0),
    VoxelCoord::new(0, -1, 1),
    VoxelCoord::new(0, 0, -1),
    VoxelCoord::new(0, 0, 1),
    VoxelCoord::new(0, 1, -1),
    VoxelCoord::new(0, 1, 0),
    VoxelCoord::new(0, 1, 1),
    VoxelCoord::new(1, -1, -1),
    VoxelCoord::new(1, -1, 0),
    VoxelCoord::new(1, -1, 1),
    VoxelCoord::new(1, 0, -1),
    VoxelCoord::new(1, 0, 0),
    VoxelCoord::new(1, 0, 1),
    VoxelCoord::new(1, 1, -1),
    VoxelCoord::new(1, 1, 0),
    VoxelCoord::new(1, 1, 1),
];

/// The 6 cardinal neighbor offsets (one axis at a time)
pub(super) const NEIGHBORS_6: [VoxelCoord; 6] = [
    VoxelCoord::new(-1, 0, 0),
    VoxelCoord::new(1, 0, 0),
    VoxelCoord::new(0, -1, 0),
    VoxelCoord::new(0, 1, 0),
    VoxelCoord::new(0, 0, -1),
    VoxelCoord::new(0, 0, 1),
];

/// Cost of a single lattice move, fixed by how many axes the offset
/// changes: 1, sqrt(2), or sqrt(3). These are canonical constants, not
/// recomputed Euclidean lengths.
#[inline]
pub(super) fn move_cost(offset: VoxelCoord) -> f32 {
    match offset.active_axes() {
        0 => 0.0,
        1 => 1.0,
        2 => std::f32::consts::SQRT_2,
        _ => SQRT_3,
    }
}

/// A node in the search frontier
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub coord: VoxelCoord,
    pub g_cost: f32, // Cost from start
    pub f_cost: f32, // g_cost + heuristic
}

impl Eq for SearchNode {}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a path search
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Path as voxel coordinates, start to goal (empty if no path found)
    pub path: Vec<VoxelCoord>,
    /// Path as world coordinates (cell centers)
    pub path_world: Vec<WorldPoint>,
    /// Total path cost under the search's cost model
    pub cost: f32,
    /// Number of frontier pops during the search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            path_world: Vec::new(),
            cost: f32::INFINITY,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }

    /// Geometric path length in meters (axis-weighted via the grid's
    /// cell size, summed over world-frame segments)
    pub fn length_meters(&self) -> f32 {
        if self.path_world.len() < 2 {
            return 0.0;
        }

        let mut total = 0.0;
        for i in 1..self.path_world.len() {
            total += self.path_world[i - 1].distance(&self.path_world[i]);
        }
        total
    }
}

/// Reason for path failure
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathFailure {
    /// Start cell is blocked
    #[error("start cell is blocked")]
    StartBlocked,
    /// Goal cell is blocked
    #[error("goal cell is blocked")]
    GoalBlocked,
    /// Frontier exhausted without reaching the goal
    #[error("no route connects start and goal")]
    NoPath,
    /// Expansion budget exhausted before the goal was reached
    #[error("expansion budget exhausted")]
    MaxExpansionsExceeded,
    /// Start or goal lies outside the grid extents
    #[error("start or goal is outside the grid extents")]
    OutOfBounds,
}

/// Walk parent links from the goal back to the start (the one cell with no
/// parent record) and reverse into start-to-goal order.
pub(super) fn reconstruct_path(
    came_from: &HashMap<VoxelCoord, VoxelCoord>,
    goal: VoxelCoord,
) -> Vec<VoxelCoord> {
    let mut path = Vec::new();
    let mut current = goal;

    while let Some(&prev) = came_from.get(&current) {
        path.push(current);
        current = prev;
    }
    path.push(current); // Add start
    path.reverse();
    path
}
