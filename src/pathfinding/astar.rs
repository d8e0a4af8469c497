//! Grid-constrained A* search.
//!
//! Classic A* over the 26-connected voxel lattice with:
//! - Fixed move costs by axis count (1, sqrt(2), sqrt(3))
//! - Manhattan distance heuristic
//! - Lazy-deletion frontier (stale entries skipped at pop time)

use super::frontier::Frontier;
use super::types::{
    move_cost, reconstruct_path, PathFailure, PathResult, NEIGHBORS_26, NEIGHBORS_6,
};
use crate::core::VoxelCoord;
use crate::grid::VoxelGrid;
use log::{debug, trace};
use std::collections::HashMap;

/// A* pathfinding configuration
#[derive(Clone, Debug)]
pub struct AStarConfig {
    /// Allow diagonal movement (26-connected vs 6-connected)
    pub allow_diagonal: bool,
    /// Maximum number of nodes to expand before giving up
    pub max_expansions: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            max_expansions: 10_000_000,
        }
    }
}

/// A* pathfinder over a voxel occupancy grid
pub struct AStarPlanner<'a> {
    grid: &'a VoxelGrid,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a VoxelGrid, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a VoxelGrid) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// Find a path from start to goal (voxel coordinates)
    pub fn find_path(&self, start: VoxelCoord, goal: VoxelCoord) -> PathResult {
        trace!(
            "[AStar] find_path: start=({},{},{}) goal=({},{},{})",
            start.x,
            start.y,
            start.z,
            goal.x,
            goal.y,
            goal.z
        );

        // Check bounds
        if !self.grid.is_valid_coord(start) || !self.grid.is_valid_coord(goal) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }

        // Check start and goal occupancy
        if self.grid.is_blocked(start) {
            debug!(
                "[AStar] FAILED: StartBlocked at ({},{},{})",
                start.x, start.y, start.z
            );
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if self.grid.is_blocked(goal) {
            debug!(
                "[AStar] FAILED: GoalBlocked at ({},{},{})",
                goal.x, goal.y, goal.z
            );
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        // A* search
        let mut frontier = Frontier::new();
        let mut came_from: HashMap<VoxelCoord, VoxelCoord> = HashMap::new();
        let mut g_scores: HashMap<VoxelCoord, f32> = HashMap::new();

        frontier.push(start, 0.0, self.heuristic(start, goal));
        g_scores.insert(start, 0.0);

        let mut nodes_expanded = 0;

        while let Some(current) = frontier.pop() {
            // Skip entries superseded by a cheaper route (lazy deletion)
            if let Some(&best) = g_scores.get(&current.coord) {
                if current.g_cost > best {
                    continue;
                }
            }

            nodes_expanded += 1;

            if nodes_expanded > self.config.max_expansions {
                debug!(
                    "[AStar] FAILED: MaxExpansionsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxExpansionsExceeded, nodes_expanded);
            }

            // Goal reached
            if current.coord == goal {
                return self.reconstruct(&came_from, goal, current.g_cost, nodes_expanded);
            }

            // Explore neighbors
            let offsets: &[VoxelCoord] = if self.config.allow_diagonal {
                &NEIGHBORS_26
            } else {
                &NEIGHBORS_6
            };

            for &offset in offsets {
                let neighbor = current.coord + offset;
                if !self.grid.is_traversable(neighbor) {
                    continue;
                }

                let tentative_g = current.g_cost + move_cost(offset);

                let best_g = g_scores.get(&neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative_g < best_g {
                    came_from.insert(neighbor, current.coord);
                    g_scores.insert(neighbor, tentative_g);

                    let h = self.heuristic(neighbor, goal);
                    frontier.push(neighbor, tentative_g, tentative_g + h);
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Manhattan distance heuristic
    fn heuristic(&self, from: VoxelCoord, to: VoxelCoord) -> f32 {
        from.manhattan_distance(&to) as f32
    }

    fn reconstruct(
        &self,
        came_from: &HashMap<VoxelCoord, VoxelCoord>,
        goal: VoxelCoord,
        cost: f32,
        nodes_expanded: usize,
    ) -> PathResult {
        let path = reconstruct_path(came_from, goal);
        let path_world = path.iter().map(|c| self.grid.voxel_to_world(*c)).collect();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
            path.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            path,
            path_world,
            cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
