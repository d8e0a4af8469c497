//! Any-angle Theta* search.
//!
//! Same frontier/heuristic skeleton as the grid A* planner, but relaxation
//! consults the line-of-sight oracle: a neighbor visible from the current
//! cell's parent connects straight to that parent at true Euclidean cost,
//! bypassing the lattice; occluded neighbors fall back to the grid rule.
//! Resulting paths are validated in the grid but not limited to
//! 26-connected geometry.

use super::frontier::Frontier;
use super::line_of_sight::line_of_sight;
use super::types::{move_cost, reconstruct_path, PathFailure, PathResult, NEIGHBORS_26};
use crate::core::VoxelCoord;
use crate::grid::VoxelGrid;
use log::{debug, trace};
use std::collections::HashMap;

/// Theta* pathfinding configuration
#[derive(Clone, Debug)]
pub struct ThetaStarConfig {
    /// Maximum number of nodes to expand before giving up
    pub max_expansions: usize,
}

impl Default for ThetaStarConfig {
    fn default() -> Self {
        Self {
            max_expansions: 10_000_000,
        }
    }
}

/// Theta* pathfinder over a voxel occupancy grid
pub struct ThetaStarPlanner<'a> {
    grid: &'a VoxelGrid,
    config: ThetaStarConfig,
}

impl<'a> ThetaStarPlanner<'a> {
    /// Create a new Theta* planner
    pub fn new(grid: &'a VoxelGrid, config: ThetaStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a VoxelGrid) -> Self {
        Self::new(grid, ThetaStarConfig::default())
    }

    /// Find an any-angle path from start to goal (voxel coordinates)
    pub fn find_path(&self, start: VoxelCoord, goal: VoxelCoord) -> PathResult {
        trace!(
            "[ThetaStar] find_path: start=({},{},{}) goal=({},{},{})",
            start.x,
            start.y,
            start.z,
            goal.x,
            goal.y,
            goal.z
        );

        // Check bounds
        if !self.grid.is_valid_coord(start) || !self.grid.is_valid_coord(goal) {
            debug!("[ThetaStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }

        // Check start and goal occupancy
        if self.grid.is_blocked(start) {
            debug!(
                "[ThetaStar] FAILED: StartBlocked at ({},{},{})",
                start.x, start.y, start.z
            );
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if self.grid.is_blocked(goal) {
            debug!(
                "[ThetaStar] FAILED: GoalBlocked at ({},{},{})",
                goal.x, goal.y, goal.z
            );
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

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
                    "[ThetaStar] FAILED: MaxExpansionsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxExpansionsExceeded, nodes_expanded);
            }

            // Goal reached
            if current.coord == goal {
                return self.reconstruct(&came_from, goal, current.g_cost, nodes_expanded);
            }

            // The start has no parent record; it acts as its own parent so
            // early expansions can still shortcut straight back to it
            let parent = came_from.get(&current.coord).copied().unwrap_or(start);
            let parent_g = g_scores[&parent];

            for &offset in NEIGHBORS_26.iter() {
                let neighbor = current.coord + offset;
                if !self.grid.is_traversable(neighbor) {
                    continue;
                }

                let best_g = g_scores.get(&neighbor).copied().unwrap_or(f32::INFINITY);

                if line_of_sight(self.grid, parent, neighbor) {
                    // Path-2 update: connect straight to the grandparent,
                    // bypassing the current cell
                    let tentative_g = parent_g + parent.distance(&neighbor);
                    if tentative_g < best_g {
                        came_from.insert(neighbor, parent);
                        g_scores.insert(neighbor, tentative_g);

                        let h = self.heuristic(neighbor, goal);
                        frontier.push(neighbor, tentative_g, tentative_g + h);
                    }
                } else {
                    // Occluded: fall back to the grid-constrained rule
                    let tentative_g = current.g_cost + move_cost(offset);
                    if tentative_g < best_g {
                        came_from.insert(neighbor, current.coord);
                        g_scores.insert(neighbor, tentative_g);

                        let h = self.heuristic(neighbor, goal);
                        frontier.push(neighbor, tentative_g, tentative_g + h);
                    }
                }
            }
        }

        debug!(
            "[ThetaStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Euclidean distance heuristic
    fn heuristic(&self, from: VoxelCoord, to: VoxelCoord) -> f32 {
        from.distance(&to)
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
            "[ThetaStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
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
