//! Route planning over the voxel occupancy grid.
//!
//! This module provides the search core:
//!
//! - **Grid A\***: shortest lattice-constrained paths (26-connected)
//! - **Theta\***: any-angle paths validated by line of sight
//! - **Path smoothing**: string-pulling shortcuts over an A* route
//! - **Line of sight**: sampled visibility between two cells
//!
//! ## Grid A*
//!
//! ```rust,ignore
//! use vyoma_nav::pathfinding::{AStarPlanner, AStarConfig};
//!
//! let planner = AStarPlanner::new(&grid, AStarConfig::default());
//! let result = planner.find_path(start, goal);
//! if result.success {
//!     println!("Path found with {} waypoints", result.path.len());
//! }
//! ```
//!
//! ## Any-angle routes
//!
//! ```rust,ignore
//! use vyoma_nav::pathfinding::{PathSmoother, ThetaStarPlanner};
//!
//! // Either smooth an A* route...
//! let smoother = PathSmoother::new(&grid);
//! let shortcut = smoother.smooth(&result.path);
//!
//! // ...or search any-angle directly
//! let direct = ThetaStarPlanner::with_defaults(&grid).find_path(start, goal);
//! ```

mod astar;
mod frontier;
mod line_of_sight;
mod smoothing;
mod theta_star;
mod types;

pub use astar::{AStarConfig, AStarPlanner};
pub use line_of_sight::line_of_sight;
pub use smoothing::{path_length, path_length_world, PathSmoother};
pub use theta_star::{ThetaStarConfig, ThetaStarPlanner};
pub use types::{PathFailure, PathResult, SQRT_3};

use crate::core::VoxelCoord;
use crate::grid::VoxelGrid;

/// Quick lattice path finding with default configuration
pub fn find_path(grid: &VoxelGrid, start: VoxelCoord, goal: VoxelCoord) -> PathResult {
    AStarPlanner::with_defaults(grid).find_path(start, goal)
}

/// Quick any-angle path finding with default configuration
pub fn find_path_any_angle(grid: &VoxelGrid, start: VoxelCoord, goal: VoxelCoord) -> PathResult {
    ThetaStarPlanner::with_defaults(grid).find_path(start, goal)
}

/// Check if a path exists (no cheaper than a full search; convenience only)
pub fn path_exists(grid: &VoxelGrid, start: VoxelCoord, goal: VoxelCoord) -> bool {
    find_path(grid, start, goal).success
}
