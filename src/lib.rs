//! # Vyoma-Nav: 3D Voxel Route Planning
//!
//! A path-planning library for aerial navigation over a voxelized
//! occupancy field: given a bounded 3D lattice of blocked/free cells and a
//! start/goal pair, it computes a collision-free route through free space.
//!
//! ## Features
//!
//! - **Grid A\***: classic shortest-path search over 26-connected voxel
//!   neighbors with a fixed axis-count move-cost table
//! - **Theta\***: any-angle search that shortcuts straight to a node's
//!   grandparent whenever line of sight is clear
//! - **String pulling**: line-of-sight smoothing that shortens an A* route
//!   without leaving the validated grid
//! - **Safety margins**: obstacle dilation baked into the occupancy field
//!
//! ## Quick Start
//!
//! ```rust
//! use vyoma_nav::core::VoxelCoord;
//! use vyoma_nav::grid::VoxelGrid;
//! use vyoma_nav::pathfinding::{find_path, find_path_any_angle, PathSmoother};
//!
//! // A small scene: one box obstacle, inflated by a one-cell margin
//! let mut grid = VoxelGrid::new(20, 20, 20);
//! grid.block_region(VoxelCoord::new(8, 0, 0), VoxelCoord::new(11, 15, 12));
//! let grid = grid.inflate(1);
//!
//! let start = VoxelCoord::new(2, 2, 2);
//! let goal = VoxelCoord::new(17, 17, 10);
//!
//! let lattice = find_path(&grid, start, goal);
//! assert!(lattice.success);
//!
//! let shortcut = PathSmoother::new(&grid).smooth(&lattice.path);
//! assert!(shortcut.len() <= lattice.path.len());
//!
//! let any_angle = find_path_any_angle(&grid, start, goal);
//! assert!(any_angle.success);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: fundamental types ([`VoxelCoord`], [`WorldPoint`])
//! - [`grid`]: the occupancy field ([`VoxelGrid`])
//! - [`pathfinding`]: the search core (planners, line of sight, smoothing)
//! - [`config`]: YAML-backed configuration
//!
//! Searches are single-threaded and self-contained: each call owns its
//! frontier and per-cell records, runs to completion, and leaves no
//! residual state. The grid must not be mutated during a search.

pub mod config;
pub mod core;
pub mod grid;
pub mod pathfinding;

pub use crate::core::{VoxelCoord, WorldPoint};
pub use config::VyomaConfig;
pub use grid::VoxelGrid;
pub use pathfinding::{
    find_path, find_path_any_angle, line_of_sight, path_exists, AStarConfig, AStarPlanner,
    PathFailure, PathResult, PathSmoother, ThetaStarConfig, ThetaStarPlanner,
};
