//! Occupancy grid implementation.
//!
//! This module provides the voxel occupancy field the planners search over:
//!
//! - [`VoxelGrid`]: flat boolean storage with coordinate conversion,
//!   box-obstacle construction, and safety-margin inflation

mod storage;

pub use storage::VoxelGrid;
