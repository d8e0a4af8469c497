//! Core types for the vyoma-nav planning library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`VoxelCoord`]: integer 3D cell coordinate on the bounded lattice
//! - [`WorldPoint`]: metric 3D point for world-frame output paths

mod voxel;

pub use voxel::{VoxelCoord, WorldPoint};
