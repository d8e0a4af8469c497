//! Path smoothing by string pulling.
//!
//! Post-processes a lattice path into a shorter any-angle route: anchored
//! at the goal, repeatedly jump to the earliest path cell visible from the
//! anchor until the start is reached. Output waypoints are a subsequence of
//! the input cells, and the geometric length never increases.

use super::line_of_sight::line_of_sight;
use crate::core::{VoxelCoord, WorldPoint};
use crate::grid::VoxelGrid;

/// String-pulling path smoother
pub struct PathSmoother<'a> {
    grid: &'a VoxelGrid,
}

impl<'a> PathSmoother<'a> {
    /// Create a new smoother over the given grid
    pub fn new(grid: &'a VoxelGrid) -> Self {
        Self { grid }
    }

    /// Shorten a lattice path with line-of-sight shortcuts.
    ///
    /// Scanning the remaining start-ward cells in path order, the earliest
    /// visible cell is the longest available shortcut, so each jump is
    /// maximal. Paths of two or fewer cells are returned unchanged.
    pub fn smooth(&self, path: &[VoxelCoord]) -> Vec<VoxelCoord> {
        if path.len() <= 2 {
            return path.to_vec();
        }

        let mut waypoints = vec![*path.last().unwrap()];
        let mut anchor_idx = path.len() - 1;

        while anchor_idx > 0 {
            let anchor = path[anchor_idx];
            // The adjacent predecessor is always visible, so the scan
            // cannot stall
            let next_idx = path[..anchor_idx]
                .iter()
                .position(|&candidate| line_of_sight(self.grid, anchor, candidate))
                .unwrap_or(anchor_idx - 1);

            waypoints.push(path[next_idx]);
            anchor_idx = next_idx;
        }

        waypoints.reverse();
        waypoints
    }
}

/// Total geometric path length under a per-axis metric cell size
pub fn path_length(path: &[VoxelCoord], cell_size: WorldPoint) -> f32 {
    path.windows(2)
        .map(|w| {
            let dx = (w[1].x - w[0].x) as f32 * cell_size.x;
            let dy = (w[1].y - w[0].y) as f32 * cell_size.y;
            let dz = (w[1].z - w[0].z) as f32 * cell_size.z;
            (dx * dx + dy * dy + dz * dz).sqrt()
        })
        .sum()
}

/// Total length of a world-frame polyline
pub fn path_length_world(path: &[WorldPoint]) -> f32 {
    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
