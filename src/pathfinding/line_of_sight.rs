//! Line-of-sight test between two voxels.
//!
//! Samples the straight segment between two cell centers against the grid
//! with a fixed-step ray march. This is the visibility primitive behind
//! both string-pulling smoothing and the Theta* shortcut rule.

use crate::core::VoxelCoord;
use crate::grid::VoxelGrid;

/// Is the straight segment between `s1` and `s2` unobstructed?
///
/// The segment is parametrized over `max(|dx|, |dy|, |dz|)` equal
/// increments; each advancing sample is truncated to a cell and checked
/// against the grid. Samples outside the grid extents never block.
///
/// A zero-length segment (`s1 == s2`) is trivially clear.
///
/// This is an aliased fixed-step march, not a supercover traversal: a long
/// near-diagonal segment can step past a thin single-cell obstacle.
pub fn line_of_sight(grid: &VoxelGrid, s1: VoxelCoord, s2: VoxelCoord) -> bool {
    let delta = s2 - s1;
    let steps = delta.x.abs().max(delta.y.abs()).max(delta.z.abs());
    if steps == 0 {
        return true;
    }

    let step_x = delta.x as f32 / steps as f32;
    let step_y = delta.y as f32 / steps as f32;
    let step_z = delta.z as f32 / steps as f32;

    let mut x = s1.x as f32;
    let mut y = s1.y as f32;
    let mut z = s1.z as f32;

    for _ in 0..steps {
        x += step_x;
        y += step_y;
        z += step_z;
        let sample = VoxelCoord::new(x as i32, y as i32, z as i32);
        if grid.is_blocked(sample) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_segment_is_clear() {
        let mut grid = VoxelGrid::new(3, 3, 3);
        let c = VoxelCoord::new(1, 1, 1);
        grid.set_blocked(c, true);
        // Even a blocked cell sees itself; no samples are taken
        assert!(line_of_sight(&grid, c, c));
    }

    #[test]
    fn test_axis_aligned_corridor_clear() {
        let grid = VoxelGrid::new(10, 3, 3);
        assert!(line_of_sight(
            &grid,
            VoxelCoord::new(0, 1, 1),
            VoxelCoord::new(9, 1, 1)
        ));
    }

    #[test]
    fn test_blocked_midpoint() {
        let mut grid = VoxelGrid::new(10, 3, 3);
        grid.set_blocked(VoxelCoord::new(5, 1, 1), true);
        assert!(!line_of_sight(
            &grid,
            VoxelCoord::new(0, 1, 1),
            VoxelCoord::new(9, 1, 1)
        ));
        // The segment that stops short of the wall is clear
        assert!(line_of_sight(
            &grid,
            VoxelCoord::new(0, 1, 1),
            VoxelCoord::new(4, 1, 1)
        ));
    }

    #[test]
    fn test_symmetric_on_axis_aligned_walls() {
        let mut grid = VoxelGrid::new(10, 10, 10);
        for y in 0..10 {
            for z in 0..10 {
                grid.set_blocked(VoxelCoord::new(5, y, z), true);
            }
        }
        let a = VoxelCoord::new(1, 2, 3);
        let b = VoxelCoord::new(8, 7, 6);
        assert!(!line_of_sight(&grid, a, b));
        assert!(!line_of_sight(&grid, b, a));
    }

    #[test]
    fn test_diagonal_clear() {
        let grid = VoxelGrid::new(5, 5, 5);
        assert!(line_of_sight(
            &grid,
            VoxelCoord::new(0, 0, 0),
            VoxelCoord::new(4, 4, 4)
        ));
    }

    #[test]
    fn test_deterministic() {
        let mut grid = VoxelGrid::new(20, 20, 20);
        grid.block_region(VoxelCoord::new(8, 0, 0), VoxelCoord::new(8, 19, 19));
        let a = VoxelCoord::new(0, 3, 17);
        let b = VoxelCoord::new(19, 16, 2);
        let first = line_of_sight(&grid, a, b);
        for _ in 0..10 {
            assert_eq!(line_of_sight(&grid, a, b), first);
        }
    }
}
