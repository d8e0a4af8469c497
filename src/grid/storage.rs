//! Voxel grid storage for the occupancy field.
//!
//! A flat boolean field over a bounded 3D lattice. The grid is mutable
//! while the caller builds the scene (box obstacles, safety inflation) and
//! read-only for the duration of a search.

use crate::core::{VoxelCoord, WorldPoint};

/// Occupancy grid over a bounded 3D voxel lattice.
///
/// The grid uses a coordinate system where:
/// - (0, 0, 0) is the first cell; all coordinates are non-negative
/// - Cell (x, y, z) covers the world box from `(x, y, z) * cell_size`
///   to `(x+1, y+1, z+1) * cell_size`
///
/// Cells are stored in a single contiguous array indexed
/// `(x * size_y + y) * size_z + z`.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    /// Occupancy flags (true = blocked)
    cells: Vec<bool>,
    /// Grid extent along X in cells
    size_x: usize,
    /// Grid extent along Y in cells
    size_y: usize,
    /// Grid extent along Z in cells
    size_z: usize,
    /// Metric size of one cell per axis (meters)
    cell_size: WorldPoint,
}

impl VoxelGrid {
    /// Create a new all-free grid with the given extents
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        Self {
            cells: vec![false; size_x * size_y * size_z],
            size_x,
            size_y,
            size_z,
            cell_size: WorldPoint::new(1.0, 1.0, 1.0),
        }
    }

    /// Set the metric cell size per axis (meters)
    pub fn with_cell_size(mut self, cell_size: WorldPoint) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Grid extent along X in cells
    #[inline]
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    /// Grid extent along Y in cells
    #[inline]
    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// Grid extent along Z in cells
    #[inline]
    pub fn size_z(&self) -> usize {
        self.size_z
    }

    /// Metric size of one cell per axis
    #[inline]
    pub fn cell_size(&self) -> WorldPoint {
        self.cell_size
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size_x * self.size_y * self.size_z
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// Check if voxel coordinates are within the grid extents
    #[inline]
    pub fn is_valid_coord(&self, coord: VoxelCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.z >= 0
            && (coord.x as usize) < self.size_x
            && (coord.y as usize) < self.size_y
            && (coord.z as usize) < self.size_z
    }

    /// Convert voxel coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: VoxelCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(
                (coord.x as usize * self.size_y + coord.y as usize) * self.size_z
                    + coord.z as usize,
            )
        } else {
            None
        }
    }

    /// Convert flat array index to voxel coordinates
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> VoxelCoord {
        let z = index % self.size_z;
        let xy = index / self.size_z;
        VoxelCoord::new((xy / self.size_y) as i32, (xy % self.size_y) as i32, z as i32)
    }

    /// Is this cell blocked? Out-of-bounds coordinates read as free, so
    /// ray-march samples that leave the lattice never block a segment.
    #[inline]
    pub fn is_blocked(&self, coord: VoxelCoord) -> bool {
        self.coord_to_index(coord)
            .map(|i| self.cells[i])
            .unwrap_or(false)
    }

    /// Is this cell inside the grid and free?
    #[inline]
    pub fn is_traversable(&self, coord: VoxelCoord) -> bool {
        self.coord_to_index(coord)
            .map(|i| !self.cells[i])
            .unwrap_or(false)
    }

    /// Mark a single cell blocked or free. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_blocked(&mut self, coord: VoxelCoord, blocked: bool) {
        if let Some(i) = self.coord_to_index(coord) {
            self.cells[i] = blocked;
        }
    }

    /// Block an axis-aligned box of cells, inclusive on both corners.
    /// The box is clamped to the grid extents.
    pub fn block_region(&mut self, min: VoxelCoord, max: VoxelCoord) {
        let x0 = min.x.max(0);
        let y0 = min.y.max(0);
        let z0 = min.z.max(0);
        let x1 = max.x.min(self.size_x as i32 - 1);
        let y1 = max.y.min(self.size_y as i32 - 1);
        let z1 = max.z.min(self.size_z as i32 - 1);
        if x0 > x1 || y0 > y1 || z0 > z1 {
            return;
        }

        for x in x0..=x1 {
            for y in y0..=y1 {
                for z in z0..=z1 {
                    let idx = (x as usize * self.size_y + y as usize) * self.size_z + z as usize;
                    self.cells[idx] = true;
                }
            }
        }
    }

    /// Return a copy of this grid with every blocked cell dilated by
    /// `margin` cells (Chebyshev ball). This bakes a safety margin into the
    /// occupancy field so planners keep clearance from obstacles.
    pub fn inflate(&self, margin: u32) -> VoxelGrid {
        if margin == 0 {
            return self.clone();
        }

        let m = margin as i32;
        let mut inflated = VoxelGrid {
            cells: vec![false; self.cells.len()],
            size_x: self.size_x,
            size_y: self.size_y,
            size_z: self.size_z,
            cell_size: self.cell_size,
        };

        for (idx, &blocked) in self.cells.iter().enumerate() {
            if !blocked {
                continue;
            }
            let center = self.index_to_coord(idx);
            inflated.block_region(
                VoxelCoord::new(center.x - m, center.y - m, center.z - m),
                VoxelCoord::new(center.x + m, center.y + m, center.z + m),
            );
        }

        inflated
    }

    /// Convert voxel coordinates to world coordinates (cell center)
    #[inline]
    pub fn voxel_to_world(&self, coord: VoxelCoord) -> WorldPoint {
        WorldPoint::new(
            (coord.x as f32 + 0.5) * self.cell_size.x,
            (coord.y as f32 + 0.5) * self.cell_size.y,
            (coord.z as f32 + 0.5) * self.cell_size.z,
        )
    }

    /// Convert world coordinates to voxel coordinates
    #[inline]
    pub fn world_to_voxel(&self, point: WorldPoint) -> VoxelCoord {
        VoxelCoord::new(
            (point.x / self.cell_size.x).floor() as i32,
            (point.y / self.cell_size.y).floor() as i32,
            (point.z / self.cell_size.z).floor() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_grid_all_free() {
        let grid = VoxelGrid::new(4, 5, 6);
        assert_eq!(grid.cell_count(), 120);
        assert_eq!(grid.blocked_count(), 0);
        assert!(grid.is_traversable(VoxelCoord::new(3, 4, 5)));
    }

    #[test]
    fn test_index_round_trip() {
        let grid = VoxelGrid::new(7, 5, 3);
        for x in 0..7 {
            for y in 0..5 {
                for z in 0..3 {
                    let coord = VoxelCoord::new(x, y, z);
                    let idx = grid.coord_to_index(coord).unwrap();
                    assert_eq!(grid.index_to_coord(idx), coord);
                }
            }
        }
    }

    #[test]
    fn test_bounds() {
        let grid = VoxelGrid::new(4, 4, 4);
        assert!(grid.is_valid_coord(VoxelCoord::new(0, 0, 0)));
        assert!(grid.is_valid_coord(VoxelCoord::new(3, 3, 3)));
        assert!(!grid.is_valid_coord(VoxelCoord::new(4, 0, 0)));
        assert!(!grid.is_valid_coord(VoxelCoord::new(0, -1, 0)));
        // Out-of-bounds reads as free, not traversable
        assert!(!grid.is_blocked(VoxelCoord::new(-1, 0, 0)));
        assert!(!grid.is_traversable(VoxelCoord::new(-1, 0, 0)));
    }

    #[test]
    fn test_set_blocked() {
        let mut grid = VoxelGrid::new(3, 3, 3);
        let c = VoxelCoord::new(1, 1, 1);
        grid.set_blocked(c, true);
        assert!(grid.is_blocked(c));
        assert!(!grid.is_traversable(c));
        grid.set_blocked(c, false);
        assert!(!grid.is_blocked(c));
    }

    #[test]
    fn test_block_region() {
        let mut grid = VoxelGrid::new(10, 10, 10);
        grid.block_region(VoxelCoord::new(2, 2, 0), VoxelCoord::new(4, 3, 5));
        assert_eq!(grid.blocked_count(), 3 * 2 * 6);
        assert!(grid.is_blocked(VoxelCoord::new(2, 2, 0)));
        assert!(grid.is_blocked(VoxelCoord::new(4, 3, 5)));
        assert!(!grid.is_blocked(VoxelCoord::new(5, 3, 5)));
    }

    #[test]
    fn test_block_region_clamps_to_extents() {
        let mut grid = VoxelGrid::new(4, 4, 4);
        grid.block_region(VoxelCoord::new(-2, -2, -2), VoxelCoord::new(1, 1, 1));
        assert_eq!(grid.blocked_count(), 8);
        grid.block_region(VoxelCoord::new(10, 10, 10), VoxelCoord::new(12, 12, 12));
        assert_eq!(grid.blocked_count(), 8);
    }

    #[test]
    fn test_inflate() {
        let mut grid = VoxelGrid::new(9, 9, 9);
        grid.set_blocked(VoxelCoord::new(4, 4, 4), true);

        let inflated = grid.inflate(1);
        // 3x3x3 Chebyshev ball around the seed
        assert_eq!(inflated.blocked_count(), 27);
        assert!(inflated.is_blocked(VoxelCoord::new(3, 3, 3)));
        assert!(inflated.is_blocked(VoxelCoord::new(5, 5, 5)));
        assert!(!inflated.is_blocked(VoxelCoord::new(2, 4, 4)));

        // Original grid untouched
        assert_eq!(grid.blocked_count(), 1);
    }

    #[test]
    fn test_inflate_zero_margin() {
        let mut grid = VoxelGrid::new(5, 5, 5);
        grid.set_blocked(VoxelCoord::new(2, 2, 2), true);
        let same = grid.inflate(0);
        assert_eq!(same.blocked_count(), 1);
    }

    #[test]
    fn test_world_conversion() {
        let grid = VoxelGrid::new(10, 10, 10).with_cell_size(WorldPoint::new(5.0, 5.0, 1.0));
        let world = grid.voxel_to_world(VoxelCoord::new(2, 3, 4));
        assert_relative_eq!(world.x, 12.5);
        assert_relative_eq!(world.y, 17.5);
        assert_relative_eq!(world.z, 4.5);
        assert_eq!(grid.world_to_voxel(world), VoxelCoord::new(2, 3, 4));
    }
}
