//! Configuration sections for the grid and the planners.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Voxel grid settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Grid extent along X in cells
    #[serde(default = "defaults::grid_size_xy")]
    pub size_x: usize,

    /// Grid extent along Y in cells
    #[serde(default = "defaults::grid_size_xy")]
    pub size_y: usize,

    /// Grid extent along Z in cells
    #[serde(default = "defaults::grid_size_z")]
    pub size_z: usize,

    /// Metric size of one cell per axis (meters)
    #[serde(default = "defaults::cell_size")]
    pub cell_size: [f32; 3],

    /// Obstacle dilation radius in cells (Chebyshev)
    #[serde(default = "defaults::safety_margin")]
    pub safety_margin: u32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            size_x: defaults::grid_size_xy(),
            size_y: defaults::grid_size_xy(),
            size_z: defaults::grid_size_z(),
            cell_size: defaults::cell_size(),
            safety_margin: defaults::safety_margin(),
        }
    }
}

/// Pathfinding settings section
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PathfindingSection {
    /// Grid A* settings
    #[serde(default)]
    pub astar: AStarSettings,

    /// Theta* settings
    #[serde(default)]
    pub theta_star: ThetaStarSettings,

    /// Path smoothing settings
    #[serde(default)]
    pub smoothing: SmoothingSettings,
}

/// Grid A* settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarSettings {
    /// Enable 26-directional movement (vs 6-directional)
    #[serde(default = "defaults::enabled")]
    pub allow_diagonal: bool,

    /// Maximum nodes to expand
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,
}

impl Default for AStarSettings {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            max_expansions: defaults::max_expansions(),
        }
    }
}

/// Theta* settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThetaStarSettings {
    /// Maximum nodes to expand
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,
}

impl Default for ThetaStarSettings {
    fn default() -> Self {
        Self {
            max_expansions: defaults::max_expansions(),
        }
    }
}

/// Path smoothing settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmoothingSettings {
    /// Enable string-pulling after a grid search
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
