//! Main VyomaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::grid::VoxelGrid;
use crate::pathfinding::{AStarConfig, ThetaStarConfig};

use super::error::ConfigLoadError;
use super::sections::{GridSection, PathfindingSection};

/// Full vyoma-nav configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct VyomaConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Pathfinding settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,
}

impl VyomaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Build an empty grid with the configured extents and cell size.
    /// Obstacles and safety inflation are applied by the caller.
    pub fn to_grid(&self) -> VoxelGrid {
        let [cx, cy, cz] = self.grid.cell_size;
        VoxelGrid::new(self.grid.size_x, self.grid.size_y, self.grid.size_z)
            .with_cell_size(WorldPoint::new(cx, cy, cz))
    }

    /// Convert to AStarConfig for the grid planner
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            allow_diagonal: self.pathfinding.astar.allow_diagonal,
            max_expansions: self.pathfinding.astar.max_expansions,
        }
    }

    /// Convert to ThetaStarConfig for the any-angle planner
    pub fn to_theta_star_config(&self) -> ThetaStarConfig {
        ThetaStarConfig {
            max_expansions: self.pathfinding.theta_star.max_expansions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VyomaConfig::default();
        assert_eq!(config.grid.size_x, 100);
        assert_eq!(config.grid.size_z, 150);
        assert_eq!(config.grid.safety_margin, 5);
        assert!(config.pathfinding.astar.allow_diagonal);
        assert!(config.pathfinding.smoothing.enabled);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
grid:
  size_x: 40
  size_y: 40
pathfinding:
  astar:
    allow_diagonal: false
"#;
        let config = VyomaConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.grid.size_x, 40);
        assert_eq!(config.grid.size_z, 150); // default
        assert!(!config.pathfinding.astar.allow_diagonal);
        assert_eq!(
            config.pathfinding.theta_star.max_expansions,
            10_000_000 // default
        );
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = VyomaConfig::from_yaml("grid: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_to_grid() {
        let yaml = r#"
grid:
  size_x: 10
  size_y: 12
  size_z: 8
  cell_size: [2.0, 2.0, 1.0]
"#;
        let config = VyomaConfig::from_yaml(yaml).unwrap();
        let grid = config.to_grid();
        assert_eq!(grid.size_x(), 10);
        assert_eq!(grid.size_y(), 12);
        assert_eq!(grid.size_z(), 8);
        assert_eq!(grid.cell_size().x, 2.0);
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn test_planner_config_conversion() {
        let config = VyomaConfig::from_yaml("pathfinding: { astar: { max_expansions: 500 } }")
            .unwrap();
        assert_eq!(config.to_astar_config().max_expansions, 500);
        assert_eq!(config.to_theta_star_config().max_expansions, 10_000_000);
    }
}
