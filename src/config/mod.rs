//! Unified configuration loading for vyoma-nav.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod error;
mod sections;
mod vyoma;

// Re-export main types
pub use error::ConfigLoadError;
pub use vyoma::VyomaConfig;

// Re-export section types
pub use sections::{
    AStarSettings, GridSection, PathfindingSection, SmoothingSettings, ThetaStarSettings,
};
