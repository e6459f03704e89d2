//! Configuration loading and management for the Housing Operations Engine.
//!
//! This module loads occupancy thresholds and display precision settings
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use housing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/housing").unwrap();
//! println!("Critical occupancy above {}%", config.thresholds().critical);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DisplayConfig, EngineConfig, EngineMetadata, OccupancyConfig, OccupancyThresholds};
