//! # Config Crate
//!
//! Centralized configuration constants for the shadow-volume pipeline.
//! Scene tunables, manipulator dimensions and mesh limits are defined here
//! so the geometry crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, DEFAULT_EXTRUSION_DISTANCE};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.extrusion_distance, DEFAULT_EXTRUSION_DISTANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig::new` rejects unusable values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
