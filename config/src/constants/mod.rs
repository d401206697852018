//! Centralized configuration values shared across the shadow-volume pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// SHADOW VOLUME CONSTANTS
// =============================================================================

/// Distance every shadow-volume point is pushed away from the light.
///
/// Must exceed the scene bounds so far caps land behind every receiver.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_EXTRUSION_DISTANCE;
/// assert!(DEFAULT_EXTRUSION_DISTANCE > 1.0);
/// ```
pub const DEFAULT_EXTRUSION_DISTANCE: f32 = 10.0;

/// World-space position of the scene's point light.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_LIGHT_POSITION;
/// assert_eq!(DEFAULT_LIGHT_POSITION[1], 3.0);
/// ```
pub const DEFAULT_LIGHT_POSITION: [f32; 3] = [2.0, 3.0, 3.0];

/// Number of vertices addressable by 16-bit index buffers.
///
/// # Examples
/// ```
/// use config::constants::MAX_SHADOW_VERTICES;
/// assert_eq!(MAX_SHADOW_VERTICES, 65_536);
/// ```
pub const MAX_SHADOW_VERTICES: usize = u16::MAX as usize + 1;

// =============================================================================
// PRIMITIVE CONSTANTS
// =============================================================================

/// Default number of stacks for the scene cylinder.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CYLINDER_STACKS;
/// assert!(DEFAULT_CYLINDER_STACKS >= 1);
/// ```
pub const DEFAULT_CYLINDER_STACKS: u32 = 100;

/// Default number of slices for the scene cylinder.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CYLINDER_SLICES;
/// assert!(DEFAULT_CYLINDER_SLICES >= 3);
/// ```
pub const DEFAULT_CYLINDER_SLICES: u32 = 100;

/// Minimum slice count for a closed cylinder.
///
/// # Examples
/// ```
/// use config::constants::MIN_CYLINDER_SLICES;
/// assert_eq!(MIN_CYLINDER_SLICES, 3);
/// ```
pub const MIN_CYLINDER_SLICES: u32 = 3;

// =============================================================================
// MANIPULATOR CONSTANTS
// =============================================================================

/// Number of rigid links (base included) in the manipulator.
///
/// # Examples
/// ```
/// use config::constants::LINK_COUNT;
/// assert_eq!(LINK_COUNT, 6);
/// ```
pub const LINK_COUNT: usize = 6;

/// Length of the upper arm (shoulder to elbow).
pub const ARM_L1: f32 = 0.91;

/// Length of the forearm (elbow to wrist).
pub const ARM_L2: f32 = 0.81;

/// Distance from the wrist centre to the end effector.
pub const ARM_L3: f32 = 0.33;

/// Height of the shoulder axis above the base.
pub const ARM_DY: f32 = 0.27;

/// Lateral offset of the wrist axis.
///
/// # Examples
/// ```
/// use config::constants::{ARM_DZ, ARM_L1, ARM_L2};
/// assert!(ARM_DZ < ARM_L1 + ARM_L2);
/// ```
pub const ARM_DZ: f32 = 0.26;

/// Radius of the circle the end effector traces on the mirror.
pub const ANIMATION_RADIUS: f32 = 0.4;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.extrusion_distance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Distance shadow-volume points are pushed away from the light.
    pub extrusion_distance: f32,
    /// World-space light position.
    pub light_position: [f32; 3],
    /// Whether scenes rebuild per-link shadow volumes in parallel.
    pub parallel: bool,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// extrusion distance and light position.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(25.0, [0.0, 5.0, 0.0], false).expect("valid config");
    /// assert_eq!(cfg.extrusion_distance, 25.0);
    /// ```
    pub fn new(
        extrusion_distance: f32,
        light_position: [f32; 3],
        parallel: bool,
    ) -> Result<Self, ConfigError> {
        if !(extrusion_distance.is_finite() && extrusion_distance > 0.0) {
            return Err(ConfigError::InvalidExtrusion(extrusion_distance));
        }
        if light_position.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::InvalidLightPosition(light_position));
        }
        Ok(Self {
            extrusion_distance,
            light_position,
            parallel,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            extrusion_distance: DEFAULT_EXTRUSION_DISTANCE,
            light_position: DEFAULT_LIGHT_POSITION,
            parallel: false,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the extrusion distance is zero, negative or not finite.
    InvalidExtrusion(f32),
    /// Raised when any light coordinate is not finite.
    InvalidLightPosition([f32; 3]),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidExtrusion(value) => {
                write!(f, "extrusion_distance must be positive and finite: {value}")
            }
            ConfigError::InvalidLightPosition(value) => {
                write!(f, "light_position must be finite: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
