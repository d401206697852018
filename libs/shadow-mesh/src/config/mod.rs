//! Shadow-pass configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace configuration so geometry components can
//! stay decoupled from literal constants.

use ::config::constants::{ConfigError, GlobalConfig};

use crate::core::vec3::Vec3;

/// Shadow pass configuration wrapper.
///
/// # Examples
/// ```
/// use shadow_mesh::config::ShadowConfig;
/// let cfg = ShadowConfig::default();
/// assert!(cfg.extrusion_distance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    /// Distance shadow-volume points are pushed away from the light.
    pub extrusion_distance: f32,
    /// World-space light position.
    pub light_position: Vec3,
    /// Rebuild per-object shadow volumes on the rayon pool.
    pub parallel: bool,
}

impl ShadowConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use shadow_mesh::{config::ShadowConfig, Vec3};
    /// let cfg = ShadowConfig::new(20.0, Vec3::new(0.0, 4.0, 0.0), true).unwrap();
    /// assert!(cfg.parallel);
    /// ```
    pub fn new(extrusion_distance: f32, light_position: Vec3, parallel: bool) -> Result<Self, ConfigError> {
        GlobalConfig::new(extrusion_distance, light_position.to_array(), parallel).map(Self::from)
    }
}

impl From<GlobalConfig> for ShadowConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            extrusion_distance: cfg.extrusion_distance,
            light_position: Vec3::from_array(cfg.light_position),
            parallel: cfg.parallel,
        }
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        GlobalConfig::default().into()
    }
}
