//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.extrusion_distance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.extrusion_distance > 0.0);
    assert!(cfg.light_position.iter().all(|c| c.is_finite()));
    assert!(!cfg.parallel);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, [0.0; 3], false).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, DEFAULT_LIGHT_POSITION, false).unwrap_err(),
        ConfigError::InvalidExtrusion(0.0)
    );
    assert!(matches!(
        GlobalConfig::new(f32::NAN, DEFAULT_LIGHT_POSITION, false),
        Err(ConfigError::InvalidExtrusion(_))
    ));
    let bad_light = [0.0, f32::INFINITY, 0.0];
    assert_eq!(
        GlobalConfig::new(10.0, bad_light, false).unwrap_err(),
        ConfigError::InvalidLightPosition(bad_light)
    );
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::InvalidExtrusion(-1.0);
    assert!(err.to_string().contains("extrusion_distance"));
}
