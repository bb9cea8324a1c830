//! Physics tuning configuration
//!
//! Defaults reproduce the engine's fixed constants: slop 0.01, correction
//! percent 0.8, separating-velocity tolerance 0.01, default restitution 0.5
//! and Earth gravity of 9.8 m/s² along -Y.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::foundation::math::{Real, Vec3};

/// # Resolver Configuration
///
/// Constants used by the collision resolver's positional correction and
/// impulse phases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Penetration tolerated before positional correction kicks in
    pub slop: Real,
    /// Fraction of the remaining penetration removed per correction
    pub correction_percent: Real,
    /// Relative normal velocity above `-separation_tolerance` counts as separating
    pub separation_tolerance: Real,
    /// Restitution used for bodies that do not set one
    pub default_restitution: Real,
}

impl ResolverConfig {
    /// Create a resolver configuration with the standard constants
    pub const fn new() -> Self {
        Self {
            slop: 0.01,
            correction_percent: 0.8,
            separation_tolerance: 0.01,
            default_restitution: 0.5,
        }
    }

    /// Set the penetration slop
    pub fn with_slop(mut self, slop: Real) -> Self {
        self.slop = slop;
        self
    }

    /// Set the positional correction percentage
    pub fn with_correction_percent(mut self, percent: Real) -> Self {
        self.correction_percent = percent;
        self
    }

    /// Set the default restitution
    pub fn with_default_restitution(mut self, restitution: Real) -> Self {
        self.default_restitution = restitution;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slop.is_nan() || self.slop < 0.0 {
            return Err(ConfigError::Invalid {
                field: "resolver.slop",
                reason: format!("must be non-negative, got {}", self.slop),
            });
        }
        if !(0.0..=1.0).contains(&self.correction_percent) {
            return Err(ConfigError::Invalid {
                field: "resolver.correction_percent",
                reason: format!("must lie in [0, 1], got {}", self.correction_percent),
            });
        }
        if self.separation_tolerance.is_nan() || self.separation_tolerance < 0.0 {
            return Err(ConfigError::Invalid {
                field: "resolver.separation_tolerance",
                reason: format!("must be non-negative, got {}", self.separation_tolerance),
            });
        }
        if !(0.0..=1.0).contains(&self.default_restitution) {
            return Err(ConfigError::Invalid {
                field: "resolver.default_restitution",
                reason: format!("must lie in [0, 1], got {}", self.default_restitution),
            });
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Physics Configuration
///
/// Scene-wide simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Log filter used by applications that initialise logging from config
    pub log_filter: String,
    /// Acceleration used for bodies built with the scene's default gravity
    pub default_gravity: Vec3,
    /// Advance orientation from angular velocity and torque each step
    pub angular_dynamics: bool,
    /// Collision resolver constants
    pub resolver: ResolverConfig,
}

impl PhysicsConfig {
    /// Create a new physics configuration
    pub fn new() -> Self {
        Self {
            log_filter: "info".to_string(),
            default_gravity: Vec3::new(0.0, -9.8, 0.0),
            angular_dynamics: false,
            resolver: ResolverConfig::default(),
        }
    }

    /// Set the log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the default gravity vector
    pub fn with_default_gravity(mut self, gravity: Vec3) -> Self {
        self.default_gravity = gravity;
        self
    }

    /// Enable or disable angular integration
    pub fn with_angular_dynamics(mut self, enabled: bool) -> Self {
        self.angular_dynamics = enabled;
        self
    }

    /// Set resolver constants
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_gravity.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "default_gravity",
                reason: "components must be finite".to_string(),
            });
        }
        self.resolver.validate()
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for PhysicsConfig {}
