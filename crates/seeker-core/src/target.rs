//! Target descriptions supplied to the seeker each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A candidate target in the world, immutable for the duration of a tick.
///
/// Callers hand the seeker a fresh snapshot per tick; two snapshots with
/// the same `id` are treated as the same target for lock continuity even
/// when position, velocity, or heat have changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Unique identifier, stable across ticks.
    pub id: String,
    /// Position in simulation space (meters, Cartesian).
    pub position: DVec3,
    /// Velocity (m/s).
    #[serde(default)]
    pub velocity: DVec3,
    /// Infrared signature strength. Larger is easier to prioritize.
    #[serde(default = "default_heat_signature")]
    pub heat_signature: f64,
}

fn default_heat_signature() -> f64 {
    1.0
}

impl Target {
    /// Create a stationary target with the default heat signature.
    pub fn new(id: impl Into<String>, position: DVec3) -> Self {
        Self {
            id: id.into(),
            position,
            velocity: DVec3::ZERO,
            heat_signature: default_heat_signature(),
        }
    }

    pub fn with_velocity(mut self, velocity: DVec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_heat_signature(mut self, heat_signature: f64) -> Self {
        self.heat_signature = heat_signature;
        self
    }

    /// Position after `time` seconds assuming constant velocity.
    pub fn predicted_position(&self, time: f64) -> DVec3 {
        self.position + self.velocity * time
    }
}
