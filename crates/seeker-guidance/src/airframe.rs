//! Airframe shell — steering pass-through and engine telemetry summary.
//!
//! No state machine lives here: the airframe mutates its pose, pushes
//! course updates to an attached radar unit, and answers fuel-reserve
//! queries against an attached engine unit.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the guidance boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuidanceError {
    /// Telemetry was queried before an engine unit was connected.
    #[error("engine unit not connected")]
    EngineNotConnected,
}

/// Capability a radar unit exposes to receive guidance updates.
pub trait RadarUnit {
    /// Called whenever the airframe's course changes. `heading` is
    /// normalized.
    fn on_course_update(&mut self, position: DVec3, heading: DVec3);
}

/// Capability an engine unit exposes for telemetry.
pub trait EngineUnit {
    /// Remaining fuel mass/volume in arbitrary units.
    fn fuel_remaining(&self) -> f64;

    /// Total fuel capacity, same units as `fuel_remaining`.
    fn fuel_capacity(&self) -> f64;

    /// Current fuel consumption rate per second.
    fn current_fuel_consumption(&self) -> f64;
}

/// Summarized engine telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineReport {
    pub fuel_remaining: f64,
    pub fuel_capacity: f64,
    pub consumption_rate: f64,
    /// Seconds of fuel left at the current burn rate; `None` when the
    /// engine is not consuming.
    pub reserve_seconds: Option<f64>,
}

/// Airframe with steering and subsystem ports.
pub struct Airframe {
    position: DVec3,
    heading: DVec3,
    normalized_heading: DVec3,
    radar: Option<Box<dyn RadarUnit>>,
    engine: Option<Box<dyn EngineUnit>>,
}

impl Default for Airframe {
    fn default() -> Self {
        Self::new(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0))
    }
}

impl Airframe {
    pub fn new(position: DVec3, heading: DVec3) -> Self {
        Self {
            position,
            heading,
            normalized_heading: heading.normalize_or_zero(),
            radar: None,
            engine: None,
        }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn heading(&self) -> DVec3 {
        self.heading
    }

    /// Attach a radar unit and push the current course immediately.
    pub fn connect_radar(&mut self, radar: Box<dyn RadarUnit>) {
        self.radar = Some(radar);
        self.push_course_update();
    }

    /// Attach an engine unit for telemetry queries.
    pub fn connect_engine(&mut self, engine: Box<dyn EngineUnit>) {
        self.engine = Some(engine);
    }

    /// Update the heading and notify the connected radar.
    pub fn steer(&mut self, heading: DVec3) {
        self.heading = heading;
        self.normalized_heading = heading.normalize_or_zero();
        self.push_course_update();
    }

    /// Update the position and notify the connected radar.
    pub fn relocate(&mut self, position: DVec3) {
        self.position = position;
        self.push_course_update();
    }

    fn push_course_update(&mut self) {
        if let Some(radar) = self.radar.as_mut() {
            radar.on_course_update(self.position, self.normalized_heading);
        }
    }

    /// Fuel telemetry from the attached engine unit.
    pub fn engine_report(&self) -> Result<EngineReport, GuidanceError> {
        let engine = self.engine.as_ref().ok_or(GuidanceError::EngineNotConnected)?;

        let remaining = engine.fuel_remaining();
        let capacity = engine.fuel_capacity();
        let consumption = engine.current_fuel_consumption();
        let reserve = if consumption > 0.0 {
            Some(remaining / consumption)
        } else {
            None
        };

        Ok(EngineReport {
            fuel_remaining: remaining,
            fuel_capacity: capacity,
            consumption_rate: consumption,
            reserve_seconds: reserve,
        })
    }
}
