//! Guidance layer for the lock-on seeker.
//!
//! Bridges `seeker-core` state transitions into discrete notifications
//! for a main controller, and hosts the airframe shell that pushes
//! course updates to a radar unit and summarizes engine telemetry.

pub mod airframe;
pub mod link;

pub use airframe::{Airframe, EngineReport, EngineUnit, GuidanceError, RadarUnit};
pub use link::{ControllerLink, MainController};
pub use seeker_core as core;
