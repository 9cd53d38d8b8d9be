//! Lock acquisition and maintenance state machine.
//!
//! The seeker tracks one potential target at a time, accumulating
//! `lock_on_time` seconds of uninterrupted visibility before declaring a
//! lock. Once locked it keeps the target while it stays within range and
//! the field-of-view cone, dropping the lock only after
//! `lost_lock_timeout` seconds of occlusion.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::target::Target;

/// Seeker configuration, fixed for the lifetime of a [`Seeker`].
///
/// No field is validated: a zero `max_range` simply yields a seeker that
/// never sees anything, and a 180° half-angle sees everything in range.
/// This is a simulation-tick contract, not an API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeekerConfig {
    /// Maximum sensor range in meters.
    pub max_range: f64,
    /// Field-of-view half-angle in degrees (0–180).
    pub fov_deg: f64,
    /// Seconds of continuous visibility required to lock.
    pub lock_on_time: f64,
    /// Seconds of occlusion tolerated once locked.
    pub lost_lock_timeout: f64,
}

impl Default for SeekerConfig {
    fn default() -> Self {
        Self {
            max_range: DEFAULT_MAX_RANGE_M,
            fov_deg: DEFAULT_FOV_HALF_ANGLE_DEG,
            lock_on_time: DEFAULT_LOCK_ON_SECS,
            lost_lock_timeout: DEFAULT_LOST_LOCK_TIMEOUT_SECS,
        }
    }
}

/// State of the current lock attempt.
///
/// Invariants maintained by [`Seeker::update`]: `locked` implies a target
/// is present with `progress == lock_on_time`, and `progress > 0.0`
/// implies a target is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockState {
    /// Snapshot of the tracked target, if any. Copied by value — never a
    /// reference back into caller-owned collections.
    pub target: Option<Target>,
    /// Accumulated seconds of continuous visibility toward lock.
    pub progress: f64,
    /// Whether the lock has been established.
    pub locked: bool,
    /// Seeker clock time at which the tracked target was last visible.
    pub last_seen: f64,
}

/// A compact lock-on seeker that prioritizes nearby, hot targets.
#[derive(Debug, Clone, Default)]
pub struct Seeker {
    config: SeekerConfig,
    state: LockState,
    /// Monotonic clock, accumulated from `dt` across updates.
    elapsed: f64,
}

impl Seeker {
    pub fn new(config: SeekerConfig) -> Self {
        Self {
            config,
            state: LockState::default(),
            elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &SeekerConfig {
        &self.config
    }

    /// Seconds of simulation time accumulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether `target_pos` is inside the sensor envelope: within
    /// `max_range` of `origin` and within the `fov_deg` cone around `aim`.
    /// A target exactly at the origin is never visible (degenerate
    /// direction).
    pub fn is_visible(&self, origin: DVec3, aim: DVec3, target_pos: DVec3) -> bool {
        let to_target = target_pos - origin;
        let distance = to_target.length();
        if distance > self.config.max_range || distance == 0.0 {
            return false;
        }

        let cos_angle = aim.normalize_or_zero().dot(to_target / distance);
        cos_angle >= self.config.fov_deg.to_radians().cos()
    }

    /// Priority score for a visible target: heat over distance, plus a
    /// proximity bonus that falls off linearly toward `max_range`.
    /// Higher is better. Distance zero scores infinite, though the
    /// visibility guard keeps such targets out of selection.
    pub fn score(&self, origin: DVec3, target: &Target) -> f64 {
        let distance = origin.distance(target.position);
        if distance == 0.0 {
            return f64::INFINITY;
        }

        let heat = target.heat_signature / distance;
        let proximity =
            (self.config.max_range - distance).max(0.0) / self.config.max_range.max(RANGE_EPSILON);
        heat + proximity
    }

    /// Best visible candidate by score. Ties keep the first-encountered
    /// target, so selection is stable in the input order.
    fn pick_best<'a>(
        &self,
        origin: DVec3,
        aim: DVec3,
        targets: &'a [Target],
    ) -> Option<&'a Target> {
        let mut best: Option<&Target> = None;
        let mut best_score = f64::NEG_INFINITY;
        for target in targets {
            if !self.is_visible(origin, aim, target.position) {
                continue;
            }
            let score = self.score(origin, target);
            if score > best_score {
                best_score = score;
                best = Some(target);
            }
        }
        best
    }

    /// Advance the lock state by `dt` seconds and return the current state.
    ///
    /// `origin` and `aim` are the sensor position and forward direction;
    /// `targets` is the full candidate set for this tick. Negative `dt`
    /// clamps to zero. Never fails: out-of-range inputs degrade, they do
    /// not error.
    pub fn update(
        &mut self,
        origin: DVec3,
        aim: DVec3,
        targets: &[Target],
        dt: f64,
    ) -> &LockState {
        let dt = dt.max(0.0);
        self.elapsed += dt;

        // Best candidate is recomputed from scratch each tick,
        // independent of what is currently tracked.
        let best = self.pick_best(origin, aim, targets);

        if self.state.locked && self.state.target.is_some() {
            let best_matches_lock = match (best, self.state.target.as_ref()) {
                (Some(best), Some(tracked)) => best.id == tracked.id,
                _ => false,
            };
            if best_matches_lock {
                // Locked target still the best candidate: refresh the
                // sighting and absorb its latest kinematics.
                self.state.last_seen = self.elapsed;
                self.state.target = best.cloned();
            } else if self.elapsed - self.state.last_seen > self.config.lost_lock_timeout {
                // Occluded beyond tolerance: drop everything.
                self.state = LockState::default();
            }
            // Otherwise occluded but within tolerance: hold the lock as-is.
            return &self.state;
        }

        // Not locked. A new best candidate preempts whatever was being
        // tracked and restarts acquisition.
        if let Some(best) = best {
            let switched = self
                .state
                .target
                .as_ref()
                .map_or(true, |tracked| tracked.id != best.id);
            if switched {
                self.state.target = Some(best.clone());
                self.state.progress = 0.0;
            }

            self.state.progress += dt;
            self.state.last_seen = self.elapsed;
            if self.state.progress >= self.config.lock_on_time {
                self.state.locked = true;
                self.state.progress = self.config.lock_on_time;
            }
        } else {
            self.state.progress = 0.0;
            self.state.target = None;
        }

        &self.state
    }

    /// Defensive copy of the current lock state.
    pub fn status(&self) -> LockState {
        self.state.clone()
    }
}
