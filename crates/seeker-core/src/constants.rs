//! Seeker tuning parameters.

/// Default maximum sensor range in meters.
pub const DEFAULT_MAX_RANGE_M: f64 = 2000.0;

/// Default field-of-view half-angle in degrees.
pub const DEFAULT_FOV_HALF_ANGLE_DEG: f64 = 45.0;

/// Default seconds of uninterrupted visibility required before locking.
pub const DEFAULT_LOCK_ON_SECS: f64 = 1.0;

/// Default seconds of occlusion tolerated before an established lock drops.
pub const DEFAULT_LOST_LOCK_TIMEOUT_SECS: f64 = 0.5;

/// Floor for the proximity-score divisor when `max_range` is zero or near it.
pub const RANGE_EPSILON: f64 = 1e-6;
