//! Core lock-on logic for selecting and tracking airborne targets.
//!
//! This crate defines the vocabulary shared with the guidance layer —
//! targets, lock state, seeker configuration — and the seeker state
//! machine itself: pick the best visible candidate, accumulate
//! uninterrupted visibility into a lock, and tolerate brief occlusion
//! once locked. It has no dependency on any runtime framework and runs
//! synchronously, one `update` per simulation tick.

pub mod constants;
pub mod lock;
pub mod target;

pub use lock::{LockState, Seeker, SeekerConfig};
pub use target::Target;
