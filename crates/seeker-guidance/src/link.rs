//! Controller link — diffs successive seeker states into notifications.

use glam::DVec3;

use seeker_core::{LockState, Seeker, Target};

/// Capability set a main controller exposes to the link.
///
/// All operations are fire-and-forget; the link never consumes a return
/// value. Any conforming type is acceptable.
pub trait MainController {
    /// The best-candidate target changed (locked or not). `None` means no
    /// target is currently tracked.
    fn set_tracking_target(&mut self, target: Option<&Target>);

    /// Fires exactly once per unlocked-to-locked transition.
    fn on_lock(&mut self, target: &Target);

    /// Fires exactly once per locked-to-unlocked transition, passing the
    /// target that was lost. Tolerates `None` defensively even though the
    /// seeker's invariant keeps a target present while locked.
    fn on_lock_lost(&mut self, target: Option<&Target>);
}

/// Bridges [`Seeker`] updates into a [`MainController`].
///
/// Owns the seeker and one snapshot of the previous lock state, refreshed
/// at the end of every [`step`](ControllerLink::step) for diffing.
pub struct ControllerLink<C: MainController> {
    controller: C,
    seeker: Seeker,
    last_state: LockState,
}

impl<C: MainController> ControllerLink<C> {
    pub fn new(controller: C, seeker: Seeker) -> Self {
        Self {
            controller,
            seeker,
            last_state: LockState::default(),
        }
    }

    pub fn seeker(&self) -> &Seeker {
        &self.seeker
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    fn target_changed(new: Option<&Target>, previous: Option<&Target>) -> bool {
        match (new, previous) {
            (None, None) => false,
            (Some(new), Some(previous)) => new.id != previous.id,
            _ => true,
        }
    }

    /// Advance the seeker by one tick and notify the controller of any
    /// state transition. Returns the resulting lock state.
    pub fn step(&mut self, origin: DVec3, aim: DVec3, targets: &[Target], dt: f64) -> LockState {
        let state = self.seeker.update(origin, aim, targets, dt).clone();
        let previous = &self.last_state;

        if Self::target_changed(state.target.as_ref(), previous.target.as_ref()) {
            self.controller.set_tracking_target(state.target.as_ref());
        }

        if !previous.locked && state.locked {
            if let Some(target) = &state.target {
                self.controller.on_lock(target);
            }
        } else if previous.locked && !state.locked {
            self.controller.on_lock_lost(previous.target.as_ref());
            // Lock and candidate can vanish in the same tick; tell the
            // controller explicitly that nothing is tracked even when the
            // identifier diff above already fired.
            if state.target.is_none() {
                self.controller.set_tracking_target(None);
            }
        }

        self.last_state = self.seeker.status();
        state
    }
}
