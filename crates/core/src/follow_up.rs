//! Post-appointment follow-up bookkeeping. This engine only transforms;
//! pushing the result to the backend is a separate, explicitly triggered
//! step owned by the session.

use crate::models::follow_up::FollowUpPatch;
use crate::models::slot::Slot;

/// Applies a follow-up patch to a slot. Setting a step forces
/// `follow_up_done` in the same update, even when the patch explicitly
/// carries `followUpDone: false`; clearing a step does not unmark it.
pub fn apply_follow_up(slot: &Slot, patch: &FollowUpPatch) -> Slot {
    let mut updated = slot.clone();

    if let Some(done) = patch.follow_up_done {
        updated.follow_up_done = done;
    }
    if let Some(needs) = patch.needs_reinforcement {
        updated.needs_reinforcement = needs;
    }
    if let Some(step) = patch.follow_up_step {
        updated.follow_up_step = step;
        if updated.follow_up_step.is_some() {
            updated.follow_up_done = true;
        }
    }

    updated
}
