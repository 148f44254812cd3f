//! Decides whether new slots may be created. A candidate conflicts with an
//! existing slot only within the same leader's calendar; different leaders
//! never constrain each other.

use chrono::{DateTime, Utc};

use crate::errors::{SlotError, SlotResult};
use crate::models::leader::Leader;
use crate::models::requests::RejectedDraft;
use crate::models::slot::{Slot, SlotDraft};

/// Half-open interval test: `[start, end)` against the slot's own interval,
/// scoped to one leader.
pub fn overlaps(slot: &Slot, leader: Leader, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    slot.leader == leader && slot.start_time < end && slot.end_time > start
}

/// Accepts the draft iff it overlaps no existing slot of the same leader.
pub fn can_create(existing: &[Slot], draft: &SlotDraft) -> SlotResult<()> {
    let end = draft.end();
    if existing
        .iter()
        .any(|slot| overlaps(slot, draft.leader, draft.start, end))
    {
        return Err(SlotError::Conflict(format!(
            "{} already has a slot overlapping {}",
            draft.leader, draft.start
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub accepted: Vec<SlotDraft>,
    pub rejected: Vec<RejectedDraft>,
}

/// Plans a batch creation by sequential accumulation: each draft is checked
/// against the existing store and against every draft already accepted in
/// this batch, so two overlapping candidates in one request yield exactly
/// one acceptance. The plan itself never fails; callers decide what an
/// empty `accepted` list means.
pub fn plan_batch(existing: &[Slot], drafts: Vec<SlotDraft>) -> BatchPlan {
    let mut accepted: Vec<SlotDraft> = Vec::new();
    let mut rejected: Vec<RejectedDraft> = Vec::new();

    for draft in drafts {
        let end = draft.end();
        let clashes_store = existing
            .iter()
            .any(|slot| overlaps(slot, draft.leader, draft.start, end));
        let clashes_batch = accepted
            .iter()
            .any(|prior| prior.leader == draft.leader && prior.start < end && prior.end() > draft.start);

        if clashes_store || clashes_batch {
            let reason = format!(
                "{} already has a slot overlapping {}",
                draft.leader, draft.start
            );
            rejected.push(RejectedDraft { draft, reason });
        } else {
            accepted.push(draft);
        }
    }

    BatchPlan { accepted, rejected }
}
