//! Attaches a support co-leader to a booked slot. Support is valid only
//! when the chosen leader has an *equivalent* slot: identical start and end
//! times, currently free. Equivalence is exact-match, not overlap.
//!
//! Assignment tags the booked slot and leaves the equivalent slot
//! untouched, so it stays listed as free in its own leader's calendar.
//! Nothing marks it consumed; concurrent assignments can name the same
//! equivalent slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{SlotError, SlotResult};
use crate::models::leader::Leader;
use crate::models::slot::Slot;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportCandidate {
    #[serde(rename = "leaderName")]
    pub leader: Leader,
    pub available: bool,
}

pub fn has_equivalent_free_slot(
    all: &[Slot],
    leader: Leader,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    all.iter().any(|slot| {
        slot.leader == leader && slot.start_time == start && slot.end_time == end && !slot.is_booked
    })
}

/// Every leader other than the target's own, flagged with whether they hold
/// an equivalent free slot right now. The selection UI renders unavailable
/// entries disabled; `add_support` re-checks at confirm time because the
/// slot set may have changed in between.
pub fn support_candidates(all: &[Slot], target: &Slot) -> Vec<SupportCandidate> {
    Leader::ALL
        .into_iter()
        .filter(|leader| *leader != target.leader)
        .map(|leader| SupportCandidate {
            leader,
            available: has_equivalent_free_slot(all, leader, target.start_time, target.end_time),
        })
        .collect()
}

/// True when another booking at the same interval already names the
/// target's leader as its support: the target is the slot backing that
/// assignment, and a backing slot must not receive support of its own.
fn backs_existing_support(all: &[Slot], target: &Slot) -> bool {
    all.iter().any(|slot| {
        slot.id != target.id
            && slot.start_time == target.start_time
            && slot.end_time == target.end_time
            && slot.support_leader == Some(target.leader)
    })
}

pub fn add_support(all: &[Slot], target: &Slot, chosen: Leader) -> SlotResult<Slot> {
    if !target.is_booked {
        return Err(SlotError::Validation(format!(
            "Slot {} is not booked; only booked slots take support",
            target.id
        )));
    }
    if target.support_leader.is_some() {
        return Err(SlotError::Validation(format!(
            "Slot {} already has a support leader",
            target.id
        )));
    }
    if chosen == target.leader {
        return Err(SlotError::Validation(
            "A leader cannot support their own slot".to_string(),
        ));
    }
    if backs_existing_support(all, target) {
        return Err(SlotError::Validation(format!(
            "Slot {} is backing another booking's support assignment",
            target.id
        )));
    }
    if !has_equivalent_free_slot(all, chosen, target.start_time, target.end_time) {
        return Err(SlotError::Equivalence(format!(
            "{} has no free slot matching {} - {}",
            chosen, target.start_time, target.end_time
        )));
    }

    let mut updated = target.clone();
    updated.support_leader = Some(chosen);
    Ok(updated)
}
