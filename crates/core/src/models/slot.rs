use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::follow_up::FollowUpStep;
use crate::models::leader::Leader;

/// Fixed appointment length on the standard creation path.
pub const SLOT_MINUTES: i64 = 60;

/// One appointment slot. Field names on the wire match what the remote
/// store keeps in its sheet columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(rename = "leaderName")]
    pub leader: Leader,
    pub is_booked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(
        rename = "supportLeaderName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub support_leader: Option<Leader>,
    #[serde(default)]
    pub follow_up_done: bool,
    #[serde(default)]
    pub needs_reinforcement: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_step: Option<FollowUpStep>,
}

/// Creation input: a slot before it has an id. The end is always derived,
/// never supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDraft {
    pub start: DateTime<Utc>,
    #[serde(rename = "leaderName")]
    pub leader: Leader,
}

impl SlotDraft {
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(SLOT_MINUTES)
    }

    /// Materializes the draft into a free slot with a fresh id.
    pub fn into_slot(self) -> Slot {
        Slot {
            id: Uuid::new_v4(),
            start_time: self.start,
            end_time: self.end(),
            leader: self.leader,
            is_booked: false,
            booked_by: None,
            reason: None,
            support_leader: None,
            follow_up_done: false,
            needs_reinforcement: false,
            follow_up_step: None,
        }
    }
}
