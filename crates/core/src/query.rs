//! Read-side views over the slot collection. Every view is pure and sorts
//! ascending by start time; ties keep their original order (the sort is
//! stable), so repeated renders of the same collection agree.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::leader::Leader;
use crate::models::slot::Slot;

pub fn sorted_by_start(mut slots: Vec<Slot>) -> Vec<Slot> {
    slots.sort_by_key(|slot| slot.start_time);
    slots
}

/// What an end user browses: the selected leader's free slots.
pub fn user_view(slots: &[Slot], leader: Leader) -> Vec<Slot> {
    sorted_by_start(
        slots
            .iter()
            .filter(|slot| !slot.is_booked && slot.leader == leader)
            .cloned()
            .collect(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Free,
    Booked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportFilter {
    #[default]
    Any,
    With,
    Without,
}

/// Admin filter criteria. All of them AND together; the leader is always
/// required, the rest default to pass-through.
#[derive(Debug, Clone)]
pub struct AdminFilter {
    pub leader: Leader,
    pub status: StatusFilter,
    pub support: SupportFilter,
    pub search: Option<String>,
}

impl AdminFilter {
    pub fn for_leader(leader: Leader) -> Self {
        Self {
            leader,
            status: StatusFilter::default(),
            support: SupportFilter::default(),
            search: None,
        }
    }
}

fn matches_search(slot: &Slot, needle: &str) -> bool {
    let booked_by = slot.booked_by.as_deref().unwrap_or("").to_lowercase();
    let reason = slot.reason.as_deref().unwrap_or("").to_lowercase();
    let leader = slot.leader.display_name().to_lowercase();
    booked_by.contains(needle) || reason.contains(needle) || leader.contains(needle)
}

pub fn admin_view(slots: &[Slot], filter: &AdminFilter) -> Vec<Slot> {
    let needle = filter
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    sorted_by_start(
        slots
            .iter()
            .filter(|slot| slot.leader == filter.leader)
            .filter(|slot| match filter.status {
                StatusFilter::All => true,
                StatusFilter::Free => !slot.is_booked,
                StatusFilter::Booked => slot.is_booked,
            })
            .filter(|slot| match filter.support {
                SupportFilter::Any => true,
                SupportFilter::With => slot.support_leader.is_some(),
                SupportFilter::Without => slot.support_leader.is_none(),
            })
            .filter(|slot| match &needle {
                Some(needle) => matches_search(slot, needle),
                None => true,
            })
            .cloned()
            .collect(),
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedSlotsResponse {
    pub groups: Vec<DayGroup>,
}

/// Groups an already filtered and sorted sequence by the calendar day of
/// its start time in the given display timezone. Group order and intra-group
/// order follow the input.
pub fn group_by_day(slots: &[Slot], tz: Tz) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for slot in slots {
        let date = slot.start_time.with_timezone(&tz).date_naive();
        match groups.last_mut() {
            Some(group) if group.date == date => group.slots.push(slot.clone()),
            _ => groups.push(DayGroup {
                date,
                slots: vec![slot.clone()],
            }),
        }
    }
    groups
}

/// The read-only digest the external chat assistant consumes: one line per
/// free slot, in the display timezone.
pub fn availability_context(slots: &[Slot], tz: Tz) -> String {
    sorted_by_start(slots.iter().filter(|slot| !slot.is_booked).cloned().collect())
        .iter()
        .map(|slot| {
            let local = slot.start_time.with_timezone(&tz);
            format!(
                "- Fecha: {}, Hora: {}, Responsable: {}",
                local.format("%d/%m/%Y"),
                local.format("%H:%M"),
                slot.leader
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
