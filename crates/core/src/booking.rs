//! The free → booked transition. One-way: the core has no un-booking
//! operation, deletion is the only reversal.

use crate::errors::{SlotError, SlotResult};
use crate::models::slot::Slot;

/// Books a free slot for `user_name`. Both fields are required non-empty
/// after trimming; a slot that is already booked is rejected rather than
/// overwritten.
pub fn book(slot: &Slot, user_name: &str, reason: &str) -> SlotResult<Slot> {
    let user_name = user_name.trim();
    let reason = reason.trim();

    if user_name.is_empty() {
        return Err(SlotError::Validation(
            "A booking requires a non-empty name".to_string(),
        ));
    }
    if reason.is_empty() {
        return Err(SlotError::Validation(
            "A booking requires a non-empty reason".to_string(),
        ));
    }
    if slot.is_booked {
        return Err(SlotError::Validation(format!(
            "Slot {} is already booked",
            slot.id
        )));
    }

    let mut booked = slot.clone();
    booked.is_booked = true;
    booked.booked_by = Some(user_name.to_string());
    booked.reason = Some(reason.to_string());
    Ok(booked)
}
