use slotbook_core::errors::{SlotError, SlotResult};

#[test]
fn test_slot_error_display() {
    let not_found = SlotError::NotFound("Slot not found".to_string());
    let validation = SlotError::Validation("Invalid input".to_string());
    let conflict = SlotError::Conflict("Overlapping interval".to_string());
    let equivalence = SlotError::Equivalence("No matching free slot".to_string());
    let unavailable = SlotError::Unavailable(eyre::eyre!("Store unreachable"));

    assert_eq!(not_found.to_string(), "Resource not found: Slot not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        conflict.to_string(),
        "Scheduling conflict: Overlapping interval"
    );
    assert_eq!(
        equivalence.to_string(),
        "No equivalent slot: No matching free slot"
    );
    assert!(unavailable.to_string().contains("Persistence unavailable:"));
}

#[test]
fn test_slot_result() {
    let result: SlotResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: SlotResult<i32> = Err(SlotError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("connection refused");
    let slot_error: SlotError = report.into();

    assert!(matches!(slot_error, SlotError::Unavailable(_)));
    assert!(slot_error.to_string().contains("connection refused"));
}
