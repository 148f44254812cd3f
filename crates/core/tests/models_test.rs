use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, from_value, json, to_value};
use slotbook_core::models::follow_up::{FollowUpPatch, FollowUpStep};
use slotbook_core::models::leader::Leader;
use slotbook_core::models::slot::{Slot, SlotDraft};

#[rstest]
#[case(Leader::CamiloMartinez, "Camilo Martinez")]
#[case(Leader::WillmerChisco, "Willmer Chisco")]
#[case(Leader::JhonBotton, "Jhon Botton")]
#[case(Leader::DianaAcosta, "Diana Acosta")]
#[case(Leader::AndreaAcosta, "Andrea Acosta")]
#[case(Leader::MayerlyCarrero, "Mayerly Carrero")]
fn test_leader_wire_names(#[case] leader: Leader, #[case] name: &str) {
    assert_eq!(to_value(leader).unwrap(), json!(name));
    assert_eq!(from_value::<Leader>(json!(name)).unwrap(), leader);
    assert_eq!(name.parse::<Leader>().unwrap(), leader);
}

#[test]
fn test_unknown_leader_name_rejected() {
    assert!(from_value::<Leader>(json!("Nadie Conocido")).is_err());
    assert!("Nadie Conocido".parse::<Leader>().is_err());
}

#[rstest]
#[case(FollowUpStep::Step1, "Paso 1")]
#[case(FollowUpStep::Step3And4, "Paso 3 y 4")]
#[case(FollowUpStep::Step6And7, "Paso 6 y 7")]
#[case(FollowUpStep::Step12, "Paso 12")]
fn test_follow_up_step_labels(#[case] step: FollowUpStep, #[case] label: &str) {
    assert_eq!(to_value(step).unwrap(), json!(label));
    assert_eq!(from_value::<FollowUpStep>(json!(label)).unwrap(), step);
    assert_eq!(step.label(), label);
}

#[test]
fn test_slot_serializes_with_sheet_column_names() {
    let slot = SlotDraft {
        start: Utc.with_ymd_and_hms(2026, 1, 12, 21, 0, 0).unwrap(),
        leader: Leader::CamiloMartinez,
    }
    .into_slot();

    let value = to_value(&slot).unwrap();
    let object = value.as_object().unwrap();

    assert!(object.contains_key("id"));
    assert!(object.contains_key("startTime"));
    assert!(object.contains_key("endTime"));
    assert_eq!(object["leaderName"], json!("Camilo Martinez"));
    assert_eq!(object["isBooked"], json!(false));
    // Unset optionals stay off the wire entirely.
    assert!(!object.contains_key("bookedBy"));
    assert!(!object.contains_key("supportLeaderName"));
}

#[test]
fn test_slot_deserializes_from_minimal_wire_record() {
    // The sheet bridge omits every column that was never written.
    let slot: Slot = from_str(
        r#"{
            "id": "7f2c0a92-3c4d-4f6a-9a3e-111111111111",
            "startTime": "2026-01-12T21:00:00Z",
            "endTime": "2026-01-12T22:00:00Z",
            "leaderName": "Diana Acosta",
            "isBooked": false
        }"#,
    )
    .unwrap();

    assert_eq!(slot.leader, Leader::DianaAcosta);
    assert_eq!(slot.booked_by, None);
    assert_eq!(slot.support_leader, None);
    assert!(!slot.follow_up_done);
    assert!(!slot.needs_reinforcement);
    assert_eq!(slot.follow_up_step, None);
}

#[test]
fn test_follow_up_patch_distinguishes_absent_from_null_step() {
    let untouched: FollowUpPatch = from_str(r#"{"followUpDone": true}"#).unwrap();
    assert_eq!(untouched.follow_up_step, None);

    let cleared: FollowUpPatch = from_str(r#"{"followUpStep": null}"#).unwrap();
    assert_eq!(cleared.follow_up_step, Some(None));

    let set: FollowUpPatch = from_str(r#"{"followUpStep": "Paso 2"}"#).unwrap();
    assert_eq!(set.follow_up_step, Some(Some(FollowUpStep::Step2)));
}

#[test]
fn test_follow_up_patch_round_trip() {
    let patch = FollowUpPatch {
        follow_up_done: Some(true),
        needs_reinforcement: Some(false),
        follow_up_step: Some(Some(FollowUpStep::Step9)),
    };

    let value = to_value(&patch).unwrap();
    assert_eq!(value["followUpDone"], json!(true));
    assert_eq!(value["followUpStep"], json!("Paso 9"));

    let back: FollowUpPatch = from_value(value).unwrap();
    assert_eq!(back.follow_up_step, Some(Some(FollowUpStep::Step9)));
}
