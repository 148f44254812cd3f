use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::booking::book;
use slotbook_core::models::leader::Leader;
use slotbook_core::models::slot::{Slot, SlotDraft};
use slotbook_core::query::{
    admin_view, availability_context, group_by_day, sorted_by_start, user_view, AdminFilter,
    StatusFilter, SupportFilter,
};

const BOGOTA: Tz = chrono_tz::America::Bogota;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, hour, 0, 0).unwrap()
}

fn slot(leader: Leader, day: u32, hour: u32) -> Slot {
    SlotDraft {
        start: at(day, hour),
        leader,
    }
    .into_slot()
}

fn booked(leader: Leader, day: u32, hour: u32, by: &str, reason: &str) -> Slot {
    book(&slot(leader, day, hour), by, reason).unwrap()
}

#[test]
fn test_sort_is_ascending_and_stable_on_ties() {
    let first = slot(Leader::CamiloMartinez, 13, 21);
    let second = slot(Leader::DianaAcosta, 12, 21);
    let third = slot(Leader::AndreaAcosta, 12, 21); // same instant as `second`

    let sorted = sorted_by_start(vec![first.clone(), second.clone(), third.clone()]);
    assert_eq!(
        sorted.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![second.id, third.id, first.id]
    );
}

#[test]
fn test_user_view_shows_only_free_slots_of_the_leader() {
    let slots = vec![
        booked(Leader::CamiloMartinez, 12, 21, "Ana", "consulta"),
        slot(Leader::CamiloMartinez, 13, 21),
        slot(Leader::DianaAcosta, 12, 21),
    ];

    let view = user_view(&slots, Leader::CamiloMartinez);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].start_time, at(13, 21));
    assert!(!view[0].is_booked);
}

#[rstest]
#[case(StatusFilter::All, 3)]
#[case(StatusFilter::Free, 1)]
#[case(StatusFilter::Booked, 2)]
fn test_admin_status_filter(#[case] status: StatusFilter, #[case] expected: usize) {
    let slots = vec![
        booked(Leader::CamiloMartinez, 12, 21, "Ana", "consulta"),
        booked(Leader::CamiloMartinez, 13, 21, "Luis", "oración"),
        slot(Leader::CamiloMartinez, 14, 21),
        slot(Leader::DianaAcosta, 12, 21),
    ];

    let filter = AdminFilter {
        status,
        ..AdminFilter::for_leader(Leader::CamiloMartinez)
    };
    assert_eq!(admin_view(&slots, &filter).len(), expected);
}

#[test]
fn test_admin_support_filter() {
    let with_support = {
        let mut s = booked(Leader::CamiloMartinez, 12, 21, "Ana", "consulta");
        s.support_leader = Some(Leader::DianaAcosta);
        s
    };
    let slots = vec![
        with_support.clone(),
        booked(Leader::CamiloMartinez, 13, 21, "Luis", "oración"),
    ];

    let with = AdminFilter {
        support: SupportFilter::With,
        ..AdminFilter::for_leader(Leader::CamiloMartinez)
    };
    let without = AdminFilter {
        support: SupportFilter::Without,
        ..AdminFilter::for_leader(Leader::CamiloMartinez)
    };

    assert_eq!(admin_view(&slots, &with)[0].id, with_support.id);
    assert_eq!(admin_view(&slots, &without).len(), 1);
}

#[rstest]
#[case("ana", 1)] // bookedBy, case-insensitive
#[case("CONSUL", 2)] // reason substring, both bookings
#[case("camilo", 3)] // leader display name matches every slot of the leader
#[case("nadie", 0)]
fn test_admin_search_is_case_insensitive_or_across_fields(
    #[case] needle: &str,
    #[case] expected: usize,
) {
    let slots = vec![
        booked(Leader::CamiloMartinez, 12, 21, "Ana", "consulta"),
        booked(Leader::CamiloMartinez, 13, 21, "Luis", "otra consulta"),
        slot(Leader::CamiloMartinez, 14, 21),
    ];

    let filter = AdminFilter {
        search: Some(needle.to_string()),
        ..AdminFilter::for_leader(Leader::CamiloMartinez)
    };
    assert_eq!(admin_view(&slots, &filter).len(), expected);
}

#[test]
fn test_filters_compose_with_and() {
    let slots = vec![
        booked(Leader::CamiloMartinez, 12, 21, "Ana", "consulta"),
        booked(Leader::CamiloMartinez, 13, 21, "Luis", "oración"),
        slot(Leader::CamiloMartinez, 14, 21),
    ];

    let filter = AdminFilter {
        status: StatusFilter::Booked,
        search: Some("luis".to_string()),
        ..AdminFilter::for_leader(Leader::CamiloMartinez)
    };
    let view = admin_view(&slots, &filter);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].booked_by.as_deref(), Some("Luis"));
}

#[test]
fn test_grouping_three_days_yields_three_ordered_groups() {
    let slots = sorted_by_start(vec![
        slot(Leader::CamiloMartinez, 14, 21),
        slot(Leader::CamiloMartinez, 12, 21),
        slot(Leader::CamiloMartinez, 12, 22),
        slot(Leader::CamiloMartinez, 13, 21),
    ]);

    let groups = group_by_day(&slots, BOGOTA);
    assert_eq!(groups.len(), 3);
    let dates: Vec<NaiveDate> = groups.iter().map(|g| g.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
        ]
    );
    assert_eq!(groups[0].slots.len(), 2);
    assert!(groups[0].slots[0].start_time <= groups[0].slots[1].start_time);
}

#[test]
fn test_grouping_uses_the_display_timezone() {
    // 02:00 UTC on the 13th is still the evening of the 12th in Bogotá.
    let late = SlotDraft {
        start: Utc.with_ymd_and_hms(2026, 1, 13, 2, 0, 0).unwrap(),
        leader: Leader::CamiloMartinez,
    }
    .into_slot();
    let evening = slot(Leader::CamiloMartinez, 12, 23);

    let slots = sorted_by_start(vec![evening, late]);
    let groups = group_by_day(&slots, BOGOTA);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].date, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
}

#[test]
fn test_availability_context_lists_free_slots_only() {
    let slots = vec![
        booked(Leader::CamiloMartinez, 12, 21, "Ana", "consulta"),
        slot(Leader::DianaAcosta, 13, 21),
    ];

    let context = availability_context(&slots, BOGOTA);
    let lines: Vec<&str> = context.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("13/01/2026"));
    assert!(lines[0].contains("16:00")); // 21:00 UTC is 16:00 in Bogotá
    assert!(lines[0].contains("Diana Acosta"));
}
