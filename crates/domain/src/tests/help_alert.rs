// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    HelpAlertInfo, HelpStaff, PreferredDayOff, ShiftAssignment, ShiftSlotConfig, Staff, StaffId,
    TimeSlot, assignment_shortage, compute_help_alerts,
};
use time::Date;
use time::macros::date;

const DATE: Date = date!(2025 - 01 - 06);
const NEXT_DATE: Date = date!(2025 - 01 - 07);

fn make_staff(id: &str, slots: &[TimeSlot]) -> Staff {
    Staff::new(id, &format!("Staff {id}"), 5, slots.iter().copied(), false)
}

fn make_assignment(staff_id: &str, date: Date, slot: TimeSlot) -> ShiftAssignment {
    ShiftAssignment::new(StaffId::new(staff_id), date, slot, None)
}

fn make_day_off(staff_id: &str, date: Date) -> PreferredDayOff {
    PreferredDayOff::new(StaffId::new(staff_id), date)
}

fn morning_staff() -> Vec<Staff> {
    vec![
        make_staff("s1", &[TimeSlot::Morning]),
        make_staff("s2", &[TimeSlot::Morning]),
        make_staff("s3", &[TimeSlot::Morning]),
    ]
}

#[test]
fn test_day_offs_causing_shortage_are_detected() {
    let configs: Vec<ShiftSlotConfig> = vec![ShiftSlotConfig::new(DATE, TimeSlot::Morning, 3)];
    let day_offs: Vec<PreferredDayOff> = vec![make_day_off("s1", DATE), make_day_off("s2", DATE)];

    let alerts: Vec<HelpAlertInfo> =
        compute_help_alerts(&[DATE], &morning_staff(), &[], &day_offs, &configs, &[]);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].time_slot, TimeSlot::Morning);
    assert_eq!(alerts[0].required_count, 3);
    assert_eq!(alerts[0].shortage, 2);
}

#[test]
fn test_no_alert_when_capacity_meets_requirement() {
    let configs: Vec<ShiftSlotConfig> = vec![ShiftSlotConfig::new(DATE, TimeSlot::Morning, 2)];
    let assignments: Vec<ShiftAssignment> = vec![
        make_assignment("s1", DATE, TimeSlot::Morning),
        make_assignment("s2", DATE, TimeSlot::Morning),
    ];

    let alerts: Vec<HelpAlertInfo> =
        compute_help_alerts(&[DATE], &morning_staff(), &assignments, &[], &configs, &[]);

    assert!(alerts.is_empty());
}

#[test]
fn test_assigned_count_is_informational() {
    let configs: Vec<ShiftSlotConfig> = vec![ShiftSlotConfig::new(DATE, TimeSlot::Morning, 3)];
    let day_offs: Vec<PreferredDayOff> = vec![make_day_off("s1", DATE), make_day_off("s2", DATE)];
    let assignments: Vec<ShiftAssignment> = vec![make_assignment("s3", DATE, TimeSlot::Morning)];

    let alerts: Vec<HelpAlertInfo> = compute_help_alerts(
        &[DATE],
        &morning_staff(),
        &assignments,
        &day_offs,
        &configs,
        &[],
    );

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].assigned_count, 1);
    assert_eq!(alerts[0].shortage, 2);
}

#[test]
fn test_unavailable_slot_reduces_capacity() {
    let staff: Vec<Staff> = vec![
        make_staff("s1", &[TimeSlot::Morning]),
        make_staff("s2", &[TimeSlot::Evening]),
    ];
    let configs: Vec<ShiftSlotConfig> = vec![ShiftSlotConfig::new(DATE, TimeSlot::Evening, 2)];

    let alerts: Vec<HelpAlertInfo> = compute_help_alerts(&[DATE], &staff, &[], &[], &configs, &[]);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].time_slot, TimeSlot::Evening);
    assert_eq!(alerts[0].shortage, 1);
}

#[test]
fn test_help_staff_available_on_date_reduce_shortage() {
    let configs: Vec<ShiftSlotConfig> = vec![ShiftSlotConfig::new(DATE, TimeSlot::Morning, 3)];
    let day_offs: Vec<PreferredDayOff> = vec![make_day_off("s1", DATE), make_day_off("s2", DATE)];
    let help: Vec<HelpStaff> = vec![
        HelpStaff::new("h1", "Sato", [TimeSlot::Morning], [DATE], false),
        // Not available on this date
        HelpStaff::new("h2", "Ito", [TimeSlot::Morning], [NEXT_DATE], false),
        // Not available for this slot
        HelpStaff::new("h3", "Kato", [TimeSlot::Evening], [DATE], false),
    ];

    let alerts: Vec<HelpAlertInfo> =
        compute_help_alerts(&[DATE], &morning_staff(), &[], &day_offs, &configs, &help);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].shortage, 1);
}

#[test]
fn test_help_staff_can_clear_shortage() {
    let configs: Vec<ShiftSlotConfig> = vec![ShiftSlotConfig::new(DATE, TimeSlot::Morning, 2)];
    let day_offs: Vec<PreferredDayOff> = vec![make_day_off("s1", DATE), make_day_off("s2", DATE)];
    let help: Vec<HelpStaff> = vec![HelpStaff::new(
        "h1",
        "Sato",
        [TimeSlot::Morning],
        [DATE],
        false,
    )];

    let alerts: Vec<HelpAlertInfo> =
        compute_help_alerts(&[DATE], &morning_staff(), &[], &day_offs, &configs, &help);

    assert!(alerts.is_empty());
}

#[test]
fn test_unconfigured_and_zero_slots_are_skipped() {
    let configs: Vec<ShiftSlotConfig> = vec![ShiftSlotConfig::new(DATE, TimeSlot::Morning, 0)];

    let alerts: Vec<HelpAlertInfo> = compute_help_alerts(&[DATE], &[], &[], &[], &configs, &[]);

    assert!(alerts.is_empty());
}

#[test]
fn test_alerts_are_ordered_by_date_then_slot() {
    let configs: Vec<ShiftSlotConfig> = vec![
        ShiftSlotConfig::new(NEXT_DATE, TimeSlot::Morning, 1),
        ShiftSlotConfig::new(DATE, TimeSlot::Evening, 1),
        ShiftSlotConfig::new(DATE, TimeSlot::Morning, 1),
    ];

    let alerts: Vec<HelpAlertInfo> =
        compute_help_alerts(&[DATE, NEXT_DATE], &[], &[], &[], &configs, &[]);

    let keys: Vec<(Date, TimeSlot)> = alerts.iter().map(|a| (a.date, a.time_slot)).collect();
    assert_eq!(
        keys,
        vec![
            (DATE, TimeSlot::Morning),
            (DATE, TimeSlot::Evening),
            (NEXT_DATE, TimeSlot::Morning),
        ]
    );
}

#[test]
fn test_dates_outside_the_list_are_ignored() {
    let configs: Vec<ShiftSlotConfig> = vec![ShiftSlotConfig::new(
        date!(2025 - 01 - 08),
        TimeSlot::Morning,
        5,
    )];

    let alerts: Vec<HelpAlertInfo> = compute_help_alerts(&[DATE], &[], &[], &[], &configs, &[]);

    assert!(alerts.is_empty());
}

#[test]
fn test_assignment_shortage_reports_largest_gap() {
    let required = |_: Date, slot: TimeSlot| -> u32 {
        match slot {
            TimeSlot::Morning => 2,
            TimeSlot::Afternoon => 3,
            TimeSlot::Evening => 0,
        }
    };
    let assignments: Vec<ShiftAssignment> = vec![
        make_assignment("s1", DATE, TimeSlot::Morning),
        make_assignment("s1", DATE, TimeSlot::Afternoon),
        make_assignment("s2", DATE, TimeSlot::Evening),
    ];

    assert_eq!(assignment_shortage(DATE, &required, &assignments), 2);
}

#[test]
fn test_assignment_shortage_is_zero_when_covered() {
    let required = |_: Date, slot: TimeSlot| u32::from(slot == TimeSlot::Morning) * 2;
    let assignments: Vec<ShiftAssignment> = vec![
        make_assignment("s1", DATE, TimeSlot::Morning),
        make_assignment("s2", DATE, TimeSlot::Morning),
        make_assignment("s3", DATE, TimeSlot::Morning),
    ];

    assert_eq!(assignment_shortage(DATE, &required, &assignments), 0);
    assert_eq!(assignment_shortage(NEXT_DATE, &required, &[]), 2);
}
