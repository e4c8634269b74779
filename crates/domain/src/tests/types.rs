// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentId, DomainError, HelpStaff, ParkingSpot, PreferredDayOff, ShiftAssignment, Staff,
    StaffId, TimeSlot, has_day_off,
};
use std::str::FromStr;
use time::macros::date;

#[test]
fn test_time_slot_round_trips_through_str() {
    for slot in TimeSlot::ALL {
        assert_eq!(TimeSlot::from_str(slot.as_str()), Ok(slot));
    }
}

#[test]
fn test_time_slot_rejects_unknown_name() {
    let result: Result<TimeSlot, DomainError> = TimeSlot::from_str("night");
    assert_eq!(
        result,
        Err(DomainError::InvalidTimeSlot(String::from("night")))
    );
}

#[test]
fn test_time_slot_order_is_canonical() {
    let mut slots: Vec<TimeSlot> = vec![TimeSlot::Evening, TimeSlot::Morning, TimeSlot::Afternoon];
    slots.sort();
    assert_eq!(slots, TimeSlot::ALL.to_vec());

    for (i, slot) in TimeSlot::ALL.iter().enumerate() {
        assert_eq!(slot.index(), i);
    }
}

#[test]
fn test_assignment_id_is_derived_from_staff_date_and_slot() {
    let id: AssignmentId = AssignmentId::for_slot(
        &StaffId::new("s1"),
        date!(2025 - 02 - 03),
        TimeSlot::Evening,
    );
    assert_eq!(id.value(), "s1:2025-02-03:evening");
}

#[test]
fn test_staff_deserializes_from_camel_case_json() {
    let json: &str = r#"{
        "id": "s1",
        "name": "Yamada",
        "maxWeeklyShifts": 3,
        "availableSlots": ["evening", "morning"],
        "usesParking": true
    }"#;

    let staff: Staff = serde_json::from_str(json).unwrap();

    assert_eq!(staff.id, StaffId::new("s1"));
    assert_eq!(staff.max_weekly_shifts, 3);
    assert!(staff.uses_parking);
    let slots: Vec<TimeSlot> = staff.available_slots.iter().copied().collect();
    assert_eq!(slots, vec![TimeSlot::Morning, TimeSlot::Evening]);
}

#[test]
fn test_help_staff_dates_deserialize_as_iso_strings() {
    let json: &str = r#"{
        "id": "h1",
        "name": "Sato",
        "availableSlots": ["morning"],
        "availableDates": ["2025-02-04", "2025-02-03"],
        "usesParking": false
    }"#;

    let help: HelpStaff = serde_json::from_str(json).unwrap();

    assert!(help.available_dates.contains(&date!(2025 - 02 - 03)));
    assert!(help.available_dates.contains(&date!(2025 - 02 - 04)));
}

#[test]
fn test_assignment_serializes_null_parking_spot() {
    let assignment: ShiftAssignment = ShiftAssignment::new(
        StaffId::new("s1"),
        date!(2025 - 02 - 03),
        TimeSlot::Morning,
        None,
    );

    let value: serde_json::Value = serde_json::to_value(&assignment).unwrap();

    assert_eq!(value["staffId"], "s1");
    assert_eq!(value["date"], "2025-02-03");
    assert_eq!(value["timeSlot"], "morning");
    assert!(value["parkingSpot"].is_null());
}

#[test]
fn test_assignment_serializes_parking_spot_token() {
    let assignment: ShiftAssignment = ShiftAssignment::new(
        StaffId::new("s1"),
        date!(2025 - 02 - 03),
        TimeSlot::Morning,
        Some(ParkingSpot::new("B1")),
    );

    let value: serde_json::Value = serde_json::to_value(&assignment).unwrap();
    assert_eq!(value["parkingSpot"], "B1");
}

#[test]
fn test_has_day_off_matches_staff_and_date() {
    let s1: StaffId = StaffId::new("s1");
    let s2: StaffId = StaffId::new("s2");
    let day_offs: Vec<PreferredDayOff> =
        vec![PreferredDayOff::new(s1.clone(), date!(2025 - 02 - 03))];

    assert!(has_day_off(&day_offs, &s1, date!(2025 - 02 - 03)));
    assert!(!has_day_off(&day_offs, &s1, date!(2025 - 02 - 04)));
    assert!(!has_day_off(&day_offs, &s2, date!(2025 - 02 - 03)));
}

#[test]
fn test_staff_new_collects_slots() {
    let staff: Staff = Staff::new(
        "s1",
        "Yamada",
        5,
        [TimeSlot::Afternoon, TimeSlot::Morning, TimeSlot::Afternoon],
        false,
    );
    assert_eq!(staff.available_slots.len(), 2);
}
