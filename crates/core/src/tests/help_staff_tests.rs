// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    MONDAY, consecutive_dates, count_for, count_in, create_test_help_staff, create_test_staff,
    generate_with, make_day_off, only,
};
use crate::{GenerationSummary, summarize};
use dshift_domain::{HelpStaff, PreferredDayOff, ShiftAssignment, Staff, TimeSlot};
use time::Date;
use time::macros::date;

#[test]
fn test_help_staff_unused_when_regular_staff_cover_demand() {
    let staff: Vec<Staff> = vec![
        create_test_staff("s1", &[TimeSlot::Morning]),
        create_test_staff("s2", &[TimeSlot::Morning]),
    ];
    let help_staff: Vec<HelpStaff> = vec![create_test_help_staff(
        "h1",
        &[TimeSlot::Morning],
        &[MONDAY],
    )];

    let result: Vec<ShiftAssignment> = generate_with(
        &[MONDAY],
        &staff,
        &help_staff,
        &[],
        only(TimeSlot::Morning, 2),
    );

    assert_eq!(result.len(), 2);
    assert_eq!(count_for(&result, "h1"), 0);
}

#[test]
fn test_help_staff_fill_remaining_demand() {
    let staff: Vec<Staff> = vec![create_test_staff("s1", &[TimeSlot::Morning])];
    let help_staff: Vec<HelpStaff> = vec![create_test_help_staff(
        "h1",
        &[TimeSlot::Morning],
        &[MONDAY],
    )];

    let result: Vec<ShiftAssignment> = generate_with(
        &[MONDAY],
        &staff,
        &help_staff,
        &[],
        only(TimeSlot::Morning, 2),
    );

    assert_eq!(count_in(&result, MONDAY, TimeSlot::Morning), 2);
    assert_eq!(result[0].staff_id.value(), "s1");
    assert_eq!(result[1].staff_id.value(), "h1");

    let summary: GenerationSummary =
        summarize(&[MONDAY], &only(TimeSlot::Morning, 2), &help_staff, &result);
    assert_eq!(summary.help_assignment_count, 1);
}

#[test]
fn test_help_staff_only_called_in_on_available_dates() {
    let tuesday: Date = date!(2025 - 01 - 07);
    let help_staff: Vec<HelpStaff> = vec![create_test_help_staff(
        "h1",
        &[TimeSlot::Morning],
        &[tuesday],
    )];
    let dates: Vec<Date> = consecutive_dates(MONDAY, 3);

    let result: Vec<ShiftAssignment> =
        generate_with(&dates, &[], &help_staff, &[], only(TimeSlot::Morning, 1));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].date, tuesday);
}

#[test]
fn test_help_staff_ignore_weekly_limit() {
    let dates: Vec<Date> = consecutive_dates(MONDAY, 7);
    let help_staff: Vec<HelpStaff> =
        vec![create_test_help_staff("h1", &[TimeSlot::Evening], &dates)];

    let result: Vec<ShiftAssignment> =
        generate_with(&dates, &[], &help_staff, &[], only(TimeSlot::Evening, 1));

    assert_eq!(count_for(&result, "h1"), 7);
}

#[test]
fn test_help_staff_with_fewest_total_days_go_first() {
    let dates: Vec<Date> = consecutive_dates(MONDAY, 4);
    let help_staff: Vec<HelpStaff> = vec![
        create_test_help_staff("h1", &[TimeSlot::Morning], &dates),
        create_test_help_staff("h2", &[TimeSlot::Morning], &dates),
    ];

    let result: Vec<ShiftAssignment> =
        generate_with(&dates, &[], &help_staff, &[], only(TimeSlot::Morning, 1));

    let order: Vec<&str> = result.iter().map(|a| a.staff_id.value()).collect();
    assert_eq!(order, vec!["h1", "h2", "h1", "h2"]);
}

#[test]
fn test_help_staff_load_spans_weeks() {
    // h1 works the whole first week alone; h2 has fewer days on the next Monday
    let dates: Vec<Date> = consecutive_dates(MONDAY, 8);
    let next_monday: Date = date!(2025 - 01 - 13);
    let help_staff: Vec<HelpStaff> = vec![
        create_test_help_staff("h1", &[TimeSlot::Morning], &dates),
        create_test_help_staff("h2", &[TimeSlot::Morning], &[next_monday]),
    ];

    let result: Vec<ShiftAssignment> =
        generate_with(&dates, &[], &help_staff, &[], only(TimeSlot::Morning, 1));

    assert_eq!(count_for(&result, "h1"), 7);
    assert_eq!(result[7].staff_id.value(), "h2");
}

#[test]
fn test_help_staff_cover_all_their_required_slots() {
    let help_staff: Vec<HelpStaff> = vec![create_test_help_staff(
        "h1",
        &[TimeSlot::Morning, TimeSlot::Afternoon],
        &[MONDAY],
    )];
    let requirements = |_: Date, slot: TimeSlot| -> u32 {
        match slot {
            TimeSlot::Morning | TimeSlot::Afternoon => 1,
            TimeSlot::Evening => 0,
        }
    };

    let result: Vec<ShiftAssignment> =
        generate_with(&[MONDAY], &[], &help_staff, &[], requirements);

    assert_eq!(result.len(), 2);
}

#[test]
fn test_day_off_entries_do_not_filter_help_staff() {
    let help_staff: Vec<HelpStaff> = vec![create_test_help_staff(
        "h1",
        &[TimeSlot::Morning],
        &[MONDAY],
    )];
    let day_offs: Vec<PreferredDayOff> = vec![make_day_off("h1", MONDAY)];

    let result: Vec<ShiftAssignment> = generate_with(
        &[MONDAY],
        &[],
        &help_staff,
        &day_offs,
        only(TimeSlot::Morning, 1),
    );

    assert_eq!(count_for(&result, "h1"), 1);
}
