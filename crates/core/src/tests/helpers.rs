// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{GenerateParams, generate_auto_shift};
use dshift_domain::{
    HelpStaff, ParkingSpot, PreferredDayOff, ShiftAssignment, Staff, StaffId, TimeSlot,
};
use time::Date;
use time::macros::date;

/// A Monday.
pub const MONDAY: Date = date!(2025 - 01 - 06);

pub fn create_test_staff(id: &str, slots: &[TimeSlot]) -> Staff {
    Staff::new(id, &format!("Staff {id}"), 5, slots.iter().copied(), false)
}

pub fn create_test_help_staff(id: &str, slots: &[TimeSlot], dates: &[Date]) -> HelpStaff {
    HelpStaff::new(
        id,
        &format!("Help {id}"),
        slots.iter().copied(),
        dates.iter().copied(),
        false,
    )
}

pub fn make_day_off(staff_id: &str, date: Date) -> PreferredDayOff {
    PreferredDayOff::new(StaffId::new(staff_id), date)
}

pub fn make_spots(tokens: &[&str]) -> Vec<ParkingSpot> {
    tokens.iter().map(|t| ParkingSpot::new(t)).collect()
}

pub fn consecutive_dates(start: Date, count: usize) -> Vec<Date> {
    std::iter::successors(Some(start), |d| d.next_day())
        .take(count)
        .collect()
}

pub fn count_in(assignments: &[ShiftAssignment], date: Date, slot: TimeSlot) -> usize {
    assignments
        .iter()
        .filter(|a| a.date == date && a.time_slot == slot)
        .count()
}

pub fn count_for(assignments: &[ShiftAssignment], staff_id: &str) -> usize {
    assignments
        .iter()
        .filter(|a| a.staff_id.value() == staff_id)
        .count()
}

/// Runs the generator with a requirement function and no parking spots.
pub fn generate_with<F>(
    dates: &[Date],
    staff: &[Staff],
    help_staff: &[HelpStaff],
    day_offs: &[PreferredDayOff],
    requirements: F,
) -> Vec<ShiftAssignment>
where
    F: Fn(Date, TimeSlot) -> u32,
{
    let spots: Vec<ParkingSpot> = Vec::new();
    generate_auto_shift(&GenerateParams {
        period_dates: dates,
        staff,
        help_staff,
        day_offs,
        requirements: &requirements,
        all_parking_spots: &spots,
    })
}

/// A requirement function asking for `count` in `slot` and nothing else.
pub fn only(slot: TimeSlot, count: u32) -> impl Fn(Date, TimeSlot) -> u32 {
    move |_, s| if s == slot { count } else { 0 }
}
