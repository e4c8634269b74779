// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worked-day counting.
//!
//! A worked day is a distinct date with at least one assignment. Working
//! several slots on the same date counts once.
//!
//! ## Invariants
//!
//! - Weeks are ISO weeks: Monday through Sunday
//! - Counting is pure over the supplied assignment slice

use crate::types::{ShiftAssignment, StaffId};
use std::collections::BTreeSet;
use time::Date;

/// Returns the `(iso_year, iso_week)` key of the week containing `date`.
///
/// Two dates share a Monday-to-Sunday week exactly when their keys match,
/// including across year boundaries.
#[must_use]
pub fn iso_week_key(date: Date) -> (i32, u8) {
    let (year, week, _) = date.to_iso_week_date();
    (year, week)
}

/// Counts the distinct dates `staff_id` works in the ISO week containing `reference_date`.
///
/// # Arguments
///
/// * `staff_id` - The staff member to count for
/// * `reference_date` - Any date within the week of interest
/// * `assignments` - The assignments to count over
#[must_use]
pub fn weekly_worked_days(
    staff_id: &StaffId,
    reference_date: Date,
    assignments: &[ShiftAssignment],
) -> usize {
    let week: (i32, u8) = iso_week_key(reference_date);

    assignments
        .iter()
        .filter(|a| &a.staff_id == staff_id && iso_week_key(a.date) == week)
        .map(|a| a.date)
        .collect::<BTreeSet<Date>>()
        .len()
}

/// Counts the distinct dates `staff_id` works across all of `assignments`.
#[must_use]
pub fn total_worked_days(staff_id: &StaffId, assignments: &[ShiftAssignment]) -> usize {
    assignments
        .iter()
        .filter(|a| &a.staff_id == staff_id)
        .map(|a| a.date)
        .collect::<BTreeSet<Date>>()
        .len()
}
