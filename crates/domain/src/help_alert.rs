// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staffing shortage detection.
//!
//! This module provides two read-only views over a schedule:
//!
//! - Help alerts: a forward-looking capacity check. For each configured
//!   `(date, slot)` it compares the requirement with everyone who *could*
//!   work it, whether or not they are assigned.
//! - Assignment shortage: how far the actual assignments of a date fall
//!   short of its requirements.
//!
//! Neither view modifies assignments.

use crate::availability::RosterMember;
use crate::requirements::RequiredCount;
use crate::types::{
    HelpStaff, PreferredDayOff, ShiftAssignment, ShiftSlotConfig, Staff, TimeSlot, has_day_off,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// A `(date, slot)` whose requirement exceeds the available headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpAlertInfo {
    /// The affected date.
    pub date: Date,
    /// The affected slot.
    pub time_slot: TimeSlot,
    /// The configured headcount.
    pub required_count: u32,
    /// Assignments currently made for this `(date, slot)`. Informational.
    pub assigned_count: usize,
    /// Required headcount minus available staff and help staff.
    pub shortage: u32,
}

/// Computes help alerts for `dates`.
///
/// Only explicitly configured `(date, slot)` pairs with a positive
/// `required_count` are checked. A regular staff member counts as available
/// when they can work the slot and have no preferred day off on the date.
/// A help staff member counts when the date is one of their available
/// dates and they can work the slot.
///
/// # Arguments
///
/// * `dates` - The dates to check, in output order
/// * `staff` - Regular staff
/// * `assignments` - Current assignments (for `assigned_count` only)
/// * `day_offs` - Preferred days off
/// * `configs` - Configured headcounts
/// * `help_staff` - Help staff
///
/// # Returns
///
/// One `HelpAlertInfo` per `(date, slot)` with a positive shortage, ordered
/// by date then slot.
#[must_use]
pub fn compute_help_alerts(
    dates: &[Date],
    staff: &[Staff],
    assignments: &[ShiftAssignment],
    day_offs: &[PreferredDayOff],
    configs: &[ShiftSlotConfig],
    help_staff: &[HelpStaff],
) -> Vec<HelpAlertInfo> {
    let mut alerts: Vec<HelpAlertInfo> = Vec::new();

    for &date in dates {
        for slot in TimeSlot::ALL {
            let required_count: u32 = configs
                .iter()
                .find(|c| c.date == date && c.time_slot == slot)
                .map_or(0, |c| c.required_count);
            if required_count == 0 {
                continue;
            }

            let assigned_count: usize = assignments
                .iter()
                .filter(|a| a.date == date && a.time_slot == slot)
                .count();

            let available_regular: usize = staff
                .iter()
                .filter(|s| s.is_available(slot) && !has_day_off(day_offs, &s.id, date))
                .count();

            let available_help: usize = help_staff
                .iter()
                .filter(|h| h.available_dates.contains(&date) && h.is_available(slot))
                .count();

            let available: u32 =
                u32::try_from(available_regular + available_help).unwrap_or(u32::MAX);
            let shortage: u32 = required_count.saturating_sub(available);

            if shortage > 0 {
                alerts.push(HelpAlertInfo {
                    date,
                    time_slot: slot,
                    required_count,
                    assigned_count,
                    shortage,
                });
            }
        }
    }

    alerts
}

/// Returns the largest per-slot gap between required and assigned headcount on `date`.
///
/// Slots with no requirement are ignored. Over-assigned slots contribute zero.
#[must_use]
pub fn assignment_shortage<R>(date: Date, requirements: &R, assignments: &[ShiftAssignment]) -> u32
where
    R: RequiredCount + ?Sized,
{
    TimeSlot::ALL
        .into_iter()
        .filter_map(|slot| {
            let required: u32 = requirements.required_count(date, slot);
            if required == 0 {
                return None;
            }
            let assigned: usize = assignments
                .iter()
                .filter(|a| a.date == date && a.time_slot == slot)
                .count();
            Some(required.saturating_sub(u32::try_from(assigned).unwrap_or(u32::MAX)))
        })
        .max()
        .unwrap_or(0)
}
