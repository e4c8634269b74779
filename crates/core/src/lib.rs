// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod generator;
mod roster;
mod schedule;

#[cfg(test)]
mod tests;

use dshift_domain::{
    HelpAlertInfo, ParkingSpot, RequirementTable, ShiftAssignment, compute_help_alerts,
};
use time::Date;

// Re-export public types and functions
pub use error::CoreError;
pub use generator::{GenerateParams, GenerationSummary, UnmetDemand, generate_auto_shift, summarize};
pub use roster::{DayOffSync, HelpStaffUpdate, Roster, StaffUpdate};
pub use schedule::Schedule;

/// Generates assignments for `period_dates` from a roster and requirement table.
///
/// # Arguments
///
/// * `roster` - The staff, help staff, and days off to schedule
/// * `requirements` - The headcount table
/// * `all_parking_spots` - The ordered spot catalog
/// * `period_dates` - The dates to schedule
///
/// # Returns
///
/// The generated assignments, grouped by date.
#[must_use]
pub fn generate_for_roster(
    roster: &Roster,
    requirements: &RequirementTable,
    all_parking_spots: &[ParkingSpot],
    period_dates: &[Date],
) -> Vec<ShiftAssignment> {
    generate_auto_shift(&GenerateParams {
        period_dates,
        staff: roster.staff(),
        help_staff: roster.help_staff(),
        day_offs: roster.day_offs(),
        requirements,
        all_parking_spots,
    })
}

/// Computes help alerts for `period_dates` from a roster and its explicit
/// requirement configs.
///
/// Only explicitly configured `(date, slot)` pairs can raise an alert.
#[must_use]
pub fn help_alerts_for_roster(
    roster: &Roster,
    requirements: &RequirementTable,
    schedule: &Schedule,
    period_dates: &[Date],
) -> Vec<HelpAlertInfo> {
    compute_help_alerts(
        period_dates,
        roster.staff(),
        schedule.assignments(),
        roster.day_offs(),
        &requirements.configs,
        roster.help_staff(),
    )
}
