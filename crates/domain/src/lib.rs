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

mod availability;
mod error;
mod help_alert;
mod parking;
mod period;
mod requirements;
mod types;
mod validation;
mod weekly_quota;

#[cfg(test)]
mod tests;

pub use availability::{RosterMember, is_available_slot};
pub use help_alert::{HelpAlertInfo, assignment_shortage, compute_help_alerts};
pub use parking::{
    ParkingConfig, ParkingSeries, ParkingSlotType, allocate_parking, first_free_spot, spot_held_on,
};
pub use period::{ShiftPeriod, parse_date, week_dates};
pub use requirements::{
    CategoryDefaults, DayCategory, MAX_REQUIRED_COUNT, RequiredCount, RequirementTable, SlotCounts,
    day_category,
};
pub use weekly_quota::{iso_week_key, total_worked_days, weekly_worked_days};

// Re-export public types
pub use error::DomainError;
pub use types::{
    AssignmentId, DayOffId, HelpStaff, ParkingSpot, PreferredDayOff, ShiftAssignment,
    ShiftSlotConfig, Staff, StaffId, TimeSlot, has_day_off,
};
pub use validation::{
    MAX_WEEKLY_SHIFTS, MIN_WEEKLY_SHIFTS, validate_day_off_unique, validate_help_staff_fields,
    validate_staff_fields, validate_staff_id_unique,
};
