// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{HelpStaff, PreferredDayOff, Staff, StaffId, has_day_off};
use time::Date;

/// Smallest accepted weekly shift limit.
pub const MIN_WEEKLY_SHIFTS: u8 = 1;

/// Largest accepted weekly shift limit.
pub const MAX_WEEKLY_SHIFTS: u8 = 7;

/// Validates that a staff member's basic field constraints are met.
///
/// This function checks field values only.
/// It does NOT check for id uniqueness (that requires context).
///
/// # Arguments
///
/// * `staff` - The staff member to validate
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank
/// - The weekly shift limit is outside 1..=7
pub fn validate_staff_fields(staff: &Staff) -> Result<(), DomainError> {
    // Rule: name must not be blank
    if staff.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: weekly limit must be a workable number of days
    if !(MIN_WEEKLY_SHIFTS..=MAX_WEEKLY_SHIFTS).contains(&staff.max_weekly_shifts) {
        return Err(DomainError::InvalidMaxWeeklyShifts {
            value: staff.max_weekly_shifts,
        });
    }

    Ok(())
}

/// Validates that a help staff member's basic field constraints are met.
///
/// # Errors
///
/// Returns an error if:
/// - The name is blank
/// - No slot is available
pub fn validate_help_staff_fields(help_staff: &HelpStaff) -> Result<(), DomainError> {
    if help_staff.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    if help_staff.available_slots.is_empty() {
        return Err(DomainError::NoAvailableSlots {
            staff_id: help_staff.id.value().to_string(),
        });
    }

    Ok(())
}

/// Validates that `new_id` is not used by any staff or help staff member.
///
/// Staff and help staff share one id space because assignments refer to
/// both through the same `staff_id` field.
///
/// # Errors
///
/// Returns an error if the id is already in use.
pub fn validate_staff_id_unique(
    new_id: &StaffId,
    staff: &[Staff],
    help_staff: &[HelpStaff],
) -> Result<(), DomainError> {
    let in_use: bool =
        staff.iter().any(|s| &s.id == new_id) || help_staff.iter().any(|h| &h.id == new_id);

    if in_use {
        return Err(DomainError::DuplicateStaffId(new_id.value().to_string()));
    }
    Ok(())
}

/// Validates that `staff_id` has no preferred day off on `date` yet.
///
/// # Errors
///
/// Returns an error if the day off already exists.
pub fn validate_day_off_unique(
    staff_id: &StaffId,
    date: Date,
    day_offs: &[PreferredDayOff],
) -> Result<(), DomainError> {
    if has_day_off(day_offs, staff_id, date) {
        return Err(DomainError::DuplicateDayOff {
            staff_id: staff_id.value().to_string(),
            date,
        });
    }
    Ok(())
}
