// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dshift_domain::{DomainError, TimeSlot};
use time::Date;

/// Errors that can occur while editing a roster or schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No staff member has the given id.
    StaffNotFound(String),
    /// No help staff member has the given id.
    HelpStaffNotFound(String),
    /// No preferred day off has the given id.
    DayOffNotFound(String),
    /// An assignment already exists for this staff member, date, and slot.
    DuplicateAssignment {
        /// The staff member's id.
        staff_id: String,
        /// The assignment date.
        date: Date,
        /// The assignment slot.
        time_slot: TimeSlot,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::StaffNotFound(id) => write!(f, "Staff '{id}' not found"),
            Self::HelpStaffNotFound(id) => write!(f, "Help staff '{id}' not found"),
            Self::DayOffNotFound(id) => write!(f, "Preferred day off '{id}' not found"),
            Self::DuplicateAssignment {
                staff_id,
                date,
                time_slot,
            } => {
                write!(
                    f,
                    "Staff '{staff_id}' is already assigned to the {time_slot} slot on {date}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
