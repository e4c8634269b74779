// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Staff or help staff name is empty or invalid.
    InvalidName(String),
    /// Weekly shift limit is outside the permitted range.
    InvalidMaxWeeklyShifts {
        /// The rejected value.
        value: u8,
    },
    /// A help staff member was registered without any workable slot.
    NoAvailableSlots {
        /// The help staff member's id.
        staff_id: String,
    },
    /// Staff id is already in use by a staff or help staff member.
    DuplicateStaffId(String),
    /// A preferred day off already exists for this staff member and date.
    DuplicateDayOff {
        /// The staff member's id.
        staff_id: String,
        /// The duplicated date.
        date: Date,
    },
    /// Time slot name is not one of morning, afternoon, evening.
    InvalidTimeSlot(String),
    /// Parking series name is not recognised.
    InvalidParkingSeries(String),
    /// Required headcount is outside the permitted range.
    InvalidRequiredCount {
        /// The rejected value.
        count: u32,
        /// The maximum accepted value.
        max: u32,
    },
    /// Period end date precedes its start date.
    InvalidPeriod {
        /// The period start date.
        start_date: Date,
        /// The period end date.
        end_date: Date,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidMaxWeeklyShifts { value } => {
                write!(
                    f,
                    "Invalid weekly shift limit: {value}. Must be between 1 and 7"
                )
            }
            Self::NoAvailableSlots { staff_id } => {
                write!(
                    f,
                    "Staff '{staff_id}' must be available for at least one slot"
                )
            }
            Self::DuplicateStaffId(id) => write!(f, "Staff id '{id}' already exists"),
            Self::DuplicateDayOff { staff_id, date } => {
                write!(
                    f,
                    "Preferred day off on {date} already exists for staff '{staff_id}'"
                )
            }
            Self::InvalidTimeSlot(value) => write!(f, "Invalid time slot: {value}"),
            Self::InvalidParkingSeries(value) => write!(f, "Invalid parking series: {value}"),
            Self::InvalidRequiredCount { count, max } => {
                write!(
                    f,
                    "Invalid required count: {count}. Must be between 0 and {max}"
                )
            }
            Self::InvalidPeriod {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Period end date {end_date} is before its start date {start_date}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
