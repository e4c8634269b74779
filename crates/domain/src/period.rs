// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift periods and date parsing.
//!
//! A period is the inclusive date range over which a schedule is built.
//! The generator expects an ascending, deduplicated date list; this module
//! produces one and rejects malformed input before it gets that far.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::iter::successors;
use time::macros::format_description;
use time::{Date, Month};

/// Day of month on which the default period starts.
const DEFAULT_START_DAY: u8 = 16;

/// Day of month on which the default period ends (in the following month).
const DEFAULT_END_DAY: u8 = 15;

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if `value` is not a valid calendar date in that format.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPeriod {
    /// First date of the period.
    pub start_date: Date,
    /// Last date of the period.
    pub end_date: Date,
}

impl ShiftPeriod {
    /// Creates a new `ShiftPeriod`.
    ///
    /// # Errors
    ///
    /// Returns an error if `end_date` is before `start_date`.
    pub fn new(start_date: Date, end_date: Date) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::InvalidPeriod {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the default period around `today`: the 16th of this month
    /// through the 15th of the next.
    ///
    /// # Errors
    ///
    /// Returns an error if the dates fall outside the supported calendar range.
    pub fn default_for(today: Date) -> Result<Self, DomainError> {
        let start_date: Date =
            calendar_date(today.year(), today.month(), DEFAULT_START_DAY, "start")?;

        let (end_year, end_month): (i32, Month) = if today.month() == Month::December {
            (today.year() + 1, Month::January)
        } else {
            (today.year(), today.month().next())
        };
        let end_date: Date = calendar_date(end_year, end_month, DEFAULT_END_DAY, "end")?;

        Self::new(start_date, end_date)
    }

    /// Returns every date of the period in ascending order.
    ///
    /// Returns an empty list if the end precedes the start.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        if self.end_date < self.start_date {
            return Vec::new();
        }
        successors(Some(self.start_date), |d| d.next_day())
            .take_while(|d| *d <= self.end_date)
            .collect()
    }

    /// Returns whether `date` falls within the period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

fn calendar_date(year: i32, month: Month, day: u8, bound: &str) -> Result<Date, DomainError> {
    Date::from_calendar_date(year, month, day).map_err(|e| DomainError::DateArithmeticOverflow {
        operation: format!("computing default period {bound}: {e}"),
    })
}

/// Returns the seven consecutive dates starting at `week_start`.
///
/// The list is shorter only at the end of the supported calendar range.
#[must_use]
pub fn week_dates(week_start: Date) -> Vec<Date> {
    successors(Some(week_start), |d| d.next_day())
        .take(7)
        .collect()
}
