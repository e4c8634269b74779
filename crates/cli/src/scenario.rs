// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scenario files.
//!
//! A scenario is a JSON snapshot of everything one run needs: the period,
//! the roster, the requirement table, the parking catalog, and any existing
//! assignments. Every field is optional.

use dshift::{CoreError, Roster, Schedule};
use dshift_domain::{
    DomainError, HelpStaff, ParkingConfig, PreferredDayOff, RequirementTable, ShiftAssignment,
    ShiftPeriod, Staff, StaffId,
};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::Date;
use tracing::debug;

/// Errors raised while loading or interpreting a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    #[error("Failed to read scenario '{path}': {source}")]
    Io {
        /// The scenario path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The scenario is not valid JSON for the expected shape.
    #[error("Invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record in the scenario breaks a domain rule.
    #[error("Invalid scenario data: {0}")]
    Domain(#[from] DomainError),

    /// The roster or assignments could not be assembled.
    #[error("Invalid scenario data: {0}")]
    Core(#[from] CoreError),
}

/// A preferred day off as written in a scenario; its id is derived on load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOffEntry {
    /// The staff member taking the day off.
    pub staff_id: StaffId,
    /// The excluded date.
    pub date: Date,
}

/// The contents of a scenario file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scenario {
    /// The shift period. Ignored when `dates` is given.
    pub period: Option<ShiftPeriod>,
    /// Explicit dates to schedule.
    pub dates: Vec<Date>,
    /// Regular staff.
    pub staff: Vec<Staff>,
    /// Help staff.
    pub help_staff: Vec<HelpStaff>,
    /// Preferred days off.
    pub day_offs: Vec<DayOffEntry>,
    /// Required headcounts.
    pub shift_config: RequirementTable,
    /// The parking spot catalog.
    pub parking: ParkingConfig,
    /// Assignments already on the books.
    pub assignments: Vec<ShiftAssignment>,
}

impl Scenario {
    /// Reads and parses a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents: String =
            std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let scenario: Self = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            staff = scenario.staff.len(),
            help_staff = scenario.help_staff.len(),
            "Loaded scenario"
        );
        Ok(scenario)
    }

    /// Parses a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid scenario.
    pub fn from_json(contents: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Resolves the dates to schedule.
    ///
    /// Explicit `dates` win and are sorted and deduplicated. Otherwise the
    /// `period` is expanded, falling back to the default period around `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the period ends before it starts.
    pub fn period_dates(&self, today: Date) -> Result<Vec<Date>, ScenarioError> {
        if !self.dates.is_empty() {
            let unique: BTreeSet<Date> = self.dates.iter().copied().collect();
            return Ok(unique.into_iter().collect());
        }

        let period: ShiftPeriod = match self.period {
            Some(period) => ShiftPeriod::new(period.start_date, period.end_date)?,
            None => ShiftPeriod::default_for(today)?,
        };
        Ok(period.dates())
    }

    /// Builds a validated roster from the scenario's people and days off.
    ///
    /// # Errors
    ///
    /// Returns an error if any record is invalid or duplicated.
    pub fn roster(&self) -> Result<Roster, ScenarioError> {
        let day_offs: Vec<PreferredDayOff> = self
            .day_offs
            .iter()
            .map(|d| PreferredDayOff::new(d.staff_id.clone(), d.date))
            .collect();
        Ok(Roster::from_parts(
            self.staff.clone(),
            self.help_staff.clone(),
            day_offs,
        )?)
    }

    /// Builds the schedule of existing assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if two assignments share `(staff, date, slot)`.
    pub fn schedule(&self) -> Result<Schedule, ScenarioError> {
        Ok(Schedule::from_assignments(self.assignments.clone())?)
    }
}
