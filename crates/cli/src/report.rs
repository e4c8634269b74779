// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON reports written to stdout.

use crate::scenario::{Scenario, ScenarioError};
use dshift::{
    GenerationSummary, Roster, Schedule, generate_for_roster, help_alerts_for_roster, summarize,
};
use dshift_domain::{HelpAlertInfo, ParkingSpot, ShiftAssignment, assignment_shortage};
use serde::Serialize;
use time::Date;
use tracing::info;

/// Output of the `generate` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    /// The scheduled dates.
    pub dates: Vec<Date>,
    /// The full assignment list after replacing the period.
    pub assignments: Vec<ShiftAssignment>,
    /// Totals for the generated part.
    pub summary: GenerationSummary,
}

/// Largest slot shortfall of one date.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateShortage {
    /// The date.
    pub date: Date,
    /// Largest gap between required and assigned headcount.
    pub shortage: u32,
}

/// Output of the `alerts` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsReport {
    /// Configured slots that cannot be covered by available people.
    pub alerts: Vec<HelpAlertInfo>,
    /// Dates whose assignments fall short, with their largest gap.
    pub shortages: Vec<DateShortage>,
}

/// Generates the period and merges it into the scenario's assignments.
///
/// # Errors
///
/// Returns an error if the scenario data is invalid.
pub fn generate(scenario: &Scenario, today: Date) -> Result<GenerateReport, ScenarioError> {
    let dates: Vec<Date> = scenario.period_dates(today)?;
    let roster: Roster = scenario.roster()?;
    let spots: Vec<ParkingSpot> = scenario.parking.all_spots();

    let generated: Vec<ShiftAssignment> =
        generate_for_roster(&roster, &scenario.shift_config, &spots, &dates);
    let summary: GenerationSummary = summarize(
        &dates,
        &scenario.shift_config,
        roster.help_staff(),
        &generated,
    );

    let mut schedule: Schedule = scenario.schedule()?;
    schedule.bulk_set(generated, &dates)?;

    info!(
        assignments = summary.assignment_count,
        help_assignments = summary.help_assignment_count,
        unmet_slots = summary.unmet.len(),
        "Generation finished"
    );

    Ok(GenerateReport {
        dates,
        assignments: schedule.into_assignments(),
        summary,
    })
}

/// Computes help alerts and per-date shortages of the scenario's assignments.
///
/// # Errors
///
/// Returns an error if the scenario data is invalid.
pub fn alerts(scenario: &Scenario, today: Date) -> Result<AlertsReport, ScenarioError> {
    let dates: Vec<Date> = scenario.period_dates(today)?;
    let roster: Roster = scenario.roster()?;
    let schedule: Schedule = scenario.schedule()?;

    let alerts: Vec<HelpAlertInfo> =
        help_alerts_for_roster(&roster, &scenario.shift_config, &schedule, &dates);
    let shortages: Vec<DateShortage> = dates
        .iter()
        .map(|&date| DateShortage {
            date,
            shortage: assignment_shortage(date, &scenario.shift_config, schedule.assignments()),
        })
        .filter(|s| s.shortage > 0)
        .collect();

    Ok(AlertsReport { alerts, shortages })
}
