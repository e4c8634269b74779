// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Automatic shift generation.
//!
//! The generator walks the period date by date and fills each date's slot
//! requirements with a greedy, least-loaded-first heuristic. Regular staff
//! are tried first; help staff are tried only while demand remains.
//!
//! ## Hard constraints
//!
//! - No assignment on a staff member's preferred day off
//! - No assignment in a slot the member cannot work
//! - A regular staff member never exceeds `max_weekly_shifts` distinct
//!   worked days in an ISO week (help staff are exempt)
//! - A member who works a date works every slot of that date they can
//!   work and that has a positive requirement, even past its target
//! - A member who needs parking is admitted only if one spot is free in
//!   every slot they will occupy that day; that spot is used for all of them
//!
//! ## Determinism
//!
//! Candidate ordering is a stable sort on worked-day counts, so input order
//! breaks ties. Identical inputs yield identical output.
//!
//! The heuristic stops admitting members once no slot they could cover
//! still has demand. It does not search for the smallest admission set, so
//! a slot can overshoot its target where another order would not have.

use dshift_domain::{
    HelpStaff, ParkingSpot, PreferredDayOff, RequiredCount, RosterMember, ShiftAssignment, Staff,
    StaffId, TimeSlot, first_free_spot, has_day_off, total_worked_days, weekly_worked_days,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;
use tracing::{debug, info};

/// Inputs of one generation run.
///
/// Every collection is an immutable snapshot for the duration of the run.
#[derive(Debug)]
pub struct GenerateParams<'a, R: RequiredCount + ?Sized> {
    /// Dates to schedule, ascending and deduplicated.
    pub period_dates: &'a [Date],
    /// Regular staff, in priority order for ties.
    pub staff: &'a [Staff],
    /// Help staff, in priority order for ties.
    pub help_staff: &'a [HelpStaff],
    /// Preferred days off.
    pub day_offs: &'a [PreferredDayOff],
    /// Required headcount per `(date, slot)`.
    pub requirements: &'a R,
    /// Ordered parking spot catalog.
    pub all_parking_spots: &'a [ParkingSpot],
}

/// Outcome of offering one date to one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    /// The candidate was assigned to this many slots.
    Assigned(usize),
    /// None of the candidate's slots still has demand.
    NotNeeded,
    /// The candidate needs parking and no spot is free.
    NoParking,
}

/// Per-date working state: required and remaining headcount per slot.
///
/// Remaining counts are not clamped: a negative value records the
/// over-assignment caused by whole-day admission.
#[derive(Debug)]
struct DayPlan {
    date: Date,
    required: [u32; 3],
    remaining: [i64; 3],
}

impl DayPlan {
    fn new<R: RequiredCount + ?Sized>(date: Date, requirements: &R) -> Self {
        let required: [u32; 3] = TimeSlot::ALL.map(|slot| requirements.required_count(date, slot));
        Self {
            date,
            required,
            remaining: required.map(i64::from),
        }
    }

    const fn is_required(&self, slot: TimeSlot) -> bool {
        self.required[slot.index()] > 0
    }

    const fn has_demand(&self, slot: TimeSlot) -> bool {
        self.is_required(slot) && self.remaining[slot.index()] > 0
    }

    fn has_unmet_demand(&self) -> bool {
        TimeSlot::ALL.into_iter().any(|slot| self.has_demand(slot))
    }

    /// Offers this date to `member`, appending to `result` on admission.
    fn admit<M: RosterMember + ?Sized>(
        &mut self,
        member: &M,
        result: &mut Vec<ShiftAssignment>,
        all_parking_spots: &[ParkingSpot],
    ) -> Admission {
        let slots: &BTreeSet<TimeSlot> = member.available_slots();

        if !slots.iter().any(|&slot| self.has_demand(slot)) {
            return Admission::NotNeeded;
        }

        // Admission covers every workable required slot, not only those with demand
        let working: Vec<TimeSlot> = slots
            .iter()
            .copied()
            .filter(|&slot| self.is_required(slot))
            .collect();

        let parking_spot: Option<ParkingSpot> = if member.uses_parking() {
            match first_free_spot(self.date, working.iter(), all_parking_spots, result) {
                Some(spot) => Some(spot),
                None => return Admission::NoParking,
            }
        } else {
            None
        };

        for &slot in &working {
            result.push(ShiftAssignment::new(
                member.id().clone(),
                self.date,
                slot,
                parking_spot.clone(),
            ));
            self.remaining[slot.index()] -= 1;
        }

        Admission::Assigned(working.len())
    }

    /// Offers this date to each candidate in order.
    fn fill<'m, M, I>(
        &mut self,
        candidates: I,
        result: &mut Vec<ShiftAssignment>,
        all_parking_spots: &[ParkingSpot],
    ) where
        M: RosterMember + 'm,
        I: IntoIterator<Item = &'m M>,
    {
        for member in candidates {
            match self.admit(member, result, all_parking_spots) {
                Admission::Assigned(slot_count) => {
                    debug!(
                        date = %self.date,
                        staff_id = %member.id(),
                        staff_name = member.name(),
                        slot_count,
                        "Assigned staff"
                    );
                }
                Admission::NotNeeded => {
                    debug!(
                        date = %self.date,
                        staff_id = %member.id(),
                        staff_name = member.name(),
                        reason = "no remaining demand in available slots",
                        "Skipped staff"
                    );
                }
                Admission::NoParking => {
                    debug!(
                        date = %self.date,
                        staff_id = %member.id(),
                        staff_name = member.name(),
                        reason = "no parking spot free",
                        "Skipped staff"
                    );
                }
            }
        }
    }
}

/// Orders candidates by ascending load, keeping input order for ties.
fn least_loaded_first<T>(mut candidates: Vec<(T, usize)>) -> Vec<T> {
    candidates.sort_by_key(|&(_, load)| load);
    candidates.into_iter().map(|(member, _)| member).collect()
}

/// Generates shift assignments for every date of the period.
///
/// For each date, in order:
///
/// 1. Regular staff without a day off and under their weekly limit are
///    offered the date, least worked days this week first.
/// 2. If any required slot still has demand, help staff available that date
///    are offered it, least worked days in the whole run first.
///
/// A candidate is skipped when none of their slots still has demand or when
/// they need parking and no spot is free. Shortfalls are left unfilled.
///
/// # Arguments
///
/// * `params` - The generation inputs
///
/// # Returns
///
/// The generated assignments, grouped by date in period order.
#[must_use]
pub fn generate_auto_shift<R>(params: &GenerateParams<'_, R>) -> Vec<ShiftAssignment>
where
    R: RequiredCount + ?Sized,
{
    let mut result: Vec<ShiftAssignment> = Vec::new();

    for &date in params.period_dates {
        let mut plan: DayPlan = DayPlan::new(date, params.requirements);
        debug!(date = %date, required = ?plan.required, "Planning date");

        let regular: Vec<&Staff> = least_loaded_first(
            params
                .staff
                .iter()
                .filter(|s| !has_day_off(params.day_offs, &s.id, date))
                .map(|s| (s, weekly_worked_days(&s.id, date, &result)))
                .filter(|(s, worked)| *worked < usize::from(s.max_weekly_shifts))
                .collect(),
        );
        plan.fill(regular, &mut result, params.all_parking_spots);

        if !plan.has_unmet_demand() {
            continue;
        }

        let helpers: Vec<&HelpStaff> = least_loaded_first(
            params
                .help_staff
                .iter()
                .filter(|h| h.available_dates.contains(&date))
                .map(|h| (h, total_worked_days(&h.id, &result)))
                .collect(),
        );
        plan.fill(helpers, &mut result, params.all_parking_spots);

        if plan.has_unmet_demand() {
            debug!(date = %date, remaining = ?plan.remaining, "Demand left unfilled");
        }
    }

    info!(
        dates = params.period_dates.len(),
        assignments = result.len(),
        "Generated shift assignments"
    );

    result
}

/// A `(date, slot)` whose generated headcount is below its requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmetDemand {
    /// The affected date.
    pub date: Date,
    /// The affected slot.
    pub time_slot: TimeSlot,
    /// The required headcount.
    pub required_count: u32,
    /// The assigned headcount.
    pub assigned_count: usize,
}

/// Aggregate view of a generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
    /// Total assignments.
    pub assignment_count: usize,
    /// Distinct `(member, date)` pairs worked.
    pub worked_days: usize,
    /// Assignments held by help staff.
    pub help_assignment_count: usize,
    /// Assignments above their slot's requirement.
    pub overshoot_count: usize,
    /// Required slots left short, by date then slot.
    pub unmet: Vec<UnmetDemand>,
}

/// Summarizes `assignments` against the requirements of `period_dates`.
#[must_use]
pub fn summarize<R>(
    period_dates: &[Date],
    requirements: &R,
    help_staff: &[HelpStaff],
    assignments: &[ShiftAssignment],
) -> GenerationSummary
where
    R: RequiredCount + ?Sized,
{
    let help_ids: BTreeSet<&StaffId> = help_staff.iter().map(|h| &h.id).collect();
    let worked_days: usize = assignments
        .iter()
        .map(|a| (&a.staff_id, a.date))
        .collect::<BTreeSet<_>>()
        .len();

    let mut overshoot_count: usize = 0;
    let mut unmet: Vec<UnmetDemand> = Vec::new();
    for &date in period_dates {
        for slot in TimeSlot::ALL {
            let required_count: u32 = requirements.required_count(date, slot);
            if required_count == 0 {
                continue;
            }
            let assigned_count: usize = assignments
                .iter()
                .filter(|a| a.date == date && a.time_slot == slot)
                .count();
            let required: usize = usize::try_from(required_count).unwrap_or(usize::MAX);

            overshoot_count += assigned_count.saturating_sub(required);
            if assigned_count < required {
                unmet.push(UnmetDemand {
                    date,
                    time_slot: slot,
                    required_count,
                    assigned_count,
                });
            }
        }
    }

    GenerationSummary {
        assignment_count: assignments.len(),
        worked_days,
        help_assignment_count: assignments
            .iter()
            .filter(|a| help_ids.contains(&a.staff_id))
            .count(),
        overshoot_count,
        unmet,
    }
}
