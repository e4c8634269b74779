// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The assignment store.
//!
//! ## Invariants
//!
//! - At most one assignment exists per `(staff, date, slot)`
//! - A failed operation leaves the schedule unchanged

use crate::error::CoreError;
use dshift_domain::{
    AssignmentId, ParkingSpot, RosterMember, ShiftAssignment, StaffId, TimeSlot, allocate_parking,
};
use serde::Serialize;
use std::collections::BTreeSet;
use time::Date;
use tracing::{debug, info};

/// The current set of shift assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    assignments: Vec<ShiftAssignment>,
}

/// Returns the first `(staff, date, slot)` that occurs twice in `assignments`.
fn find_duplicate<'a, I>(assignments: I) -> Option<&'a ShiftAssignment>
where
    I: IntoIterator<Item = &'a ShiftAssignment>,
{
    let mut seen: BTreeSet<(&StaffId, Date, TimeSlot)> = BTreeSet::new();
    assignments
        .into_iter()
        .find(|a| !seen.insert((&a.staff_id, a.date, a.time_slot)))
}

fn duplicate_error(assignment: &ShiftAssignment) -> CoreError {
    CoreError::DuplicateAssignment {
        staff_id: assignment.staff_id.value().to_string(),
        date: assignment.date,
        time_slot: assignment.time_slot,
    }
}

impl Schedule {
    /// Creates an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from existing assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if two assignments share `(staff, date, slot)`.
    pub fn from_assignments(assignments: Vec<ShiftAssignment>) -> Result<Self, CoreError> {
        if let Some(duplicate) = find_duplicate(&assignments) {
            return Err(duplicate_error(duplicate));
        }
        Ok(Self { assignments })
    }

    /// All assignments, in insertion order.
    #[must_use]
    pub fn assignments(&self) -> &[ShiftAssignment] {
        &self.assignments
    }

    /// Consumes the schedule, returning its assignments.
    #[must_use]
    pub fn into_assignments(self) -> Vec<ShiftAssignment> {
        self.assignments
    }

    /// Looks up an assignment by id.
    #[must_use]
    pub fn get(&self, id: &AssignmentId) -> Option<&ShiftAssignment> {
        self.assignments.iter().find(|a| &a.id == id)
    }

    /// Assignments on `date`, in insertion order.
    pub fn for_date(&self, date: Date) -> impl Iterator<Item = &ShiftAssignment> {
        self.assignments.iter().filter(move |a| a.date == date)
    }

    /// Assignments on `date` in `slot`, in insertion order.
    pub fn for_slot(&self, date: Date, slot: TimeSlot) -> impl Iterator<Item = &ShiftAssignment> {
        self.for_date(date).filter(move |a| a.time_slot == slot)
    }

    /// Manually assigns `member` to `slot` on `date`.
    ///
    /// A member who needs parking keeps the spot they already hold that day,
    /// or receives the first spot free in `slot`. When every spot is taken
    /// the assignment is still made, without a spot.
    ///
    /// # Arguments
    ///
    /// * `member` - The staff or help staff member to assign
    /// * `date` - The assignment date
    /// * `slot` - The assignment slot
    /// * `all_parking_spots` - The ordered spot catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the member is already assigned to that slot.
    pub fn add<M: RosterMember + ?Sized>(
        &mut self,
        member: &M,
        date: Date,
        slot: TimeSlot,
        all_parking_spots: &[ParkingSpot],
    ) -> Result<&ShiftAssignment, CoreError> {
        if self
            .assignments
            .iter()
            .any(|a| a.matches(member.id(), date, slot))
        {
            return Err(CoreError::DuplicateAssignment {
                staff_id: member.id().value().to_string(),
                date,
                time_slot: slot,
            });
        }

        let parking_spot: Option<ParkingSpot> = if member.uses_parking() {
            allocate_parking(
                date,
                slot,
                all_parking_spots,
                &self.assignments,
                Some(member.id()),
            )
        } else {
            None
        };
        if member.uses_parking() && parking_spot.is_none() {
            debug!(staff_id = %member.id(), date = %date, slot = %slot, "No parking spot free");
        }

        let index: usize = self.assignments.len();
        self.assignments.push(ShiftAssignment::new(
            member.id().clone(),
            date,
            slot,
            parking_spot,
        ));
        info!(staff_id = %member.id(), date = %date, slot = %slot, "Added assignment");
        Ok(&self.assignments[index])
    }

    /// Removes an assignment by id, returning it if it existed.
    pub fn remove(&mut self, id: &AssignmentId) -> Option<ShiftAssignment> {
        let index: usize = self.assignments.iter().position(|a| &a.id == id)?;
        info!(assignment_id = id.value(), "Removed assignment");
        Some(self.assignments.remove(index))
    }

    /// Replaces every assignment dated within `period_dates` with `generated`.
    ///
    /// Assignments outside the period are kept.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the schedule unchanged, if the result would
    /// hold two assignments with the same `(staff, date, slot)`.
    pub fn bulk_set(
        &mut self,
        generated: Vec<ShiftAssignment>,
        period_dates: &[Date],
    ) -> Result<(), CoreError> {
        let period: BTreeSet<Date> = period_dates.iter().copied().collect();
        let kept: Vec<ShiftAssignment> = self
            .assignments
            .iter()
            .filter(|a| !period.contains(&a.date))
            .cloned()
            .collect();

        if let Some(duplicate) = find_duplicate(kept.iter().chain(&generated)) {
            return Err(duplicate_error(duplicate));
        }

        let replaced: usize = self.assignments.len() - kept.len();
        let added: usize = generated.len();
        self.assignments = kept;
        self.assignments.extend(generated);
        info!(replaced, added, "Replaced period assignments");
        Ok(())
    }
}
