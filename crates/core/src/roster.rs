// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff, help staff, and preferred day off bookkeeping.
//!
//! ## Invariants
//!
//! - Staff and help staff ids are unique across both lists
//! - Every stored record passed field validation
//! - At most one preferred day off exists per `(staff, date)`
//! - Deleting a staff member deletes their preferred days off

use crate::error::CoreError;
use dshift_domain::{
    DayOffId, HelpStaff, PreferredDayOff, Staff, StaffId, TimeSlot, has_day_off,
    validate_day_off_unique, validate_help_staff_fields, validate_staff_fields,
    validate_staff_id_unique,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;
use tracing::{debug, info};

/// A partial update of a staff member. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New weekly shift limit.
    pub max_weekly_shifts: Option<u8>,
    /// New slot availability.
    pub available_slots: Option<BTreeSet<TimeSlot>>,
    /// New parking need.
    pub uses_parking: Option<bool>,
}

/// A partial update of a help staff member. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpStaffUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New slot availability.
    pub available_slots: Option<BTreeSet<TimeSlot>>,
    /// New parking need.
    pub uses_parking: Option<bool>,
}

/// The result of reconciling one staff member's days off with a date list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOffSync {
    /// Dates that gained a day off.
    pub added: Vec<Date>,
    /// Dates that lost a day off.
    pub removed: Vec<Date>,
}

impl DayOffSync {
    /// Returns whether the sync changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// The people a schedule is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    staff: Vec<Staff>,
    help_staff: Vec<HelpStaff>,
    day_offs: Vec<PreferredDayOff>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from existing records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns the first validation or uniqueness error encountered.
    pub fn from_parts(
        staff: Vec<Staff>,
        help_staff: Vec<HelpStaff>,
        day_offs: Vec<PreferredDayOff>,
    ) -> Result<Self, CoreError> {
        let mut roster: Self = Self::new();
        for member in staff {
            roster.add_staff(member)?;
        }
        for member in help_staff {
            roster.add_help_staff(member)?;
        }
        for day_off in day_offs {
            roster.add_day_off(day_off.staff_id, day_off.date)?;
        }
        Ok(roster)
    }

    /// Regular staff, in insertion order.
    #[must_use]
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// Help staff, in insertion order.
    #[must_use]
    pub fn help_staff(&self) -> &[HelpStaff] {
        &self.help_staff
    }

    /// Preferred days off, in insertion order.
    #[must_use]
    pub fn day_offs(&self) -> &[PreferredDayOff] {
        &self.day_offs
    }

    /// Looks up a staff member by id.
    #[must_use]
    pub fn find_staff(&self, id: &StaffId) -> Option<&Staff> {
        self.staff.iter().find(|s| &s.id == id)
    }

    /// Looks up a help staff member by id.
    #[must_use]
    pub fn find_help_staff(&self, id: &StaffId) -> Option<&HelpStaff> {
        self.help_staff.iter().find(|h| &h.id == id)
    }

    /// Adds a staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields are invalid or the id is taken.
    pub fn add_staff(&mut self, staff: Staff) -> Result<(), CoreError> {
        validate_staff_fields(&staff)?;
        validate_staff_id_unique(&staff.id, &self.staff, &self.help_staff)?;
        info!(staff_id = %staff.id, "Added staff");
        self.staff.push(staff);
        Ok(())
    }

    /// Applies `update` to the staff member with id `id`.
    ///
    /// The stored record is only replaced if the updated record is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist or the updated
    /// record is invalid.
    pub fn update_staff(&mut self, id: &StaffId, update: StaffUpdate) -> Result<(), CoreError> {
        let current: &mut Staff = self
            .staff
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| CoreError::StaffNotFound(id.value().to_string()))?;

        let mut updated: Staff = current.clone();
        if let Some(name) = update.name {
            updated.name = name;
        }
        if let Some(max_weekly_shifts) = update.max_weekly_shifts {
            updated.max_weekly_shifts = max_weekly_shifts;
        }
        if let Some(available_slots) = update.available_slots {
            updated.available_slots = available_slots;
        }
        if let Some(uses_parking) = update.uses_parking {
            updated.uses_parking = uses_parking;
        }

        validate_staff_fields(&updated)?;
        *current = updated;
        debug!(staff_id = %id, "Updated staff");
        Ok(())
    }

    /// Deletes a staff member together with their preferred days off.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist.
    pub fn delete_staff(&mut self, id: &StaffId) -> Result<Staff, CoreError> {
        let index: usize = self
            .staff
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| CoreError::StaffNotFound(id.value().to_string()))?;

        let removed: Staff = self.staff.remove(index);
        self.day_offs.retain(|d| &d.staff_id != id);
        info!(staff_id = %id, "Deleted staff");
        Ok(removed)
    }

    /// Adds a help staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields are invalid or the id is taken.
    pub fn add_help_staff(&mut self, help_staff: HelpStaff) -> Result<(), CoreError> {
        validate_help_staff_fields(&help_staff)?;
        validate_staff_id_unique(&help_staff.id, &self.staff, &self.help_staff)?;
        info!(staff_id = %help_staff.id, "Added help staff");
        self.help_staff.push(help_staff);
        Ok(())
    }

    /// Applies `update` to the help staff member with id `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the help staff member does not exist or the
    /// updated record is invalid.
    pub fn update_help_staff(
        &mut self,
        id: &StaffId,
        update: HelpStaffUpdate,
    ) -> Result<(), CoreError> {
        let current: &mut HelpStaff = self.help_staff_mut(id)?;

        let mut updated: HelpStaff = current.clone();
        if let Some(name) = update.name {
            updated.name = name;
        }
        if let Some(available_slots) = update.available_slots {
            updated.available_slots = available_slots;
        }
        if let Some(uses_parking) = update.uses_parking {
            updated.uses_parking = uses_parking;
        }

        validate_help_staff_fields(&updated)?;
        *current = updated;
        debug!(staff_id = %id, "Updated help staff");
        Ok(())
    }

    /// Replaces the dates on which a help staff member can be called in.
    ///
    /// # Errors
    ///
    /// Returns an error if the help staff member does not exist.
    pub fn update_available_dates<I>(&mut self, id: &StaffId, dates: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = Date>,
    {
        let current: &mut HelpStaff = self.help_staff_mut(id)?;
        current.available_dates = dates.into_iter().collect();
        debug!(
            staff_id = %id,
            date_count = current.available_dates.len(),
            "Updated help staff dates"
        );
        Ok(())
    }

    /// Deletes a help staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the help staff member does not exist.
    pub fn delete_help_staff(&mut self, id: &StaffId) -> Result<HelpStaff, CoreError> {
        let index: usize = self
            .help_staff
            .iter()
            .position(|h| &h.id == id)
            .ok_or_else(|| CoreError::HelpStaffNotFound(id.value().to_string()))?;

        info!(staff_id = %id, "Deleted help staff");
        Ok(self.help_staff.remove(index))
    }

    /// Records a preferred day off for a staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist or already has a
    /// day off on `date`.
    pub fn add_day_off(&mut self, staff_id: StaffId, date: Date) -> Result<DayOffId, CoreError> {
        if self.find_staff(&staff_id).is_none() {
            return Err(CoreError::StaffNotFound(staff_id.value().to_string()));
        }
        validate_day_off_unique(&staff_id, date, &self.day_offs)?;

        let day_off: PreferredDayOff = PreferredDayOff::new(staff_id, date);
        let id: DayOffId = day_off.id.clone();
        debug!(staff_id = %day_off.staff_id, date = %date, "Added day off");
        self.day_offs.push(day_off);
        Ok(id)
    }

    /// Deletes a preferred day off by id.
    ///
    /// # Errors
    ///
    /// Returns an error if no day off has the given id.
    pub fn delete_day_off(&mut self, id: &DayOffId) -> Result<PreferredDayOff, CoreError> {
        let index: usize = self
            .day_offs
            .iter()
            .position(|d| &d.id == id)
            .ok_or_else(|| CoreError::DayOffNotFound(id.value().to_string()))?;
        Ok(self.day_offs.remove(index))
    }

    /// Returns whether `staff_id` has a preferred day off on `date`.
    #[must_use]
    pub fn is_day_off(&self, staff_id: &StaffId, date: Date) -> bool {
        has_day_off(&self.day_offs, staff_id, date)
    }

    /// Makes `dates` the exact set of days off of `staff_id`.
    ///
    /// Days off that are already present are kept as is. When nothing
    /// differs the roster is not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the staff member does not exist.
    pub fn sync_day_offs(
        &mut self,
        staff_id: &StaffId,
        dates: &[Date],
    ) -> Result<DayOffSync, CoreError> {
        if self.find_staff(staff_id).is_none() {
            return Err(CoreError::StaffNotFound(staff_id.value().to_string()));
        }

        let wanted: BTreeSet<Date> = dates.iter().copied().collect();
        let current: BTreeSet<Date> = self
            .day_offs
            .iter()
            .filter(|d| &d.staff_id == staff_id)
            .map(|d| d.date)
            .collect();

        let sync: DayOffSync = DayOffSync {
            added: wanted.difference(&current).copied().collect(),
            removed: current.difference(&wanted).copied().collect(),
        };
        if sync.is_empty() {
            return Ok(sync);
        }

        self.day_offs
            .retain(|d| &d.staff_id != staff_id || !sync.removed.contains(&d.date));
        self.day_offs.extend(
            sync.added
                .iter()
                .map(|&date| PreferredDayOff::new(staff_id.clone(), date)),
        );

        info!(
            staff_id = %staff_id,
            added = sync.added.len(),
            removed = sync.removed.len(),
            "Synced days off"
        );
        Ok(sync)
    }

    fn help_staff_mut(&mut self, id: &StaffId) -> Result<&mut HelpStaff, CoreError> {
        self.help_staff
            .iter_mut()
            .find(|h| &h.id == id)
            .ok_or_else(|| CoreError::HelpStaffNotFound(id.value().to_string()))
    }
}
