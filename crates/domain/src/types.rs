// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use time::Date;

/// One of the three fixed daily time-of-day buckets.
///
/// The derived ordering is the canonical slot order
/// (morning, afternoon, evening). Slot sets iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    /// Morning shift.
    Morning,
    /// Afternoon shift.
    Afternoon,
    /// Evening shift.
    Evening,
}

impl TimeSlot {
    /// All slots in canonical order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    /// Converts this slot to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }

    /// Position of this slot in [`TimeSlot::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Morning => 0,
            Self::Afternoon => 1,
            Self::Evening => 2,
        }
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            _ => Err(DomainError::InvalidTimeSlot(s.to_string())),
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier shared by staff and help staff.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    /// Creates a new `StaffId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parking spot token such as `A1` or `B1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParkingSpot(String);

impl ParkingSpot {
    /// Creates a new `ParkingSpot`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the spot token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParkingSpot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a shift assignment.
///
/// Assignment ids are derived from `(staff, date, slot)`, which is unique
/// in a consistent dataset. Deriving rather than drawing ids keeps
/// generated schedules reproducible.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(String);

impl AssignmentId {
    /// Builds the id of the assignment of `staff_id` to `slot` on `date`.
    #[must_use]
    pub fn for_slot(staff_id: &StaffId, date: Date, slot: TimeSlot) -> Self {
        Self(format!("{staff_id}:{date}:{slot}"))
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Identifier of a preferred day off.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayOffId(String);

impl DayOffId {
    /// Builds the id of the day off of `staff_id` on `date`.
    #[must_use]
    pub fn for_date(staff_id: &StaffId, date: Date) -> Self {
        Self(format!("{staff_id}:{date}"))
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A regular staff member.
///
/// Regular staff are bound by a weekly quota of distinct worked days.
/// Staff records are immutable for the duration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// The staff member's id.
    pub id: StaffId,
    /// Display name.
    pub name: String,
    /// Maximum distinct worked days per ISO week.
    pub max_weekly_shifts: u8,
    /// Slots this staff member can work.
    pub available_slots: BTreeSet<TimeSlot>,
    /// Whether this staff member needs a parking spot.
    pub uses_parking: bool,
}

impl Staff {
    /// Creates a new `Staff`.
    ///
    /// # Arguments
    ///
    /// * `id` - The staff id
    /// * `name` - The display name
    /// * `max_weekly_shifts` - Maximum distinct worked days per week
    /// * `available_slots` - Slots the staff member can work
    /// * `uses_parking` - Whether a parking spot is needed
    #[must_use]
    pub fn new<I>(
        id: &str,
        name: &str,
        max_weekly_shifts: u8,
        available_slots: I,
        uses_parking: bool,
    ) -> Self
    where
        I: IntoIterator<Item = TimeSlot>,
    {
        Self {
            id: StaffId::new(id),
            name: name.to_string(),
            max_weekly_shifts,
            available_slots: available_slots.into_iter().collect(),
            uses_parking,
        }
    }
}

/// A supplemental, date-scoped worker.
///
/// Help staff have no weekly quota; presence in `available_dates` is
/// their only attendance constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpStaff {
    /// The help staff member's id.
    pub id: StaffId,
    /// Display name.
    pub name: String,
    /// Slots this help staff member can work.
    pub available_slots: BTreeSet<TimeSlot>,
    /// Dates on which this help staff member can be called in.
    #[serde(default)]
    pub available_dates: BTreeSet<Date>,
    /// Whether this help staff member needs a parking spot.
    pub uses_parking: bool,
}

impl HelpStaff {
    /// Creates a new `HelpStaff`.
    #[must_use]
    pub fn new<S, D>(
        id: &str,
        name: &str,
        available_slots: S,
        available_dates: D,
        uses_parking: bool,
    ) -> Self
    where
        S: IntoIterator<Item = TimeSlot>,
        D: IntoIterator<Item = Date>,
    {
        Self {
            id: StaffId::new(id),
            name: name.to_string(),
            available_slots: available_slots.into_iter().collect(),
            available_dates: available_dates.into_iter().collect(),
            uses_parking,
        }
    }
}

/// A hard exclusion: the staff member must not work on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredDayOff {
    /// The day off id.
    pub id: DayOffId,
    /// The staff member taking the day off.
    pub staff_id: StaffId,
    /// The excluded date.
    pub date: Date,
}

impl PreferredDayOff {
    /// Creates a new `PreferredDayOff` with a derived id.
    #[must_use]
    pub fn new(staff_id: StaffId, date: Date) -> Self {
        Self {
            id: DayOffId::for_date(&staff_id, date),
            staff_id,
            date,
        }
    }
}

/// Returns whether `staff_id` has a preferred day off on `date`.
#[must_use]
pub fn has_day_off(day_offs: &[PreferredDayOff], staff_id: &StaffId, date: Date) -> bool {
    day_offs
        .iter()
        .any(|d| &d.staff_id == staff_id && d.date == date)
}

/// An explicitly configured headcount for one `(date, slot)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSlotConfig {
    /// The configured date.
    pub date: Date,
    /// The configured slot.
    pub time_slot: TimeSlot,
    /// Required headcount. Zero means no requirement.
    pub required_count: u32,
}

impl ShiftSlotConfig {
    /// Creates a new `ShiftSlotConfig`.
    #[must_use]
    pub const fn new(date: Date, time_slot: TimeSlot, required_count: u32) -> Self {
        Self {
            date,
            time_slot,
            required_count,
        }
    }
}

/// One staff member working one slot on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignment {
    /// The assignment id.
    pub id: AssignmentId,
    /// The assigned staff or help staff member.
    pub staff_id: StaffId,
    /// The worked date.
    pub date: Date,
    /// The worked slot.
    pub time_slot: TimeSlot,
    /// The reserved parking spot, if any.
    pub parking_spot: Option<ParkingSpot>,
}

impl ShiftAssignment {
    /// Creates a new `ShiftAssignment` with a derived id.
    #[must_use]
    pub fn new(
        staff_id: StaffId,
        date: Date,
        time_slot: TimeSlot,
        parking_spot: Option<ParkingSpot>,
    ) -> Self {
        Self {
            id: AssignmentId::for_slot(&staff_id, date, time_slot),
            staff_id,
            date,
            time_slot,
            parking_spot,
        }
    }

    /// Returns whether this assignment covers `(staff_id, date, slot)`.
    #[must_use]
    pub fn matches(&self, staff_id: &StaffId, date: Date, slot: TimeSlot) -> bool {
        &self.staff_id == staff_id && self.date == date && self.time_slot == slot
    }
}
