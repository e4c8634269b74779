// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parking spot catalog and allocation.
//!
//! ## Invariants
//!
//! - A staff member holds one physical spot all day, whatever the slot count
//! - Spots are exclusive per `(date, slot)` but shared across slots of a date
//! - Allocation order is catalog order (A-series before B-series, then index)
//! - Assignments without a spot never consume one

use crate::error::DomainError;
use crate::types::{ParkingSpot, ShiftAssignment, StaffId, TimeSlot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use time::Date;

/// A series of parking spots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParkingSeries {
    /// Preferred series, allocated first.
    A,
    /// Overflow series.
    B,
}

impl ParkingSeries {
    /// Converts this series to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl FromStr for ParkingSeries {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            _ => Err(DomainError::InvalidParkingSeries(s.to_string())),
        }
    }
}

/// Number of spots in one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSlotType {
    /// The series.
    #[serde(rename = "type")]
    pub series: ParkingSeries,
    /// Number of spots, numbered from 1.
    pub count: u32,
}

/// The parking spot catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingConfig {
    /// Spot series in allocation order.
    pub slots: Vec<ParkingSlotType>,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            slots: vec![
                ParkingSlotType {
                    series: ParkingSeries::A,
                    count: 4,
                },
                ParkingSlotType {
                    series: ParkingSeries::B,
                    count: 1,
                },
            ],
        }
    }
}

impl ParkingConfig {
    /// Expands the catalog into ordered spot tokens (`A1..An`, then `B1..Bm`).
    #[must_use]
    pub fn all_spots(&self) -> Vec<ParkingSpot> {
        self.slots
            .iter()
            .flat_map(|slot| {
                (1..=slot.count)
                    .map(move |i| ParkingSpot::new(&format!("{}{i}", slot.series.as_str())))
            })
            .collect()
    }

    /// Replaces the spot count of `series`.
    ///
    /// Series that are not part of the catalog are left untouched.
    pub fn update_slot_count(&mut self, series: ParkingSeries, count: u32) {
        for slot in self.slots.iter_mut().filter(|s| s.series == series) {
            slot.count = count;
        }
    }
}

/// Allocates a parking spot for one `(date, slot)` assignment.
///
/// When `staff_id` is given and that staff member already holds a spot on
/// `date` (in any slot), that spot is returned. Otherwise the first catalog
/// spot not held by another assignment in the same `(date, slot)` is returned.
///
/// # Arguments
///
/// * `date` - The assignment date
/// * `slot` - The assignment slot
/// * `all_spots` - The ordered spot catalog
/// * `existing` - Assignments already made
/// * `staff_id` - The staff member being assigned, for same-day reuse
///
/// # Returns
///
/// The allocated spot, or `None` when every spot is taken.
#[must_use]
pub fn allocate_parking(
    date: Date,
    slot: TimeSlot,
    all_spots: &[ParkingSpot],
    existing: &[ShiftAssignment],
    staff_id: Option<&StaffId>,
) -> Option<ParkingSpot> {
    if let Some(reused) = staff_id.and_then(|id| spot_held_on(id, date, existing)) {
        return Some(reused);
    }

    first_free_spot(date, [slot].iter(), all_spots, existing)
}

/// Returns the spot `staff_id` already holds on `date`, if any.
#[must_use]
pub fn spot_held_on(
    staff_id: &StaffId,
    date: Date,
    existing: &[ShiftAssignment],
) -> Option<ParkingSpot> {
    existing
        .iter()
        .filter(|a| &a.staff_id == staff_id && a.date == date)
        .find_map(|a| a.parking_spot.clone())
}

/// Returns the first catalog spot free in every one of `slots` on `date`.
///
/// A spot is taken when any assignment on `date` in one of `slots` holds it.
#[must_use]
pub fn first_free_spot<'a, I>(
    date: Date,
    slots: I,
    all_spots: &[ParkingSpot],
    existing: &[ShiftAssignment],
) -> Option<ParkingSpot>
where
    I: IntoIterator<Item = &'a TimeSlot>,
{
    let slots: BTreeSet<TimeSlot> = slots.into_iter().copied().collect();
    let used: BTreeSet<&ParkingSpot> = existing
        .iter()
        .filter(|a| a.date == date && slots.contains(&a.time_slot))
        .filter_map(|a| a.parking_spot.as_ref())
        .collect();

    all_spots.iter().find(|spot| !used.contains(spot)).cloned()
}
