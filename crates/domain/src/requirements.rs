// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Required headcount lookup.
//!
//! A required count of zero means the slot is not staffed on that date.
//! Explicitly saved counts win over the per-day-category defaults.

use crate::error::DomainError;
use crate::types::{ShiftSlotConfig, TimeSlot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::{Date, Weekday};

/// Largest headcount accepted for a single slot.
pub const MAX_REQUIRED_COUNT: u32 = 20;

/// Source of required headcounts per `(date, slot)`.
pub trait RequiredCount {
    /// Returns the required headcount for `slot` on `date`.
    fn required_count(&self, date: Date, slot: TimeSlot) -> u32;
}

impl<F> RequiredCount for F
where
    F: Fn(Date, TimeSlot) -> u32,
{
    fn required_count(&self, date: Date, slot: TimeSlot) -> u32 {
        self(date, slot)
    }
}

/// Category of a date for default headcounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCategory {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday, not a holiday.
    Saturday,
    /// Sunday, not a holiday.
    Sunday,
    /// A caller-declared holiday.
    Holiday,
}

/// Returns the category of `date`.
///
/// Holidays take precedence over the weekday.
#[must_use]
pub fn day_category(date: Date, holidays: &BTreeSet<Date>) -> DayCategory {
    if holidays.contains(&date) {
        return DayCategory::Holiday;
    }
    match date.weekday() {
        Weekday::Saturday => DayCategory::Saturday,
        Weekday::Sunday => DayCategory::Sunday,
        _ => DayCategory::Weekday,
    }
}

/// Headcounts for the three slots of one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotCounts {
    /// Morning headcount.
    pub morning: u32,
    /// Afternoon headcount.
    pub afternoon: u32,
    /// Evening headcount.
    pub evening: u32,
}

impl SlotCounts {
    /// Creates a new `SlotCounts`.
    #[must_use]
    pub const fn new(morning: u32, afternoon: u32, evening: u32) -> Self {
        Self {
            morning,
            afternoon,
            evening,
        }
    }

    /// Returns the headcount for `slot`.
    #[must_use]
    pub const fn get(&self, slot: TimeSlot) -> u32 {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
        }
    }
}

/// Default headcounts per day category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDefaults {
    /// Weekday defaults.
    pub weekday: SlotCounts,
    /// Saturday defaults.
    pub saturday: SlotCounts,
    /// Sunday defaults.
    pub sunday: SlotCounts,
    /// Holiday defaults.
    pub holiday: SlotCounts,
}

impl CategoryDefaults {
    /// Returns the defaults for `category`.
    #[must_use]
    pub const fn get(&self, category: DayCategory) -> SlotCounts {
        match category {
            DayCategory::Weekday => self.weekday,
            DayCategory::Saturday => self.saturday,
            DayCategory::Sunday => self.sunday,
            DayCategory::Holiday => self.holiday,
        }
    }
}

/// Saved headcounts with category fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequirementTable {
    /// Explicitly saved headcounts.
    pub configs: Vec<ShiftSlotConfig>,
    /// Fallback headcounts per day category.
    pub defaults: CategoryDefaults,
    /// Dates treated as holidays.
    pub holidays: BTreeSet<Date>,
}

impl RequirementTable {
    /// Creates an empty table: no saved counts, all defaults zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the given category defaults.
    #[must_use]
    pub fn with_defaults(defaults: CategoryDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Returns the saved config for `(date, slot)`, if any.
    #[must_use]
    pub fn config_for(&self, date: Date, slot: TimeSlot) -> Option<&ShiftSlotConfig> {
        self.configs
            .iter()
            .find(|c| c.date == date && c.time_slot == slot)
    }

    /// Returns the required headcount for `slot` on `date`.
    #[must_use]
    pub fn get_required_count(&self, date: Date, slot: TimeSlot) -> u32 {
        self.config_for(date, slot).map_or_else(
            || self.defaults.get(day_category(date, &self.holidays)).get(slot),
            |c| c.required_count,
        )
    }

    /// Saves the headcount for `slot` on `date`.
    ///
    /// An existing entry is replaced in place; otherwise a new entry is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` exceeds [`MAX_REQUIRED_COUNT`].
    pub fn set_required_count(
        &mut self,
        date: Date,
        slot: TimeSlot,
        count: u32,
    ) -> Result<(), DomainError> {
        if count > MAX_REQUIRED_COUNT {
            return Err(DomainError::InvalidRequiredCount {
                count,
                max: MAX_REQUIRED_COUNT,
            });
        }

        let entry: ShiftSlotConfig = ShiftSlotConfig::new(date, slot, count);
        match self
            .configs
            .iter_mut()
            .find(|c| c.date == date && c.time_slot == slot)
        {
            Some(existing) => *existing = entry,
            None => self.configs.push(entry),
        }
        Ok(())
    }
}

impl RequiredCount for RequirementTable {
    fn required_count(&self, date: Date, slot: TimeSlot) -> u32 {
        self.get_required_count(date, slot)
    }
}
