// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot availability for anyone who can be put on the schedule.

use crate::types::{HelpStaff, Staff, StaffId, TimeSlot};
use std::collections::BTreeSet;

/// Common view over regular staff and help staff.
///
/// The generator admits candidates through this trait so that both pools
/// share one admission routine.
pub trait RosterMember {
    /// The member's id.
    fn id(&self) -> &StaffId;

    /// The member's display name.
    fn name(&self) -> &str;

    /// Slots the member can work.
    fn available_slots(&self) -> &BTreeSet<TimeSlot>;

    /// Whether the member needs a parking spot.
    fn uses_parking(&self) -> bool;

    /// Returns whether the member can work `slot`.
    fn is_available(&self, slot: TimeSlot) -> bool {
        self.available_slots().contains(&slot)
    }
}

impl RosterMember for Staff {
    fn id(&self) -> &StaffId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn available_slots(&self) -> &BTreeSet<TimeSlot> {
        &self.available_slots
    }

    fn uses_parking(&self) -> bool {
        self.uses_parking
    }
}

impl RosterMember for HelpStaff {
    fn id(&self) -> &StaffId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn available_slots(&self) -> &BTreeSet<TimeSlot> {
        &self.available_slots
    }

    fn uses_parking(&self) -> bool {
        self.uses_parking
    }
}

/// Returns whether `member` can work `slot`.
#[must_use]
pub fn is_available_slot<M: RosterMember + ?Sized>(member: &M, slot: TimeSlot) -> bool {
    member.is_available(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_slot_is_available() {
        let staff: Staff = Staff::new(
            "s1",
            "Yamada",
            3,
            [TimeSlot::Morning, TimeSlot::Afternoon],
            false,
        );

        assert!(is_available_slot(&staff, TimeSlot::Morning));
        assert!(is_available_slot(&staff, TimeSlot::Afternoon));
    }

    #[test]
    fn test_unlisted_slot_is_unavailable() {
        let staff: Staff = Staff::new("s1", "Yamada", 3, [TimeSlot::Morning], false);

        assert!(!is_available_slot(&staff, TimeSlot::Evening));
    }

    #[test]
    fn test_help_staff_availability_ignores_dates() {
        let help: HelpStaff = HelpStaff::new("h1", "Sato", [TimeSlot::Evening], [], true);

        assert!(is_available_slot(&help, TimeSlot::Evening));
        assert!(!is_available_slot(&help, TimeSlot::Morning));
    }

    #[test]
    fn test_members_expose_identity_through_trait() {
        let staff: Staff = Staff::new("s1", "Yamada", 3, [TimeSlot::Morning], false);
        let help: HelpStaff = HelpStaff::new("h1", "Sato", [TimeSlot::Evening], [], true);
        let members: [&dyn RosterMember; 2] = [&staff, &help];

        assert_eq!(members[0].id().value(), "s1");
        assert_eq!(members[0].name(), "Yamada");
        assert_eq!(members[1].name(), "Sato");
        assert!(members[1].uses_parking());
    }
}
