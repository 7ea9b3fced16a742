//! Staff commitments outside the timetable being built.
//!
//! When several classes share staff, the timetables already generated
//! for other classes tell the scheduler when each staff member is taken.

use std::collections::{HashMap, HashSet};

use super::{TimeSlot, Weekday};

/// Times at which each staff member is already taken.
#[derive(Debug, Clone, Default)]
pub struct StaffCommitments {
    busy: HashMap<String, HashSet<(Weekday, u32)>>,
}

impl StaffCommitments {
    /// Creates an empty set (no outside commitments).
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the staffed teaching slots of other timetables.
    pub fn from_slots<'a>(slots: impl IntoIterator<Item = &'a TimeSlot>) -> Self {
        let mut commitments = Self::new();
        for slot in slots {
            if slot.is_break() {
                continue;
            }
            if let Some(staff_id) = &slot.staff_id {
                commitments.commit(staff_id.clone(), slot.day, slot.period);
            }
        }
        commitments
    }

    /// Records that `staff_id` is taken at `(day, period)`.
    pub fn commit(&mut self, staff_id: impl Into<String>, day: Weekday, period: u32) {
        self.busy
            .entry(staff_id.into())
            .or_default()
            .insert((day, period));
    }

    /// Whether `staff_id` is taken at `(day, period)`.
    pub fn is_busy(&self, staff_id: &str, day: Weekday, period: u32) -> bool {
        self.busy
            .get(staff_id)
            .is_some_and(|times| times.contains(&(day, period)))
    }

    /// Number of committed `(staff, day, period)` entries.
    pub fn len(&self) -> usize {
        self.busy.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.busy.is_empty()
    }
}
