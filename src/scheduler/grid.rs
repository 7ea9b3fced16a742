//! Working grid for one generation run.
//!
//! Teaching slots are stored day-major so `(day, period)` lookups are
//! O(1). Break slots are kept apart and only merged at finalization.

use crate::models::{ScheduleConfiguration, StaffCommitments, TimeSlot, Weekday};

/// Mutable teaching grid owned by a single generation run.
#[derive(Debug, Clone)]
pub(crate) struct Grid<'a> {
    days: &'static [Weekday],
    periods_per_day: u32,
    slots: Vec<TimeSlot>,
    commitments: &'a StaffCommitments,
}

impl<'a> Grid<'a> {
    /// Builds the empty teaching grid: every day × periods `1..=periods_per_day`.
    pub(crate) fn build(settings: &ScheduleConfiguration, commitments: &'a StaffCommitments) -> Self {
        let days = settings.days();
        let periods_per_day = settings.periods_per_day();
        let slots = days
            .iter()
            .flat_map(move |&day| (1..=periods_per_day).map(move |p| TimeSlot::teaching(day, p)))
            .collect();

        Self {
            days,
            periods_per_day,
            slots,
            commitments,
        }
    }

    #[inline]
    pub(crate) fn days(&self) -> &'static [Weekday] {
        self.days
    }

    #[inline]
    pub(crate) fn periods_per_day(&self) -> u32 {
        self.periods_per_day
    }

    /// Number of teaching slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    fn index(&self, day_idx: usize, period: u32) -> Option<usize> {
        if day_idx >= self.days.len() || period == 0 || period > self.periods_per_day {
            return None;
        }
        Some(day_idx * self.periods_per_day as usize + (period - 1) as usize)
    }

    /// Whether the teaching slot exists and has no subject.
    pub(crate) fn is_free(&self, day_idx: usize, period: u32) -> bool {
        self.index(day_idx, period)
            .is_some_and(|i| self.slots[i].subject_id.is_none())
    }

    /// Whether both halves of a session starting at `period` are free.
    pub(crate) fn is_pair_free(&self, day_idx: usize, period: u32) -> bool {
        self.is_free(day_idx, period) && self.is_free(day_idx, period + 1)
    }

    /// Whether `staff_id` already teaches at `(day, period)` in this grid
    /// or in an outside commitment.
    pub(crate) fn is_staff_busy(&self, staff_id: &str, day_idx: usize, period: u32) -> bool {
        let Some(i) = self.index(day_idx, period) else {
            return false;
        };
        let slot = &self.slots[i];
        slot.staff_id.as_deref() == Some(staff_id)
            || self.commitments.is_busy(staff_id, slot.day, period)
    }

    /// Writes an assignment. The slot must exist.
    pub(crate) fn assign(
        &mut self,
        day_idx: usize,
        period: u32,
        subject_id: &str,
        staff_id: &str,
        span_two_periods: bool,
    ) {
        if let Some(i) = self.index(day_idx, period) {
            self.slots[i].assign(subject_id, staff_id, span_two_periods);
        }
    }

    /// Merges in break slots and returns everything sorted by position.
    pub(crate) fn into_slots(self, breaks: Vec<TimeSlot>) -> Vec<TimeSlot> {
        let mut slots = self.slots;
        slots.extend(breaks);
        slots.sort_by_key(TimeSlot::position);
        slots
    }
}

/// One break slot per day per break rule.
pub(crate) fn break_slots(settings: &ScheduleConfiguration) -> Vec<TimeSlot> {
    settings
        .days()
        .iter()
        .flat_map(move |&day| {
            settings
                .breaks
                .iter()
                .map(move |b| TimeSlot::break_after(day, b.after, b.name.clone()))
        })
        .collect()
}
