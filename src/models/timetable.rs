//! Timetable (solution) model.
//!
//! A timetable is the full weekly grid: one teaching slot per
//! `(day, period)` plus one break slot per `(day, break rule)`.
//!
//! # Ordering
//! Slots sort by day, then by position within the day. Positions are
//! counted in half-periods so a break after period `p` lands between
//! teaching periods `p` and `p + 1`.

use serde::{Deserialize, Serialize};

use super::{StaffCommitments, Weekday};

/// Whether a slot holds teaching or marks a break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlotKind {
    /// Ordinary teaching period.
    Teaching,
    /// Rest interval after the slot's `period`.
    Break {
        /// Display name of the break.
        name: String,
    },
}

/// One entry of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Teaching day.
    pub day: Weekday,
    /// 1-based period number. For break slots: the period the break follows.
    pub period: u32,
    /// Teaching or break.
    pub kind: SlotKind,
    /// Assigned subject, if any.
    pub subject_id: Option<String>,
    /// Assigned staff, always the assigned subject's staff.
    pub staff_id: Option<String>,
    /// Part of a double-period lab session.
    pub span_two_periods: bool,
}

/// Position of a slot in the week, in half-period units within a day.
pub type SlotPosition = (Weekday, u32);

impl TimeSlot {
    /// Creates an empty teaching slot.
    pub fn teaching(day: Weekday, period: u32) -> Self {
        Self {
            day,
            period,
            kind: SlotKind::Teaching,
            subject_id: None,
            staff_id: None,
            span_two_periods: false,
        }
    }

    /// Creates a break slot between `after` and `after + 1`.
    pub fn break_after(day: Weekday, after: u32, name: impl Into<String>) -> Self {
        Self {
            day,
            period: after,
            kind: SlotKind::Break { name: name.into() },
            subject_id: None,
            staff_id: None,
            span_two_periods: false,
        }
    }

    /// Assigns a subject and its staff to this slot.
    pub fn with_assignment(
        mut self,
        subject_id: impl Into<String>,
        staff_id: impl Into<String>,
    ) -> Self {
        self.subject_id = Some(subject_id.into());
        self.staff_id = Some(staff_id.into());
        self
    }

    /// Marks this slot as half of a double-period session.
    pub fn spanning(mut self) -> Self {
        self.span_two_periods = true;
        self
    }

    #[inline]
    pub fn is_break(&self) -> bool {
        matches!(self.kind, SlotKind::Break { .. })
    }

    /// Teaching slot with no subject.
    #[inline]
    pub fn is_free(&self) -> bool {
        !self.is_break() && self.subject_id.is_none()
    }

    /// Break name for break slots.
    pub fn break_name(&self) -> Option<&str> {
        match &self.kind {
            SlotKind::Break { name } => Some(name),
            SlotKind::Teaching => None,
        }
    }

    /// Period as a number: `period` for teaching, `period + 0.5` for breaks.
    pub fn period_value(&self) -> f64 {
        if self.is_break() {
            self.period as f64 + 0.5
        } else {
            self.period as f64
        }
    }

    /// Sort key: day, then half-period offset.
    #[inline]
    pub fn position(&self) -> SlotPosition {
        let half = self.period * 2 + u32::from(self.is_break());
        (self.day, half)
    }

    pub(crate) fn assign(&mut self, subject_id: &str, staff_id: &str, span_two_periods: bool) {
        self.subject_id = Some(subject_id.to_string());
        self.staff_id = Some(staff_id.to_string());
        self.span_two_periods = span_two_periods;
    }
}

/// A staff member scheduled at a time they are already committed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffConflict {
    pub staff_id: String,
    pub day: Weekday,
    pub period: u32,
    /// Subject placed at the conflicting slot.
    pub subject_id: Option<String>,
}

/// A weekly timetable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// All slots, sorted by [`TimeSlot::position`].
    pub slots: Vec<TimeSlot>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a timetable from slots, sorting them.
    pub fn from_slots(slots: Vec<TimeSlot>) -> Self {
        let mut timetable = Self { slots };
        timetable.sort();
        timetable
    }

    /// Sorts slots by day, then period (breaks between their neighbours).
    ///
    /// Stable, so re-sorting sorted output is a no-op.
    pub fn sort(&mut self) {
        self.slots.sort_by_key(TimeSlot::position);
    }

    /// Whether slots are already in canonical order.
    pub fn is_sorted(&self) -> bool {
        self.slots
            .windows(2)
            .all(|w| w[0].position() <= w[1].position())
    }

    /// Number of slots (teaching and break).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Teaching slots in order.
    pub fn teaching_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|s| !s.is_break())
    }

    /// Break slots in order.
    pub fn break_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|s| s.is_break())
    }

    /// The teaching slot at `(day, period)`.
    pub fn slot_at(&self, day: Weekday, period: u32) -> Option<&TimeSlot> {
        self.teaching_slots()
            .find(|s| s.day == day && s.period == period)
    }

    /// All slots carrying a subject.
    pub fn slots_for_subject(&self, subject_id: &str) -> Vec<&TimeSlot> {
        self.slots
            .iter()
            .filter(|s| s.subject_id.as_deref() == Some(subject_id))
            .collect()
    }

    /// All slots taught by a staff member.
    pub fn slots_for_staff(&self, staff_id: &str) -> Vec<&TimeSlot> {
        self.slots
            .iter()
            .filter(|s| s.staff_id.as_deref() == Some(staff_id))
            .collect()
    }

    /// Number of teaching slots holding a subject.
    pub fn periods_for_subject(&self, subject_id: &str) -> usize {
        self.slots_for_subject(subject_id).len()
    }

    /// Teaching slots with no subject.
    pub fn free_slot_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_free()).count()
    }

    /// Double-period sessions as `(first, second)` slot pairs.
    ///
    /// Pairs consecutive spanning slots of the same subject on the same
    /// day, left to right. Breaks are skipped, which is safe because no
    /// session starts at a period followed by a break.
    pub fn lab_sessions(&self) -> Vec<(&TimeSlot, &TimeSlot)> {
        let mut sessions = Vec::new();
        let mut pending: Option<&TimeSlot> = None;

        for slot in self.teaching_slots() {
            if !slot.span_two_periods {
                pending = None;
                continue;
            }
            match pending {
                Some(first)
                    if first.day == slot.day
                        && first.period + 1 == slot.period
                        && first.subject_id == slot.subject_id =>
                {
                    sessions.push((first, slot));
                    pending = None;
                }
                _ => pending = Some(slot),
            }
        }

        sessions
    }

    /// Teaching slots whose staff is also committed at the same time elsewhere.
    pub fn staff_conflicts(&self, commitments: &StaffCommitments) -> Vec<StaffConflict> {
        self.teaching_slots()
            .filter_map(|slot| {
                let staff_id = slot.staff_id.as_deref()?;
                commitments
                    .is_busy(staff_id, slot.day, slot.period)
                    .then(|| StaffConflict {
                        staff_id: staff_id.to_string(),
                        day: slot.day,
                        period: slot.period,
                        subject_id: slot.subject_id.clone(),
                    })
            })
            .collect()
    }

    /// Replaces the slot at the same position, or inserts it in order.
    pub fn update_slot(&mut self, slot: TimeSlot) {
        let position = slot.position();
        if let Some(i) = self.slots.iter().position(|s| s.position() == position) {
            self.slots[i] = slot;
        } else {
            let at = self.slots.partition_point(|s| s.position() <= position);
            self.slots.insert(at, slot);
        }
    }
}
