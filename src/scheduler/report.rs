//! Placement report for a generated timetable.
//!
//! Generation never fails, so under-placement is only visible by
//! comparing the output with the catalogue. The report does that.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required | Slots each subject needs (`2 × sessions` for labs) |
//! | Placed | Slots carrying the subject's id |
//! | Shortfall | Sum of `max(0, required - placed)` |
//! | Utilization | Filled teaching slots / teaching slots |
//! | Staff conflicts | Slots clashing with outside commitments |

use crate::models::{StaffCommitments, Subject, Timetable};

/// Required vs placed slots for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectPlacement {
    pub subject_id: String,
    pub required: u32,
    pub placed: u32,
}

impl SubjectPlacement {
    /// Missing slots (0 when fully placed).
    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.required.saturating_sub(self.placed)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.placed >= self.required
    }
}

/// Summary of how well a timetable covers its catalogue.
#[derive(Debug, Clone)]
pub struct PlacementReport {
    /// Per-subject counts, in catalogue order.
    pub subjects: Vec<SubjectPlacement>,
    /// Teaching slots in the grid.
    pub teaching_slots: usize,
    /// Teaching slots left empty.
    pub free_slots: usize,
    /// Filled fraction of the teaching grid (0.0..1.0).
    pub utilization: f64,
    /// Slots whose staff is committed elsewhere at the same time.
    pub staff_conflicts: usize,
}

impl PlacementReport {
    /// Computes the report from a timetable and its input catalogue.
    pub fn calculate(timetable: &Timetable, subjects: &[Subject]) -> Self {
        Self::calculate_with_commitments(timetable, subjects, &StaffCommitments::new())
    }

    /// Like [`calculate`](Self::calculate), also counting clashes with
    /// outside staff commitments.
    pub fn calculate_with_commitments(
        timetable: &Timetable,
        subjects: &[Subject],
        commitments: &StaffCommitments,
    ) -> Self {
        let subjects: Vec<SubjectPlacement> = subjects
            .iter()
            .map(|s| SubjectPlacement {
                subject_id: s.id.clone(),
                required: s.required_slots(),
                placed: timetable.periods_for_subject(&s.id) as u32,
            })
            .collect();

        let teaching_slots = timetable.teaching_slots().count();
        let free_slots = timetable.free_slot_count();
        let utilization = if teaching_slots == 0 {
            0.0
        } else {
            (teaching_slots - free_slots) as f64 / teaching_slots as f64
        };

        Self {
            subjects,
            teaching_slots,
            free_slots,
            utilization,
            staff_conflicts: timetable.staff_conflicts(commitments).len(),
        }
    }

    /// Subjects that received fewer slots than required.
    pub fn under_placed(&self) -> Vec<&SubjectPlacement> {
        self.subjects.iter().filter(|s| !s.is_complete()).collect()
    }

    /// Total missing slots across all subjects.
    pub fn total_shortfall(&self) -> u32 {
        self.subjects.iter().map(SubjectPlacement::shortfall).sum()
    }

    /// Whether every subject is fully placed.
    pub fn is_complete(&self) -> bool {
        self.subjects.iter().all(SubjectPlacement::is_complete)
    }
}
