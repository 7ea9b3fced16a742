//! Timetable generation and placement reporting.
//!
//! # Algorithm
//!
//! `Timetabler` is greedy: subjects are placed one at a time in a fixed
//! order (labs first, then by priority) and nothing is ever moved once
//! placed. Each placement tries bounded random picks that respect staff
//! availability, then falls back to a deterministic first-free scan
//! that does not.
//!
//! There is no cost function and no backtracking. When the grid is
//! oversubscribed, subjects at the end of the order are under-placed.
//!
//! # Report
//!
//! `PlacementReport` compares a generated timetable with its catalogue:
//! required vs placed slots, shortfall, utilization, staff conflicts.

mod grid;
mod ordering;
mod placement;
mod report;
#[cfg(test)]
pub(crate) mod testing;
mod timetabler;

pub use ordering::placement_order;
pub use report::{PlacementReport, SubjectPlacement};
pub use timetabler::{TimetableRequest, Timetabler, TimetablerOptions};

use crate::models::{ScheduleConfiguration, StaffCommitments, TimeSlot, Timetable};

/// Builds an unassigned timetable: every teaching slot empty, breaks in place.
pub fn empty_timetable(settings: &ScheduleConfiguration) -> Timetable {
    let commitments = StaffCommitments::new();
    let grid = grid::Grid::build(settings, &commitments);
    let slots: Vec<TimeSlot> = grid.into_slots(grid::break_slots(settings));
    Timetable { slots }
}
