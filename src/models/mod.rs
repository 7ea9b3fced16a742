//! Timetabling domain models.
//!
//! Provides the input catalogue (staff, subjects, grid configuration)
//! and the output timetable.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | Training Centre |
//! |-------------|--------|-----------------|
//! | Subject | Course | Module |
//! | Staff | Teacher | Trainer |
//! | TimeSlot | Period cell | Session block |
//! | Timetable | Class timetable | Weekly roster |

mod commitments;
mod settings;
mod staff;
mod subject;
mod timetable;

pub use commitments::StaffCommitments;
pub use settings::{BreakRule, ClassDetails, PeriodTiming, ScheduleConfiguration, Weekday};
pub use staff::Staff;
pub use subject::Subject;
pub use timetable::{SlotKind, SlotPosition, StaffConflict, TimeSlot, Timetable};
