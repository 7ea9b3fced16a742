//! Subject (course) model.
//!
//! A subject is a weekly teaching commitment: a number of periods per
//! week, taught by one staff member. Lab subjects are taught in
//! double-period sessions.

use serde::{Deserialize, Serialize};

/// A course to be placed on the weekly grid.
///
/// # Lab sessions
/// A lab needs `ceil(periods_per_week / 2)` double-period sessions.
/// Odd counts round up: a lab with 3 periods gets two sessions (4 slots).
/// A single unpaired lab period is never scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Course code (not necessarily unique).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Short label for grid cells.
    pub short_name: String,
    /// Period units required per week.
    pub periods_per_week: u32,
    /// Whether this subject is taught in double-period sessions.
    pub is_lab: bool,
    /// Assigned staff member.
    pub staff_id: String,
    /// Placement priority (lower = placed earlier).
    pub priority: i32,
}

impl Subject {
    /// Creates a regular subject taught by `staff_id`.
    ///
    /// Defaults: one period per week, priority 1.
    pub fn new(id: impl Into<String>, staff_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            short_name: String::new(),
            periods_per_week: 1,
            is_lab: false,
            staff_id: staff_id.into(),
            priority: 1,
        }
    }

    /// Sets the course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the short label.
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Sets the weekly period count.
    pub fn with_periods_per_week(mut self, periods: u32) -> Self {
        self.periods_per_week = periods;
        self
    }

    /// Marks this subject as a lab.
    pub fn as_lab(mut self) -> Self {
        self.is_lab = true;
        self
    }

    /// Sets the placement priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Number of placement events per week (sessions for labs, periods otherwise).
    pub fn sessions_per_week(&self) -> u32 {
        if self.is_lab {
            self.periods_per_week.div_ceil(2)
        } else {
            self.periods_per_week
        }
    }

    /// Number of teaching slots this subject occupies when fully placed.
    pub fn required_slots(&self) -> u32 {
        if self.is_lab {
            self.sessions_per_week() * 2
        } else {
            self.periods_per_week
        }
    }
}
