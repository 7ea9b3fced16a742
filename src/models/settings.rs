//! Week, period and break configuration.
//!
//! # Period Model
//! Periods are numbered from 1 in the order of `period_timings`; the
//! length of that list is the number of teaching periods per day.
//! A [`BreakRule`] with `after = p` sits between period `p` and `p + 1`
//! and never occupies a teaching period.

use serde::{Deserialize, Serialize};

/// A teaching day. The week is fixed at Monday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// The six teaching days in week order.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Zero-based position in the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day name, e.g. `"Monday"`.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Wall-clock bounds of one teaching period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTiming {
    /// Start time, e.g. `"8:30"`.
    pub start_time: String,
    /// End time, e.g. `"9:20"`.
    pub end_time: String,
}

impl PeriodTiming {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// A named break between period `after` and `after + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRule {
    /// Period number the break follows.
    pub after: u32,
    /// Display name, e.g. `"Lunch Break"`.
    pub name: String,
}

impl BreakRule {
    pub fn new(after: u32, name: impl Into<String>) -> Self {
        Self {
            after,
            name: name.into(),
        }
    }
}

/// Descriptive header for the class a timetable belongs to.
///
/// Carried alongside the configuration for display; placement ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassDetails {
    pub institution: String,
    pub department: String,
    pub academic_year: String,
    pub effective_from: String,
    pub year: String,
    pub semester: String,
    pub branch: String,
    pub section: String,
}

/// Grid shape for one weekly timetable.
///
/// The default is a seven-period day (8:30 to 15:15) with a tea break
/// after period 3 and a lunch break after period 5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfiguration {
    /// Class header (not used for placement).
    pub class_details: ClassDetails,
    /// Ordered period timings; defines periods per day.
    pub period_timings: Vec<PeriodTiming>,
    /// Breaks inserted between periods.
    pub breaks: Vec<BreakRule>,
}

impl Default for ScheduleConfiguration {
    fn default() -> Self {
        Self {
            class_details: ClassDetails::default(),
            period_timings: vec![
                PeriodTiming::new("8:30", "9:20"),
                PeriodTiming::new("9:20", "10:10"),
                PeriodTiming::new("10:10", "11:00"),
                PeriodTiming::new("11:15", "12:00"),
                PeriodTiming::new("12:00", "12:45"),
                PeriodTiming::new("13:35", "14:25"),
                PeriodTiming::new("14:25", "15:15"),
            ],
            breaks: vec![
                BreakRule::new(3, "Tea Break"),
                BreakRule::new(5, "Lunch Break"),
            ],
        }
    }
}

impl ScheduleConfiguration {
    /// Creates a configuration from timings and breaks.
    pub fn new(period_timings: Vec<PeriodTiming>, breaks: Vec<BreakRule>) -> Self {
        Self {
            class_details: ClassDetails::default(),
            period_timings,
            breaks,
        }
    }

    /// Creates a configuration with `periods` anonymous periods and no breaks.
    ///
    /// Handy when only the grid shape matters.
    pub fn with_periods(periods: usize) -> Self {
        let period_timings = (0..periods)
            .map(|p| PeriodTiming::new(format!("P{}", p + 1), format!("P{}", p + 1)))
            .collect();
        Self::new(period_timings, Vec::new())
    }

    /// Adds a break rule.
    pub fn with_break(mut self, after: u32, name: impl Into<String>) -> Self {
        self.breaks.push(BreakRule::new(after, name));
        self
    }

    /// Sets the class header.
    pub fn with_class_details(mut self, details: ClassDetails) -> Self {
        self.class_details = details;
        self
    }

    /// The fixed teaching days.
    pub fn days(&self) -> &'static [Weekday] {
        &Weekday::ALL
    }

    /// Teaching periods per day.
    #[inline]
    pub fn periods_per_day(&self) -> u32 {
        self.period_timings.len() as u32
    }

    /// Total teaching slots in one week.
    pub fn teaching_slot_count(&self) -> usize {
        self.days().len() * self.period_timings.len()
    }

    /// Whether a break falls between `period` and `period + 1`.
    pub fn has_break_after(&self, period: u32) -> bool {
        self.breaks.iter().any(|b| b.after == period)
    }

    /// Start periods eligible for a double-period session.
    ///
    /// `p` qualifies iff `p + 1` is still a teaching period and no break
    /// separates the two.
    pub fn lab_start_candidates(&self) -> Vec<u32> {
        (1..self.periods_per_day())
            .filter(|&p| !self.has_break_after(p))
            .collect()
    }

    /// Timing of a 1-based period, if it exists.
    pub fn timing(&self, period: u32) -> Option<&PeriodTiming> {
        period
            .checked_sub(1)
            .and_then(|i| self.period_timings.get(i as usize))
    }
}
