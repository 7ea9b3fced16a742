//! Input validation for timetabling.
//!
//! The generator accepts any catalogue and degrades to partial placement,
//! so these checks are advisory: callers run them before generation to
//! tell users why a timetable will come out incomplete. Detects:
//! - Duplicate staff or subject IDs
//! - Subjects referencing unknown staff
//! - Subjects with no periods
//! - Empty or ill-placed period/break configuration
//! - Labs that cannot fit any double period
//! - Catalogues larger than the weekly grid

use std::collections::HashSet;

use crate::models::{ScheduleConfiguration, Staff, Subject};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A subject references a staff member that doesn't exist.
    InvalidStaffReference,
    /// A subject needs zero periods per week.
    NoPeriods,
    /// The configuration has no teaching periods.
    EmptyPeriodTimings,
    /// A break is not between two teaching periods.
    InvalidBreak,
    /// Two breaks sit at the same position.
    DuplicateBreak,
    /// A lab exists but no double period is available on any day.
    NoLabWindow,
    /// Required slots exceed the teaching grid.
    Oversubscribed,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalogue against a grid configuration.
///
/// Checks:
/// 1. No duplicate staff IDs
/// 2. No duplicate subject IDs
/// 3. Every subject's staff exists
/// 4. Every subject needs at least one period
/// 5. At least one teaching period per day
/// 6. Breaks fall strictly between teaching periods, one per position
/// 7. Labs have at least one start period
/// 8. Total required slots fit the week
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    subjects: &[Subject],
    staff: &[Staff],
    settings: &ScheduleConfiguration,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut staff_ids = HashSet::new();
    for s in staff {
        if !staff_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", s.id),
            ));
        }
    }

    let mut subject_ids = HashSet::new();
    for subject in subjects {
        if !subject_ids.insert(subject.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", subject.id),
            ));
        }

        if !staff_ids.contains(subject.staff_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidStaffReference,
                format!(
                    "Subject '{}' references unknown staff '{}'",
                    subject.id, subject.staff_id
                ),
            ));
        }

        if subject.periods_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoPeriods,
                format!("Subject '{}' has no periods per week", subject.id),
            ));
        }
    }

    let periods_per_day = settings.periods_per_day();
    if periods_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPeriodTimings,
            "No period timings configured",
        ));
    }

    let mut break_positions = HashSet::new();
    for b in &settings.breaks {
        if b.after == 0 || b.after >= periods_per_day {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBreak,
                format!(
                    "Break '{}' after period {} is outside 1..{}",
                    b.name, b.after, periods_per_day
                ),
            ));
        }
        if !break_positions.insert(b.after) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateBreak,
                format!("More than one break after period {}", b.after),
            ));
        }
    }

    if subjects.iter().any(|s| s.is_lab) && settings.lab_start_candidates().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoLabWindow,
            "Lab subjects need two consecutive periods without a break",
        ));
    }

    let required: usize = subjects.iter().map(|s| s.required_slots() as usize).sum();
    let available = settings.teaching_slot_count();
    if required > available {
        errors.push(ValidationError::new(
            ValidationErrorKind::Oversubscribed,
            format!("Subjects need {required} slots but the week has {available}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
