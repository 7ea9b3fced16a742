//! Shared test fixtures.

use rand::RngCore;

use crate::models::{Staff, Subject};

/// Random source that always yields zero, so every random pick lands on
/// the first option (Monday, lowest period or first lab candidate).
pub(crate) struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

pub(crate) fn sample_staff() -> Vec<Staff> {
    (1..=6)
        .map(|i| {
            Staff::new(format!("T{i}"))
                .with_name(format!("Teacher {i}"))
                .with_department("AI&DS")
        })
        .collect()
}

/// A twelve-subject semester catalogue: nine regular subjects and three
/// labs of `lab_periods` periods each.
///
/// With `lab_periods = 2` it fills the default 42-slot week exactly.
pub(crate) fn sample_subjects(lab_periods: u32) -> Vec<Subject> {
    let regular = |id: &str, staff: &str, periods: u32, priority: i32| {
        Subject::new(id, staff)
            .with_short_name(id)
            .with_periods_per_week(periods)
            .with_priority(priority)
    };
    let lab = |id: &str, staff: &str| {
        Subject::new(id, staff)
            .with_short_name(id)
            .with_periods_per_week(lab_periods)
            .with_priority(3)
            .as_lab()
    };

    vec![
        regular("PAS", "T1", 5, 1),
        regular("OS", "T2", 6, 1),
        regular("ML", "T3", 5, 1),
        regular("FDSA", "T4", 5, 1),
        regular("CN", "T5", 6, 1),
        regular("EVS", "T6", 4, 2),
        lab("FDSA LAB", "T4"),
        lab("ML LAB", "T3"),
        lab("CN LAB", "T5"),
        regular("ACTIVITY", "T4", 2, 4),
        regular("PD", "T4", 2, 2),
        regular("LIB", "T4", 1, 5),
    ]
}
