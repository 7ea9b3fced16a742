//! Lab and regular placement phases.
//!
//! # Algorithm
//! Each placement event (one lab session, or one regular period) first
//! tries random `(day, period)` picks, accepting a pick only when the
//! target is free and the subject's staff is not busy there. After
//! `budget` rejected picks, a deterministic scan in `(day, period)`
//! order takes the first free target and ignores staff availability.
//! If the scan finds nothing the event is dropped and the subject stays
//! under-placed.
//!
//! The relaxed fallback trades staff conflict-freedom for progress; it
//! is not a constraint solver and never revisits earlier placements.

use rand::Rng;

use super::grid::Grid;
use crate::models::Subject;

/// Outcome of placing one subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Placement {
    /// Teaching slots filled.
    pub placed_slots: u32,
    /// Events that needed the deterministic scan.
    pub fallbacks: u32,
}

/// Places `ceil(periods_per_week / 2)` double-period sessions.
///
/// `candidates` are start periods with a following period and no
/// break in between, ascending.
pub(crate) fn place_lab<R: Rng>(
    grid: &mut Grid<'_>,
    lab: &Subject,
    candidates: &[u32],
    budget: usize,
    rng: &mut R,
) -> Placement {
    let mut placement = Placement::default();

    for session in 0..lab.sessions_per_week() {
        let target = match random_pair(grid, lab, candidates, budget, rng) {
            Some(target) => target,
            None => match first_free_pair(grid, candidates) {
                Some((day_idx, period)) => {
                    tracing::warn!(
                        subject = %lab.id,
                        staff = %lab.staff_id,
                        day = %grid.days()[day_idx],
                        period,
                        "Lab session force-placed without staff check"
                    );
                    placement.fallbacks += 1;
                    (day_idx, period)
                }
                None => {
                    tracing::warn!(
                        subject = %lab.id,
                        session,
                        sessions = lab.sessions_per_week(),
                        "No free double period left for lab"
                    );
                    break;
                }
            },
        };

        let (day_idx, period) = target;
        grid.assign(day_idx, period, &lab.id, &lab.staff_id, true);
        grid.assign(day_idx, period + 1, &lab.id, &lab.staff_id, true);
        placement.placed_slots += 2;
    }

    placement
}

/// Places `periods_per_week` single periods.
pub(crate) fn place_regular<R: Rng>(
    grid: &mut Grid<'_>,
    subject: &Subject,
    budget: usize,
    rng: &mut R,
) -> Placement {
    let mut placement = Placement::default();

    while placement.placed_slots < subject.periods_per_week {
        let target = match random_slot(grid, subject, budget, rng) {
            Some(target) => target,
            None => match first_free_slot(grid) {
                Some((day_idx, period)) => {
                    tracing::warn!(
                        subject = %subject.id,
                        staff = %subject.staff_id,
                        day = %grid.days()[day_idx],
                        period,
                        "Period force-placed without staff check"
                    );
                    placement.fallbacks += 1;
                    (day_idx, period)
                }
                None => {
                    tracing::warn!(
                        subject = %subject.id,
                        placed = placement.placed_slots,
                        required = subject.periods_per_week,
                        "Grid exhausted before subject was fully placed"
                    );
                    break;
                }
            },
        };

        let (day_idx, period) = target;
        grid.assign(day_idx, period, &subject.id, &subject.staff_id, false);
        placement.placed_slots += 1;
    }

    placement
}

fn random_pair<R: Rng>(
    grid: &Grid<'_>,
    lab: &Subject,
    candidates: &[u32],
    budget: usize,
    rng: &mut R,
) -> Option<(usize, u32)> {
    let day_count = grid.days().len();
    if candidates.is_empty() || day_count == 0 {
        return None;
    }

    for _ in 0..budget {
        let day_idx = rng.random_range(0..day_count);
        let period = candidates[rng.random_range(0..candidates.len())];

        if grid.is_pair_free(day_idx, period)
            && !grid.is_staff_busy(&lab.staff_id, day_idx, period)
            && !grid.is_staff_busy(&lab.staff_id, day_idx, period + 1)
        {
            return Some((day_idx, period));
        }
    }

    None
}

fn random_slot<R: Rng>(
    grid: &Grid<'_>,
    subject: &Subject,
    budget: usize,
    rng: &mut R,
) -> Option<(usize, u32)> {
    let day_count = grid.days().len();
    let periods = grid.periods_per_day();
    if day_count == 0 || periods == 0 {
        return None;
    }

    for _ in 0..budget {
        let day_idx = rng.random_range(0..day_count);
        let period = rng.random_range(1..=periods);

        if grid.is_free(day_idx, period) && !grid.is_staff_busy(&subject.staff_id, day_idx, period)
        {
            return Some((day_idx, period));
        }
    }

    None
}

fn first_free_pair(grid: &Grid<'_>, candidates: &[u32]) -> Option<(usize, u32)> {
    (0..grid.days().len()).find_map(|day_idx| {
        candidates
            .iter()
            .find(|&&p| grid.is_pair_free(day_idx, p))
            .map(|&p| (day_idx, p))
    })
}

fn first_free_slot(grid: &Grid<'_>) -> Option<(usize, u32)> {
    (0..grid.days().len()).find_map(|day_idx| {
        (1..=grid.periods_per_day())
            .find(|&p| grid.is_free(day_idx, p))
            .map(|p| (day_idx, p))
    })
}
