//! Deficit round-robin scheduler.
//!
//! # Algorithm
//!
//! Each job is scheduled independently:
//! 1. Start every pool member's counter at 0.
//! 2. For each date in ascending order, take `k = min(capacity, |pool|)`.
//! 3. Rank members by ascending counter, breaking ties with a permutation
//!    seeded by `(seed, job, date)`.
//! 4. Assign the first `k` and increment their counters.
//!
//! Because each round serves the lowest counters first, the spread between
//! the most- and least-assigned member of a pool never exceeds 1.
//!
//! # Complexity
//! O(d * j * p log p) where d=days, j=jobs, p=pool size.

use tracing::{debug, info};

use super::ledger::FairnessLedger;
use crate::models::{DayAssignment, EventDefinition, SchedulePlan};

/// Fair rota scheduler.
///
/// Stateless apart from the tie-break seed; the same definition and seed
/// always give the same plan, and independent calls may run in parallel.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_rota::models::{EventDefinition, Job};
/// use u_rota::scheduler::FairScheduler;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 6).unwrap();
/// let event = EventDefinition::new("Flat", start, end)
///     .with_teammates(["A", "B", "C"])
///     .with_job(Job::new("dishes", 1).with_pool(["A", "B", "C"]));
///
/// let plan = FairScheduler::new().with_seed(7).schedule(&event);
/// assert_eq!(plan.len(), 6);
/// assert_eq!(plan.assignments_for_teammate("A").len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FairScheduler {
    seed: u64,
}

impl FairScheduler {
    /// Creates a scheduler with seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-break seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The tie-break seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Builds the plan for a validated event.
    ///
    /// The definition is assumed to have passed [`validate`](crate::validation::validate);
    /// it is not re-checked here.
    pub fn schedule(&self, definition: &EventDefinition) -> SchedulePlan {
        let range = definition.date_range();
        let mut plan = SchedulePlan::with_capacity(range.day_count());
        for date in range.days() {
            plan.push_day(DayAssignment::new(date));
        }

        for job in &definition.jobs {
            let k = job.effective_capacity();
            debug!(job = %job.name, pool = job.pool_size(), k, "scheduling job");

            let mut ledger = FairnessLedger::new(job);
            for day in &mut plan.days {
                let picked = ledger.assign_round(k, self.seed, day.date);
                day.set_assignees(job.name.clone(), picked.into_iter().cloned());
            }

            debug_assert!(
                ledger.spread() <= 1,
                "job '{}' counters out of balance: {:?}",
                job.name,
                ledger.counts()
            );
        }

        info!(
            event = %definition.name,
            days = plan.len(),
            jobs = definition.jobs.len(),
            seed = self.seed,
            "plan generated"
        );
        plan
    }
}

/// Builds the plan for a validated event with the given seed.
///
/// Shorthand for `FairScheduler::new().with_seed(seed).schedule(definition)`.
pub fn schedule(definition: &EventDefinition, seed: u64) -> SchedulePlan {
    FairScheduler::new().with_seed(seed).schedule(definition)
}
