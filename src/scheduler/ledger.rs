//! Per-job assignment counters.
//!
//! A ledger lives for one `schedule()` call and one job; it is never shared
//! or returned.

use chrono::NaiveDate;

use super::tiebreak;
use crate::models::{Job, Teammate};

/// Assignment counts for the members of one job's pool.
#[derive(Debug)]
pub(crate) struct FairnessLedger<'a> {
    job: &'a Job,
    counts: Vec<u32>,
}

impl<'a> FairnessLedger<'a> {
    /// Starts every pool member at zero.
    pub(crate) fn new(job: &'a Job) -> Self {
        Self {
            job,
            counts: vec![0; job.pool.len()],
        }
    }

    /// Picks the `k` least-assigned members for `date` and charges them.
    ///
    /// Candidates are ordered by ascending counter; ties follow the seeded
    /// permutation for `(seed, job, date)`.
    pub(crate) fn assign_round(&mut self, k: usize, seed: u64, date: NaiveDate) -> Vec<&'a Teammate> {
        let mut order = tiebreak::permutation(seed, &self.job.name, date, self.counts.len());
        // Stable sort keeps the shuffled order among equal counters.
        order.sort_by_key(|&i| self.counts[i]);

        let job = self.job;
        order
            .into_iter()
            .take(k)
            .map(|i| {
                self.counts[i] += 1;
                &job.pool[i]
            })
            .collect()
    }

    /// Counter per pool member, in pool order.
    pub(crate) fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Largest minus smallest counter.
    pub(crate) fn spread(&self) -> u32 {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        let min = self.counts.iter().copied().min().unwrap_or(0);
        max - min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_assign_round_prefers_lowest_counter() {
        let job = Job::new("dishes", 1).with_pool(["A", "B", "C"]);
        let mut ledger = FairnessLedger::new(&job);

        let mut seen = Vec::new();
        for day in 1..=3 {
            let picked = ledger.assign_round(1, 9, d(day));
            assert_eq!(picked.len(), 1);
            seen.push(picked[0].as_str().to_string());
        }
        seen.sort();
        assert_eq!(seen, vec!["A", "B", "C"]);
        assert_eq!(ledger.counts(), &[1, 1, 1]);
        assert_eq!(ledger.spread(), 0);
    }

    #[test]
    fn test_assign_round_full_pool() {
        let job = Job::new("trash", 3).with_pool(["A", "B", "C"]);
        let mut ledger = FairnessLedger::new(&job);
        let picked = ledger.assign_round(3, 0, d(1));
        assert_eq!(picked.len(), 3);
        assert_eq!(ledger.counts(), &[1, 1, 1]);
    }

    #[test]
    fn test_spread_stays_within_one() {
        let job = Job::new("mop", 2).with_pool(["A", "B", "C", "D", "E"]);
        let mut ledger = FairnessLedger::new(&job);
        for day in 1..=29 {
            ledger.assign_round(2, 3, d(day));
            assert!(ledger.spread() <= 1);
        }
        assert_eq!(ledger.counts().iter().sum::<u32>(), 58);
    }
}
