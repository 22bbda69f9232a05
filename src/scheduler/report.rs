//! Plan fairness metrics.
//!
//! Summarizes how a plan spreads work across teammates.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Job load | Assignments per pool member for one job |
//! | Spread | max(load) - min(load) within one job's pool |
//! | Teammate total | Assignments across all jobs (informational) |
//! | Total slots | Sum of all assignments in the plan |
//!
//! Only per-job spread is balanced by the scheduler. Cross-job totals are
//! reported for display and are not guaranteed to be even.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{EventDefinition, SchedulePlan, Teammate};

/// Load distribution for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobLoad {
    /// Job name.
    pub job: String,
    /// Assignments per pool member (members never assigned count as 0).
    pub counts: BTreeMap<Teammate, u32>,
    /// Smallest per-member count.
    pub min: u32,
    /// Largest per-member count.
    pub max: u32,
}

/// Plan fairness indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessReport {
    /// Per-job load, in event job order.
    pub jobs: Vec<JobLoad>,
    /// Assignments per teammate across all jobs.
    pub totals: BTreeMap<Teammate, u32>,
    /// Total assignment slots in the plan.
    pub total_slots: u32,
}

impl JobLoad {
    /// `max - min`.
    #[inline]
    pub fn spread(&self) -> u32 {
        self.max - self.min
    }
}

impl FairnessReport {
    /// Computes the report from an event and its plan.
    ///
    /// # Arguments
    /// * `definition` - The event (for job pools and teammates).
    /// * `plan` - The plan to measure.
    pub fn calculate(definition: &EventDefinition, plan: &SchedulePlan) -> Self {
        let mut totals: BTreeMap<Teammate, u32> = definition
            .teammates
            .iter()
            .map(|t| (t.clone(), 0))
            .collect();
        let mut total_slots = 0;

        let jobs = definition
            .jobs
            .iter()
            .map(|job| {
                let mut counts: BTreeMap<Teammate, u32> =
                    job.pool.iter().map(|t| (t.clone(), 0)).collect();

                for day in &plan.days {
                    let Some(assignees) = day.assignees(&job.name) else {
                        continue;
                    };
                    for who in assignees {
                        *counts.entry(who.clone()).or_insert(0) += 1;
                        *totals.entry(who.clone()).or_insert(0) += 1;
                        total_slots += 1;
                    }
                }

                JobLoad {
                    job: job.name.clone(),
                    min: counts.values().copied().min().unwrap_or(0),
                    max: counts.values().copied().max().unwrap_or(0),
                    counts,
                }
            })
            .collect();

        Self {
            jobs,
            totals,
            total_slots,
        }
    }

    /// Whether every job's spread is at most 1.
    pub fn is_fair(&self) -> bool {
        self.jobs.iter().all(|j| j.spread() <= 1)
    }

    /// Load for a given job.
    pub fn job(&self, name: &str) -> Option<&JobLoad> {
        self.jobs.iter().find(|j| j.job == name)
    }

    /// Largest per-job spread.
    pub fn max_spread(&self) -> u32 {
        self.jobs.iter().map(JobLoad::spread).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayAssignment, Job};
    use crate::scheduler::schedule;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn sample_event() -> EventDefinition {
        EventDefinition::new("Flat", d(1), d(6))
            .with_teammates(["A", "B", "C", "D"])
            .with_job(Job::new("dishes", 1).with_pool(["A", "B", "C"]))
            .with_job(Job::new("trash", 1).with_pool(["A", "D"]))
    }

    #[test]
    fn test_report_on_scheduled_plan() {
        let event = sample_event();
        let plan = schedule(&event, 3);
        let report = FairnessReport::calculate(&event, &plan);

        assert!(report.is_fair());
        assert_eq!(report.total_slots, 12);
        let dishes = report.job("dishes").unwrap();
        assert_eq!((dishes.min, dishes.max), (2, 2));
        let trash = report.job("trash").unwrap();
        assert_eq!(trash.counts[&Teammate::new("D")], 3);
        // A is in both pools
        assert_eq!(report.totals[&Teammate::new("A")], 5);
    }

    #[test]
    fn test_report_detects_imbalance() {
        let event = EventDefinition::new("Flat", d(1), d(3))
            .with_teammates(["A", "B"])
            .with_job(Job::new("dishes", 1).with_pool(["A", "B"]));

        let mut plan = SchedulePlan::default();
        for day in 1..=3 {
            let mut da = DayAssignment::new(d(day));
            da.set_assignees("dishes", vec![Teammate::new("A")]);
            plan.push_day(da);
        }

        let report = FairnessReport::calculate(&event, &plan);
        assert!(!report.is_fair());
        assert_eq!(report.max_spread(), 3);
        assert_eq!(report.job("dishes").unwrap().counts[&Teammate::new("B")], 0);
    }

    #[test]
    fn test_report_empty_plan() {
        let event = sample_event();
        let report = FairnessReport::calculate(&event, &SchedulePlan::default());
        assert_eq!(report.total_slots, 0);
        assert!(report.is_fair());
        assert_eq!(report.totals.len(), 4);
    }
}
