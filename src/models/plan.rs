//! Schedule plan (solution) model.
//!
//! A plan holds one [`DayAssignment`] per date of the event, in ascending
//! date order. Each day maps job names to the teammates doing that job.
//!
//! Plans are plain values: equal inputs and seed give equal plans, so a
//! stored plan can be compared against a freshly computed one with `==`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::Teammate;

/// Assignees per job for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    /// The calendar date.
    pub date: NaiveDate,
    /// Job name → assigned teammates.
    pub job_assignments: BTreeMap<String, BTreeSet<Teammate>>,
}

/// The resolved day-by-day assignment for an event's full date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Days in ascending date order.
    pub days: Vec<DayAssignment>,
}

/// A structural problem found when checking a plan against its event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanViolation {
    /// Type of violation.
    pub violation_type: PlanViolationType,
    /// Date concerned, if any.
    pub date: Option<NaiveDate>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of plan violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanViolationType {
    /// Plan length differs from the event's day count.
    LengthMismatch,
    /// A day is out of order or not the expected date.
    DateMismatch,
    /// A job has the wrong number of assignees on a day.
    WrongAssigneeCount,
    /// An assignee is not in the job's pool.
    IneligibleAssignee,
    /// A day lists a job the event does not define, or omits one.
    UnknownJob,
}

impl DayAssignment {
    /// Creates an empty day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            job_assignments: BTreeMap::new(),
        }
    }

    /// Records the assignees of a job.
    pub fn set_assignees<I>(&mut self, job: impl Into<String>, assignees: I)
    where
        I: IntoIterator<Item = Teammate>,
    {
        self.job_assignments
            .insert(job.into(), assignees.into_iter().collect());
    }

    /// Assignees of a job on this day.
    pub fn assignees(&self, job: &str) -> Option<&BTreeSet<Teammate>> {
        self.job_assignments.get(job)
    }

    /// Jobs a teammate is assigned to on this day.
    pub fn jobs_for(&self, teammate: &str) -> Vec<&str> {
        self.job_assignments
            .iter()
            .filter(|(_, who)| who.contains(teammate))
            .map(|(job, _)| job.as_str())
            .collect()
    }

    /// Total assignment slots on this day.
    pub fn slot_count(&self) -> usize {
        self.job_assignments.values().map(BTreeSet::len).sum()
    }
}

impl SchedulePlan {
    /// Creates a plan with preallocated room for `days` days.
    pub fn with_capacity(days: usize) -> Self {
        Self {
            days: Vec::with_capacity(days),
        }
    }

    /// Appends a day.
    pub fn push_day(&mut self, day: DayAssignment) {
        self.days.push(day);
    }

    /// Number of days.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the plan has no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Dates covered, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.date).collect()
    }

    /// The assignment for a given date.
    pub fn day(&self, date: NaiveDate) -> Option<&DayAssignment> {
        self.days
            .binary_search_by_key(&date, |d| d.date)
            .ok()
            .map(|i| &self.days[i])
    }

    /// Assignees of a job on a given date.
    pub fn assignees(&self, date: NaiveDate, job: &str) -> Option<&BTreeSet<Teammate>> {
        self.day(date).and_then(|d| d.assignees(job))
    }

    /// Every (date, job) a teammate is assigned to, in date order.
    pub fn assignments_for_teammate(&self, teammate: &str) -> Vec<(NaiveDate, &str)> {
        self.days
            .iter()
            .flat_map(|day| {
                day.jobs_for(teammate)
                    .into_iter()
                    .map(move |job| (day.date, job))
            })
            .collect()
    }

    /// Total assignment slots across the plan.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(DayAssignment::slot_count).sum()
    }
}

impl PlanViolation {
    /// Creates a violation.
    pub fn new(
        violation_type: PlanViolationType,
        date: Option<NaiveDate>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            date,
            message: message.into(),
        }
    }
}
