//! Job (recurring chore) model.
//!
//! A job needs `daily_capacity` people every day of the event, drawn from
//! its eligibility pool.

use serde::{Deserialize, Serialize};

use super::Teammate;

/// A recurring chore with a daily staffing capacity and an assignee pool.
///
/// The pool keeps insertion order; duplicates are ignored by the builder
/// and removed by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job name, unique within an event (case-sensitive).
    pub name: String,
    /// Number of assignees required per day.
    pub daily_capacity: u32,
    /// Teammates eligible for this job.
    #[serde(default)]
    pub pool: Vec<Teammate>,
}

impl Job {
    /// Creates a job with an empty pool.
    pub fn new(name: impl Into<String>, daily_capacity: u32) -> Self {
        Self {
            name: name.into(),
            daily_capacity,
            pool: Vec::new(),
        }
    }

    /// Adds a teammate to the pool (no-op if already present).
    pub fn with_member(mut self, teammate: impl Into<Teammate>) -> Self {
        self.add_member(teammate.into());
        self
    }

    /// Adds several teammates to the pool.
    pub fn with_pool<I, T>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Teammate>,
    {
        for m in members {
            self.add_member(m.into());
        }
        self
    }

    /// Adds a teammate to the pool. Returns `false` if already present.
    pub fn add_member(&mut self, teammate: Teammate) -> bool {
        if self.is_eligible(teammate.as_str()) {
            return false;
        }
        self.pool.push(teammate);
        true
    }

    /// Whether a teammate is in the pool.
    pub fn is_eligible(&self, teammate: &str) -> bool {
        self.pool.iter().any(|t| t.as_str() == teammate)
    }

    /// Number of eligible teammates.
    #[inline]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Assignees per day actually achievable: `min(daily_capacity, |pool|)`.
    #[inline]
    pub fn effective_capacity(&self) -> usize {
        (self.daily_capacity as usize).min(self.pool.len())
    }
}
