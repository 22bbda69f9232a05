//! Event definition model.
//!
//! An event bundles everything the scheduler needs: who takes part, which
//! jobs recur, and the date span. It is built by the caller from user input
//! and treated as read-only by validation, scheduling and formatting.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{DateRange, Job, Teammate};

/// Inputs of one rota event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefinition {
    /// Event title.
    pub name: String,
    /// Participants, in display order.
    pub teammates: Vec<Teammate>,
    /// Recurring jobs, in display order.
    pub jobs: Vec<Job>,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
    /// Free-text "additional details" appended to the description.
    #[serde(default)]
    pub custom_description: Option<String>,
    /// Calendar alert for each assignment, consumed by calendar export.
    #[serde(default)]
    pub reminder: Reminder,
}

/// Alert lead time attached to exported calendar entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reminder {
    /// No alert.
    #[default]
    #[serde(rename = "none")]
    None,
    /// At the time of the event.
    #[serde(rename = "at_time")]
    AtTime,
    #[serde(rename = "5_min")]
    Minutes5,
    #[serde(rename = "10_min")]
    Minutes10,
    #[serde(rename = "15_min")]
    Minutes15,
    #[serde(rename = "30_min")]
    Minutes30,
    #[serde(rename = "1_hour")]
    Hours1,
    #[serde(rename = "2_hours")]
    Hours2,
    #[serde(rename = "1_day")]
    Days1,
    #[serde(rename = "2_days")]
    Days2,
}

impl Reminder {
    /// All options, in menu order.
    pub const ALL: [Reminder; 10] = [
        Reminder::None,
        Reminder::AtTime,
        Reminder::Minutes5,
        Reminder::Minutes10,
        Reminder::Minutes15,
        Reminder::Minutes30,
        Reminder::Hours1,
        Reminder::Hours2,
        Reminder::Days1,
        Reminder::Days2,
    ];

    /// How long before the entry the alert fires. `None` means no alert.
    pub fn lead_time(&self) -> Option<Duration> {
        match self {
            Reminder::None => None,
            Reminder::AtTime => Some(Duration::zero()),
            Reminder::Minutes5 => Some(Duration::minutes(5)),
            Reminder::Minutes10 => Some(Duration::minutes(10)),
            Reminder::Minutes15 => Some(Duration::minutes(15)),
            Reminder::Minutes30 => Some(Duration::minutes(30)),
            Reminder::Hours1 => Some(Duration::hours(1)),
            Reminder::Hours2 => Some(Duration::hours(2)),
            Reminder::Days1 => Some(Duration::days(1)),
            Reminder::Days2 => Some(Duration::days(2)),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Reminder::None => "None",
            Reminder::AtTime => "At time of event",
            Reminder::Minutes5 => "5 minutes before",
            Reminder::Minutes10 => "10 minutes before",
            Reminder::Minutes15 => "15 minutes before",
            Reminder::Minutes30 => "30 minutes before",
            Reminder::Hours1 => "1 hour before",
            Reminder::Hours2 => "2 hours before",
            Reminder::Days1 => "1 day before",
            Reminder::Days2 => "2 days before",
        }
    }
}

impl EventDefinition {
    /// Creates an event with no teammates or jobs.
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            teammates: Vec::new(),
            jobs: Vec::new(),
            start_date,
            end_date,
            custom_description: None,
            reminder: Reminder::None,
        }
    }

    /// Adds a teammate (no-op if already present).
    pub fn with_teammate(mut self, teammate: impl Into<Teammate>) -> Self {
        let teammate = teammate.into();
        if !self.has_teammate(teammate.as_str()) {
            self.teammates.push(teammate);
        }
        self
    }

    /// Adds several teammates.
    pub fn with_teammates<I, T>(self, teammates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Teammate>,
    {
        teammates
            .into_iter()
            .fold(self, |event, t| event.with_teammate(t))
    }

    /// Adds a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Sets the additional details text.
    pub fn with_custom_description(mut self, text: impl Into<String>) -> Self {
        self.custom_description = Some(text.into());
        self
    }

    /// Sets the calendar alert.
    pub fn with_reminder(mut self, reminder: Reminder) -> Self {
        self.reminder = reminder;
        self
    }

    /// Puts a teammate in every job's pool (the "ALL" column of the form).
    pub fn assign_to_all_jobs(&mut self, teammate: impl Into<Teammate>) {
        let teammate = teammate.into();
        for job in &mut self.jobs {
            job.add_member(teammate.clone());
        }
    }

    /// Removes a teammate from every job's pool.
    pub fn unassign_from_all_jobs(&mut self, teammate: &str) {
        for job in &mut self.jobs {
            job.pool.retain(|t| t.as_str() != teammate);
        }
    }

    /// Whether a teammate belongs to the event.
    pub fn has_teammate(&self, teammate: &str) -> bool {
        self.teammates.iter().any(|t| t.as_str() == teammate)
    }

    /// Finds a job by exact name.
    pub fn job(&self, name: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.name == name)
    }

    /// The event's date span.
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Number of days covered (0 if the range is inverted).
    pub fn day_count(&self) -> usize {
        self.date_range().day_count()
    }
}
