//! Input validation for rota events, and structural checks on plans.
//!
//! [`validate`] checks an [`EventDefinition`] before scheduling. Every rule
//! is evaluated and all failures are returned together, so the caller can
//! report every problem at once. Detects:
//! - Blank event name
//! - Empty or duplicated teammates
//! - Empty job list, blank or duplicate job names
//! - Zero daily capacity
//! - Empty pools and pool members outside the event
//! - Inverted date range
//!
//! Validation is all-or-nothing: either the whole (normalized) definition is
//! returned or only the errors.
//!
//! [`verify_plan`] checks a computed or stored [`SchedulePlan`] against the
//! structural invariants of its event.

use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

use crate::models::{EventDefinition, PlanViolation, PlanViolationType, SchedulePlan};

/// Validation result: the normalized definition or every detected problem.
pub type ValidationResult = Result<EventDefinition, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending job or teammate, when the rule concerns one.
    pub subject: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Event name is empty or whitespace.
    EmptyEventName,
    /// The event has no teammates.
    EmptyTeammates,
    /// A teammate identifier is empty or whitespace.
    BlankTeammate,
    /// A teammate is listed twice.
    DuplicateTeammate,
    /// The event has no jobs.
    EmptyJobs,
    /// A job name is empty or whitespace.
    EmptyJobName,
    /// Two jobs share the same name.
    DuplicateJobName,
    /// A job's daily capacity is zero.
    InvalidCapacity,
    /// A job has nobody in its pool.
    EmptyPool,
    /// A pool member is not one of the event's teammates.
    UnknownPoolMember,
    /// End date precedes start date.
    InvertedDateRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: None,
            message: message.into(),
        }
    }

    fn about(kind: ValidationErrorKind, subject: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: Some(subject.to_string()),
            message: message.into(),
        }
    }
}

/// Validates an event, clamping each job's capacity to its pool size.
///
/// Equivalent to `validate_with(definition, true)`.
pub fn validate(definition: EventDefinition) -> ValidationResult {
    validate_with(definition, true)
}

/// Validates an event.
///
/// Checks:
/// 1. Event name is not blank
/// 2. At least one teammate; no blank or duplicate teammates
/// 3. At least one job; job names non-blank and unique (exact match)
/// 4. Every job's daily capacity is at least 1
/// 5. Every job's pool is non-empty and a subset of the teammates
/// 6. `start_date <= end_date`
///
/// On success the definition is normalized: duplicate pool entries are
/// dropped and, if `clamp_capacity` is set, capacities are reduced to
/// `min(capacity, |pool|)`.
///
/// # Returns
/// `Ok(definition)` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_with(mut definition: EventDefinition, clamp_capacity: bool) -> ValidationResult {
    let mut errors = Vec::new();

    if definition.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyEventName,
            "Event name is empty",
        ));
    }

    // Teammates
    if definition.teammates.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTeammates,
            "Event has no teammates",
        ));
    }
    let mut teammate_ids = HashSet::new();
    for t in &definition.teammates {
        if t.is_blank() {
            errors.push(ValidationError::about(
                ValidationErrorKind::BlankTeammate,
                t.as_str(),
                "Teammate identifier is blank",
            ));
        } else if !teammate_ids.insert(t.as_str()) {
            errors.push(ValidationError::about(
                ValidationErrorKind::DuplicateTeammate,
                t.as_str(),
                format!("Duplicate teammate: {t}"),
            ));
        }
    }

    // Jobs
    if definition.jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyJobs,
            "Event has no jobs",
        ));
    }
    let mut job_names = HashSet::new();
    for job in &definition.jobs {
        if job.name.trim().is_empty() {
            errors.push(ValidationError::about(
                ValidationErrorKind::EmptyJobName,
                &job.name,
                "Job name is empty",
            ));
        } else if !job_names.insert(job.name.as_str()) {
            errors.push(ValidationError::about(
                ValidationErrorKind::DuplicateJobName,
                &job.name,
                format!("Duplicate job name: {}", job.name),
            ));
        }

        if job.daily_capacity == 0 {
            errors.push(ValidationError::about(
                ValidationErrorKind::InvalidCapacity,
                &job.name,
                format!("Job '{}' has a daily capacity of 0", job.name),
            ));
        }

        if job.pool.is_empty() {
            errors.push(ValidationError::about(
                ValidationErrorKind::EmptyPool,
                &job.name,
                format!("Job '{}' has no one in its pool", job.name),
            ));
        }

        for member in &job.pool {
            if !teammate_ids.contains(member.as_str()) {
                errors.push(ValidationError::about(
                    ValidationErrorKind::UnknownPoolMember,
                    &job.name,
                    format!(
                        "Job '{}' pool references unknown teammate '{}'",
                        job.name, member
                    ),
                ));
            }
        }
    }

    if definition.date_range().is_inverted() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedDateRange,
            format!(
                "End date {} is before start date {}",
                definition.end_date, definition.start_date
            ),
        ));
    }

    if !errors.is_empty() {
        warn!(
            event = %definition.name,
            errors = errors.len(),
            "event definition rejected"
        );
        return Err(errors);
    }

    // Normalize
    for job in &mut definition.jobs {
        let mut seen = HashSet::new();
        job.pool.retain(|t| seen.insert(t.clone()));
        if clamp_capacity {
            let pool_size = u32::try_from(job.pool.len()).unwrap_or(u32::MAX);
            job.daily_capacity = job.daily_capacity.min(pool_size);
        }
    }

    Ok(definition)
}

/// Checks a plan against the structural invariants of its event.
///
/// Verifies:
/// 1. One day per date of the event, in ascending order
/// 2. Each day lists exactly the event's jobs
/// 3. Each job has `min(capacity, |pool|)` assignees, all from its pool
///
/// Returns an empty list for a well-formed plan.
pub fn verify_plan(definition: &EventDefinition, plan: &SchedulePlan) -> Vec<PlanViolation> {
    let mut violations = Vec::new();
    let range = definition.date_range();

    if plan.len() != range.day_count() {
        violations.push(PlanViolation::new(
            PlanViolationType::LengthMismatch,
            None,
            format!(
                "Plan has {} days, event covers {}",
                plan.len(),
                range.day_count()
            ),
        ));
    }

    for (day, expected) in plan.days.iter().zip(range.days()) {
        if day.date != expected {
            violations.push(PlanViolation::new(
                PlanViolationType::DateMismatch,
                Some(day.date),
                format!("Expected {expected}, found {}", day.date),
            ));
        }

        for job_name in day.job_assignments.keys() {
            if definition.job(job_name).is_none() {
                violations.push(PlanViolation::new(
                    PlanViolationType::UnknownJob,
                    Some(day.date),
                    format!("Unknown job '{job_name}'"),
                ));
            }
        }

        for job in &definition.jobs {
            let Some(assignees) = day.assignees(&job.name) else {
                violations.push(PlanViolation::new(
                    PlanViolationType::UnknownJob,
                    Some(day.date),
                    format!("Job '{}' missing", job.name),
                ));
                continue;
            };

            if assignees.len() != job.effective_capacity() {
                violations.push(PlanViolation::new(
                    PlanViolationType::WrongAssigneeCount,
                    Some(day.date),
                    format!(
                        "Job '{}' has {} assignees, expected {}",
                        job.name,
                        assignees.len(),
                        job.effective_capacity()
                    ),
                ));
            }

            for who in assignees {
                if !job.is_eligible(who.as_str()) {
                    violations.push(PlanViolation::new(
                        PlanViolationType::IneligibleAssignee,
                        Some(day.date),
                        format!("'{who}' is not in the pool of job '{}'", job.name),
                    ));
                }
            }
        }
    }

    violations
}
