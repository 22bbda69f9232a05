//! Validate → schedule → describe pipeline.
//!
//! [`EventPlanner`] is the boundary consumed by the application layer: it
//! takes a raw event definition and returns either every validation error or
//! the validated definition, its plan, and its description text. It holds
//! only configuration, so one planner can serve concurrent requests.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RotaConfig;
use crate::describe::describe_with;
use crate::error::Result;
use crate::models::{EventDefinition, SchedulePlan};
use crate::scheduler::FairScheduler;
use crate::validation::{validate_with, verify_plan};

/// Output of one planning request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedEvent {
    /// The validated, normalized definition the plan was built from.
    pub definition: EventDefinition,
    /// Day-by-day assignments.
    pub plan: SchedulePlan,
    /// Preview text.
    pub description: String,
}

/// Runs the planning pipeline with a fixed configuration.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_rota::config::RotaConfig;
/// use u_rota::models::{EventDefinition, Job};
/// use u_rota::planner::EventPlanner;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let event = EventDefinition::new("Flat", start, end)
///     .with_teammates(["A", "B", "C"])
///     .with_job(Job::new("trash", 2).with_pool(["A", "B", "C"]));
///
/// let planner = EventPlanner::new(RotaConfig::new().with_seed(1));
/// let generated = planner.plan(event).unwrap();
/// assert_eq!(generated.plan.slot_count(), 6);
/// assert!(generated.description.starts_with("Event: Flat"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventPlanner {
    config: RotaConfig,
}

impl EventPlanner {
    /// Creates a planner.
    pub fn new(config: RotaConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RotaConfig {
        &self.config
    }

    fn scheduler(&self) -> FairScheduler {
        FairScheduler::new().with_seed(self.config.seed)
    }

    /// Validates, schedules and describes an event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) with every
    /// violated rule; the scheduler is not run in that case.
    pub fn plan(&self, definition: EventDefinition) -> Result<GeneratedEvent> {
        let definition = validate_with(definition, self.config.clamp_capacity)?;
        let plan = self.scheduler().schedule(&definition);
        let description = describe_with(&definition, &plan, &self.config);

        info!(event = %definition.name, days = plan.len(), "event planned");
        Ok(GeneratedEvent {
            definition,
            plan,
            description,
        })
    }

    /// Recomputes the plan for an event and reports whether `stored` still
    /// matches it exactly.
    ///
    /// # Errors
    ///
    /// Returns the validation errors if the definition is no longer valid.
    pub fn regenerate_matches(
        &self,
        definition: EventDefinition,
        stored: &SchedulePlan,
    ) -> Result<bool> {
        let definition = validate_with(definition, self.config.clamp_capacity)?;
        let fresh = self.scheduler().schedule(&definition);
        let matches = &fresh == stored;
        if !matches {
            debug!(
                event = %definition.name,
                structural_violations = verify_plan(&definition, stored).len(),
                "stored plan differs from recomputed plan"
            );
        }
        Ok(matches)
    }
}
