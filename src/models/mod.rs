//! Rota domain models.
//!
//! Value types for an event's inputs and the computed plan. Inputs are built
//! by the caller and never mutated by validation or scheduling; the plan is
//! the sole output of scheduling.
//!
//! # Domain Mappings
//!
//! | u-rota | Household | Team |
//! |--------|-----------|------|
//! | Teammate | Roommate | Team member |
//! | Job | Chore | On-call duty |
//! | EventDefinition | Chore chart | Duty roster |
//! | SchedulePlan | Weekly chart | Roster calendar |

mod date_range;
mod event;
mod job;
mod plan;
mod teammate;

pub use date_range::DateRange;
pub use event::{EventDefinition, Reminder};
pub use job::Job;
pub use plan::{DayAssignment, PlanViolation, PlanViolationType, SchedulePlan};
pub use teammate::Teammate;
