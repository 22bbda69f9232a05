//! Fair recurring-chore rotas for the U-Engine ecosystem.
//!
//! Turns an event definition (teammates, jobs with daily capacities and
//! eligibility pools, a date range) into a day-by-day assignment plan whose
//! per-job load never differs by more than one between pool members.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teammate`, `Job`, `EventDefinition`,
//!   `Reminder`, `DateRange`, `DayAssignment`, `SchedulePlan`
//! - **`validation`**: Input checks (collects every problem) and plan verification
//! - **`scheduler`**: Seeded deficit round-robin scheduler and fairness report
//! - **`describe`**: Preview text for an event
//! - **`config`**: TOML-loadable settings (seed, clamping, date format)
//! - **`planner`**: Validate → schedule → describe pipeline
//!
//! # Determinism
//!
//! `schedule(definition, seed)` is a pure function: the same inputs give the
//! same plan on every platform, so a stored plan can be checked against a
//! freshly computed one.
//!
//! # References
//!
//! - Shreedhar & Varghese (1996), "Efficient Fair Queuing Using Deficit Round-Robin"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod describe;
mod error;
pub mod models;
pub mod planner;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
