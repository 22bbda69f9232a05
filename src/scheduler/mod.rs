//! Fair rota scheduling and plan metrics.
//!
//! # Algorithm
//!
//! `FairScheduler` runs a deficit round-robin per job: every day, the
//! pool members with the fewest assignments so far are picked first, and
//! ties are broken by a permutation seeded from `(seed, job, date)`. Jobs
//! do not interact.
//!
//! # Report
//!
//! `FairnessReport` measures per-job spread and per-teammate totals of a
//! plan.
//!
//! # References
//!
//! - Shreedhar & Varghese (1996), "Efficient Fair Queuing Using Deficit Round-Robin"

mod fair;
mod ledger;
mod report;
mod tiebreak;

pub use fair::{schedule, FairScheduler};
pub use report::{FairnessReport, JobLoad};
