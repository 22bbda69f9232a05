//! Human-readable event description.
//!
//! Renders the policy of an event (name, date span, and each job's daily
//! capacity and pool) as the text shown in the event preview. It describes
//! the inputs, not the resolved day-by-day plan, so the text is stable
//! whether or not a plan has been generated.
//!
//! # Layout
//!
//! ```text
//! Event: Flat chores
//! Duration: 2024-06-01 to 2024-06-06
//!
//! Daily Chore Assignments:
//! dishes:
//!   - 1 person(s) per day
//!   - Assigned pool: A, B, C
//!
//! Note: Daily assignments will be randomized from the assigned pool for each job.
//! The system will ensure fair distribution over time.
//!
//! Additional Details:
//! [Your custom description will appear here]
//!
//! This schedule is subject to change. Please check regularly for updates.
//! ```

use std::fmt::{self, Write};

use chrono::NaiveDate;

use crate::config::{RotaConfig, DEFAULT_DATE_FORMAT};
use crate::models::{EventDefinition, Job, SchedulePlan, Teammate};

/// Shown under "Additional Details" when the event has no custom text.
pub const CUSTOM_DESCRIPTION_PLACEHOLDER: &str = "[Your custom description will appear here]";

const POLICY_NOTE: &str = "Note: Daily assignments will be randomized from the assigned pool for each job.\n\
                           The system will ensure fair distribution over time.\n";

const FOOTER: &str = "This schedule is subject to change. Please check regularly for updates.";

/// Describes an event with default settings.
pub fn describe(definition: &EventDefinition, plan: &SchedulePlan) -> String {
    describe_with(definition, plan, &RotaConfig::default())
}

/// Describes an event using `config.date_format` and `config.include_footer`.
///
/// The plan is accepted for symmetry with the scheduling pipeline; only the
/// event's static inputs are rendered.
pub fn describe_with(
    definition: &EventDefinition,
    _plan: &SchedulePlan,
    config: &RotaConfig,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail; dates are rendered beforehand.
    let _ = write_description(&mut out, definition, config);
    out
}

fn write_description(
    out: &mut String,
    definition: &EventDefinition,
    config: &RotaConfig,
) -> fmt::Result {
    let start = format_date(definition.start_date, &config.date_format);
    let end = format_date(definition.end_date, &config.date_format);

    writeln!(out, "Event: {}", definition.name)?;
    writeln!(out, "Duration: {start} to {end}")?;
    writeln!(out)?;
    writeln!(out, "Daily Chore Assignments:")?;

    for job in &definition.jobs {
        let pool: Vec<&str> = pool_in_display_order(definition, job)
            .into_iter()
            .map(Teammate::as_str)
            .collect();
        writeln!(out, "{}:", job.name)?;
        writeln!(out, "  - {} person(s) per day", job.daily_capacity)?;
        writeln!(out, "  - Assigned pool: {}", pool.join(", "))?;
        writeln!(out)?;
    }

    if config.include_footer {
        out.push_str(POLICY_NOTE);
        writeln!(out)?;
        writeln!(out, "Additional Details:")?;
        let details = definition
            .custom_description
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(CUSTOM_DESCRIPTION_PLACEHOLDER);
        writeln!(out, "{details}")?;
        writeln!(out)?;
        out.push_str(FOOTER);
    } else {
        // Drop the blank separator after the last job.
        out.truncate(out.trim_end_matches('\n').len());
    }

    Ok(())
}

/// Pool members ordered as the event lists its teammates; members unknown
/// to the event follow in pool order.
fn pool_in_display_order<'a>(definition: &'a EventDefinition, job: &'a Job) -> Vec<&'a Teammate> {
    let mut ordered: Vec<&Teammate> = definition
        .teammates
        .iter()
        .filter(|t| job.is_eligible(t.as_str()))
        .collect();
    ordered.extend(
        job.pool
            .iter()
            .filter(|t| !definition.has_teammate(t.as_str())),
    );
    ordered
}

fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut s = String::new();
    if write!(s, "{}", date.format(pattern)).is_err() {
        s.clear();
        // Infallible for the default pattern.
        let _ = write!(s, "{}", date.format(DEFAULT_DATE_FORMAT));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::schedule;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn sample_event() -> EventDefinition {
        EventDefinition::new("Flat chores", d(1), d(6))
            .with_teammates(["A", "B", "C"])
            .with_job(Job::new("dishes", 1).with_pool(["C", "A", "B"]))
            .with_job(Job::new("trash", 2).with_pool(["B", "C"]))
    }

    #[test]
    fn test_describe_full_template() {
        let event = sample_event();
        let text = describe(&event, &SchedulePlan::default());

        let expected = "Event: Flat chores\n\
                        Duration: 2024-06-01 to 2024-06-06\n\
                        \n\
                        Daily Chore Assignments:\n\
                        dishes:\n  - 1 person(s) per day\n  - Assigned pool: A, B, C\n\
                        \n\
                        trash:\n  - 2 person(s) per day\n  - Assigned pool: B, C\n\
                        \n\
                        Note: Daily assignments will be randomized from the assigned pool for each job.\n\
                        The system will ensure fair distribution over time.\n\
                        \n\
                        Additional Details:\n\
                        [Your custom description will appear here]\n\
                        \n\
                        This schedule is subject to change. Please check regularly for updates.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_describe_custom_description() {
        let event = sample_event().with_custom_description("Gloves are under the sink.");
        let text = describe(&event, &SchedulePlan::default());
        assert!(text.contains("Additional Details:\nGloves are under the sink.\n"));
        assert!(!text.contains(CUSTOM_DESCRIPTION_PLACEHOLDER));
    }

    #[test]
    fn test_describe_ignores_plan_contents() {
        let event = sample_event();
        let plan = schedule(&event, 4);
        assert_eq!(describe(&event, &plan), describe(&event, &SchedulePlan::default()));
    }

    #[test]
    fn test_describe_with_config() {
        let event = sample_event();
        let config = RotaConfig::new().with_date_format("%d/%m/%Y").with_footer(false);
        let text = describe_with(&event, &SchedulePlan::default(), &config);

        assert!(text.starts_with("Event: Flat chores\nDuration: 01/06/2024 to 06/06/2024\n"));
        assert!(text.ends_with("  - Assigned pool: B, C"));
        assert!(!text.contains("Note:"));
    }

    #[test]
    fn test_describe_without_footer_has_no_trailing_newline() {
        let event = sample_event();
        let config = RotaConfig::new().with_footer(false);
        let text = describe_with(&event, &SchedulePlan::default(), &config);

        assert!(!text.ends_with('\n'));
        assert!(text.ends_with("trash:\n  - 2 person(s) per day\n  - Assigned pool: B, C"));
        assert!(text.contains("Assigned pool: A, B, C\n\ntrash:"));
    }

    #[test]
    fn test_describe_bad_date_format_falls_back() {
        let event = sample_event();
        let config = RotaConfig::new().with_date_format("%Q");
        let text = describe_with(&event, &SchedulePlan::default(), &config);
        assert!(text.contains("Duration: 2024-06-01 to 2024-06-06"));
    }

    #[test]
    fn test_describe_is_deterministic() {
        let event = sample_event();
        let plan = SchedulePlan::default();
        assert_eq!(describe(&event, &plan), describe(&event, &plan));
    }
}
