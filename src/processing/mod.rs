pub mod parse;
pub mod summary;
pub mod types;

use crate::templates::{render_day_report, render_training_report};
use parse::{parse_day_steps, parse_training};
use summary::derive_metrics;

pub use parse::parse_duration;
pub use summary::{
    distance, mean_speed, running_spent_calories, spent_calories, walking_spent_calories,
};
pub use types::{
    Activity, DayStepsRecord, DerivedMetrics, PhysicalProfile, TrackerError, TrainingRecord,
};

/// Summarise a `<steps>,<duration>` package as a walking day.
///
/// Failures are logged and collapse into an empty string; use
/// [`day_steps_report`] to observe the error itself.
pub fn day_action_info(data: &str, weight: f64, height: f64) -> String {
    match day_steps_report(data, weight, height) {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!(data, error = %err, "skipping day steps package");
            String::new()
        }
    }
}

/// Fallible form of [`day_action_info`].
pub fn day_steps_report(data: &str, weight: f64, height: f64) -> Result<String, TrackerError> {
    let record = parse_day_steps(data)?;
    let profile = PhysicalProfile { weight, height };
    let metrics = derive_metrics(record.steps, Activity::Walking, &profile, record.duration)?;

    Ok(render_day_report(record.steps, &metrics))
}

/// Summarise a `<steps>,<activity>,<duration>` package.
///
/// The function performs three stages:
/// 1. [`parse::parse_training`] validates the fields and resolves the
///    [`Activity`].
/// 2. [`summary::derive_metrics`] computes distance, speed and calories,
///    rejecting non-positive body measurements.
/// 3. [`crate::templates::render_training_report`] renders the fixed report.
pub fn training_info(data: &str, weight: f64, height: f64) -> Result<String, TrackerError> {
    let record = parse_training(data)?;
    let profile = PhysicalProfile { weight, height };
    let metrics = derive_metrics(record.steps, record.activity, &profile, record.duration)?;

    Ok(render_training_report(&record, &metrics))
}
